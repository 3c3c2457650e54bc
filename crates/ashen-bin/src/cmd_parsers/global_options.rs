/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use ashen_image::errors::ImageErrors;
use ashen_image::pipeline::ConversionOptions;
use clap::ArgMatches;
use log::{info, Level};

use crate::cmd_parsers::get_conversion_options;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:      PathBuf,
    pub output:     Option<PathBuf>,
    pub probe:      bool,
    pub benchmark:  Option<usize>,
    pub conversion: ConversionOptions
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, ImageErrors> {
    let input = options
        .get_one::<PathBuf>("in")
        .cloned()
        .ok_or(ImageErrors::GenericStr("No input file given"))?;
    let output = options.get_one::<PathBuf>("out").cloned();

    let benchmark = match options.get_one::<u64>("bench") {
        Some(runs) => {
            let runs = usize::try_from(*runs)
                .map_err(|_| ImageErrors::GenericStr("Too many benchmark runs"))?;
            info!("Benchmarking with {runs} runs");
            Some(runs)
        }
        None => None
    };

    Ok(CmdOptions {
        input,
        output,
        probe: options.get_flag("probe"),
        benchmark,
        conversion: get_conversion_options(options)?
    })
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

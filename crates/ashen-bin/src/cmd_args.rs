/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{parse_coefficients, IPowStrategy};
use crate::cmd_args::help_strings::{
    BENCHMARK_HELP, COEFFICIENTS_HELP, LEGACY_COMMENTS_HELP, POW_HELP, VERSION_HELP
};

pub mod arg_parsers;
pub mod help_strings;

pub const DEFAULT_COEFFICIENTS: &str = "0.2126,0.7152,0.0722";

pub const DEFAULT_BENCHMARK_RUNS: &str = "100";

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ashen")
        .about("Convert binary PPM (P6) images to gamma corrected PGM (P5) images")
        .disable_version_flag(true)
        .arg(Arg::new("in")
            .help("Input PPM file to read data from")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output PGM file to write the data to")
            .value_parser(value_parser!(PathBuf))
            .required_unless_present("probe"))
        .arg(Arg::new("preset")
            .short('V')
            .long("version")
            .action(ArgAction::Set)
            .help("Implementation preset to use, 0 to 3")
            .long_help(VERSION_HELP)
            .value_parser(value_parser!(u8).range(0..=3))
            .default_value("0")
            .help_heading("CONVERSION"))
        .arg(Arg::new("pow")
            .long("pow")
            .help("Override the power strategy chosen by the preset")
            .long_help(POW_HELP)
            .value_parser(value_parser!(IPowStrategy))
            .help_heading("CONVERSION"))
        .arg(Arg::new("coeffs")
            .long("coeffs")
            .help("Red, green and blue weights as three comma separated numbers")
            .long_help(COEFFICIENTS_HELP)
            .value_parser(parse_coefficients)
            .default_value(DEFAULT_COEFFICIENTS)
            .help_heading("CONVERSION"))
        .arg(Arg::new("gamma")
            .long("gamma")
            .help("Gamma exponent applied to every pixel")
            .value_parser(value_parser!(f32))
            .default_value("1.0")
            .help_heading("CONVERSION"))
        .arg(Arg::new("bench")
            .short('B')
            .long("bench")
            .help("Repeat the conversion and report timings")
            .long_help(BENCHMARK_HELP)
            .num_args(0..=1)
            .default_missing_value(DEFAULT_BENCHMARK_RUNS)
            .value_parser(value_parser!(u64).range(1..))
            .help_heading("ADVANCED"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the header of the input file as JSON and exit")
            .help_heading("ADVANCED"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help("Maximum width accepted by the decoder")
            .value_parser(value_parser!(usize))
            .default_value("65536")
            .help_heading("ADVANCED"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help("Maximum height accepted by the decoder")
            .value_parser(value_parser!(usize))
            .default_value("65536")
            .help_heading("ADVANCED"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Reject files with bytes after the pixel data")
            .help_heading("ADVANCED"))
        .arg(Arg::new("legacy-comments")
            .long("legacy-comments")
            .action(ArgAction::SetTrue)
            .help("Allow comments inside header numbers")
            .long_help(LEGACY_COMMENTS_HELP)
            .help_heading("ADVANCED"))
        .arg(Arg::new("no-simd")
            .long("no-simd")
            .action(ArgAction::SetTrue)
            .help("Use the portable loop in the vectorized reducer even when SSE is available")
            .help_heading("ADVANCED"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the conversion"))
}

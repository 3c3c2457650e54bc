/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;
use std::time::{Duration, Instant};

use ashen_image::errors::ImageErrors;
use ashen_image::image::Image;
use ashen_image::pipeline::{decode, process, ConversionOptions, Pipeline};
use log::info;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{open_input, write_output};

pub(crate) fn create_and_exec_workflow_from_cmd(cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    info!("Creating workflow from input");

    let out_file = cmd_opts
        .output
        .as_deref()
        .ok_or(ImageErrors::GenericStr("No output file given"))?;

    verify_file_paths(&cmd_opts.input, out_file)?;

    let (reader, _) = open_input(&cmd_opts.input)?;

    let image = match cmd_opts.benchmark {
        Some(runs) => {
            let decoded = decode(reader, cmd_opts.conversion.get_decoder_options())?;
            run_benchmark(&decoded, &cmd_opts.conversion, runs)?
        }
        None => {
            let mut pipeline = Pipeline::new(reader, cmd_opts.conversion);
            pipeline.advance_to_end()?;

            pipeline
                .into_output()
                .ok_or(ImageErrors::NoImageForOperations)?
        }
    };
    // the output only gets created once the whole image exists
    write_output(out_file, &image)?;

    info!("Wrote {:?}", out_file);

    Ok(())
}

fn verify_file_paths(input: &Path, output: &Path) -> Result<(), ImageErrors> {
    if input == output {
        return Err(ImageErrors::GenericStr(
            "Cannot use the same file as both input and output"
        ));
    }
    if !input.exists() {
        return Err(ImageErrors::IoErrors(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Path {input:?} does not exist")
        )));
    }
    if !input.is_file() {
        return Err(ImageErrors::IoErrors(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Path {input:?} is not a file")
        )));
    }
    Ok(())
}

/// Convert `runs` times and report the wall time, decoding excluded
///
/// Returns the result of the last run.
fn run_benchmark(
    image: &Image, options: &ConversionOptions, runs: usize
) -> Result<Image, ImageErrors> {
    let mut total = Duration::ZERO;
    let mut last = None;

    for _ in 0..runs.max(1) {
        let start = Instant::now();
        let output = process(image, options)?;
        total += start.elapsed();

        last = Some(output);
    }
    let runs = runs.max(1);
    let mean = total / u32::try_from(runs).unwrap_or(u32::MAX);

    println!(
        "{runs} runs of {:?} greyscale with {:?} gamma: total {:.3} ms, mean {:.3} ms",
        options.get_reducer(),
        options.get_pow_strategy(),
        total.as_secs_f64() * 1000.0,
        mean.as_secs_f64() * 1000.0
    );

    last.ok_or(ImageErrors::NoImageForOperations)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use ashen_core::colorspace::ColorSpace;
    use ashen_image::image::Image;
    use ashen_image::pipeline::ConversionOptions;

    use crate::workflow::{run_benchmark, verify_file_paths};

    #[test]
    fn test_same_input_and_output() {
        let path = Path::new("image.ppm");
        assert!(verify_file_paths(path, path).is_err());
    }

    #[test]
    fn test_missing_input() {
        let input = std::env::temp_dir().join("ashen-workflow-missing.ppm");
        assert!(verify_file_paths(&input, Path::new("out.pgm")).is_err());
    }

    #[test]
    fn test_benchmark_returns_last_result() {
        let image = Image::new(vec![255, 255, 255, 0, 0, 0], 2, 1, ColorSpace::RGB).unwrap();
        let output = run_benchmark(&image, &ConversionOptions::default(), 3).unwrap();

        assert_eq!(output.pixels(), [255, 0]);
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ashen_image::errors::ImageErrors;
use ashen_ppm::PPMDecoder;
use log::info;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::open_input;
use crate::serde::Metadata;

/// Read the input header and print it to standard output as JSON.
pub fn probe_input_file(cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    let (reader, size) = open_input(&cmd_opts.input)?;

    // we only read headers, so lift the dimension limits
    let options = cmd_opts
        .conversion
        .get_decoder_options()
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    let mut decoder = PPMDecoder::new_with_options(reader, options);
    decoder.read_headers()?;

    let (Some(dimensions), Some(max_value), Some(colorspace)) = (
        decoder.get_dimensions(),
        decoder.get_max_value(),
        decoder.get_colorspace()
    ) else {
        return Err(ImageErrors::GenericStr("Headers were not decoded"));
    };
    let metadata = Metadata::new(&cmd_opts.input, size, dimensions, max_value, colorspace);

    let json = serde_json::to_string_pretty(&metadata)
        .map_err(|_| ImageErrors::GenericStr("Could not serialize metadata"))?;

    info!("Probed {:?}", cmd_opts.input);
    println!("{json}");

    Ok(())
}

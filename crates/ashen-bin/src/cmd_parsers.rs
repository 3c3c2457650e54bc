/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ashen_core::options::DecoderOptions;
use ashen_image::errors::ImageErrors;
use ashen_image::pipeline::ConversionOptions;
use clap::ArgMatches;
use log::info;

use crate::cmd_args::arg_parsers::{preset, IPowStrategy};

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(1 << 16);
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(1 << 16);

    DecoderOptions::new_cmd()
        .set_max_width(max_width)
        .set_max_height(max_height)
        .set_strict_mode(options.get_flag("strict"))
        .set_comments_in_tokens(options.get_flag("legacy-comments"))
        .set_use_simd(!options.get_flag("no-simd"))
}

/// Build conversion options from the command line
///
/// The `-V` preset picks the reducer and power strategy, `--pow`
/// replaces the strategy.
pub fn get_conversion_options(options: &ArgMatches) -> Result<ConversionOptions, ImageErrors> {
    let version = options.get_one::<u8>("preset").copied().unwrap_or(0);

    let (reducer, mut strategy) =
        preset(version).ok_or(ImageErrors::GenericStr("Unknown implementation version"))?;

    if let Some(pow) = options.get_one::<IPowStrategy>("pow") {
        info!("Overriding {strategy:?} power strategy with {pow:?}");
        strategy = pow.to_pow_strategy();
    }
    let [a, b, c] = options
        .get_one::<[f32; 3]>("coeffs")
        .copied()
        .unwrap_or([0.2126, 0.7152, 0.0722]);
    let gamma = options.get_one::<f32>("gamma").copied().unwrap_or(1.0);

    info!("Version {version}: {reducer:?} greyscale, {strategy:?} power");
    info!("Coefficients ({a}, {b}, {c}), gamma {gamma}");

    ConversionOptions::default()
        .set_coefficients(a, b, c)?
        .set_gamma(gamma)
        .map(|opts| {
            opts.set_reducer(reducer)
                .set_pow_strategy(strategy)
                .set_decoder_options(get_decoder_options(options))
        })
}

#[cfg(test)]
mod tests {
    use ashen_procs::gamma::PowStrategy;
    use ashen_procs::grayscale::Reducer;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::get_conversion_options;

    fn options_for(extra: &[&str]) -> Result<ashen_image::pipeline::ConversionOptions, String> {
        let mut args = vec!["ashen", "in.ppm", "-o", "out.pgm"];
        args.extend_from_slice(extra);

        let matches = create_cmd_args()
            .try_get_matches_from(args)
            .map_err(|e| e.to_string())?;

        get_conversion_options(&matches).map_err(|e| e.to_string())
    }

    #[test]
    fn test_preset_and_override() {
        let options = options_for(&["-V", "2"]).unwrap();
        assert_eq!(options.get_reducer(), Reducer::Vectorized);
        assert_eq!(options.get_pow_strategy(), PowStrategy::Reference);

        let options = options_for(&["-V", "2", "--pow", "naive-taylor"]).unwrap();
        assert_eq!(options.get_reducer(), Reducer::Vectorized);
        assert_eq!(options.get_pow_strategy(), PowStrategy::NaiveTaylor);
    }

    #[test]
    fn test_gamma_validation() {
        assert!(options_for(&["--gamma", "2.2"]).is_ok());
        assert!(options_for(&["--gamma", "NaN"]).is_err());
        assert!(options_for(&["--gamma=-1"]).is_err());
    }

    #[test]
    fn test_decoder_flags() {
        let options = options_for(&["--strict", "--no-simd", "--max-width", "10"]).unwrap();
        let decoder = options.get_decoder_options();

        assert!(decoder.strict_mode());
        assert!(!decoder.use_simd());
        assert!(!decoder.comments_in_tokens());
        assert_eq!(decoder.max_width(), 10);
    }
}

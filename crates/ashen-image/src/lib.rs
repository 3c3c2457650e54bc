/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PPM to gamma corrected PGM conversion
//!
//! This crate ties the [`ashen_ppm`] codec and the [`ashen_procs`] routines
//! into a pipeline
//!
//! ```text
//! bytes -> decode -> Image(RGB) -> greyscale -> gamma -> Image(Luma) -> encode
//! ```
//!
//! # Example
//! ```
//! use ashen_image::pipeline::{convert, ConversionOptions};
//! use ashen_image::ashen_core::bytestream::ByteCursor;
//!
//! let input = b"P6 2 1 255\n\xff\x00\x00\x00\x00\x00";
//! let options = ConversionOptions::default().set_coefficients(1.0, 0.0, 0.0).unwrap();
//!
//! let mut output = vec![];
//! let sink = &mut output;
//! convert(ByteCursor::new(input), move || Ok(sink), &options).unwrap();
//!
//! assert_eq!(output, b"P5\n2\n1\n255\n\xff\x00");
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

pub use ashen_core;
pub use ashen_ppm;
pub use ashen_procs;

pub mod errors;
pub mod image;
pub mod pipeline;

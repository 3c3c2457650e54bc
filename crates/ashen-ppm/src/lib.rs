/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A binary PPM decoder and PGM encoder
//!
//! The decoder accepts the raw RGB variant of the
//! [netpbm](https://netpbm.sourceforge.net/doc/ppm.html) format (`P6`)
//! with a maximum channel value of 255.
//!
//! The encoder writes raw `P5` (grayscale) and `P6` (RGB) files.
//!
//! # Example
//! ```
//! use ashen_ppm::PPMDecoder;
//! use ashen_ppm::ashen_core::bytestream::ByteCursor;
//!
//! let mut decoder = PPMDecoder::new(ByteCursor::new(b"P6 1 1 255\n\x01\x02\x03"));
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(decoder.get_dimensions(), Some((1, 1)));
//! assert_eq!(pixels, [1, 2, 3]);
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
    clippy::inline_always,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

pub use ashen_core;
pub use decoder::*;
pub use encoder::*;
pub use errors::*;

mod decoder;
mod encoder;
mod errors;

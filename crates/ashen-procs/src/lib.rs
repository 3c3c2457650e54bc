/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel routines for the ashen converter
//!
//! - [`grayscale`]: weighted RGB to greyscale reduction, scalar and 4 lane vectorized
//! - [`gamma`]: gamma correction with interchangeable power strategies
//! - [`deinterleave`]: aligned planar float storage used by the vectorized reducer
//!
//! # Example
//! ```
//! use ashen_procs::gamma::{gamma_correct, PowStrategy};
//! use ashen_procs::grayscale::{rgb_to_grayscale, Coefficients, Reducer};
//!
//! let pixels = [255, 0, 0, 0, 0, 0];
//! let coefficients = Coefficients::new(1.0, 0.0, 0.0).unwrap();
//!
//! let grey = rgb_to_grayscale(&pixels, coefficients, Reducer::Scalar, true).unwrap();
//! let mut out = [0; 2];
//! gamma_correct(&grey, 1.0, PowStrategy::Reference, &mut out).unwrap();
//!
//! assert_eq!(out, [255, 0]);
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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::wildcard_imports
)]

pub use errors::ProcsErrors;

pub mod deinterleave;
mod errors;
pub mod gamma;
pub mod grayscale;

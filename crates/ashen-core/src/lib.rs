/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all ashen crates
//!
//! It currently contains
//!
//! - A byte reader over in-memory buffers and buffered std readers,
//!   tracking the stream position and reporting short reads
//! - Colorspace information shared by images
//! - Decoder options
//! - Logging shims that compile to nothing unless the `log` feature is enabled
//!
//! # Features
//!  - `log`: Forward the logging macros to the [`log`](https://docs.rs/log) crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![macro_use]

pub mod bytestream;
pub mod colorspace;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod serde;

#[cfg(feature = "log")]
pub use log;

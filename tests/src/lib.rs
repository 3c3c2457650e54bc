/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end conversion cases described in `tests/conversions.json`
#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use ashen_image::errors::ErrorKind;
use ashen_procs::gamma::PowStrategy;
use ashen_procs::grayscale::Reducer;
use serde::Deserialize;

mod conversion;
mod round_trip;

pub const ALL_REDUCERS: [Reducer; 2] = [Reducer::Scalar, Reducer::Vectorized];

pub const ALL_STRATEGIES: [PowStrategy; 4] = [
    PowStrategy::Reference,
    PowStrategy::Taylor,
    PowStrategy::SplitTaylor,
    PowStrategy::NaiveTaylor
];

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum JsonErrorKind {
    Format,
    Io,
    Allocation,
    Usage
}

impl JsonErrorKind {
    pub fn to_error_kind(self) -> ErrorKind {
        match self {
            Self::Format => ErrorKind::Format,
            Self::Io => ErrorKind::Io,
            Self::Allocation => ErrorKind::Allocation,
            Self::Usage => ErrorKind::Usage
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:            String,
    /// Header text, pixel bytes follow it
    pub header:          String,
    pub pixels:          Vec<u8>,
    pub coefficients:    Option<[f32; 3]>,
    pub gamma:           Option<f32>,
    pub legacy_comments: Option<bool>,
    /// Remove the width and height limits of the decoder
    pub lift_limits:     Option<bool>,
    /// Expected PGM pixels, absent when the case must fail
    pub expected:        Option<Vec<u8>>,
    pub error:           Option<JsonErrorKind>,
    pub comment:         Option<String>
}

impl TestEntry {
    pub fn input(&self) -> Vec<u8> {
        let mut input = self.header.as_bytes().to_vec();
        input.extend_from_slice(&self.pixels);
        input
    }
}

pub fn cases_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/conversions.json")
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during conversion
use std::fmt::{Debug, Display, Formatter};

use ashen_core::colorspace::ColorSpace;
use ashen_ppm::{PPMDecodeErrors, PPMEncodeErrors};
use ashen_procs::ProcsErrors;

/// All possible pipeline errors
///
/// This wraps decoding, processing and encoding errors and
/// tells which category a failure belongs to.
pub enum ImageErrors {
    /// The input could not be decoded
    DecodeErrors(PPMDecodeErrors),
    /// The output could not be written
    EncodeErrors(PPMEncodeErrors),
    /// Greyscale or gamma stage failed
    OperationsError(ProcsErrors),
    /// Opening or creating the output sink failed
    IoErrors(std::io::Error),
    /// Pixel buffer length does not match dimensions, `(expected, found)`
    DimensionsMisMatch(usize, usize),
    /// Stage expected one colorspace but found another, `(expected, found)`
    WrongColorspace(ColorSpace, ColorSpace),
    /// A stage ran before the image it needs was produced
    NoImageForOperations,
    GenericStr(&'static str)
}

/// What kind of failure an error represents
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The input is not a supported PPM image
    Format,
    /// A buffer could not be allocated
    Allocation,
    /// Reading or writing failed
    Io,
    /// Options are invalid or stages were misused
    Usage
}

impl ImageErrors {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DecodeErrors(PPMDecodeErrors::AllocationFailed(_))
            | Self::OperationsError(ProcsErrors::AllocationFailed(_)) => ErrorKind::Allocation,
            Self::DecodeErrors(PPMDecodeErrors::IoErrors(_))
            | Self::EncodeErrors(PPMEncodeErrors::IOErrors(_))
            | Self::IoErrors(_) => ErrorKind::Io,
            Self::DecodeErrors(_) => ErrorKind::Format,
            _ => ErrorKind::Usage
        }
    }

    /// Name of the stage that failed, for user facing messages
    pub fn stage(&self) -> &'static str {
        match self {
            Self::DecodeErrors(_) => "decode",
            Self::EncodeErrors(_) | Self::IoErrors(_) => "encode",
            Self::OperationsError(_) | Self::WrongColorspace(..) => "convert",
            _ => "pipeline"
        }
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeErrors(ref error) => {
                writeln!(f, "Decoding failed: {error:?}")
            }
            Self::EncodeErrors(ref error) => {
                writeln!(f, "Encoding failed: {error:?}")
            }
            Self::OperationsError(ref error) => {
                writeln!(f, "Conversion failed: {error:?}")
            }
            Self::IoErrors(ref error) => {
                writeln!(f, "I/O error: {error}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} bytes but found {found}"
                )
            }
            Self::WrongColorspace(expected, found) => {
                writeln!(f, "Expected {expected:?} colorspace but found {found:?}")
            }
            Self::NoImageForOperations => {
                writeln!(f, "No image found for which we can execute operations")
            }
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<PPMDecodeErrors> for ImageErrors {
    fn from(from: PPMDecodeErrors) -> Self {
        ImageErrors::DecodeErrors(from)
    }
}

impl From<PPMEncodeErrors> for ImageErrors {
    fn from(from: PPMEncodeErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<ProcsErrors> for ImageErrors {
    fn from(from: ProcsErrors) -> Self {
        ImageErrors::OperationsError(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

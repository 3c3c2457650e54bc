/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

/// Errors raised by the pixel routines
pub enum ProcsErrors {
    /// Coefficients are negative, non finite or all zero
    InvalidCoefficients(&'static str),
    /// Gamma is negative or not finite
    InvalidGamma(f32),
    /// A buffer of this many bytes could not be allocated
    AllocationFailed(usize),
    /// Input and output lengths disagree, `(expected, found)`
    LengthMismatch(usize, usize)
}

impl Debug for ProcsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCoefficients(reason) => {
                writeln!(f, "Invalid greyscale coefficients: {reason}")
            }
            Self::InvalidGamma(gamma) => {
                writeln!(f, "Gamma must be finite and non-negative, found {gamma}")
            }
            Self::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes for pixel buffers")
            }
            Self::LengthMismatch(expected, found) => {
                writeln!(f, "Expected a buffer of length {expected} but found {found}")
            }
        }
    }
}

impl Display for ProcsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ProcsErrors {}

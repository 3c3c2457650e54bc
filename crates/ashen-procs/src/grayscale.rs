/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! RGB to greyscale reduction
//!
//! Each pixel becomes one float in `[0, 1]`
//!
//! ```text
//! grey = (a*R + b*G + c*B) / (a + b + c) / 255
//! ```
//!
//! The weights `a/(a+b+c)`, `b/(a+b+c)`, `c/(a+b+c)` are computed once,
//! then every kernel evaluates `((wa*R + wb*G) + wc*B) / 255` in single
//! precision with exactly that operation order and no fused multiply-add,
//! clamped to at most `1.0`. The scalar and vectorized reducers therefore
//! produce bit identical buffers.
use ashen_core::log::trace;

use crate::deinterleave::{PlanarRgb, LANES};
use crate::errors::ProcsErrors;
use crate::grayscale::portable::convert_planar_to_grayscale_portable;
use crate::grayscale::scalar::convert_rgb_to_grayscale_scalar;

mod portable;
mod scalar;
mod sse2;

/// Weights of the red, green and blue channels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficients {
    a: f32,
    b: f32,
    c: f32
}

impl Coefficients {
    /// ITU-R BT.709 luma weights
    pub const REC709: Coefficients = Coefficients {
        a: 0.2126,
        b: 0.7152,
        c: 0.0722
    };

    /// Create validated coefficients
    ///
    /// # Errors
    /// If any coefficient is negative or not finite, if all are zero
    /// or if their sum is not finite
    pub fn new(a: f32, b: f32, c: f32) -> Result<Coefficients, ProcsErrors> {
        for value in [a, b, c] {
            if !value.is_finite() {
                return Err(ProcsErrors::InvalidCoefficients(
                    "coefficients must be finite"
                ));
            }
            if value < 0.0 {
                return Err(ProcsErrors::InvalidCoefficients(
                    "coefficients must be non-negative"
                ));
            }
        }
        let sum = a + b + c;

        if sum == 0.0 {
            return Err(ProcsErrors::InvalidCoefficients(
                "at least one coefficient must be non zero"
            ));
        }
        if !sum.is_finite() {
            return Err(ProcsErrors::InvalidCoefficients(
                "sum of coefficients overflows"
            ));
        }
        Ok(Coefficients { a, b, c })
    }

    /// Weights normalized by the coefficient sum
    pub fn weights(&self) -> [f32; 3] {
        let sum = self.a + self.b + self.c;

        [self.a / sum, self.b / sum, self.c / sum]
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Coefficients::REC709
    }
}

/// Greyscale reduction strategy
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Reducer {
    /// Walk interleaved byte triples one pixel at a time
    #[default]
    Scalar,
    /// Deinterleave into aligned float planes and reduce 4 pixels per step
    Vectorized
}

fn try_alloc_grey(length: usize) -> Result<Vec<f32>, ProcsErrors> {
    let mut grey = Vec::new();

    grey.try_reserve_exact(length).map_err(|_| {
        ProcsErrors::AllocationFailed(length.saturating_mul(core::mem::size_of::<f32>()))
    })?;
    grey.resize(length, 0.0);

    Ok(grey)
}

/// Reduce interleaved RGB bytes to one float per pixel in `[0, 1]`
///
/// `use_simd` allows the vectorized reducer to use the SSE kernel
/// when the CPU supports it, otherwise a portable 4 lane loop runs.
///
/// # Errors
/// - [`ProcsErrors::LengthMismatch`] when `pixels` is not a multiple of 3
/// - [`ProcsErrors::AllocationFailed`] when the grey or planar buffers cannot be
///   allocated
pub fn rgb_to_grayscale(
    pixels: &[u8], coefficients: Coefficients, reducer: Reducer, use_simd: bool
) -> Result<Vec<f32>, ProcsErrors> {
    if pixels.len() % 3 != 0 {
        let whole = pixels.len() - pixels.len() % 3;
        return Err(ProcsErrors::LengthMismatch(whole, pixels.len()));
    }
    let weights = coefficients.weights();
    let count = pixels.len() / 3;

    trace!("Reducing {count} pixels with {reducer:?} reducer, weights {weights:?}");

    match reducer {
        Reducer::Scalar => {
            let mut grey = try_alloc_grey(count)?;
            convert_rgb_to_grayscale_scalar(pixels, weights, &mut grey);

            Ok(grey)
        }
        Reducer::Vectorized => {
            let planar = PlanarRgb::from_interleaved(pixels)?;
            let mut grey = try_alloc_grey(planar.lanes() * LANES)?;

            reduce_planar(&planar, weights, &mut grey, use_simd);
            // drop the padding lanes
            grey.truncate(planar.pixels());

            Ok(grey)
        }
    }
}

/// Reduce planar data into `out`, which must hold `planar.lanes() * 4` floats
#[allow(unused_variables)]
pub fn reduce_planar(planar: &PlanarRgb, weights: [f32; 3], out: &mut [f32], use_simd: bool) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse2")]
        {
            use crate::grayscale::sse2::convert_planar_to_grayscale_sse2;

            if use_simd && is_x86_feature_detected!("sse2") {
                trace!("Using SSE2 greyscale kernel");
                unsafe {
                    return convert_planar_to_grayscale_sse2(planar.planes(), weights, out);
                }
            }
        }
    }
    convert_planar_to_grayscale_portable(planar.planes(), weights, out);
}

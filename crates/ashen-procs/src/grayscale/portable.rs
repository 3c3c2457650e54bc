/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::deinterleave::{Lane4, LANES};
use crate::grayscale::scalar::grey_pixel;

/// Four lane reducer for targets without a SIMD kernel
///
/// Lanes are independent, so the inner loop is written for the
/// auto-vectorizer.
#[allow(clippy::needless_range_loop)]
pub(crate) fn convert_planar_to_grayscale_portable(
    (r, g, b): (&[Lane4], &[Lane4], &[Lane4]), weights: [f32; 3], grey: &mut [f32]
) {
    for (((r_lane, g_lane), b_lane), out) in r
        .iter()
        .zip(g.iter())
        .zip(b.iter())
        .zip(grey.chunks_exact_mut(LANES))
    {
        for i in 0..LANES {
            out[i] = grey_pixel(weights, r_lane.0[i], g_lane.0[i], b_lane.0[i]);
        }
    }
}

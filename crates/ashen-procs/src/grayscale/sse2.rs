/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#![cfg(feature = "sse2")]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::deinterleave::{Lane4, LANES};

/// SSE reducer, one lane of four pixels per iteration
///
/// # Safety
/// The CPU must support SSE2. Plane lanes are 16 byte aligned,
/// which the aligned loads rely on.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn convert_planar_to_grayscale_sse2(
    (r, g, b): (&[Lane4], &[Lane4], &[Lane4]), [wa, wb, wc]: [f32; 3], grey: &mut [f32]
) {
    let wa = _mm_set1_ps(wa);
    let wb = _mm_set1_ps(wb);
    let wc = _mm_set1_ps(wc);
    let max = _mm_set1_ps(255.0);
    let one = _mm_set1_ps(1.0);

    for (((r_lane, g_lane), b_lane), out) in r
        .iter()
        .zip(g.iter())
        .zip(b.iter())
        .zip(grey.chunks_exact_mut(LANES))
    {
        let r_v = _mm_load_ps(r_lane.0.as_ptr());
        let g_v = _mm_load_ps(g_lane.0.as_ptr());
        let b_v = _mm_load_ps(b_lane.0.as_ptr());

        let sum = _mm_add_ps(
            _mm_add_ps(_mm_mul_ps(wa, r_v), _mm_mul_ps(wb, g_v)),
            _mm_mul_ps(wc, b_v)
        );
        let result = _mm_min_ps(_mm_div_ps(sum, max), one);

        _mm_storeu_ps(out.as_mut_ptr(), result);
    }
}

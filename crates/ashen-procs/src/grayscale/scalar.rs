/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Greyscale value of one pixel, shared by every kernel's tail handling
#[inline(always)]
pub(crate) fn grey_pixel([wa, wb, wc]: [f32; 3], r: f32, g: f32, b: f32) -> f32 {
    (((wa * r + wb * g) + wc * b) / 255.0).min(1.0)
}

pub(crate) fn convert_rgb_to_grayscale_scalar(pixels: &[u8], weights: [f32; 3], grey: &mut [f32]) {
    for (rgb, out) in pixels.chunks_exact(3).zip(grey.iter_mut()) {
        *out = grey_pixel(
            weights,
            f32::from(rgb[0]),
            f32::from(rgb[1]),
            f32::from(rgb[2])
        );
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ashen_core::colorspace::ColorSpace;
use ashen_ppm::PPMEncoder;
use nanorand::{Rng, WyRand};

/// Interleaved RGB pixels filled with noise from a fixed seed
pub fn noise_rgb(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = vec![0_u8; width * height * 3];
    WyRand::new_seed(0xA5E4).fill_bytes(&mut pixels);
    pixels
}

/// A complete P6 file of the given dimensions
pub fn synthetic_ppm(width: usize, height: usize) -> Vec<u8> {
    let pixels = noise_rgb(width, height);
    let mut out = Vec::with_capacity(pixels.len() + 32);

    PPMEncoder::new(&mut out)
        .encode_u8(width, height, ColorSpace::RGB, &pixels)
        .expect("encoding to memory cannot fail");
    out
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ashen_core::bytestream::ByteCursor;
use ashen_core::colorspace::ColorSpace;
use ashen_image::pipeline::{decode, process, ConversionOptions};
use ashen_ppm::{PPMDecoder, PPMEncoder};

/// Deterministic pixel pattern, different in every channel
fn pattern(width: usize, height: usize) -> Vec<u8> {
    (0..width * height * 3)
        .map(|i| ((i * 37 + i / 7) % 256) as u8)
        .collect()
}

#[test]
fn test_p6_header_round_trip() {
    for (width, height) in [(1, 1), (3, 2), (17, 5), (64, 64), (1, 300)] {
        let pixels = pattern(width, height);

        let mut encoded = vec![];
        PPMEncoder::new(&mut encoded)
            .encode_u8(width, height, ColorSpace::RGB, &pixels)
            .unwrap();

        let mut decoder = PPMDecoder::new(ByteCursor::new(&encoded));
        let decoded = decoder.decode().unwrap();

        assert_eq!(decoder.get_dimensions(), Some((width, height)));
        assert_eq!(decoded, pixels);
    }
}

#[test]
fn test_converted_output_decodes_as_pgm_layout() {
    let (width, height) = (9, 4);
    let pixels = pattern(width, height);

    let mut encoded = vec![];
    PPMEncoder::new(&mut encoded)
        .encode_u8(width, height, ColorSpace::RGB, &pixels)
        .unwrap();

    let image = decode(ByteCursor::new(&encoded), Default::default()).unwrap();
    let grey = process(&image, &ConversionOptions::default()).unwrap();

    assert_eq!(grey.get_colorspace(), ColorSpace::Luma);
    assert_eq!(grey.get_dimensions(), (width, height));
    assert_eq!(grey.pixels().len(), width * height);
}

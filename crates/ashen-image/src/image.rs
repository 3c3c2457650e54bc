/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image representation passed between pipeline stages
use ashen_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;

/// An 8 bit interleaved image
///
/// Decoded PPM images are [`ColorSpace::RGB`], converted images are
/// [`ColorSpace::Luma`]. The pixel buffer always holds exactly
/// `width * height * colorspace.num_components()` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pixels:     Vec<u8>,
    width:      usize,
    height:     usize,
    colorspace: ColorSpace
}

impl Image {
    /// Wrap `pixels` as an image
    ///
    /// # Errors
    /// [`ImageErrors::DimensionsMisMatch`] if the buffer length does not match
    /// the dimensions and colorspace
    pub fn new(
        pixels: Vec<u8>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(colorspace.num_components()))
            .ok_or(ImageErrors::GenericStr("Image dimensions overflow"))?;

        if expected != pixels.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(Image {
            pixels,
            width,
            height,
            colorspace
        })
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn get_dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the colorspace this image is stored in
    pub const fn get_colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Number of pixels, not bytes
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

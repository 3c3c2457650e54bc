/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image colorspace information

/// Colorspaces understood by the converter
///
/// Input images are always [`RGB`](ColorSpace::RGB), output images
/// are always [`Luma`](ColorSpace::Luma).
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Grayscale colorspace
    Luma
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::Luma => 1
        }
    }
}

#[test]
fn test_components() {
    assert_eq!(ColorSpace::RGB.num_components(), 3);
    assert_eq!(ColorSpace::Luma.num_components(), 1);
}

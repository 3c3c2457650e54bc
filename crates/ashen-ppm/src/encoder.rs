/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};
use std::io::Write;

use ashen_core::colorspace::ColorSpace;

use crate::errors::PPMEncodeErrors;

/// Netpbm binary formats the encoder can write
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PPMVersions {
    /// Raw grayscale (PGM)
    P5,
    /// Raw RGB (PPM)
    P6
}

impl PPMVersions {
    /// The version able to store `colorspace`
    pub const fn from_colorspace(colorspace: ColorSpace) -> PPMVersions {
        match colorspace {
            ColorSpace::Luma => PPMVersions::P5,
            ColorSpace::RGB => PPMVersions::P6
        }
    }
}

impl Display for PPMVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P5 => write!(f, "P5"),
            Self::P6 => write!(f, "P6")
        }
    }
}

/// A PGM/PPM encoder
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(
        &mut self, version: PPMVersions, width: usize, height: usize
    ) -> Result<(), PPMEncodeErrors> {
        let header = format!("{version}\n{width}\n{height}\n255\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `data` as an 8 bit netpbm file
    ///
    /// Luma data is written as `P5`, RGB data as `P6`. The header
    /// fields are separated by single newlines.
    ///
    /// # Example
    /// ```
    /// use ashen_ppm::PPMEncoder;
    /// use ashen_ppm::ashen_core::colorspace::ColorSpace;
    ///
    /// let mut out = vec![];
    /// PPMEncoder::new(&mut out).encode_u8(2, 1, ColorSpace::Luma, &[255, 0]).unwrap();
    ///
    /// assert_eq!(out, b"P5\n2\n1\n255\n\xff\x00");
    /// ```
    pub fn encode_u8(
        &mut self, width: usize, height: usize, colorspace: ColorSpace, data: &[u8]
    ) -> Result<(), PPMEncodeErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(colorspace.num_components()));

        if expected != Some(data.len()) {
            return Err(PPMEncodeErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        self.write_headers(PPMVersions::from_colorspace(colorspace), width, height)?;
        self.writer.write_all(data)?;
        self.writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ashen_core::bytestream::ByteCursor;
    use ashen_core::colorspace::ColorSpace;

    use crate::{PPMDecoder, PPMEncodeErrors, PPMEncoder};

    #[test]
    fn test_pgm_header_layout() {
        let mut out = vec![];
        PPMEncoder::new(&mut out)
            .encode_u8(3, 2, ColorSpace::Luma, &[1, 2, 3, 4, 5, 6])
            .unwrap();

        assert_eq!(&out[..13], b"P5\n3\n2\n255\n\x01\x02");
        assert_eq!(out.len(), 11 + 6);
    }

    #[test]
    fn test_length_mismatch() {
        let mut out = vec![];
        let err = PPMEncoder::new(&mut out)
            .encode_u8(2, 2, ColorSpace::Luma, &[0; 3])
            .unwrap_err();

        assert!(matches!(err, PPMEncodeErrors::Static(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_rgb_output_is_readable_by_decoder() {
        let pixels = [10, 20, 30, 40, 50, 60];
        let mut out = vec![];
        PPMEncoder::new(&mut out)
            .encode_u8(1, 2, ColorSpace::RGB, &pixels)
            .unwrap();

        let mut decoder = PPMDecoder::new(ByteCursor::new(&out));
        assert_eq!(decoder.decode().unwrap(), pixels);
        assert_eq!(decoder.get_dimensions(), Some((1, 2)));
    }
}

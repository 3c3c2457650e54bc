/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};

use ashen_core::bytestream::{ByteReader, ByteReaderTrait};
use ashen_core::colorspace::ColorSpace;
use ashen_core::log::{info, trace, warn};
use ashen_core::options::DecoderOptions;

use crate::errors::PPMDecodeErrors;

/// The only maxval the decoder accepts, one byte per channel
pub const PPM_MAX_VALUE: usize = 255;

/// Numbers stored in a PPM header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HeaderField {
    Width,
    Height,
    MaxVal
}

impl HeaderField {
    const fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::MaxVal => "maxval"
        }
    }
}

impl Display for HeaderField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// States of the header parser
///
/// The magic number is matched byte by byte, the three numbers
/// share one state parametrized by the field being read.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum HeaderState {
    MagicP,
    MagicSix,
    MagicTerminator,
    ReadNumber(HeaderField),
    Done
}

/// Same set as C's `isspace`, netpbm uses that definition.
#[inline(always)]
const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// An instance of a PPM decoder
///
/// The decoder reads binary `P6` images with a maxval of 255
pub struct PPMDecoder<T: ByteReaderTrait> {
    width:           usize,
    height:          usize,
    max_value:       usize,
    decoded_headers: bool,
    reader:          ByteReader<T>,
    options:         DecoderOptions
}

impl<T: ByteReaderTrait> PPMDecoder<T> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use ashen_ppm::PPMDecoder;
    /// use ashen_ppm::ashen_core::bytestream::ByteCursor;
    ///
    /// let mut decoder = PPMDecoder::new(ByteCursor::new(b"NOT VALID PPM"));
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: T) -> PPMDecoder<T> {
        PPMDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - data: PPM encoded data.
    /// - options: Modified options for the decoder
    ///
    /// # Example
    /// ```
    /// use ashen_ppm::PPMDecoder;
    /// use ashen_ppm::ashen_core::bytestream::ByteCursor;
    /// use ashen_ppm::ashen_core::options::DecoderOptions;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(ByteCursor::new(b"P6 2 1 255\n"), options);
    ///
    /// assert!(decoder.read_headers().is_err());
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> PPMDecoder<T> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            decoded_headers: false,
            reader: ByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// On success the stream is positioned at the first pixel byte.
    ///
    /// Calling this more than once is a no-op.
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        trace!("Reading PPM headers from {}", self.reader.name());

        let mut state = HeaderState::MagicP;

        while state != HeaderState::Done {
            state = match state {
                HeaderState::MagicP => match self.next_header_byte("magic number")? {
                    b'P' => HeaderState::MagicSix,
                    b'#' => {
                        self.skip_comment()?;
                        HeaderState::MagicP
                    }
                    byte => {
                        let msg = format!(
                            "Expected P as first PPM byte but got {:?}",
                            char::from(byte)
                        );
                        return Err(PPMDecodeErrors::InvalidMagic(msg));
                    }
                },
                HeaderState::MagicSix => match self.next_header_byte("magic number")? {
                    b'6' => HeaderState::MagicTerminator,
                    b'#' => {
                        self.skip_comment()?;
                        HeaderState::MagicSix
                    }
                    byte => {
                        let msg = format!(
                            "Unsupported PPM version {:?}, only binary P6 images are supported",
                            char::from(byte)
                        );
                        return Err(PPMDecodeErrors::InvalidMagic(msg));
                    }
                },
                HeaderState::MagicTerminator => match self.next_header_byte("magic number")? {
                    byte if is_whitespace(byte) => HeaderState::ReadNumber(HeaderField::Width),
                    b'#' => {
                        // the comment ends in a line break, which is the
                        // whitespace closing the magic number
                        self.skip_comment()?;
                        HeaderState::ReadNumber(HeaderField::Width)
                    }
                    byte => return Err(PPMDecodeErrors::MagicTooLong(byte))
                },
                HeaderState::ReadNumber(field) => {
                    let value = self.read_number(field)?;

                    match field {
                        HeaderField::Width => {
                            self.width = value;
                            HeaderState::ReadNumber(HeaderField::Height)
                        }
                        HeaderField::Height => {
                            self.height = value;
                            HeaderState::ReadNumber(HeaderField::MaxVal)
                        }
                        HeaderField::MaxVal => {
                            self.max_value = value;
                            HeaderState::Done
                        }
                    }
                }
                HeaderState::Done => HeaderState::Done
            };
        }
        self.validate_header()?;

        info!("Width: {}, height: {}", self.width, self.height);
        info!("Max value: {}", self.max_value);

        self.decoded_headers = true;

        Ok(())
    }

    fn validate_header(&self) -> Result<(), PPMDecodeErrors> {
        if self.max_value != PPM_MAX_VALUE {
            return Err(PPMDecodeErrors::UnsupportedMaxValue(self.max_value));
        }
        if self.width == 0 || self.height == 0 {
            return Err(PPMDecodeErrors::ZeroDimensions(self.width, self.height));
        }
        if self.width > self.options.max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                HeaderField::Width,
                self.options.max_width(),
                self.width
            ));
        }
        if self.height > self.options.max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                HeaderField::Height,
                self.options.max_height(),
                self.height
            ));
        }
        Ok(())
    }

    fn next_header_byte(&mut self, part: &'static str) -> Result<u8, PPMDecodeErrors> {
        self.reader
            .read_u8()?
            .ok_or(PPMDecodeErrors::TruncatedHeader(part))
    }

    /// Skip a comment, the `#` has already been consumed.
    ///
    /// A comment runs up to and including the next CR or LF.
    fn skip_comment(&mut self) -> Result<(), PPMDecodeErrors> {
        loop {
            match self.reader.read_u8()? {
                Some(b'\n' | b'\r') => return Ok(()),
                Some(_) => continue,
                None => return Err(PPMDecodeErrors::UnterminatedComment)
            }
        }
    }

    /// Read one whitespace terminated decimal number
    ///
    /// Leading whitespace and comments are skipped, the terminating
    /// whitespace byte is consumed.
    fn read_number(&mut self, field: HeaderField) -> Result<usize, PPMDecodeErrors> {
        let first_digit = loop {
            match self.next_header_byte(field.name())? {
                byte if is_whitespace(byte) => continue,
                b'#' => self.skip_comment()?,
                byte if byte.is_ascii_digit() => break byte,
                byte => return Err(PPMDecodeErrors::ExpectedDigit(field, byte))
            }
        };
        let mut value = 0_usize;
        let mut num_digits = 0;

        self.push_digit(field, &mut value, &mut num_digits, first_digit)?;

        loop {
            match self.next_header_byte(field.name())? {
                byte if is_whitespace(byte) => break,
                byte if byte.is_ascii_digit() => {
                    self.push_digit(field, &mut value, &mut num_digits, byte)?;
                }
                b'#' if self.options.comments_in_tokens() => self.skip_comment()?,
                b'#' => return Err(PPMDecodeErrors::CommentInsideNumber(field)),
                byte => return Err(PPMDecodeErrors::ExpectedDigit(field, byte))
            }
        }
        Ok(value)
    }

    fn push_digit(
        &self, field: HeaderField, value: &mut usize, num_digits: &mut usize, digit: u8
    ) -> Result<(), PPMDecodeErrors> {
        *num_digits += 1;

        if *num_digits > self.options.max_digits() {
            return Err(PPMDecodeErrors::NumberTooLong(
                field,
                self.options.max_digits()
            ));
        }
        *value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(usize::from(digit - b'0')))
            .ok_or(PPMDecodeErrors::NumberOverflow(field))?;

        Ok(())
    }

    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub const fn get_colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(ColorSpace::RGB)
        } else {
            None
        }
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the maxval declared in the header or none if headers aren't decoded
    pub const fn get_max_value(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Bytes needed to hold the decoded pixels or none
    /// if headers aren't decoded or the size overflows
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            self.width
                .checked_mul(self.height)?
                .checked_mul(ColorSpace::RGB.num_components())
        } else {
            None
        }
    }

    /// Decode a ppm encoded file and return the raw interleaved RGB bytes
    ///
    /// The buffer is allocated fallibly, an allocation failure is reported
    /// as [`PPMDecodeErrors::AllocationFailed`].
    pub fn decode(&mut self) -> Result<Vec<u8>, PPMDecodeErrors> {
        self.read_headers()?;

        let size = self.output_buffer_size().ok_or_else(|| {
            PPMDecodeErrors::Generic(format!(
                "Image dimensions {}x{} overflow the address space",
                self.width, self.height
            ))
        })?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| PPMDecodeErrors::AllocationFailed(size))?;
        data.resize(size, 0);

        self.decode_into(&mut data)?;

        Ok(data)
    }

    /// Decode pixels into `out`, which must be exactly
    /// [`output_buffer_size`](Self::output_buffer_size) bytes long
    pub fn decode_into(&mut self, out: &mut [u8]) -> Result<(), PPMDecodeErrors> {
        self.read_headers()?;

        let size = self.output_buffer_size().unwrap_or(usize::MAX);

        if out.len() != size {
            let msg = format!("Expected an output buffer of {size} bytes but found {}", out.len());
            return Err(PPMDecodeErrors::Generic(msg));
        }
        self.reader.read_exact_bytes(out)?;

        if self.reader.has_trailing_bytes()? {
            if self.options.strict_mode() {
                return Err(PPMDecodeErrors::TrailingBytes);
            }
            warn!("Ignoring bytes after the pixel data");
        }
        Ok(())
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

use ashen_core::bytestream::ByteIoError;

use crate::decoder::HeaderField;

/// Errors occurring during decoding
pub enum PPMDecodeErrors {
    /// The magic number is not `P6`
    InvalidMagic(String),
    /// The magic number is followed by something other than whitespace
    MagicTooLong(u8),
    /// A header number did not start with, or contained, a non digit
    ExpectedDigit(HeaderField, u8),
    /// A `#` appeared inside a number token and comments there are disabled
    CommentInsideNumber(HeaderField),
    /// The stream ended inside a comment
    UnterminatedComment,
    /// The stream ended before the header was complete
    TruncatedHeader(&'static str),
    /// A header number had more digits than allowed
    NumberTooLong(HeaderField, usize),
    /// A header number does not fit a `usize`
    NumberOverflow(HeaderField),
    /// Only 8 bit images (maxval 255) are supported
    UnsupportedMaxValue(usize),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// A dimension is above the configured limit
    ///
    /// (field, limit, found)
    LargeDimensions(HeaderField, usize, usize),
    /// Bytes follow the pixel data, only raised in strict mode
    TrailingBytes,
    /// The pixel buffer could not be allocated
    AllocationFailed(usize),
    /// Reading from the underlying stream failed or ended early
    IoErrors(ByteIoError),
    Generic(String)
}

impl PPMDecodeErrors {
    /// Whether this error describes a malformed header
    /// as opposed to an I/O or allocation failure
    pub const fn is_format_error(&self) -> bool {
        !matches!(self, Self::AllocationFailed(_) | Self::IoErrors(_))
    }
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagic(val) | Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::MagicTooLong(byte) => {
                writeln!(
                    f,
                    "Magic number too long, expected whitespace after P6 but found {:?}",
                    char::from(*byte)
                )
            }
            Self::ExpectedDigit(field, byte) => {
                writeln!(
                    f,
                    "Invalid header, expected a digit in {field} but found {:?}",
                    char::from(*byte)
                )
            }
            Self::CommentInsideNumber(field) => {
                writeln!(f, "Invalid header, comment inside the {field} value")
            }
            Self::UnterminatedComment => {
                writeln!(f, "Invalid header, stream ends inside a comment")
            }
            Self::TruncatedHeader(part) => {
                writeln!(f, "Invalid header, stream ends while reading the {part}")
            }
            Self::NumberTooLong(field, max) => {
                writeln!(f, "Invalid header, {field} has more than {max} digits")
            }
            Self::NumberOverflow(field) => {
                writeln!(f, "Invalid header, {field} overflows")
            }
            Self::UnsupportedMaxValue(value) => {
                writeln!(
                    f,
                    "Unsupported maxval {value}, only 8 bit images with a maxval of 255 are supported"
                )
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Invalid dimensions {width}x{height}, both must be non zero")
            }
            Self::LargeDimensions(field, expected, found) => {
                writeln!(
                    f,
                    "Too large {field}, expected a value less than {expected} but found {found}"
                )
            }
            Self::TrailingBytes => {
                writeln!(f, "Unexpected bytes after the pixel data")
            }
            Self::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes for the pixels")
            }
            Self::IoErrors(err) => {
                writeln!(f, "Could not read pixel data: {err:?}")
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl From<ByteIoError> for PPMDecodeErrors {
    fn from(err: ByteIoError) -> Self {
        PPMDecodeErrors::IoErrors(err)
    }
}

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    Static(&'static str),
    IOErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PPMEncodeErrors::IOErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMEncodeErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PPMEncodeErrors::IOErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMEncodeErrors {}

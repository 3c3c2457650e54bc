/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::ByteReaderTrait;

pub(crate) mod memory_reader;
pub(crate) mod std_readers;

/// Errors raised while pulling bytes from a source
pub enum ByteIoError {
    /// The underlying reader failed
    StdIoError(std::io::Error),
    /// The stream ended early
    ///
    /// (requested, read)
    NotEnoughBytes(usize, usize)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// A position tracking byte reader
///
/// # Example
/// ```
/// use ashen_core::bytestream::{ByteCursor, ByteReader};
///
/// let mut reader = ByteReader::new(ByteCursor::new(b"P6"));
///
/// assert_eq!(reader.read_u8().unwrap(), Some(b'P'));
/// assert_eq!(reader.position(), 1);
/// ```
pub struct ByteReader<T: ByteReaderTrait> {
    inner:    T,
    position: u64
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader {
            inner:    source,
            position: 0
        }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Read a single byte, `None` signals the end of the stream
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<Option<u8>, ByteIoError> {
        let byte = self.inner.read_byte()?;

        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    /// Read a single byte, treating the end of the stream as an error
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        self.read_u8()?.ok_or(ByteIoError::NotEnoughBytes(1, 0))
    }

    /// Fill `buf` completely or fail with [`ByteIoError::NotEnoughBytes`]
    /// carrying how many bytes the stream still had.
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let read = self.inner.read_bytes(&mut buf[filled..])?;

            if read == 0 {
                self.position += filled as u64;
                return Err(ByteIoError::NotEnoughBytes(buf.len(), filled));
            }
            filled += read;
        }
        self.position += filled as u64;

        Ok(())
    }

    /// Whether the stream has no more bytes
    ///
    /// This consumes a byte when one is present, so it's only meant for
    /// checking for trailing data after everything else was read.
    pub fn has_trailing_bytes(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.read_u8()?.is_some())
    }

    /// Number of bytes consumed so far
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading bytes in ashen
//!
//! This exposes the trait and implementations for readers
//! used by the decoder.

use crate::bytestream::reader::ByteIoError;

/// The de-facto Input trait implemented for readers.
///
/// This provides the basic functions needed for quick, heap free I/O
/// for the decoder with easy support for extending it
/// to multiple implementations.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer [`ByteCursor`](crate::bytestream::ByteCursor)
/// over [`Cursor`](std::io::Cursor), single byte reads skip the `Read` machinery.
pub trait ByteReaderTrait {
    /// Read a single byte, returning `None` at the end of the stream
    ///
    /// The implementation should try to be as fast as possible as this is called
    /// once per header byte.
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError>;

    /// Read up to `buf.len()` bytes into `buf` returning how many were read
    ///
    /// A return value of zero means the stream is exhausted.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;

    /// A name identifying the reader type, used in log messages
    fn name(&self) -> &'static str;
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteReaderTrait};

/// A cursor over an in-memory buffer
///
/// Cheaper than [`std::io::Cursor`] for byte at a time reads.
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for ByteCursor<T> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        let byte = self.stream.as_ref().get(self.position).copied();

        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let stream = self.stream.as_ref();
        let start = self.position.min(stream.len());
        let to_copy = buf.len().min(stream.len() - start);

        buf[..to_copy].copy_from_slice(&stream[start..start + to_copy]);
        self.position += to_copy;

        Ok(to_copy)
    }

    fn name(&self) -> &'static str {
        "ByteCursor<T>"
    }
}

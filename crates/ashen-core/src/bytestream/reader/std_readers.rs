/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufRead, BufReader, Cursor, ErrorKind, Read};

use crate::bytestream::{ByteIoError, ByteReaderTrait};

/// Pull one byte out of a buffered reader without going through `read`
#[inline(always)]
fn buffered_read_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>, ByteIoError> {
    loop {
        match reader.fill_buf() {
            Ok([]) => return Ok(None),
            Ok(buf) => {
                let byte = buf[0];
                reader.consume(1);
                return Ok(Some(byte));
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    }
}

#[inline(always)]
fn read_retrying<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, ByteIoError> {
    loop {
        match reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    }
}

impl<T> ByteReaderTrait for Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        buffered_read_byte(self)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_retrying(self, buf)
    }

    fn name(&self) -> &'static str {
        "Cursor<T>"
    }
}

impl<T: Read> ByteReaderTrait for BufReader<T> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        buffered_read_byte(self)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_retrying(self, buf)
    }

    fn name(&self) -> &'static str {
        "BufReader<T>"
    }
}

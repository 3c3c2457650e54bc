/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A byte reader for decoders
//!
//! The reader wraps anything implementing [`ByteReaderTrait`] and
//! keeps track of how many bytes were consumed, so decoders can report
//! positions and short reads precisely.

pub use reader::{ByteIoError, ByteReader};
pub use traits::ByteReaderTrait;

pub use crate::bytestream::reader::memory_reader::ByteCursor;

mod reader;
mod traits;

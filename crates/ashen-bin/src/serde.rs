/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use ashen_core::colorspace::ColorSpace;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header information printed by `--probe`
pub struct Metadata<'a> {
    file:       &'a Path,
    size:       u64,
    width:      usize,
    height:     usize,
    max_value:  usize,
    colorspace: ColorSpace
}

impl<'a> Metadata<'a> {
    pub fn new(
        file: &'a Path, size: u64, (width, height): (usize, usize), max_value: usize,
        colorspace: ColorSpace
    ) -> Metadata<'a> {
        Metadata {
            file,
            size,
            width,
            height,
            max_value,
            colorspace
        }
    }
}

impl Serialize for Metadata<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 7)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("format", "P6")?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("max_value", &self.max_value)?;
        state.serialize_field("colorspace", &self.colorspace)?;

        state.end()
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ashen_image::errors::ImageErrors;
use ashen_image::image::Image;
use ashen_image::pipeline::encode;
use log::{debug, warn};

/// Open the input file for buffered reading, returning its size too
pub fn open_input(path: &Path) -> Result<(BufReader<File>, u64), ImageErrors> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();

    debug!("Opened {path:?}, {size} bytes");

    Ok((BufReader::new(file), size))
}

/// Create `path` and write `image` as PGM
///
/// If writing fails the partially written file is removed.
pub fn write_output(path: &Path, image: &Image) -> Result<(), ImageErrors> {
    let mut writer = BufWriter::new(File::create(path)?);

    let result = encode(image, &mut writer);

    if result.is_err() {
        drop(writer);

        if let Err(err) = std::fs::remove_file(path) {
            warn!("Could not remove partial output {path:?}: {err}");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use ashen_core::colorspace::ColorSpace;
    use ashen_image::image::Image;

    use crate::file_io::{open_input, write_output};

    #[test]
    fn test_write_then_read() {
        let path = std::env::temp_dir().join(format!("ashen-file-io-{}.pgm", std::process::id()));
        let image = Image::new(vec![1, 2, 3, 4], 2, 2, ColorSpace::Luma).unwrap();

        write_output(&path, &image).unwrap();

        let (_, size) = open_input(&path).unwrap();
        assert_eq!(size, 11 + 4);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_input() {
        let path = std::env::temp_dir().join("ashen-file-io-does-not-exist.ppm");
        assert!(open_input(&path).is_err());
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Planar float storage for interleaved RGB bytes
//!
//! `RGBRGBRGB` becomes three planes `RRR`, `GGG`, `BBB` converted to `f32`,
//! which is the layout the 4 lane greyscale kernels consume.
//!
//! Each plane is a vector of [`Lane4`], so every group of four floats starts at a
//! 16 byte boundary and the plane length is always a multiple of 4, the tail
//! being padded with zeros.

use bytemuck::{Pod, Zeroable};

use crate::errors::ProcsErrors;

/// Number of floats processed per vector step
pub const LANES: usize = 4;

/// Four consecutive samples of one plane, aligned to 16 bytes
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C, align(16))]
pub struct Lane4(pub [f32; LANES]);

/// Deinterleaved RGB planes
pub struct PlanarRgb {
    red:    Vec<Lane4>,
    green:  Vec<Lane4>,
    blue:   Vec<Lane4>,
    pixels: usize
}

/// Allocate a zeroed plane of `lanes` lanes, failing instead of aborting
fn try_alloc_plane(lanes: usize) -> Result<Vec<Lane4>, ProcsErrors> {
    let mut plane = Vec::new();

    plane.try_reserve_exact(lanes).map_err(|_| {
        ProcsErrors::AllocationFailed(lanes.saturating_mul(core::mem::size_of::<Lane4>()))
    })?;
    plane.resize(lanes, Lane4::zeroed());

    Ok(plane)
}

impl PlanarRgb {
    /// Split interleaved RGB bytes into three padded float planes
    ///
    /// # Errors
    /// - [`ProcsErrors::LengthMismatch`] if `interleaved` is not a whole number of pixels
    /// - [`ProcsErrors::AllocationFailed`] if any plane cannot be allocated, planes
    ///   allocated before the failure are dropped
    pub fn from_interleaved(interleaved: &[u8]) -> Result<PlanarRgb, ProcsErrors> {
        if interleaved.len() % 3 != 0 {
            let whole = interleaved.len() - interleaved.len() % 3;
            return Err(ProcsErrors::LengthMismatch(whole, interleaved.len()));
        }
        let pixels = interleaved.len() / 3;
        let lanes = pixels.div_ceil(LANES);

        let mut planar = PlanarRgb {
            red: try_alloc_plane(lanes)?,
            green: try_alloc_plane(lanes)?,
            blue: try_alloc_plane(lanes)?,
            pixels
        };
        planar.fill(interleaved);

        Ok(planar)
    }

    #[allow(clippy::cast_lossless)]
    fn fill(&mut self, interleaved: &[u8]) {
        let red: &mut [f32] = bytemuck::cast_slice_mut(&mut self.red);
        let green: &mut [f32] = bytemuck::cast_slice_mut(&mut self.green);
        let blue: &mut [f32] = bytemuck::cast_slice_mut(&mut self.blue);

        for (((rgb, r), g), b) in interleaved
            .chunks_exact(3)
            .zip(red.iter_mut())
            .zip(green.iter_mut())
            .zip(blue.iter_mut())
        {
            *r = f32::from(rgb[0]);
            *g = f32::from(rgb[1]);
            *b = f32::from(rgb[2]);
        }
    }

    /// Number of real pixels, excluding padding
    pub const fn pixels(&self) -> usize {
        self.pixels
    }

    /// Number of lanes in each plane
    pub fn lanes(&self) -> usize {
        self.red.len()
    }

    /// The three planes as aligned lanes, padding included
    pub fn planes(&self) -> (&[Lane4], &[Lane4], &[Lane4]) {
        (&self.red, &self.green, &self.blue)
    }

    /// The three planes as flat float slices, padding included
    pub fn planes_f32(&self) -> (&[f32], &[f32], &[f32]) {
        (
            bytemuck::cast_slice(&self.red),
            bytemuck::cast_slice(&self.green),
            bytemuck::cast_slice(&self.blue)
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::deinterleave::{Lane4, PlanarRgb, LANES};
    use crate::errors::ProcsErrors;

    #[test]
    fn test_planes_are_padded_and_aligned() {
        let pixels: Vec<u8> = (0..15).collect();
        let planar = PlanarRgb::from_interleaved(&pixels).unwrap();

        assert_eq!(planar.pixels(), 5);
        assert_eq!(planar.lanes(), 2);

        let (r, g, b) = planar.planes_f32();

        assert_eq!(r, [0.0, 3.0, 6.0, 9.0, 12.0, 0.0, 0.0, 0.0]);
        assert_eq!(g[..5], [1.0, 4.0, 7.0, 10.0, 13.0]);
        assert_eq!(b[..5], [2.0, 5.0, 8.0, 11.0, 14.0]);

        for plane in [r, g, b] {
            assert_eq!(plane.len() % LANES, 0);
            assert_eq!(plane.as_ptr() as usize % 16, 0);
        }
    }

    #[test]
    fn test_lane_layout() {
        assert_eq!(core::mem::size_of::<Lane4>(), 16);
        assert_eq!(core::mem::align_of::<Lane4>(), 16);
    }

    #[test]
    fn test_partial_pixel_rejected() {
        let err = PlanarRgb::from_interleaved(&[1, 2, 3, 4]).err().unwrap();
        assert!(matches!(err, ProcsErrors::LengthMismatch(3, 4)));
    }

    #[test]
    fn test_empty_input() {
        let planar = PlanarRgb::from_interleaved(&[]).unwrap();
        assert_eq!(planar.lanes(), 0);
    }
}

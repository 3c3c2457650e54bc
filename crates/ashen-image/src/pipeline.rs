/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decode, convert and encode stages
//!
//! The free functions [`decode`], [`process`] and [`encode`] run one stage
//! each. [`Pipeline`] steps through decode and process one state at a time,
//! logging how long each took, and [`convert`] runs everything including
//! the encode.
//!
//! No stage keeps global state, all configuration travels in
//! [`ConversionOptions`].
use std::io::Write;
use std::time::Instant;

use ashen_core::bytestream::ByteReaderTrait;
use ashen_core::colorspace::ColorSpace;
use ashen_core::log::{debug, info};
use ashen_core::options::DecoderOptions;
use ashen_ppm::{PPMDecoder, PPMEncoder};
use ashen_procs::gamma::{gamma_correct, PowStrategy};
use ashen_procs::grayscale::{rgb_to_grayscale, Coefficients, Reducer};
use ashen_procs::ProcsErrors;

use crate::errors::ImageErrors;
use crate::image::Image;

/// Options controlling a conversion
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConversionOptions {
    coefficients: Coefficients,
    gamma:        f32,
    reducer:      Reducer,
    strategy:     PowStrategy,
    decoder:      DecoderOptions
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            coefficients: Coefficients::default(),
            gamma:        1.0,
            reducer:      Reducer::default(),
            strategy:     PowStrategy::default(),
            decoder:      DecoderOptions::default()
        }
    }
}

impl ConversionOptions {
    pub const fn get_coefficients(&self) -> Coefficients {
        self.coefficients
    }

    pub const fn get_gamma(&self) -> f32 {
        self.gamma
    }

    pub const fn get_reducer(&self) -> Reducer {
        self.reducer
    }

    pub const fn get_pow_strategy(&self) -> PowStrategy {
        self.strategy
    }

    pub const fn get_decoder_options(&self) -> DecoderOptions {
        self.decoder
    }

    /// Set the red, green and blue weights
    ///
    /// # Errors
    /// If the coefficients are negative, not finite or all zero
    pub fn set_coefficients(mut self, a: f32, b: f32, c: f32) -> Result<Self, ImageErrors> {
        self.coefficients = Coefficients::new(a, b, c)?;
        Ok(self)
    }

    /// Set the gamma exponent
    ///
    /// # Errors
    /// If gamma is negative or not finite
    pub fn set_gamma(mut self, gamma: f32) -> Result<Self, ImageErrors> {
        if !gamma.is_finite() || gamma < 0.0 {
            return Err(ProcsErrors::InvalidGamma(gamma).into());
        }
        self.gamma = gamma;
        Ok(self)
    }

    #[must_use]
    pub fn set_reducer(mut self, reducer: Reducer) -> Self {
        self.reducer = reducer;
        self
    }

    #[must_use]
    pub fn set_pow_strategy(mut self, strategy: PowStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn set_decoder_options(mut self, options: DecoderOptions) -> Self {
        self.decoder = options;
        self
    }
}

/// Decode a PPM stream into an RGB image
pub fn decode<T: ByteReaderTrait>(
    source: T, options: DecoderOptions
) -> Result<Image, ImageErrors> {
    let mut decoder = PPMDecoder::new_with_options(source, options);

    let pixels = decoder.decode()?;
    let (width, height) = decoder
        .get_dimensions()
        .ok_or(ImageErrors::GenericStr("Decoder did not report dimensions"))?;

    Image::new(pixels, width, height, ColorSpace::RGB)
}

/// Convert an RGB image into a gamma corrected greyscale image
///
/// The intermediate greyscale buffer is dropped before returning,
/// on success or failure.
pub fn process(image: &Image, options: &ConversionOptions) -> Result<Image, ImageErrors> {
    if image.get_colorspace() != ColorSpace::RGB {
        return Err(ImageErrors::WrongColorspace(
            ColorSpace::RGB,
            image.get_colorspace()
        ));
    }
    let grey = rgb_to_grayscale(
        image.pixels(),
        options.coefficients,
        options.reducer,
        options.decoder.use_simd()
    )?;

    let mut output = Vec::new();
    output
        .try_reserve_exact(grey.len())
        .map_err(|_| ProcsErrors::AllocationFailed(grey.len()))?;
    output.resize(grey.len(), 0);

    gamma_correct(&grey, options.gamma, options.strategy, &mut output)?;

    let (width, height) = image.get_dimensions();

    Image::new(output, width, height, ColorSpace::Luma)
}

/// Write a greyscale image as PGM
pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ImageErrors> {
    let (width, height) = image.get_dimensions();

    PPMEncoder::new(writer).encode_u8(width, height, image.get_colorspace(), image.pixels())?;

    Ok(())
}

/// Decode, convert and encode in one call
///
/// `open_sink` is only called once the output image exists, so
/// a failing decode or conversion never creates the output.
pub fn convert<T, W, F>(
    source: T, open_sink: F, options: &ConversionOptions
) -> Result<Image, ImageErrors>
where
    T: ByteReaderTrait,
    W: Write,
    F: FnOnce() -> std::io::Result<W>
{
    let mut pipeline = Pipeline::new(source, *options);
    pipeline.advance_to_end()?;

    let image = pipeline
        .into_output()
        .ok_or(ImageErrors::NoImageForOperations)?;

    let start = Instant::now();
    let mut sink = open_sink()?;
    encode(&image, &mut sink)?;

    info!("Finished encoding in {} ms", start.elapsed().as_millis());

    Ok(image)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum PipelineState {
    Initialized,
    Decode,
    Process,
    Finished
}

impl PipelineState {
    const fn next(self) -> Option<Self> {
        match self {
            PipelineState::Initialized => Some(PipelineState::Decode),
            PipelineState::Decode => Some(PipelineState::Process),
            PipelineState::Process => Some(PipelineState::Finished),
            PipelineState::Finished => None
        }
    }
}

/// A conversion run one stage at a time
///
/// Each buffer is owned by one stage, the decoded image is dropped
/// once the greyscale image exists.
pub struct Pipeline<T: ByteReaderTrait> {
    source:  Option<T>,
    options: ConversionOptions,
    state:   Option<PipelineState>,
    decoded: Option<Image>,
    output:  Option<Image>
}

impl<T: ByteReaderTrait> Pipeline<T> {
    pub fn new(source: T, options: ConversionOptions) -> Pipeline<T> {
        Pipeline {
            source: Some(source),
            options,
            state: Some(PipelineState::Initialized),
            decoded: None,
            output: None
        }
    }

    /// Run the current state and move to the next one
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        debug!("Current state: {state:?}");

        let start = Instant::now();

        match state {
            PipelineState::Decode => {
                let source = self
                    .source
                    .take()
                    .ok_or(ImageErrors::GenericStr("Pipeline source already consumed"))?;

                self.decoded = Some(decode(source, self.options.decoder)?);

                info!("Finished decoding in {} ms", start.elapsed().as_millis());
            }
            PipelineState::Process => {
                let image = self
                    .decoded
                    .take()
                    .ok_or(ImageErrors::NoImageForOperations)?;

                self.output = Some(process(&image, &self.options)?);

                info!(
                    "Finished {:?} greyscale with {:?} gamma in {} ms",
                    self.options.reducer,
                    self.options.strategy,
                    start.elapsed().as_millis()
                );
            }
            PipelineState::Initialized | PipelineState::Finished => {}
        }
        self.state = state.next();

        Ok(())
    }

    /// Advance until every state has run
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }

    /// The decoded RGB image, present between the decode and process states
    pub fn get_decoded(&self) -> Option<&Image> {
        self.decoded.as_ref()
    }

    /// Take the converted image once the pipeline finished
    pub fn into_output(self) -> Option<Image> {
        self.output
    }
}

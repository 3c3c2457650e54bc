/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ashen_procs::gamma::PowStrategy;
use ashen_procs::grayscale::{Coefficients, Reducer};
use clap::builder::PossibleValue;
use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IPowStrategy {
    Reference,
    Taylor,
    SplitTaylor,
    NaiveTaylor
}

impl IPowStrategy {
    pub const fn to_pow_strategy(self) -> PowStrategy {
        match self {
            IPowStrategy::Reference => PowStrategy::Reference,
            IPowStrategy::Taylor => PowStrategy::Taylor,
            IPowStrategy::SplitTaylor => PowStrategy::SplitTaylor,
            IPowStrategy::NaiveTaylor => PowStrategy::NaiveTaylor
        }
    }
}

impl ValueEnum for IPowStrategy {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Reference,
            Self::Taylor,
            Self::SplitTaylor,
            Self::NaiveTaylor
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Reference => PossibleValue::new("reference"),
            Self::Taylor => PossibleValue::new("taylor"),
            Self::SplitTaylor => PossibleValue::new("split-taylor"),
            Self::NaiveTaylor => PossibleValue::new("naive-taylor").help("Diagnostic only")
        })
    }
}

/// Reducer and power strategy selected by `-V`
pub const fn preset(version: u8) -> Option<(Reducer, PowStrategy)> {
    match version {
        0 => Some((Reducer::Scalar, PowStrategy::Reference)),
        1 => Some((Reducer::Scalar, PowStrategy::Taylor)),
        2 => Some((Reducer::Vectorized, PowStrategy::Reference)),
        3 => Some((Reducer::Scalar, PowStrategy::SplitTaylor)),
        _ => None
    }
}

/// Parse `a,b,c` into three validated coefficients
pub fn parse_coefficients(value: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();

    if parts.len() != 3 {
        return Err(format!(
            "Expected three comma separated coefficients but found {}",
            parts.len()
        ));
    }
    let mut coefficients = [0.0; 3];

    for (out, part) in coefficients.iter_mut().zip(parts) {
        *out = part
            .parse::<f32>()
            .map_err(|e| format!("Invalid coefficient {part:?}: {e}"))?;
    }
    let [a, b, c] = coefficients;

    Coefficients::new(a, b, c).map_err(|e| format!("{e}"))?;

    Ok(coefficients)
}

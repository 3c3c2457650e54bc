/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gamma correction of normalized greyscale values
//!
//! Every value `q` in `[0, 1]` becomes `round(q^gamma * 255)`, with
//! `q^gamma` computed by one of several [`PowStrategy`] implementations.
//!
//! The series based strategies expand `x^gamma` around `x = 1`
//!
//! ```text
//! t_0 = 1
//! t_n = t_(n-1) * (gamma - n + 1) / n * (x - 1)
//! ```
//!
//! which converges for `0 < x <= 1` but slowly for dark pixels. The plain
//! series strategies are therefore less accurate at low intensities, they are
//! only held to the reference for `q >= 1/255`. [`PowStrategy::SplitTaylor`]
//! takes square roots of dark values until they are at least one half before
//! summing, and agrees with the reference over the whole `[0, 1]` range.
use ashen_core::log::trace;

use crate::errors::ProcsErrors;

/// Series terms smaller than this end the Taylor expansion
pub const TAYLOR_THRESHOLD: f64 = 1e-10;

/// Upper bound on the number of series terms summed for one value
pub const MAX_TAYLOR_TERMS: usize = 1 << 13;

/// `q <= 0.5` raised to at least this gamma rounds to zero,
/// `0.5^150 * 255` is far below `0.5`
pub const DARK_GAMMA_CUTOFF: f32 = 150.0;

/// Gammas at or above this round to zero for every `q < 1`.
///
/// The largest `f32` below one is `1 - 2^-24` and `(1 - 2^-24)^g * 255 < 0.5`
/// holds once `g > ln(510) * 2^24 ~= 1.05e8`, below `2^27`. The integer part
/// of any smaller gamma fits in 27 bits.
pub const MAX_GAMMA: f32 = 134_217_728.0;

/// How `q^gamma` is computed
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PowStrategy {
    /// The standard library `powf`
    #[default]
    Reference,
    /// Taylor series around one, in double precision
    Taylor,
    /// Integer part by binary exponentiation, fractional part by Taylor series
    SplitTaylor,
    /// Taylor series in single precision without the split, for cross checking
    NaiveTaylor
}

impl PowStrategy {
    /// Compute `q^gamma` for `q` in `[0, 1]` and `gamma >= 0`
    pub fn pow(self, q: f32, gamma: f32) -> f32 {
        match self {
            PowStrategy::Reference => pow_reference(q, gamma),
            PowStrategy::Taylor => pow_taylor(q, gamma),
            PowStrategy::SplitTaylor => pow_split_taylor(q, gamma),
            PowStrategy::NaiveTaylor => pow_naive_taylor(q, gamma)
        }
    }

    /// Gamma correct one value to an output byte
    #[inline]
    pub fn correct(self, q: f32, gamma: f32) -> u8 {
        to_byte(self.pow(q, gamma))
    }
}

/// Scale a value in `[0, 1]` to a byte, rounding half away from zero
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_byte(p: f32) -> u8 {
    (p * 255.0).round() as u8
}

/// Results every series strategy shares: `x^0 = 1`, `1^g = 1` and `0^g = 0`
fn trivial_pow(q: f32, gamma: f32) -> Option<f32> {
    if gamma == 0.0 || q >= 1.0 {
        Some(1.0)
    } else if q <= 0.0 {
        Some(0.0)
    } else {
        None
    }
}

pub fn pow_reference(q: f32, gamma: f32) -> f32 {
    q.powf(gamma)
}

/// Sum the series for `x^gamma` around one in double precision
///
/// Stops when a term falls below [`TAYLOR_THRESHOLD`], when the sum
/// reaches a fixed point, when `gamma - n + 1` no longer changes under
/// decrement or after [`MAX_TAYLOR_TERMS`] terms.
#[allow(clippy::cast_precision_loss)]
fn taylor_series(x: f64, gamma: f64) -> f64 {
    let delta = x - 1.0;

    let mut term = 1.0;
    let mut sum = 1.0;
    let mut coefficient = gamma;

    for n in 1..=MAX_TAYLOR_TERMS {
        term *= coefficient / n as f64 * delta;

        let next = sum + term;

        if term.abs() < TAYLOR_THRESHOLD || next == sum {
            return next;
        }
        sum = next;

        let decremented = coefficient - 1.0;

        if decremented == coefficient {
            break;
        }
        coefficient = decremented;
    }
    sum
}

/// `q^fraction` for `q > 0`, with the series only evaluated at or above one half
///
/// `q = x^(2^s)` with `x >= 0.5` after `s` square roots, so `q^fraction` is
/// `x^(fraction * 2^s)`. The integer part of that exponent goes through
/// binary exponentiation, what remains through the series.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pow_fraction(q: f64, fraction: f64) -> f64 {
    let mut x = q;
    let mut exponent = fraction;

    while x < 0.5 {
        x = x.sqrt();
        exponent *= 2.0;
    }
    // q comes from an f32, q >= 2^-149 needs at most 8 roots so whole < 256
    let whole = exponent.floor();
    let rest = exponent - whole;

    let integer_part = pow_binary(x, whole as u32);

    if rest == 0.0 {
        integer_part
    } else {
        integer_part * taylor_series(x, rest)
    }
}

/// `base^exponent` by binary exponentiation, least significant bit first
fn pow_binary(mut base: f64, mut exponent: u32) -> f64 {
    let mut result = 1.0;

    while exponent != 0 {
        if exponent & 1 == 1 {
            result *= base;
        }
        base *= base;
        exponent >>= 1;
    }
    result
}

#[allow(clippy::cast_possible_truncation)]
pub fn pow_taylor(q: f32, gamma: f32) -> f32 {
    if let Some(value) = trivial_pow(q, gamma) {
        return value;
    }
    taylor_series(f64::from(q), f64::from(gamma)) as f32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pow_split_taylor(q: f32, gamma: f32) -> f32 {
    if q >= 1.0 {
        return 1.0;
    }
    let whole = gamma.floor();
    let fraction = gamma - whole;

    if q <= 0.0 && fraction != 0.0 {
        return 0.0;
    }
    if gamma >= MAX_GAMMA || (q <= 0.5 && gamma >= DARK_GAMMA_CUTOFF) {
        return 0.0;
    }
    // whole < 2^27 here
    let integer_part = pow_binary(f64::from(q), whole as u32);

    if integer_part == 0.0 {
        return 0.0;
    }
    let fraction_part = if fraction == 0.0 {
        1.0
    } else {
        pow_fraction(f64::from(q), f64::from(fraction))
    };

    (integer_part * fraction_part) as f32
}

#[allow(clippy::cast_precision_loss)]
pub fn pow_naive_taylor(q: f32, gamma: f32) -> f32 {
    if let Some(value) = trivial_pow(q, gamma) {
        return value;
    }
    let delta = q - 1.0;

    let mut term = 1.0_f32;
    let mut sum = 1.0_f32;
    let mut coefficient = gamma;

    for n in 1..=MAX_TAYLOR_TERMS {
        term *= coefficient / n as f32 * delta;

        if term == 0.0 {
            break;
        }
        let next = sum + term;

        if next == sum {
            break;
        }
        sum = next;
        coefficient -= 1.0;
    }
    sum
}

/// Gamma correct a greyscale buffer into output bytes
///
/// # Errors
/// - [`ProcsErrors::InvalidGamma`] if gamma is negative or not finite
/// - [`ProcsErrors::LengthMismatch`] if `out` and `grey` differ in length
pub fn gamma_correct(
    grey: &[f32], gamma: f32, strategy: PowStrategy, out: &mut [u8]
) -> Result<(), ProcsErrors> {
    if !gamma.is_finite() || gamma < 0.0 {
        return Err(ProcsErrors::InvalidGamma(gamma));
    }
    if grey.len() != out.len() {
        return Err(ProcsErrors::LengthMismatch(grey.len(), out.len()));
    }
    trace!("Gamma correcting {} values, gamma {gamma}, {strategy:?}", grey.len());

    for (q, pix) in grey.iter().zip(out.iter_mut()) {
        *pix = strategy.correct(*q, gamma);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::errors::ProcsErrors;
    use crate::gamma::{
        gamma_correct, pow_binary, pow_fraction, pow_split_taylor, taylor_series, to_byte,
        PowStrategy, DARK_GAMMA_CUTOFF, MAX_GAMMA
    };
    use crate::grayscale::{rgb_to_grayscale, Coefficients, Reducer};

    const ALL: [PowStrategy; 4] = [
        PowStrategy::Reference,
        PowStrategy::Taylor,
        PowStrategy::SplitTaylor,
        PowStrategy::NaiveTaylor
    ];

    #[test]
    fn test_boundaries() {
        for strategy in ALL {
            for gamma in [0.25, 0.5, 1.0, 2.2, 3.0, 7.5] {
                assert_eq!(strategy.correct(0.0, gamma), 0, "{strategy:?} q=0 gamma={gamma}");
                assert_eq!(strategy.correct(1.0, gamma), 255, "{strategy:?} q=1 gamma={gamma}");
            }
            for q in [0.0, 1.0 / 255.0, 0.3, 0.5, 1.0] {
                assert_eq!(strategy.correct(q, 0.0), 255, "{strategy:?} q={q} gamma=0");
            }
        }
    }

    #[test]
    fn test_identity_gamma() {
        for strategy in ALL {
            for k in 0..=255_u8 {
                let q = f32::from(k) / 255.0;
                assert_eq!(strategy.correct(q, 1.0), k, "{strategy:?}");
            }
        }
    }

    #[test]
    fn test_strategies_agree_on_pixel_values() {
        let mut rand = nanorand::WyRand::new_seed(0xC0FFEE);

        for _ in 0..2000 {
            let q = f32::from(rand.generate_range(1_u8..=255)) / 255.0;
            let gamma = rand.generate::<f32>() * 9.9 + 0.05;

            let expected = i32::from(PowStrategy::Reference.correct(q, gamma));

            for strategy in ALL {
                let found = i32::from(strategy.correct(q, gamma));
                assert!(
                    (expected - found).abs() <= 1,
                    "{strategy:?} q={q} gamma={gamma}: {found} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_strategies_agree_on_random_values() {
        let mut rand = nanorand::WyRand::new_seed(31);

        for _ in 0..2000 {
            let q = rand.generate::<f32>() * 0.99 + 0.01;
            let gamma = rand.generate::<f32>() * 9.9 + 0.05;

            let expected = i32::from(PowStrategy::Reference.correct(q, gamma));

            for strategy in ALL {
                let found = i32::from(strategy.correct(q, gamma));
                assert!(
                    (expected - found).abs() <= 1,
                    "{strategy:?} q={q} gamma={gamma}: {found} vs {expected}"
                );
            }
        }
    }

    /// The plain series strategies are only held to the reference from one
    /// byte step up, the split strategy everywhere
    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_split_taylor_agrees_on_dark_values() {
        // a tiny red weight turns a pixel of (1, 0, 0) into q ~= 2e-6
        let coefficients = Coefficients::new(0.001, 1.0, 1.0).unwrap();
        let pixels = [1, 0, 0, 2, 0, 0, 9, 0, 0, 255, 0, 0];

        let mut values = rgb_to_grayscale(&pixels, coefficients, Reducer::Scalar, false).unwrap();
        assert!(values[0] > 0.0 && values[0] <= 1e-5, "{}", values[0]);

        let mut rand = nanorand::WyRand::new_seed(0xDA2C);

        values.extend((0..300).map(|_| 10_f32.powf(-(rand.generate::<f32>() * 37.0 + 1.0))));
        values.extend([f32::MIN_POSITIVE, f32::from_bits(1), 1e-5, 0.49, 0.5]);

        for q in values {
            for step in 1..200 {
                let gamma = step as f32 * 0.05;

                let expected = PowStrategy::Reference.correct(q, gamma);
                let found = PowStrategy::SplitTaylor.correct(q, gamma);

                assert!(
                    expected.abs_diff(found) <= 1,
                    "q={q} gamma={gamma}: {found} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_fraction_power_near_zero() {
        for (q, fraction) in [(2e-6, 0.05), (1e-30, 0.3), (1.4e-45, 0.999), (0.25, 0.5)] {
            let expected = f64::powf(q, fraction);
            let found = pow_fraction(q, fraction);

            assert!(((found - expected) / expected).abs() < 1e-9, "{q}^{fraction}");
        }
    }

    #[test]
    fn test_dark_cutoff() {
        assert!(0.5_f64.powi(150) * 255.0 < 0.5);
        assert_eq!(pow_split_taylor(0.5, DARK_GAMMA_CUTOFF), 0.0);
        assert_eq!(pow_split_taylor(0.1, 1000.5), 0.0);
        // above one half the cutoff does not apply
        assert!(pow_split_taylor(0.999, DARK_GAMMA_CUTOFF) > 0.8);
    }

    #[test]
    fn test_max_gamma() {
        let largest_below_one = 1.0 - f32::EPSILON / 2.0;

        assert!(largest_below_one < 1.0);
        assert_eq!(to_byte(largest_below_one.powf(MAX_GAMMA)), 0);
        assert_eq!(pow_split_taylor(largest_below_one, MAX_GAMMA), 0.0);
        assert_eq!(pow_split_taylor(largest_below_one, f32::MAX), 0.0);
        assert_eq!(pow_split_taylor(1.0, f32::MAX), 1.0);
    }

    #[test]
    fn test_binary_exponentiation() {
        assert_eq!(pow_binary(0.5, 10), 1.0 / 1024.0);
        assert_eq!(pow_binary(3.0, 5), 243.0);
        assert_eq!(pow_binary(0.7, 0), 1.0);
        assert_eq!(pow_binary(0.0, 3), 0.0);
    }

    #[test]
    fn test_split_matches_integer_gammas() {
        for k in 1..=255_u8 {
            let q = f32::from(k) / 255.0;
            for gamma in [2.0, 3.0, 4.0] {
                let expected = PowStrategy::Reference.correct(q, gamma);
                let found = PowStrategy::SplitTaylor.correct(q, gamma);
                assert!(expected.abs_diff(found) <= 1);
            }
        }
    }

    #[test]
    fn test_series_stops_on_saturated_coefficient() {
        // gamma - 1 == gamma in double precision
        let sum = taylor_series(0.5, 1e20);
        assert!(!sum.is_nan());
    }

    #[test]
    fn test_gamma_correct_validation() {
        let grey = [0.0, 1.0];
        let mut out = [0; 2];

        assert!(matches!(
            gamma_correct(&grey, -1.0, PowStrategy::Reference, &mut out),
            Err(ProcsErrors::InvalidGamma(_))
        ));
        assert!(matches!(
            gamma_correct(&grey, f32::NAN, PowStrategy::Reference, &mut out),
            Err(ProcsErrors::InvalidGamma(_))
        ));
        assert!(matches!(
            gamma_correct(&grey, 1.0, PowStrategy::Reference, &mut out[..1]),
            Err(ProcsErrors::LengthMismatch(2, 1))
        ));

        gamma_correct(&grey, 1.0, PowStrategy::SplitTaylor, &mut out).unwrap();
        assert_eq!(out, [0, 255]);
    }

    #[test]
    fn test_to_byte() {
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(0.9999), 255);
        assert_eq!(to_byte(0.001), 0);
        assert_eq!(to_byte(0.5), 128);
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::cell::Cell;
use std::fs::read;

use ashen_core::bytestream::ByteCursor;
use ashen_core::options::DecoderOptions;
use ashen_image::pipeline::{convert, ConversionOptions};

use crate::{cases_path, TestEntry, ALL_REDUCERS, ALL_STRATEGIES};

fn options_for(entry: &TestEntry) -> ConversionOptions {
    let [a, b, c] = entry.coefficients.unwrap_or([0.2126, 0.7152, 0.0722]);

    let mut decoder =
        DecoderOptions::default().set_comments_in_tokens(entry.legacy_comments.unwrap_or(false));

    if entry.lift_limits.unwrap_or(false) {
        decoder = decoder.set_max_width(usize::MAX).set_max_height(usize::MAX);
    }

    ConversionOptions::default()
        .set_coefficients(a, b, c)
        .unwrap()
        .set_gamma(entry.gamma.unwrap_or(1.0))
        .unwrap()
        .set_decoder_options(decoder)
}

/// Run one case with one reducer and strategy, returning a description of
/// the mismatch if any
fn run_case(entry: &TestEntry, options: &ConversionOptions) -> Option<String> {
    let input = entry.input();
    let opened = Cell::new(false);
    let mut output = Vec::new();

    let result = {
        let (opened, sink) = (&opened, &mut output);

        convert(
            ByteCursor::new(&input),
            move || {
                opened.set(true);
                Ok(sink)
            },
            options
        )
    };

    match (&entry.expected, entry.error, result) {
        (Some(expected), _, Ok(image)) => {
            let (width, height) = image.get_dimensions();
            let mut pgm = format!("P5\n{width}\n{height}\n255\n").into_bytes();
            pgm.extend_from_slice(expected);

            if output != pgm {
                return Some(format!(
                    "expected pixels {expected:?} but found {:?}",
                    image.pixels()
                ));
            }
            None
        }
        (None, Some(kind), Err(err)) => {
            if err.kind() != kind.to_error_kind() {
                return Some(format!("expected {kind:?} error but found {err:?}"));
            }
            if opened.get() {
                return Some("output was opened for a failing conversion".to_string());
            }
            None
        }
        (_, _, Ok(_)) => Some("conversion succeeded but should fail".to_string()),
        (_, _, Err(err)) => Some(format!("conversion failed: {err:?}"))
    }
}

#[test]
fn test_conversions() {
    let json_file = read(cases_path()).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();
    assert!(!entries.is_empty());

    let mut failures = Vec::new();

    for entry in &entries {
        for reducer in ALL_REDUCERS {
            for strategy in ALL_STRATEGIES {
                let options = options_for(entry)
                    .set_reducer(reducer)
                    .set_pow_strategy(strategy);

                if let Some(reason) = run_case(entry, &options) {
                    eprintln!("{} ({reducer:?}, {strategy:?}): {reason}", entry.name);
                    failures.push(entry.name.clone());
                }
            }
        }
    }
    if !failures.is_empty() {
        panic!("Errors found during conversion tests\n {failures:#?}");
    }
}

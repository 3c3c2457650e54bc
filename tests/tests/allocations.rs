/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Failed conversions must hand every buffer back
//!
//! Live bytes are counted per thread so tests running in parallel do not
//! disturb each other, a conversion never leaves its thread.
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use ashen_core::bytestream::ByteCursor;
use ashen_core::options::DecoderOptions;
use ashen_image::errors::ErrorKind;
use ashen_image::pipeline::{convert, ConversionOptions, Pipeline};
use ashen_procs::grayscale::Reducer;

struct CountingAllocator;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    /// Allocations that would take `LIVE` above this fail
    static BUDGET: Cell<isize> = const { Cell::new(isize::MAX) };
}

fn record(delta: isize) {
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

fn within_budget(size: isize) -> bool {
    LIVE.try_with(|live| {
        BUDGET
            .try_with(|budget| live.get().saturating_add(size) <= budget.get())
            .unwrap_or(true)
    })
    .unwrap_or(true)
}

#[allow(clippy::cast_possible_wrap)]
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // layout sizes never exceed isize::MAX
        let size = layout.size() as isize;

        if !within_budget(size) {
            return std::ptr::null_mut();
        }
        let ptr = System.alloc(layout);

        if !ptr.is_null() {
            record(size);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        record(-(layout.size() as isize));
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

fn live_bytes() -> isize {
    LIVE.with(Cell::get)
}

fn truncated_input() -> Vec<u8> {
    let mut input = b"P6 64 64 255\n".to_vec();
    input.extend_from_slice(&[7; 100]);
    input
}

#[test]
fn test_truncated_conversion_releases_buffers() {
    let input = truncated_input();

    for reducer in [Reducer::Scalar, Reducer::Vectorized] {
        let options = ConversionOptions::default().set_reducer(reducer);
        let baseline = live_bytes();

        let kind = convert(ByteCursor::new(&input), || Ok(Vec::<u8>::new()), &options)
            .map(|_| ())
            .map_err(|err| err.kind());

        assert_eq!(kind, Err(ErrorKind::Io));
        assert_eq!(live_bytes(), baseline, "{reducer:?} leaked");
    }
}

#[test]
fn test_failed_planar_allocation_releases_buffers() {
    let mut input = b"P6 64 64 255\n".to_vec();
    input.extend_from_slice(&[7; 64 * 64 * 3]);

    let baseline = live_bytes();
    {
        let options = ConversionOptions::default().set_reducer(Reducer::Vectorized);
        let mut pipeline = Pipeline::new(ByteCursor::new(&input), options);

        // initialized, then decode
        pipeline.advance().unwrap();
        pipeline.advance().unwrap();
        assert!(pipeline.get_decoded().is_some());

        // each plane takes 16 KiB, the third one does not fit
        BUDGET.with(|budget| budget.set(live_bytes() + 40_000));
        let result = pipeline.advance();
        BUDGET.with(|budget| budget.set(isize::MAX));

        let err = result.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Allocation);
        assert_eq!(err.stage(), "convert");
    }
    assert_eq!(live_bytes(), baseline);
}

#[test]
fn test_unallocatable_image_releases_buffers() {
    let options = ConversionOptions::default().set_decoder_options(
        DecoderOptions::default()
            .set_max_width(1 << 20)
            .set_max_height(1 << 20)
    );
    let input = b"P6 1000000 1000000 255\n\x00\x00\x00";

    let baseline = live_bytes();

    // 3 TB is refused by the budget before reaching the system allocator
    BUDGET.with(|budget| budget.set(live_bytes() + (1 << 30)));
    let kind = convert(ByteCursor::new(input), || Ok(Vec::<u8>::new()), &options)
        .map(|_| ())
        .map_err(|err| err.kind());
    BUDGET.with(|budget| budget.set(isize::MAX));

    assert_eq!(kind, Err(ErrorKind::Allocation));
    assert_eq!(live_bytes(), baseline);
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging macros used when the `log` feature is off
//!
//! They accept the same arguments as the `log` macros and expand to nothing,
//! so call sites read `use ashen_core::log::{info, warn}` either way.

// exported macros land in the crate root, re-export them under `log`
pub use crate::{
    __ashen_debug as debug, __ashen_error as error, __ashen_info as info,
    __ashen_trace as trace, __ashen_warn as warn
};

#[doc(hidden)]
#[macro_export]
macro_rules! __ashen_error {
    ($($arg:tt)+) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ashen_warn {
    ($($arg:tt)+) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ashen_info {
    ($($arg:tt)+) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ashen_debug {
    ($($arg:tt)+) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ashen_trace {
    ($($arg:tt)+) => {};
}

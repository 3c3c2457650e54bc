/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

/// Decoder options
///
/// To keep call sites short, options are set through builder style
/// setters which consume and return the options.
///
/// # Example
/// ```
/// use ashen_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(4096)
///     .set_strict_mode(true);
///
/// assert_eq!(options.max_width(), 4096);
/// assert!(options.strict_mode());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 65536
    max_width:          usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 65536
    max_height:         usize,
    /// Maximum number of ASCII digits a header number may have.
    ///
    /// - Default value: 10
    max_digits:         usize,
    /// Whether a `#` appearing in the middle of a number token
    /// starts a comment and lets the number continue after it.
    ///
    /// Netpbm only allows comments between tokens, some old
    /// writers emitted them anywhere.
    ///
    /// - Default value: false
    comments_in_tokens: bool,
    /// Treat trailing bytes after the pixel data as an error
    ///
    /// When false, the decoder logs a warning and ignores them.
    ///
    /// - Default value: false
    strict_mode:        bool,
    /// Whether processing routines may use platform specific
    /// intrinsics when the cpu supports them.
    ///
    /// Disabling it falls back to portable code paths, it's mainly
    /// provided for debugging.
    ///
    /// - Default value: true
    use_simd:           bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:          1 << 16,
            max_height:         1 << 16,
            max_digits:         10,
            comments_in_tokens: false,
            strict_mode:        false,
            use_simd:           true
        }
    }
}

impl DecoderOptions {
    /// Options used by the command line converter
    ///
    /// Same as the defaults, kept separate so the binary
    /// can diverge without touching library defaults.
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Maximum number of digits a width, height or maxval token may hold
    pub const fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// Whether comments are honoured inside number tokens
    pub const fn comments_in_tokens(&self) -> bool {
        self.comments_in_tokens
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Whether platform intrinsics may be used
    pub const fn use_simd(&self) -> bool {
        self.use_simd
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set the maximum number of digits accepted for a header number.
    ///
    /// Longer tokens are rejected before they are accumulated.
    #[must_use]
    pub fn set_max_digits(mut self, digits: usize) -> Self {
        self.max_digits = digits;
        self
    }

    /// Allow `#` comments in the middle of a number token
    #[must_use]
    pub fn set_comments_in_tokens(mut self, yes: bool) -> Self {
        self.comments_in_tokens = yes;
        self
    }

    /// Set whether the decoder should be in strict mode
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Set whether platform intrinsics may be used
    #[must_use]
    pub fn set_use_simd(mut self, yes: bool) -> Self {
        self.use_simd = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::DecoderOptions;

    #[test]
    fn test_defaults() {
        let options = DecoderOptions::default();

        assert_eq!(options.max_width(), 1 << 16);
        assert_eq!(options.max_height(), 1 << 16);
        assert_eq!(options.max_digits(), 10);
        assert!(!options.comments_in_tokens());
        assert!(!options.strict_mode());
        assert!(options.use_simd());
    }

    #[test]
    fn test_setters_chain() {
        let options = DecoderOptions::new_cmd()
            .set_max_height(10)
            .set_max_digits(3)
            .set_comments_in_tokens(true)
            .set_use_simd(false);

        assert_eq!(options.max_height(), 10);
        assert_eq!(options.max_digits(), 3);
        assert!(options.comments_in_tokens());
        assert!(!options.use_simd());
    }
}

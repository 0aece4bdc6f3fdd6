//! Boundary-check and input-decoding utilities.
//!
//! These run in the collaborators around the scanner (CLI, WASM), not
//! in the scanner itself: conversion is total, but exporters refuse
//! empty or over-limit documents before doing any work.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Default maximum accepted document size, in words.
pub const DEFAULT_WORD_LIMIT: usize = 10_000;

/// Count words by splitting on whitespace. Empty or whitespace-only
/// text counts as zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validate a document against a word limit before export.
///
/// Returns the word count on success. `max == 0` disables the limit.
/// Empty text is rejected with [`Error::EmptyDocument`].
pub fn check_word_limit(text: &str, max: usize) -> Result<usize> {
    let count = count_words(text);
    if count == 0 {
        return Err(Error::EmptyDocument);
    }
    if max > 0 && count > max {
        return Err(Error::WordLimit { count, max });
    }
    Ok(count)
}

/// Decode raw file bytes to a string.
///
/// Tries UTF-8 first (BOM-aware via encoding_rs), then falls back to
/// Windows-1252, which is what stray .txt files from Word tend to be.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if !had_errors {
        return text;
    }
    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    text
}

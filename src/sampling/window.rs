//! Fixed-length slices of a stream.
//!
//! Extraction never pads or wraps: a request that does not fit inside
//! `[0, len)` fails with `OutOfBounds` and the calling strategy decides
//! whether to skip, shift or stop.

use crate::data::{SensorSample, Stream};
use crate::error::{FemoError, Result};
use crate::types::{Label, SessionKey};

/// A borrowed window of exactly `len()` samples of one stream.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    stream: &'a Stream,
    start: usize,
    samples: &'a [SensorSample],
}

impl<'a> Window<'a> {
    pub fn stream(&self) -> &'a Stream {
        self.stream
    }

    pub fn key(&self) -> &'a SessionKey {
        self.stream.key()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end position
    pub fn end(&self) -> usize {
        self.start + self.samples.len()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &'a [SensorSample] {
        self.samples
    }

    pub fn has_event(&self) -> bool {
        self.samples.iter().any(|s| s.event)
    }
}

/// A window together with the label assigned by its strategy.
#[derive(Debug, Clone, Copy)]
pub struct LabeledWindow<'a> {
    pub window: Window<'a>,
    pub label: Label,
}

impl<'a> LabeledWindow<'a> {
    pub fn positive(window: Window<'a>) -> Self {
        Self {
            window,
            label: Label::Positive,
        }
    }

    pub fn negative(window: Window<'a>) -> Self {
        Self {
            window,
            label: Label::Negative,
        }
    }
}

/// Slice `[start, start + length)` of `stream`.
pub fn extract(stream: &Stream, start: i64, length: usize) -> Result<Window<'_>> {
    let len = stream.len();
    let fits = start >= 0 && (start as u64).saturating_add(length as u64) <= len as u64;
    if !fits {
        return Err(FemoError::OutOfBounds {
            start,
            length,
            stream_len: len,
        });
    }

    let start = start as usize;
    Ok(Window {
        stream,
        start,
        samples: &stream.samples()[start..start + length],
    })
}

/// Like [`extract`], but shifts an out-of-bounds request to the nearest
/// in-bounds start. Fails only if the stream is shorter than `length`.
pub fn extract_clamped(stream: &Stream, start: i64, length: usize) -> Result<Window<'_>> {
    if stream.len() < length {
        return Err(FemoError::OutOfBounds {
            start,
            length,
            stream_len: stream.len(),
        });
    }
    let last_start = (stream.len() - length) as i64;
    extract(stream, start.clamp(0, last_start), length)
}

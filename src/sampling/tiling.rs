//! Non-overlapping fixed-length tiling labeled by event presence.

use super::events::locate_events;
use super::generator::{Generation, SampleGenerator};
use super::report::StreamReport;
use super::window::{extract, LabeledWindow};
use crate::data::Stream;
use crate::error::Result;
use crate::types::{Label, SessionKey};
use rayon::prelude::*;
use std::collections::BTreeMap;

pub struct TilingGenerator {
    window_length: usize,
    max_windows: Option<usize>,
    max_samples: usize,
}

/// Number of full windows that fit in `stream`; the remainder is dropped.
pub fn count_windows(stream: &Stream, window_length: usize) -> usize {
    if window_length == 0 {
        return 0;
    }
    stream.len() / window_length
}

/// Full-window count per session, without materializing any window.
pub fn window_counts(streams: &[Stream], window_length: usize) -> BTreeMap<SessionKey, usize> {
    streams
        .iter()
        .map(|s| (s.key().clone(), count_windows(s, window_length)))
        .collect()
}

impl TilingGenerator {
    pub fn new(window_length: usize, max_windows: Option<usize>, max_samples: usize) -> Self {
        Self {
            window_length,
            max_windows,
            max_samples,
        }
    }

    pub fn tile_stream<'a>(&self, stream: &'a Stream) -> (Vec<LabeledWindow<'a>>, StreamReport) {
        let events = locate_events(stream);
        let mut report = StreamReport::new(stream.key(), stream.len(), events.len());

        let available = count_windows(stream, self.window_length);
        let count = self.max_windows.map_or(available, |m| m.min(available));

        let mut windows = Vec::with_capacity(count);
        for i in 0..count {
            let start = (i * self.window_length) as i64;
            let Ok(window) = extract(stream, start, self.window_length) else {
                report.skipped_out_of_bounds += 1;
                break;
            };
            let label = if events.contains_any(window.start(), window.end()) {
                Label::Positive
            } else {
                Label::Negative
            };
            windows.push(LabeledWindow { window, label });
        }

        report.positives = windows.iter().filter(|w| w.label == Label::Positive).count();
        report.negatives = windows.len() - report.positives;
        (windows, report)
    }
}

impl SampleGenerator for TilingGenerator {
    fn name(&self) -> &'static str {
        "tiling"
    }

    fn generate<'a>(&self, streams: &'a [Stream]) -> Result<Generation<'a>> {
        let per_stream = streams
            .par_iter()
            .map(|stream| self.tile_stream(stream))
            .collect();
        let generation = Generation::collect_capped(per_stream, self.max_samples);
        generation.report.log_summary("tiling");
        Ok(generation)
    }
}

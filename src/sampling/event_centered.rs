//! Pre/post-event windows without overlap.
//!
//! Positives span `before_offset` samples before each event to
//! `after_offset` samples after it. Negatives are random non-event windows.

use super::events::locate_events;
use super::generator::{Generation, SampleGenerator};
use super::guard::OverlapGuard;
use super::negatives::NegativeSampler;
use super::quota::QuotaPolicy;
use super::report::StreamReport;
use super::spec::WindowSpec;
use super::window::{extract, LabeledWindow};
use crate::data::Stream;
use crate::error::Result;
use rayon::prelude::*;

pub struct EventCenteredGenerator {
    spec: WindowSpec,
    negatives: NegativeSampler,
}

impl EventCenteredGenerator {
    pub fn new(spec: WindowSpec, policy: QuotaPolicy, seed: Option<u64>) -> Self {
        let negatives = NegativeSampler::new(&spec, policy, seed);
        Self { spec, negatives }
    }

    /// Event-centered positives of one stream, in event order.
    ///
    /// An event is skipped when its window leaves the stream or starts before
    /// the end of the previously accepted positive.
    pub fn positive_windows<'a>(&self, stream: &'a Stream) -> (Vec<LabeledWindow<'a>>, StreamReport) {
        let events = locate_events(stream);
        let mut report = StreamReport::new(stream.key(), stream.len(), events.len());
        let length = self.spec.before_offset + self.spec.after_offset;
        let mut guard = OverlapGuard::strict();
        let mut windows = Vec::new();

        for position in events.iter() {
            let start = position as i64 - self.spec.before_offset as i64;
            let window = match extract(stream, start, length) {
                Ok(window) => window,
                Err(_) => {
                    report.skipped_out_of_bounds += 1;
                    continue;
                }
            };

            if !guard.accept(window.start(), window.end()) {
                report.skipped_overlap += 1;
                continue;
            }

            windows.push(LabeledWindow::positive(window));
        }

        report.positives = windows.len();
        log::debug!(
            "Session {}: {} of {} events produced positives",
            stream.key(),
            windows.len(),
            events.len()
        );
        (windows, report)
    }

    pub fn generate_positives<'a>(&self, streams: &'a [Stream]) -> Generation<'a> {
        let per_stream = streams
            .par_iter()
            .map(|stream| self.positive_windows(stream))
            .collect();
        Generation::collect_capped(per_stream, self.spec.max_samples)
    }

    /// Negative pass on its own, bounded by the full cap.
    pub fn generate_negatives<'a>(&self, streams: &'a [Stream]) -> Generation<'a> {
        self.negatives.generate(streams)
    }
}

impl SampleGenerator for EventCenteredGenerator {
    fn name(&self) -> &'static str {
        "event-centered"
    }

    fn generate<'a>(&self, streams: &'a [Stream]) -> Result<Generation<'a>> {
        let mut generation = self.generate_positives(streams);
        generation.report.log_summary("event-centered positives");

        // Positives and negatives share one cap per invocation
        let remaining = self.spec.max_samples.saturating_sub(generation.len());
        let negatives = self.negatives.generate_within(streams, remaining);
        negatives.report.log_summary("event-centered negatives");

        generation.append(negatives);
        Ok(generation)
    }
}

//! Augmented positives by shifting a window backward from each event.
//!
//! Windows of different shifts and different events may overlap.

use super::events::locate_events;
use super::generator::{Generation, SampleGenerator};
use super::negatives::NegativeSampler;
use super::quota::QuotaPolicy;
use super::report::StreamReport;
use super::spec::WindowSpec;
use super::window::{extract, LabeledWindow};
use crate::data::Stream;
use crate::error::Result;
use rayon::prelude::*;

pub struct ShiftedGenerator {
    spec: WindowSpec,
    negatives: Option<NegativeSampler>,
}

impl ShiftedGenerator {
    /// `negatives` enables a random non-event pass with the given quota policy and seed.
    pub fn new(spec: WindowSpec, negatives: Option<(QuotaPolicy, Option<u64>)>) -> Self {
        let negatives = negatives.map(|(policy, seed)| NegativeSampler::new(&spec, policy, seed));
        Self { spec, negatives }
    }

    /// Shifted positives of one stream.
    ///
    /// For each event `p` the window starts at `p - shift * step` for
    /// increasing `shift`; the first out-of-bounds candidate ends that event.
    pub fn shifted_windows<'a>(&self, stream: &'a Stream) -> (Vec<LabeledWindow<'a>>, StreamReport) {
        let events = locate_events(stream);
        let mut report = StreamReport::new(stream.key(), stream.len(), events.len());
        let mut windows = Vec::new();

        for position in events.iter() {
            for shift in 0..self.spec.shift_count {
                let start = position as i64 - (shift * self.spec.shift_step) as i64;
                match extract(stream, start, self.spec.window_length) {
                    Ok(window) => windows.push(LabeledWindow::positive(window)),
                    Err(_) => {
                        report.skipped_out_of_bounds += 1;
                        break;
                    }
                }
            }
        }

        report.positives = windows.len();
        (windows, report)
    }

    pub fn generate_positives<'a>(&self, streams: &'a [Stream]) -> Generation<'a> {
        let per_stream = streams
            .par_iter()
            .map(|stream| self.shifted_windows(stream))
            .collect();
        Generation::collect_capped(per_stream, self.spec.max_samples)
    }
}

impl SampleGenerator for ShiftedGenerator {
    fn name(&self) -> &'static str {
        "shifted"
    }

    fn generate<'a>(&self, streams: &'a [Stream]) -> Result<Generation<'a>> {
        let mut generation = self.generate_positives(streams);
        generation.report.log_summary("shifted positives");

        if let Some(sampler) = &self.negatives {
            let remaining = self.spec.max_samples.saturating_sub(generation.len());
            let negatives = sampler.generate_within(streams, remaining);
            negatives.report.log_summary("shifted negatives");
            generation.append(negatives);
        }

        Ok(generation)
    }
}

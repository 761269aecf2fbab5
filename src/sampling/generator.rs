use super::event_centered::EventCenteredGenerator;
use super::quota::SampleBudget;
use super::report::{GenerationReport, StreamReport};
use super::shifted::ShiftedGenerator;
use super::tiling::TilingGenerator;
use super::window::LabeledWindow;
use crate::config::SamplingConfig;
use crate::data::Stream;
use crate::error::{FemoError, Result};
use crate::types::Label;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Segmentation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Pre/post-event positives plus random non-event negatives
    #[default]
    EventCentered,
    /// Consecutive fixed-length tiles labeled by event presence
    Tiling,
    /// Backward-shifted, overlapping positives per event
    Shifted,
}

impl FromStr for Strategy {
    type Err = FemoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "event-centered" | "event_centered" | "eventcentered" => Ok(Self::EventCentered),
            "2" | "tiling" => Ok(Self::Tiling),
            "3" | "shifted" => Ok(Self::Shifted),
            other => Err(FemoError::Configuration(format!(
                "Unknown strategy '{}' (expected 1/event-centered, 2/tiling or 3/shifted)",
                other
            ))),
        }
    }
}

/// Windows produced by one invocation plus its accounting.
#[derive(Debug, Default)]
pub struct Generation<'a> {
    pub windows: Vec<LabeledWindow<'a>>,
    pub report: GenerationReport,
}

impl<'a> Generation<'a> {
    /// Merge per-stream results in input order, truncating at `cap`.
    pub fn collect_capped(
        per_stream: Vec<(Vec<LabeledWindow<'a>>, StreamReport)>,
        cap: usize,
    ) -> Self {
        let mut budget = SampleBudget::new(cap);
        let mut generation = Generation::default();

        for (mut windows, mut report) in per_stream {
            let granted = budget.grant(windows.len());
            if granted < windows.len() {
                generation.report.dropped_by_cap += windows.len() - granted;
                windows.truncate(granted);
                report.positives = windows.iter().filter(|w| w.label == Label::Positive).count();
                report.negatives = windows.len() - report.positives;
            }
            generation.windows.extend(windows);
            generation.report.streams.push(report);
        }

        if budget.is_exhausted() && generation.report.dropped_by_cap > 0 {
            log::info!(
                "Sample cap of {} reached, {} windows dropped",
                cap,
                generation.report.dropped_by_cap
            );
        }

        generation
    }

    pub fn append(&mut self, other: Generation<'a>) {
        self.windows.extend(other.windows);
        self.report.merge(other.report);
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn positives(&self) -> impl Iterator<Item = &LabeledWindow<'a>> {
        self.windows.iter().filter(|w| w.label == Label::Positive)
    }

    pub fn negatives(&self) -> impl Iterator<Item = &LabeledWindow<'a>> {
        self.windows.iter().filter(|w| w.label == Label::Negative)
    }
}

pub trait SampleGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Segment every stream into labeled windows
    fn generate<'a>(&self, streams: &'a [Stream]) -> Result<Generation<'a>>;
}

/// Build the generator selected by `config.strategy`.
pub fn build_generator(config: &SamplingConfig) -> Result<Box<dyn SampleGenerator>> {
    let spec = config.window_spec();
    spec.validate()?;

    let generator: Box<dyn SampleGenerator> = match config.strategy {
        Strategy::EventCentered => Box::new(EventCenteredGenerator::new(
            spec,
            config.quota_policy,
            config.seed,
        )),
        Strategy::Tiling => Box::new(TilingGenerator::new(
            spec.window_length,
            config.max_windows_per_stream,
            spec.max_samples,
        )),
        Strategy::Shifted => Box::new(ShiftedGenerator::new(
            spec,
            config
                .strategy3_negatives
                .then_some((config.quota_policy, config.seed)),
        )),
    };
    Ok(generator)
}

/// Independent RNG for the stream at `index`; deterministic for a given seed.
pub(crate) fn stream_rng(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(seed) => {
            StdRng::seed_from_u64(seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        }
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::window::extract;
    use crate::types::SessionKey;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("1".parse::<Strategy>().unwrap(), Strategy::EventCentered);
        assert_eq!("Tiling".parse::<Strategy>().unwrap(), Strategy::Tiling);
        assert_eq!("3".parse::<Strategy>().unwrap(), Strategy::Shifted);
        assert!("4".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_collect_capped_truncates_in_order() {
        let a = Stream::synthetic("a", 10, 100, &[]);
        let b = Stream::synthetic("b", 10, 100, &[]);

        fn make<'a>(stream: &'a Stream) -> (Vec<LabeledWindow<'a>>, StreamReport) {
            let windows: Vec<LabeledWindow> = (0..4)
                .map(|i| LabeledWindow::negative(extract(stream, i * 20, 10).unwrap()))
                .collect();
            let mut report = StreamReport::new(stream.key(), stream.len(), 0);
            report.negatives = windows.len();
            (windows, report)
        }

        let generation = Generation::collect_capped(vec![make(&a), make(&b)], 6);
        assert_eq!(generation.len(), 6);
        assert_eq!(generation.report.dropped_by_cap, 2);
        assert_eq!(generation.report.streams[0].negatives, 4);
        assert_eq!(generation.report.streams[1].negatives, 2);
        assert_eq!(generation.windows[5].window.key(), &SessionKey::new("b"));
    }

    #[test]
    fn test_stream_rng_deterministic() {
        use rand::Rng;
        let x: u64 = stream_rng(Some(7), 3).gen();
        let y: u64 = stream_rng(Some(7), 3).gen();
        let z: u64 = stream_rng(Some(7), 4).gen();
        assert_eq!(x, y);
        assert_ne!(x, z);
    }
}

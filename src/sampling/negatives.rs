//! Random non-event window sampling under a global quota.

use super::events::locate_events;
use super::generator::{stream_rng, Generation};
use super::guard::OverlapGuard;
use super::quota::{QuotaAllocator, QuotaPolicy};
use super::report::StreamReport;
use super::spec::WindowSpec;
use super::window::{extract_clamped, LabeledWindow};
use crate::data::Stream;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;

pub struct NegativeSampler {
    window_length: usize,
    min_distance: usize,
    max_samples: usize,
    policy: QuotaPolicy,
    seed: Option<u64>,
}

impl NegativeSampler {
    pub fn new(spec: &WindowSpec, policy: QuotaPolicy, seed: Option<u64>) -> Self {
        Self {
            window_length: spec.window_length,
            min_distance: spec.min_distance,
            max_samples: spec.max_samples,
            policy,
            seed,
        }
    }

    /// Sample negatives from every stream, never exceeding `max_samples` in total.
    pub fn generate<'a>(&self, streams: &'a [Stream]) -> Generation<'a> {
        self.generate_within(streams, self.max_samples)
    }

    /// Sample at most `budget` negatives, splitting per-stream quotas from it.
    ///
    /// Generators pass what is left of the invocation cap after their positives.
    pub fn generate_within<'a>(&self, streams: &'a [Stream], budget: usize) -> Generation<'a> {
        let budget = budget.min(self.max_samples);
        let allocator = QuotaAllocator::new(budget, self.policy);

        let per_stream = match allocator.policy() {
            QuotaPolicy::EvenSplit => {
                let quotas = allocator.even_split(streams.len());
                streams
                    .par_iter()
                    .zip(quotas.par_iter())
                    .enumerate()
                    .map(|(index, (stream, &quota))| {
                        let mut rng = stream_rng(self.seed, index);
                        self.sample_stream(stream, quota, &mut rng)
                    })
                    .collect::<Vec<_>>()
            }
            QuotaPolicy::CarryOver => {
                let mut used = 0;
                let mut results = Vec::with_capacity(streams.len());
                for (index, stream) in streams.iter().enumerate() {
                    let quota = QuotaAllocator::next_quota(
                        allocator.cap() - used,
                        streams.len() - index,
                    );
                    let mut rng = stream_rng(self.seed, index);
                    let (windows, report) = self.sample_stream(stream, quota, &mut rng);
                    used += windows.len();
                    results.push((windows, report));
                }
                results
            }
        };

        Generation::collect_capped(per_stream, budget)
    }

    /// Draw up to `quota` negative windows from one stream.
    ///
    /// Candidate centres are drawn without replacement from the positions whose
    /// event flag is 0. Windows that would leave the stream are shifted inward.
    pub fn sample_stream<'a, R: Rng + ?Sized>(
        &self,
        stream: &'a Stream,
        quota: usize,
        rng: &mut R,
    ) -> (Vec<LabeledWindow<'a>>, StreamReport) {
        let events = locate_events(stream);
        let mut report = StreamReport::new(stream.key(), stream.len(), events.len());
        report.quota = Some(quota);

        let mut windows = Vec::new();
        if quota == 0 {
            return (windows, report);
        }

        if stream.len() < self.window_length {
            report.shortfall = quota;
            log::warn!(
                "Session {} shorter than one window ({} < {} samples), no negatives drawn",
                stream.key(),
                stream.len(),
                self.window_length
            );
            return (windows, report);
        }

        let mut pool: Vec<usize> = stream
            .samples()
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.event)
            .map(|(i, _)| i)
            .collect();
        pool.shuffle(rng);

        let half = (self.window_length / 2) as i64;
        let mut guard = OverlapGuard::min_distance(self.min_distance);

        for centre in pool {
            if windows.len() >= quota {
                break;
            }

            let window = match extract_clamped(stream, centre as i64 - half, self.window_length) {
                Ok(window) => window,
                Err(_) => {
                    report.skipped_out_of_bounds += 1;
                    continue;
                }
            };

            if events.contains_any(window.start(), window.end()) {
                report.skipped_event += 1;
                continue;
            }

            if !guard.accept(window.start(), window.end()) {
                report.skipped_overlap += 1;
                continue;
            }

            windows.push(LabeledWindow::negative(window));
        }

        report.negatives = windows.len();
        report.shortfall = quota - windows.len();
        if report.shortfall > 0 {
            log::warn!(
                "Session {}: only {} of {} negative windows available",
                stream.key(),
                windows.len(),
                quota
            );
        } else {
            log::debug!("Session {}: {} negative windows", stream.key(), windows.len());
        }

        (windows, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spec(window_length: usize, min_distance: usize, max_samples: usize) -> WindowSpec {
        WindowSpec {
            window_length,
            before_offset: window_length / 2,
            after_offset: window_length - window_length / 2,
            shift_step: 1,
            shift_count: 1,
            min_distance,
            max_samples,
        }
    }

    #[test]
    fn test_negatives_avoid_events() {
        let stream = Stream::synthetic("s", 10, 1000, &[100, 500, 900]);
        let sampler = NegativeSampler::new(&spec(50, 0, 100), QuotaPolicy::EvenSplit, Some(1));
        let mut rng = StdRng::seed_from_u64(1);

        let (windows, report) = sampler.sample_stream(&stream, 20, &mut rng);
        assert_eq!(windows.len(), 20);
        assert_eq!(report.negatives, 20);
        for w in &windows {
            assert_eq!(w.label, Label::Negative);
            assert_eq!(w.window.len(), 50);
            assert!(!w.window.has_event());
        }
    }

    #[test]
    fn test_min_distance_between_consecutive() {
        let stream = Stream::synthetic("s", 10, 5000, &[]);
        let sampler = NegativeSampler::new(&spec(40, 25, 100), QuotaPolicy::EvenSplit, Some(9));
        let mut rng = StdRng::seed_from_u64(9);

        let (windows, _) = sampler.sample_stream(&stream, 30, &mut rng);
        assert_eq!(windows.len(), 30);
        for pair in windows.windows(2) {
            let (a, b) = (pair[0].window, pair[1].window);
            assert!(b.start() >= a.end() + 25 || b.end() + 25 <= a.start());
        }
    }

    #[test]
    fn test_short_stream_reports_shortfall() {
        let stream = Stream::synthetic("s", 10, 30, &[]);
        let sampler = NegativeSampler::new(&spec(50, 0, 10), QuotaPolicy::EvenSplit, Some(1));
        let mut rng = StdRng::seed_from_u64(1);

        let (windows, report) = sampler.sample_stream(&stream, 5, &mut rng);
        assert!(windows.is_empty());
        assert_eq!(report.shortfall, 5);
    }

    #[test]
    fn test_fully_marked_stream_yields_nothing() {
        let positions: Vec<usize> = (0..200).step_by(20).collect();
        let stream = Stream::synthetic("s", 10, 200, &positions);
        let sampler = NegativeSampler::new(&spec(50, 0, 10), QuotaPolicy::EvenSplit, Some(3));
        let mut rng = StdRng::seed_from_u64(3);

        let (windows, report) = sampler.sample_stream(&stream, 4, &mut rng);
        assert!(windows.is_empty());
        assert_eq!(report.shortfall, 4);
        assert!(report.skipped_event > 0);
    }

    #[test]
    fn test_same_seed_same_windows() {
        let streams = vec![
            Stream::synthetic("a", 10, 3000, &[1500]),
            Stream::synthetic("b", 10, 3000, &[10]),
        ];
        let sampler = NegativeSampler::new(&spec(100, 0, 10), QuotaPolicy::EvenSplit, Some(42));

        let first: Vec<usize> = sampler.generate(&streams).windows.iter().map(|w| w.window.start()).collect();
        let second: Vec<usize> = sampler.generate(&streams).windows.iter().map(|w| w.window.start()).collect();
        assert_eq!(first.len(), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_budget_splits_remaining_cap() {
        let streams = vec![
            Stream::synthetic("a", 10, 3000, &[]),
            Stream::synthetic("b", 10, 3000, &[]),
        ];
        let sampler = NegativeSampler::new(&spec(100, 0, 10), QuotaPolicy::EvenSplit, Some(4));

        let generation = sampler.generate_within(&streams, 4);
        assert_eq!(generation.len(), 4);
        assert_eq!(generation.report.streams[0].quota, Some(2));

        assert!(sampler.generate_within(&streams, 0).is_empty());
        assert_eq!(sampler.generate_within(&streams, 50).len(), 10);
    }
}

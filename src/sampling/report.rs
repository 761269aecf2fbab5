use crate::types::SessionKey;
use serde::Serialize;

/// Per-stream accounting of one generation pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StreamReport {
    pub session: String,
    pub stream_len: usize,
    pub events: usize,
    pub positives: usize,
    pub negatives: usize,
    pub skipped_out_of_bounds: usize,
    pub skipped_overlap: usize,
    pub skipped_event: usize,
    pub quota: Option<usize>,
    pub shortfall: usize,
}

impl StreamReport {
    pub fn new(key: &SessionKey, stream_len: usize, events: usize) -> Self {
        Self {
            session: key.to_string(),
            stream_len,
            events,
            ..Default::default()
        }
    }

    pub fn accepted(&self) -> usize {
        self.positives + self.negatives
    }

    fn absorb(&mut self, other: &StreamReport) {
        self.positives += other.positives;
        self.negatives += other.negatives;
        self.skipped_out_of_bounds += other.skipped_out_of_bounds;
        self.skipped_overlap += other.skipped_overlap;
        self.skipped_event += other.skipped_event;
        self.shortfall += other.shortfall;
        self.quota = match (self.quota, other.quota) {
            (Some(a), Some(b)) => Some(a + b),
            (a, b) => a.or(b),
        };
    }
}

/// Accounting for a whole invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub streams: Vec<StreamReport>,
    /// Windows generated but discarded once the cap was reached
    pub dropped_by_cap: usize,
}

impl GenerationReport {
    pub fn total_positives(&self) -> usize {
        self.streams.iter().map(|s| s.positives).sum()
    }

    pub fn total_negatives(&self) -> usize {
        self.streams.iter().map(|s| s.negatives).sum()
    }

    pub fn total_shortfall(&self) -> usize {
        self.streams.iter().map(|s| s.shortfall).sum()
    }

    pub fn stream(&self, session: &str) -> Option<&StreamReport> {
        self.streams.iter().find(|s| s.session == session)
    }

    /// Fold a second pass over the same streams into this report.
    pub fn merge(&mut self, other: GenerationReport) {
        for report in other.streams {
            match self.streams.iter_mut().find(|s| s.session == report.session) {
                Some(existing) => existing.absorb(&report),
                None => self.streams.push(report),
            }
        }
        self.dropped_by_cap += other.dropped_by_cap;
    }

    pub fn log_summary(&self, pass: &str) {
        log::info!(
            "{}: {} positives, {} negatives across {} streams ({} dropped by cap, {} quota shortfall)",
            pass,
            self.total_positives(),
            self.total_negatives(),
            self.streams.len(),
            self.dropped_by_cap,
            self.total_shortfall()
        );
    }
}

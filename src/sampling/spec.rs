use crate::error::{FemoError, Result};
use serde::{Deserialize, Serialize};

/// Window geometry in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub window_length: usize,
    /// Samples kept before an event (event-centered windows)
    pub before_offset: usize,
    /// Samples kept from the event onward (event-centered windows)
    pub after_offset: usize,
    pub shift_step: usize,
    pub shift_count: usize,
    pub min_distance: usize,
    pub max_samples: usize,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self::from_seconds(1024, 5.0, 3.0, 2.0, 2.0, 3, 0.0, 13000)
    }
}

impl WindowSpec {
    /// Convert second-based durations to sample counts, truncating.
    #[allow(clippy::too_many_arguments)]
    pub fn from_seconds(
        sampling_rate: usize,
        window_secs: f64,
        before_secs: f64,
        after_secs: f64,
        shift_secs: f64,
        shift_count: usize,
        min_distance_secs: f64,
        max_samples: usize,
    ) -> Self {
        let to_samples = |secs: f64| (secs * sampling_rate as f64) as usize;
        Self {
            window_length: to_samples(window_secs),
            before_offset: to_samples(before_secs),
            after_offset: to_samples(after_secs),
            shift_step: to_samples(shift_secs),
            shift_count,
            min_distance: to_samples(min_distance_secs),
            max_samples,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_length == 0 {
            return Err(FemoError::Configuration(
                "Window length must be at least one sample".to_string(),
            ));
        }
        if self.before_offset + self.after_offset != self.window_length {
            return Err(FemoError::Configuration(format!(
                "before + after offsets ({} + {}) must equal the window length ({})",
                self.before_offset, self.after_offset, self.window_length
            )));
        }
        if self.shift_step == 0 {
            return Err(FemoError::Configuration(
                "Shift step must be at least one sample".to_string(),
            ));
        }
        if self.shift_count == 0 {
            return Err(FemoError::Configuration(
                "Shift count must be positive".to_string(),
            ));
        }
        // The furthest shifted window must still cover its event
        let max_shift = self.shift_step.saturating_mul(self.shift_count - 1);
        if max_shift >= self.window_length {
            return Err(FemoError::Configuration(format!(
                "Largest shift ({} x {} = {} samples) must be shorter than the window ({})",
                self.shift_count - 1,
                self.shift_step,
                max_shift,
                self.window_length
            )));
        }
        Ok(())
    }
}

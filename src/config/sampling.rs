use super::traits::ConfigSection;
use crate::error::FemoError;
use crate::sampling::{QuotaPolicy, Strategy, WindowSpec};
use serde::{Deserialize, Serialize};

/// Window geometry and quota settings, expressed in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub strategy: Strategy,
    pub sampling_rate: usize,
    pub window_secs: f64,
    pub before_secs: f64,
    pub after_secs: f64,
    pub shift_secs: f64,
    pub num_shifts: usize,
    pub min_distance_secs: f64,
    pub max_samples: usize,
    pub max_windows_per_stream: Option<usize>,
    pub quota_policy: QuotaPolicy,
    pub seed: Option<u64>,
    /// Seconds removed from both ends of every session before windowing
    pub trim_secs: f64,
    pub strategy3_negatives: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::EventCentered,
            sampling_rate: 1024,
            window_secs: 5.0,
            before_secs: 3.0,
            after_secs: 2.0,
            shift_secs: 2.0,
            num_shifts: 3,
            min_distance_secs: 0.0,
            max_samples: 13000,
            max_windows_per_stream: None,
            quota_policy: QuotaPolicy::EvenSplit,
            seed: Some(42),
            trim_secs: 60.0,
            strategy3_negatives: true,
        }
    }
}

impl SamplingConfig {
    pub fn window_spec(&self) -> WindowSpec {
        WindowSpec::from_seconds(
            self.sampling_rate,
            self.window_secs,
            self.before_secs,
            self.after_secs,
            self.shift_secs,
            self.num_shifts,
            self.min_distance_secs,
            self.max_samples,
        )
    }

    pub fn trim_samples(&self) -> usize {
        (self.trim_secs * self.sampling_rate as f64) as usize
    }
}

impl ConfigSection for SamplingConfig {
    fn section_name() -> &'static str {
        "sampling"
    }

    fn validate(&self) -> Result<(), FemoError> {
        if self.sampling_rate == 0 {
            return Err(FemoError::Configuration(
                "Sampling rate must be positive".to_string(),
            ));
        }
        let durations = [
            ("window_secs", self.window_secs),
            ("before_secs", self.before_secs),
            ("after_secs", self.after_secs),
            ("shift_secs", self.shift_secs),
            ("min_distance_secs", self.min_distance_secs),
            ("trim_secs", self.trim_secs),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(FemoError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        self.window_spec().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SamplingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.trim_samples(), 61_440);
        assert_eq!(config.window_spec().window_length, 5120);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let config = SamplingConfig {
            min_distance_secs: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_offsets_must_cover_window() {
        let config = SamplingConfig {
            window_secs: 6.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FemoError::Configuration(_))));
    }
}

use super::dataset::{LabeledSample, SampleSet};
use crate::error::{FemoError, Result};
use crate::sampling::{LabeledWindow, Window};
use crate::types::Channel;
use ndarray::{Array1, Array2};
use rayon::prelude::*;

/// Projects windows onto an ordered subset of channels.
#[derive(Debug, Clone)]
pub struct ChannelSelector {
    channels: Vec<Channel>,
}

impl Default for ChannelSelector {
    fn default() -> Self {
        Self {
            channels: vec![Channel::P1, Channel::P4],
        }
    }
}

impl ChannelSelector {
    pub fn new(channels: Vec<Channel>) -> Result<Self> {
        if channels.is_empty() {
            return Err(FemoError::InvalidChannelSelection(
                "no channels requested".to_string(),
            ));
        }
        Ok(Self { channels })
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        Self::new(Channel::parse_list(names)?)
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// `(channels, window_length)` array, rows in the requested order.
    pub fn select(&self, window: &Window<'_>) -> Result<Array2<f64>> {
        let stream = window.stream();
        if let Some(missing) = self.channels.iter().find(|c| !stream.has_channel(**c)) {
            return Err(FemoError::InvalidChannelSelection(format!(
                "channel {} not recorded in session {} (available: {:?})",
                missing,
                stream.key(),
                stream.channels()
            )));
        }

        let samples = window.samples();
        Ok(Array2::from_shape_fn(
            (self.channels.len(), samples.len()),
            |(c, t)| samples[t].value(self.channels[c]),
        ))
    }

    /// Row-major flattening of a selected window
    pub fn flatten(features: &Array2<f64>) -> Array1<f64> {
        features.iter().copied().collect()
    }

    /// Materialize feature arrays for every window, keeping order and labels.
    pub fn to_sample_set(&self, windows: &[LabeledWindow<'_>]) -> Result<SampleSet> {
        let samples = windows
            .par_iter()
            .map(|lw| {
                Ok(LabeledSample {
                    features: self.select(&lw.window)?,
                    label: lw.label,
                    session: lw.window.key().clone(),
                    start: lw.window.start(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SampleSet::from_samples(samples))
    }
}

//! In-memory representation of one recording session.

use crate::data::connectors::DataValidator;
use crate::error::{FemoError, Result};
use crate::types::{Channel, SessionKey};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One sample of the wearable: every channel plus the button flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub x1: f64,
    pub y1: f64,
    pub z1: f64,
    /// Button pressed at this sample
    pub event: bool,
}

impl SensorSample {
    pub fn value(&self, channel: Channel) -> f64 {
        match channel {
            Channel::P1 => self.p1,
            Channel::P2 => self.p2,
            Channel::P3 => self.p3,
            Channel::P4 => self.p4,
            Channel::X1 => self.x1,
            Channel::Y1 => self.y1,
            Channel::Z1 => self.z1,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::P1 => self.p1 = value,
            Channel::P2 => self.p2 = value,
            Channel::P3 => self.p3 = value,
            Channel::P4 => self.p4 = value,
            Channel::X1 => self.x1 = value,
            Channel::Y1 => self.y1 = value,
            Channel::Z1 => self.z1 = value,
        }
    }
}

/// A contiguous, chronologically ordered recording at a fixed sampling rate.
#[derive(Debug, Clone)]
pub struct Stream {
    key: SessionKey,
    sampling_rate: usize,
    samples: Vec<SensorSample>,
    /// Channels actually present in the source recording
    channels: Vec<Channel>,
}

impl Stream {
    pub fn new(
        key: SessionKey,
        sampling_rate: usize,
        samples: Vec<SensorSample>,
        channels: Vec<Channel>,
    ) -> Self {
        Self {
            key,
            sampling_rate,
            samples,
            channels,
        }
    }

    /// Build a stream of `len` samples with a deterministic ramp on every
    /// piezo channel and the button set at `event_positions`.
    pub fn synthetic(
        key: impl Into<SessionKey>,
        sampling_rate: usize,
        len: usize,
        event_positions: &[usize],
    ) -> Self {
        let mut samples: Vec<SensorSample> = (0..len)
            .map(|i| {
                let t = i as f64;
                SensorSample {
                    p1: t,
                    p2: t * 0.5,
                    p3: -t * 0.5,
                    p4: -t,
                    ..Default::default()
                }
            })
            .collect();

        for &pos in event_positions {
            if let Some(sample) = samples.get_mut(pos) {
                sample.event = true;
            }
        }

        Self::new(
            key.into(),
            sampling_rate,
            samples,
            vec![Channel::P1, Channel::P2, Channel::P3, Channel::P4],
        )
    }

    /// Convert a validated sensor DataFrame into a stream.
    pub fn from_dataframe(key: SessionKey, sampling_rate: usize, df: &DataFrame) -> Result<Self> {
        let columns = DataValidator::validate_sensor_columns(df)?;
        let mut samples = vec![SensorSample::default(); df.height()];

        for (channel, name) in &columns.channels {
            let values = df.column(name)?.cast(&DataType::Float64)?;
            for (sample, value) in samples.iter_mut().zip(values.f64()?.into_iter()) {
                let value = value.ok_or_else(|| {
                    FemoError::DataLoading(format!("Null value in channel column '{}'", name))
                })?;
                sample.set(*channel, value);
            }
        }

        let events = df.column(&columns.event)?.cast(&DataType::Float64)?;
        for (sample, flag) in samples.iter_mut().zip(events.f64()?.into_iter()) {
            sample.event = flag.unwrap_or(0.0) > 0.0;
        }

        let channels = columns.channels.iter().map(|(c, _)| *c).collect();
        Ok(Self::new(key, sampling_rate, samples, channels))
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn sampling_rate(&self) -> usize {
        self.sampling_rate
    }

    pub fn samples(&self) -> &[SensorSample] {
        &self.samples
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn has_channel(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sampling_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sampling_rate as f64
    }

    /// Copy of `[start, end)` keeping key, rate and channel set.
    pub fn sub_stream(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.samples.len());
        let start = start.min(end);
        Self::new(
            self.key.clone(),
            self.sampling_rate,
            self.samples[start..end].to_vec(),
            self.channels.clone(),
        )
    }
}

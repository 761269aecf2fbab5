//! Labeled window generation for fetal movement classification.
//!
//! Continuous multi-channel sensor recordings, annotated with a sparse
//! button flag, are cut into fixed-length windows labeled 1 (movement
//! perceived) or 0 (no movement) using one of three strategies:
//!
//! 1. [`EventCenteredGenerator`]: a window around each button press plus
//!    random non-event windows under a global cap.
//! 2. [`TilingGenerator`]: consecutive tiles labeled by event presence.
//! 3. [`ShiftedGenerator`]: several overlapping windows per press, shifted
//!    backward in fixed steps.
//!
//! Accepted windows are turned into `(channels, window_length)` arrays by a
//! [`ChannelSelector`].
//!
//! # Example
//!
//! ```
//! use femo_sampler::{ChannelSelector, SampleGenerator, Stream, TilingGenerator};
//!
//! let stream = Stream::synthetic("session-1", 1024, 20_000, &[10_000]);
//! let streams = vec![stream];
//!
//! let generator = TilingGenerator::new(5120, None, 1000);
//! let generation = generator.generate(&streams).unwrap();
//! let samples = ChannelSelector::default().to_sample_set(&generation.windows).unwrap();
//!
//! assert_eq!(samples.len(), 3);
//! assert_eq!(samples.positives(), 1);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod features;
pub mod sampling;
pub mod types;

pub use config::{AppConfig, ConfigManager, FeatureConfig, SamplingConfig};
pub use data::{trim_session, CsvConnector, SensorSample, Stream};
pub use error::{FemoError, Result};
pub use features::{ChannelSelector, LabeledSample, SampleSet};
pub use sampling::{
    build_generator, EventCenteredGenerator, Generation, GenerationReport, QuotaPolicy,
    SampleGenerator, ShiftedGenerator, Strategy, TilingGenerator, WindowSpec,
};
pub use types::{Channel, Label, SessionKey};

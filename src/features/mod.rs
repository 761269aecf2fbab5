//! Conversion of accepted windows into feature arrays.

pub mod dataset;
pub mod selector;

pub use dataset::{LabeledSample, SampleSet};
pub use selector::ChannelSelector;

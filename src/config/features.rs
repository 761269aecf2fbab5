use super::traits::ConfigSection;
use crate::error::FemoError;
use crate::features::ChannelSelector;
use crate::types::Channel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Channel names stacked into each feature array, in order
    pub channels: Vec<String>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            channels: vec!["p1".to_string(), "p4".to_string()],
        }
    }
}

impl FeatureConfig {
    pub fn selector(&self) -> Result<ChannelSelector, FemoError> {
        ChannelSelector::new(Channel::parse_list(&self.channels)?)
    }
}

impl ConfigSection for FeatureConfig {
    fn section_name() -> &'static str {
        "features"
    }

    fn validate(&self) -> Result<(), FemoError> {
        self.selector()
            .map(|_| ())
            .map_err(|e| FemoError::Configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channels() {
        let config = FeatureConfig::default();
        let selector = config.selector().unwrap();
        assert_eq!(selector.channels(), &[Channel::P1, Channel::P4]);
    }

    #[test]
    fn test_unknown_channel_invalid() {
        let config = FeatureConfig {
            channels: vec!["p1".to_string(), "pressure".to_string()],
        };
        assert!(config.validate().is_err());
    }
}

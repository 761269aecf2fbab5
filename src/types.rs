use crate::error::{FemoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sensor channels recorded by the wearable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    P1,
    P2,
    P3,
    P4,
    X1,
    Y1,
    Z1,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
            Self::P4 => "p4",
            Self::X1 => "x1",
            Self::Y1 => "y1",
            Self::Z1 => "z1",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::P1,
            Self::P2,
            Self::P3,
            Self::P4,
            Self::X1,
            Self::Y1,
            Self::Z1,
        ]
    }

    pub fn is_piezo(&self) -> bool {
        matches!(self, Self::P1 | Self::P2 | Self::P3 | Self::P4)
    }

    /// Column names this channel may appear under in exported recordings
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::P1 => vec!["p1", "P1", "piezo1", "piezos_p1"],
            Self::P2 => vec!["p2", "P2", "piezo2", "piezos_p2"],
            Self::P3 => vec!["p3", "P3", "piezo3", "piezos_p3"],
            Self::P4 => vec!["p4", "P4", "piezo4", "piezos_p4"],
            Self::X1 => vec!["x1", "X1", "accelerometers_x1"],
            Self::Y1 => vec!["y1", "Y1", "accelerometers_y1"],
            Self::Z1 => vec!["z1", "Z1", "accelerometers_z1"],
        }
    }

    /// Parse a list of channel names, rejecting empty or unknown selections.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>> {
        if names.is_empty() {
            return Err(FemoError::InvalidChannelSelection(
                "no channels requested".to_string(),
            ));
        }
        names.iter().map(|n| n.as_ref().parse()).collect()
    }
}

impl FromStr for Channel {
    type Err = FemoError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Channel::all()
            .into_iter()
            .find(|c| c.aliases().contains(&needle))
            .ok_or_else(|| {
                FemoError::InvalidChannelSelection(format!(
                    "unknown channel '{}' (expected one of p1, p2, p3, p4, x1, y1, z1)",
                    s
                ))
            })
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary training label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Negative = 0, // No event in window
    Positive = 1, // Event present or centered
}

impl Label {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// Stable identifier of one recording session
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionKey(pub String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

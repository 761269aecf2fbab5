use crate::types::Channel;
use serde::{Deserialize, Serialize};

/// Column names accepted for the button/event flag
pub const EVENT_ALIASES: [&str; 5] = ["button", "Button", "BUTTON", "button_button", "event"];

/// Resolved mapping from logical channels to DataFrame column names
#[derive(Debug, Clone)]
pub struct SensorColumns {
    pub channels: Vec<(Channel, String)>,
    pub event: String,
}

/// Summary of a loaded recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamMetadata {
    pub session_key: String,
    pub num_samples: usize,
    pub sampling_rate: usize,
    pub duration_secs: f64,
    pub channels: Vec<Channel>,
    pub event_count: usize,
}

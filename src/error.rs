use thiserror::Error;

#[derive(Error, Debug)]
pub enum FemoError {
    #[error("Window [{start}, {start}+{length}) out of bounds for stream of {stream_len} samples")]
    OutOfBounds {
        start: i64,
        length: usize,
        stream_len: usize,
    },

    #[error("Insufficient stream: {0}")]
    InsufficientStream(String),

    #[error("Invalid channel selection: {0}")]
    InvalidChannelSelection(String),

    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FemoError>;

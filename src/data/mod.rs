pub mod connectors;
pub mod preprocessing;
pub mod stream;

pub use connectors::{CsvConnector, DataValidator, StreamMetadata};
pub use preprocessing::{trim_session, try_trim_session};
pub use stream::{SensorSample, Stream};

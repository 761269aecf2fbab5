mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::{SensorColumns, StreamMetadata, EVENT_ALIASES};
pub use validator::DataValidator;

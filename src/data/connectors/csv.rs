use super::types::StreamMetadata;
use crate::data::stream::Stream;
use crate::error::{FemoError, Result};
use crate::sampling::events::locate_events;
use crate::types::SessionKey;
use polars::prelude::*;
use std::path::Path;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| FemoError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load a CSV recording as a stream keyed by its file stem
    pub fn load_stream<P: AsRef<Path>>(path: P, sampling_rate: usize) -> Result<Stream> {
        let key = path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| {
                FemoError::DataLoading(format!(
                    "Cannot derive session key from {}",
                    path.as_ref().display()
                ))
            })?;

        Self::load_stream_with_key(path, SessionKey::new(key), sampling_rate)
    }

    pub fn load_stream_with_key<P: AsRef<Path>>(
        path: P,
        key: SessionKey,
        sampling_rate: usize,
    ) -> Result<Stream> {
        let df = Self::load(&path)?;
        let stream = Stream::from_dataframe(key, sampling_rate, &df)?;
        log::debug!(
            "Loaded session {} from {} ({} samples)",
            stream.key(),
            path.as_ref().display(),
            stream.len()
        );
        Ok(stream)
    }

    pub fn create_metadata(stream: &Stream) -> StreamMetadata {
        StreamMetadata {
            session_key: stream.key().to_string(),
            num_samples: stream.len(),
            sampling_rate: stream.sampling_rate(),
            duration_secs: stream.duration_secs(),
            channels: stream.channels().to_vec(),
            event_count: locate_events(stream).len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Channel;
    use tempfile::TempDir;

    #[test]
    fn test_load_stream_from_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("femo_sampler_csv_connector_test.csv");
        std::fs::write(&path, "p1,p4,button\n1.0,2.0,0\n3.0,4.0,1\n5.0,6.0,0\n").unwrap();

        let stream = CsvConnector::load_stream(&path, 1024).unwrap();
        assert_eq!(stream.key().as_str(), "femo_sampler_csv_connector_test");
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.channels(), &[Channel::P1, Channel::P4]);

        let metadata = CsvConnector::create_metadata(&stream);
        assert_eq!(metadata.event_count, 1);
        assert_eq!(metadata.num_samples, 3);
    }
}

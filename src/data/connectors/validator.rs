use super::types::{SensorColumns, EVENT_ALIASES};
use crate::error::{FemoError, Result};
use crate::types::Channel;
use polars::prelude::*;

pub struct DataValidator;

impl DataValidator {
    /// Resolve channel and event columns, checking dtypes and the binary flag.
    pub fn validate_sensor_columns(df: &DataFrame) -> Result<SensorColumns> {
        let channels: Vec<(Channel, String)> = Channel::all()
            .into_iter()
            .filter_map(|channel| {
                Self::find_column(df, &channel.aliases()).map(|name| (channel, name.to_string()))
            })
            .collect();

        if !channels.iter().any(|(c, _)| c.is_piezo()) {
            return Err(FemoError::DataLoading(format!(
                "No piezo column found (tried aliases: {:?})",
                Channel::P1.aliases()
            )));
        }

        let event = Self::find_column(df, &EVENT_ALIASES)
            .ok_or_else(|| {
                FemoError::DataLoading(format!(
                    "Missing event column (tried aliases: {:?})",
                    EVENT_ALIASES
                ))
            })?
            .to_string();

        for (channel, name) in &channels {
            let column = df.column(name)?;
            if !Self::is_numeric(column.dtype()) {
                return Err(FemoError::DataLoading(format!(
                    "Column '{}' ({}) must be numeric, found {:?}",
                    name,
                    channel,
                    column.dtype()
                )));
            }
        }

        Self::validate_event_column(df, &event)?;

        let null_report = Self::check_nulls(df)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        Ok(SensorColumns { channels, event })
    }

    fn find_column<'a>(df: &DataFrame, aliases: &[&'a str]) -> Option<&'a str> {
        let columns = df.get_column_names();
        aliases
            .iter()
            .find(|&&alias| columns.iter().any(|col| col.as_str() == alias))
            .copied()
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float64
                | DataType::Float32
                | DataType::Int64
                | DataType::Int32
                | DataType::Int16
                | DataType::Int8
                | DataType::UInt64
                | DataType::UInt32
                | DataType::UInt16
                | DataType::UInt8
        )
    }

    /// The event flag must be 0/1 on every row
    fn validate_event_column(df: &DataFrame, name: &str) -> Result<()> {
        let column = df.column(name)?;
        if !(Self::is_numeric(column.dtype()) || matches!(column.dtype(), DataType::Boolean)) {
            return Err(FemoError::DataLoading(format!(
                "Event column '{}' must be numeric or boolean, found {:?}",
                name,
                column.dtype()
            )));
        }

        let flags = column.cast(&DataType::Float64)?;
        for (row, flag) in flags.f64()?.into_iter().enumerate() {
            match flag {
                Some(v) if v == 0.0 || v == 1.0 => {}
                Some(v) => {
                    return Err(FemoError::DataLoading(format!(
                        "Invalid event flag at row {}: {} (expected 0 or 1)",
                        row, v
                    )));
                }
                None => {
                    return Err(FemoError::DataLoading(format!(
                        "Missing event flag at row {}",
                        row
                    )));
                }
            }
        }

        Ok(())
    }

    /// Check for null values in any column
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for column in df.get_columns() {
            let null_count = column.null_count();
            if null_count > 0 {
                null_report.push((column.name().to_string(), null_count));
            }
        }

        Ok(null_report)
    }
}

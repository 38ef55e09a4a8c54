//! Chart configuration: DaYun start, count, direction and query date.

use std::path::Path;

use chrono::NaiveDate;
use mingpan_base::{DEFAULT_CYCLE_COUNT, DayunDirection};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Options that shape the Fortune side of a chart.
///
/// Missing fields in a config file take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Date the first DaYun begins. Without it no Fortune side is produced.
    pub qiyun_date: Option<NaiveDate>,
    /// Age at `qiyun_date`.
    pub qiyun_age: u32,
    /// Number of cycles to generate.
    pub dayun_count: usize,
    /// Overrides the year-polarity/gender rule when set.
    pub dayun_direction: Option<DayunDirection>,
    /// Date for which the active cycle is reported.
    pub query_date: Option<NaiveDate>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            qiyun_date: None,
            qiyun_age: 0,
            dayun_count: DEFAULT_CYCLE_COUNT,
            dayun_direction: None,
            query_date: None,
        }
    }
}

impl ChartConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Parse a JSON config document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        tracing::debug!(?config, "loaded chart config");
        Ok(config)
    }
}

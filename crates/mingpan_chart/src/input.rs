//! Resolved birth input: lunar date, hour branch, gender and four pillars.
//!
//! Calendar conversion happens upstream; these values arrive already
//! resolved.

use mingpan_base::{GanZhi, Gender, HeavenlyStem};
use serde::{Deserialize, Serialize};

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl FourPillars {
    /// Parse four two-character pillars, year first.
    pub fn parse(
        year: &str,
        month: &str,
        day: &str,
        hour: &str,
    ) -> Result<Self, mingpan_base::ChartError> {
        Ok(Self {
            year: GanZhi::parse(year)?,
            month: GanZhi::parse(month)?,
            day: GanZhi::parse(day)?,
            hour: GanZhi::parse(hour)?,
        })
    }

    /// The day stem (日主).
    pub fn day_master(&self) -> HeavenlyStem {
        self.day.stem()
    }

    /// Pillars in year, month, day, hour order.
    pub fn as_array(&self) -> [GanZhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// A birth with its lunar date and pillars resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthInput {
    pub lunar_year: i32,
    /// 1-12.
    pub lunar_month: u8,
    /// 1-30.
    pub lunar_day: u8,
    /// 0-11, 子 = 0.
    pub hour_branch: u8,
    #[serde(default)]
    pub is_leap_month: bool,
    pub gender: Gender,
    pub pillars: FourPillars,
}

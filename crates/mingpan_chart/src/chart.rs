//! Full chart assembly.

use mingpan_base::ChartError;
use serde::{Deserialize, Serialize};

use crate::bazi::{BaziChart, bazi_chart};
use crate::config::ChartConfig;
use crate::fortune::{FortuneChart, fortune_chart};
use crate::input::BirthInput;
use crate::ziwei::{ZiweiChart, ziwei_chart};

/// BaZi, ZiWei and Fortune sides for one birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullChart {
    pub input: BirthInput,
    pub bazi: BaziChart,
    pub ziwei: ZiweiChart,
    /// `None` when the config has no qiyun date.
    pub fortune: Option<FortuneChart>,
}

/// Assemble all three sides.
#[tracing::instrument(
    skip_all,
    fields(
        lunar_year = input.lunar_year,
        lunar_month = input.lunar_month,
        lunar_day = input.lunar_day
    )
)]
pub fn full_chart(input: &BirthInput, config: &ChartConfig) -> Result<FullChart, ChartError> {
    let bazi = bazi_chart(&input.pillars);
    let ziwei = ziwei_chart(input)?;
    let fortune = if config.qiyun_date.is_some() {
        Some(fortune_chart(input, config)?)
    } else {
        tracing::debug!("no qiyun date, skipping fortune side");
        None
    };
    Ok(FullChart {
        input: input.clone(),
        bazi,
        ziwei,
        fortune,
    })
}

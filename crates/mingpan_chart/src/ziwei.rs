//! ZiWei side of the chart.

use mingpan_base::ziwei::{Palace, PalaceRef, ziwei_layout};
use mingpan_base::{ChartError, EarthlyBranch, FiveElementsBureau, GanZhi};
use serde::{Deserialize, Serialize};

use crate::input::BirthInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiweiChart {
    pub life_palace: PalaceRef,
    pub body_palace: PalaceRef,
    pub life_ganzhi: GanZhi,
    pub bureau: FiveElementsBureau,
    pub ziwei_branch: EarthlyBranch,
    pub tianfu_branch: EarthlyBranch,
    /// Carried from the input. A leap month is charted with its month number.
    pub is_leap_month: bool,
    pub palaces: Vec<Palace>,
}

/// Build the ZiWei side: the year stem comes from the year pillar.
pub fn ziwei_chart(input: &BirthInput) -> Result<ZiweiChart, ChartError> {
    let layout = ziwei_layout(
        input.pillars.year.stem(),
        input.lunar_month,
        input.lunar_day,
        input.hour_branch,
    )?;
    Ok(ZiweiChart {
        life_palace: layout.life_palace,
        body_palace: layout.body_palace,
        life_ganzhi: layout.life_ganzhi,
        bureau: layout.bureau,
        ziwei_branch: layout.ziwei_branch,
        tianfu_branch: layout.tianfu_branch,
        is_leap_month: input.is_leap_month,
        palaces: layout.palaces,
    })
}

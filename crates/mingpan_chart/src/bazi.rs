//! BaZi (Four Pillars) side of the chart.

use mingpan_base::{GanZhi, HeavenlyStem, NaYin, TenGod, nayin, ten_god};
use serde::{Deserialize, Serialize};

use crate::input::FourPillars;

/// One value per pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerPillar<T> {
    pub year: T,
    pub month: T,
    pub day: T,
    pub hour: T,
}

impl<T> PerPillar<T> {
    fn from_fn(pillars: &FourPillars, mut f: impl FnMut(GanZhi) -> T) -> Self {
        Self {
            year: f(pillars.year),
            month: f(pillars.month),
            day: f(pillars.day),
            hour: f(pillars.hour),
        }
    }
}

/// Ten Gods of the three non-day stems relative to the day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemTenGods {
    pub year: TenGod,
    pub month: TenGod,
    pub hour: TenGod,
}

/// A branch's hidden stem with its Ten God.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: HeavenlyStem,
    pub ten_god: TenGod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaziChart {
    pub pillars: FourPillars,
    /// The day stem every Ten God is measured from.
    pub day_master: HeavenlyStem,
    pub ten_gods: StemTenGods,
    /// Main qi first.
    pub hidden_stems: PerPillar<Vec<HiddenStem>>,
    pub nayin: PerPillar<NaYin>,
}

/// Build the BaZi side from the four pillars.
pub fn bazi_chart(pillars: &FourPillars) -> BaziChart {
    let day = pillars.day_master();
    let ten_gods = StemTenGods {
        year: ten_god(day, pillars.year.stem()),
        month: ten_god(day, pillars.month.stem()),
        hour: ten_god(day, pillars.hour.stem()),
    };
    let hidden_stems = PerPillar::from_fn(pillars, |gz| {
        gz.branch()
            .hidden_stems()
            .iter()
            .map(|&stem| HiddenStem {
                stem,
                ten_god: ten_god(day, stem),
            })
            .collect()
    });
    tracing::debug!(day_master = %day, "bazi chart");
    BaziChart {
        pillars: *pillars,
        day_master: day,
        ten_gods,
        hidden_stems,
        nayin: PerPillar::from_fn(pillars, nayin),
    }
}

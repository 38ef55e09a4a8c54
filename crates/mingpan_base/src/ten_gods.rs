//! Ten Gods (十神): the relation of any stem to the day stem.
//!
//! A Ten God is fixed by two facts: the Wu Xing relation from the day
//! stem's element to the target's element, and whether the two stems share
//! polarity. Five relations × two polarity states cover the ten categories
//! exactly once.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::stem::{ALL_STEMS, HeavenlyStem};
use crate::wuxing::{WuXingRelation, relation};

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    BiJian,
    /// 劫財: same element, opposite polarity.
    JieCai,
    /// 食神: day stem produces target, same polarity.
    ShiShen,
    /// 傷官: day stem produces target, opposite polarity.
    ShangGuan,
    /// 偏財: day stem controls target, same polarity.
    PianCai,
    /// 正財: day stem controls target, opposite polarity.
    ZhengCai,
    /// 七殺: target controls day stem, same polarity.
    QiSha,
    /// 正官: target controls day stem, opposite polarity.
    ZhengGuan,
    /// 偏印: target produces day stem, same polarity.
    PianYin,
    /// 正印: target produces day stem, opposite polarity.
    ZhengYin,
}

/// All 10 Ten Gods.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::PianCai,
    TenGod::ZhengCai,
    TenGod::QiSha,
    TenGod::ZhengGuan,
    TenGod::PianYin,
    TenGod::ZhengYin,
];

impl TenGod {
    /// Traditional Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫財",
            Self::ShiShen => "食神",
            Self::ShangGuan => "傷官",
            Self::PianCai => "偏財",
            Self::ZhengCai => "正財",
            Self::QiSha => "七殺",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// English gloss.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "Friend",
            Self::JieCai => "Rob Wealth",
            Self::ShiShen => "Eating God",
            Self::ShangGuan => "Hurting Officer",
            Self::PianCai => "Indirect Wealth",
            Self::ZhengCai => "Direct Wealth",
            Self::QiSha => "Seven Killings",
            Self::ZhengGuan => "Direct Officer",
            Self::PianYin => "Indirect Resource",
            Self::ZhengYin => "Direct Resource",
        }
    }

    /// Build from the relation and polarity match.
    pub const fn from_parts(rel: WuXingRelation, same_polarity: bool) -> Self {
        match (rel, same_polarity) {
            (WuXingRelation::Same, true) => Self::BiJian,
            (WuXingRelation::Same, false) => Self::JieCai,
            (WuXingRelation::Produce, true) => Self::ShiShen,
            (WuXingRelation::Produce, false) => Self::ShangGuan,
            (WuXingRelation::Overcome, true) => Self::PianCai,
            (WuXingRelation::Overcome, false) => Self::ZhengCai,
            (WuXingRelation::Overcomed, true) => Self::QiSha,
            (WuXingRelation::Overcomed, false) => Self::ZhengGuan,
            (WuXingRelation::Produced, true) => Self::PianYin,
            (WuXingRelation::Produced, false) => Self::ZhengYin,
        }
    }

    /// The element relation this category encodes.
    pub const fn relation(self) -> WuXingRelation {
        match self {
            Self::BiJian | Self::JieCai => WuXingRelation::Same,
            Self::ShiShen | Self::ShangGuan => WuXingRelation::Produce,
            Self::PianCai | Self::ZhengCai => WuXingRelation::Overcome,
            Self::QiSha | Self::ZhengGuan => WuXingRelation::Overcomed,
            Self::PianYin | Self::ZhengYin => WuXingRelation::Produced,
        }
    }

    /// Whether this category requires matching polarity.
    pub const fn same_polarity(self) -> bool {
        matches!(
            self,
            Self::BiJian | Self::ShiShen | Self::PianCai | Self::QiSha | Self::PianYin
        )
    }
}

/// Ten God of `target` relative to the day stem.
pub fn ten_god(day: HeavenlyStem, target: HeavenlyStem) -> TenGod {
    let rel = relation(day.element(), target.element());
    TenGod::from_parts(rel, day.polarity() == target.polarity())
}

/// Ten God from stem symbols (甲 or "jia").
///
/// Fails with [`ChartError::InvalidStem`] if either symbol is not a stem.
pub fn ten_god_for_symbols(day: &str, target: &str) -> Result<TenGod, ChartError> {
    let d = HeavenlyStem::parse(day)?;
    let t = HeavenlyStem::parse(target)?;
    Ok(ten_god(d, t))
}

/// Ten God of every stem relative to `day`, indexed by stem index.
pub fn all_ten_gods(day: HeavenlyStem) -> [(HeavenlyStem, TenGod); 10] {
    ALL_STEMS.map(|t| (t, ten_god(day, t)))
}

//! Earthly branches (地支), the 12-position circle, and their hidden stems.
//!
//! Index 0 is 子. In ZiWei arithmetic 寅 (index 2) anchors lunar month 1.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::stem::HeavenlyStem;
use crate::wuxing::{Element, Polarity};

/// The 12 earthly branches, starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a circle position; wraps modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Chinese character.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Toneless pinyin.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// Element. The four "tomb" branches 辰戌丑未 are Earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    /// Polarity by position parity: 子 is yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Hidden stems (藏干), main qi first.
    pub const fn hidden_stems(self) -> &'static [HeavenlyStem] {
        use HeavenlyStem::*;
        match self {
            Self::Zi => &[Gui],
            Self::Chou => &[Ji, Gui, Xin],
            Self::Yin => &[Jia, Bing, Wu],
            Self::Mao => &[Yi],
            Self::Chen => &[Wu, Yi, Gui],
            Self::Si => &[Bing, Wu, Geng],
            Self::Wu => &[Ding, Ji],
            Self::Wei => &[Ji, Ding, Yi],
            Self::Shen => &[Geng, Ren, Wu],
            Self::You => &[Xin],
            Self::Xu => &[Wu, Xin, Ding],
            Self::Hai => &[Ren, Jia],
        }
    }

    /// The branch `offset` positions away (negative = backward).
    pub const fn offset(self, offset: i64) -> Self {
        Self::from_index(crate::util::jump_branch(self.index(), offset))
    }

    /// Parse from the Chinese character or pinyin (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let t = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.symbol() == t || b.pinyin().eq_ignore_ascii_case(t))
            .ok_or_else(|| ChartError::InvalidDomainValue(format!("branch {t:?}")))
    }
}

impl Display for EarthlyBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for EarthlyBranch {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Hour branch for a clock hour (0-23). 子 spans 23:00-00:59.
pub fn hour_branch_from_clock(hour: u8) -> Result<EarthlyBranch, ChartError> {
    if hour > 23 {
        return Err(ChartError::InvalidInput("clock hour must be 0-23"));
    }
    Ok(EarthlyBranch::from_index(((hour + 1) / 2) % 12))
}

/// Validate a 0-based hour-branch index (子=0 .. 亥=11).
pub fn hour_branch_from_index(index: u8) -> Result<EarthlyBranch, ChartError> {
    if index > 11 {
        return Err(ChartError::InvalidInput("hour branch index must be 0-11"));
    }
    Ok(EarthlyBranch::from_index(index))
}

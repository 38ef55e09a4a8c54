//! Heavenly stems (天干), the 10-position cycle.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::wuxing::{Element, Polarity};

/// The 10 heavenly stems, starting from 甲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cycle position; wraps modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Chinese character.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Toneless pinyin.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// Element: two consecutive stems per element, in production order.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Polarity: even index is yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// The stem `offset` positions away (negative = backward).
    pub const fn offset(self, offset: i64) -> Self {
        Self::from_index(crate::util::jump_stem(self.index(), offset))
    }

    /// Parse from the Chinese character or pinyin (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let t = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.symbol() == t || st.pinyin().eq_ignore_ascii_case(t))
            .ok_or_else(|| ChartError::InvalidStem(t.to_string()))
    }
}

impl Display for HeavenlyStem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for HeavenlyStem {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(HeavenlyStem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn two_stems_per_element() {
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
            assert_eq!(pair[0].polarity(), Polarity::Yang);
            assert_eq!(pair[1].polarity(), Polarity::Yin);
        }
    }

    #[test]
    fn parse_symbol_and_pinyin() {
        assert_eq!(HeavenlyStem::parse("庚").unwrap(), HeavenlyStem::Geng);
        assert_eq!(HeavenlyStem::parse("Ren").unwrap(), HeavenlyStem::Ren);
        assert_eq!(" 癸 ".parse::<HeavenlyStem>().unwrap(), HeavenlyStem::Gui);
    }

    #[test]
    fn parse_rejects_branch() {
        assert_eq!(
            HeavenlyStem::parse("子"),
            Err(ChartError::InvalidStem("子".to_string()))
        );
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(HeavenlyStem::Ren.offset(3), HeavenlyStem::Yi);
        assert_eq!(HeavenlyStem::Jia.offset(-1), HeavenlyStem::Gui);
    }
}

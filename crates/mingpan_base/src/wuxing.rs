//! Wu Xing (five elements) and the production / control cycles.
//!
//! Production: Wood → Fire → Earth → Metal → Water → Wood.
//! Control:    Wood → Earth → Water → Fire → Metal → Wood.
//!
//! Every ordered pair of elements falls into exactly one [`WuXingRelation`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::ChartError;
use crate::stem::HeavenlyStem;

/// The five elements, in production order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in production order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character (木火土金水).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in production order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one produces.
    pub const fn produces(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one controls.
    pub const fn controls(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// Parse an element from its Chinese character or English name.
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let t = s.trim();
        ALL_ELEMENTS
            .iter()
            .copied()
            .find(|e| e.symbol() == t || e.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ChartError::InvalidDomainValue(format!("element {t:?}")))
    }
}

impl FromStr for Element {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a position in a cycle: even = Yang, odd = Yin.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// Chinese character (陽/陰).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}

/// Relation of an ordered pair of elements, seen from the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WuXingRelation {
    /// Both are the same element.
    Same,
    /// `from` produces `to`.
    Produce,
    /// `to` produces `from`.
    Produced,
    /// `from` controls `to`.
    Overcome,
    /// `to` controls `from`.
    Overcomed,
}

/// All 5 relations.
pub const ALL_RELATIONS: [WuXingRelation; 5] = [
    WuXingRelation::Same,
    WuXingRelation::Produce,
    WuXingRelation::Produced,
    WuXingRelation::Overcome,
    WuXingRelation::Overcomed,
];

impl WuXingRelation {
    /// Name of the relation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Produce => "produce",
            Self::Produced => "produced",
            Self::Overcome => "overcome",
            Self::Overcomed => "overcomed",
        }
    }
}

/// Classify the relation from `from` to `to`.
///
/// With five elements on a pentagon, `to` is either `from` itself, one step
/// ahead (produce), one step behind (produced), two ahead (overcome), or two
/// behind (overcomed), so the checks below never fall through.
pub fn relation(from: Element, to: Element) -> WuXingRelation {
    if from == to {
        WuXingRelation::Same
    } else if from.produces() == to {
        WuXingRelation::Produce
    } else if to.produces() == from {
        WuXingRelation::Produced
    } else if from.controls() == to {
        WuXingRelation::Overcome
    } else {
        debug_assert_eq!(to.controls(), from);
        WuXingRelation::Overcomed
    }
}

/// Element of a heavenly stem.
pub const fn stem_element(stem: HeavenlyStem) -> Element {
    stem.element()
}

/// Element of an earthly branch.
pub const fn branch_element(branch: EarthlyBranch) -> Element {
    branch.element()
}

/// Element of a stem given by symbol (甲 or "jia").
pub fn stem_element_of(symbol: &str) -> Result<Element, ChartError> {
    let stem = HeavenlyStem::parse(symbol)
        .map_err(|_| ChartError::InvalidDomainValue(format!("stem {symbol:?}")))?;
    Ok(stem.element())
}

/// Element of a branch given by symbol (子 or "zi").
pub fn branch_element_of(symbol: &str) -> Result<Element, ChartError> {
    EarthlyBranch::parse(symbol).map(EarthlyBranch::element)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Expected relation from row element to column element,
    // in production order (Wood, Fire, Earth, Metal, Water).
    const MATRIX: [[WuXingRelation; 5]; 5] = {
        use WuXingRelation::*;
        [
            [Same, Produce, Overcome, Overcomed, Produced],
            [Produced, Same, Produce, Overcome, Overcomed],
            [Overcomed, Produced, Same, Produce, Overcome],
            [Overcome, Overcomed, Produced, Same, Produce],
            [Produce, Overcome, Overcomed, Produced, Same],
        ]
    };

    #[test]
    fn relation_matrix_matches_cycles() {
        for (i, &from) in ALL_ELEMENTS.iter().enumerate() {
            for (j, &to) in ALL_ELEMENTS.iter().enumerate() {
                assert_eq!(relation(from, to), MATRIX[i][j], "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn exactly_one_relation_per_pair() {
        for &from in &ALL_ELEMENTS {
            for &to in &ALL_ELEMENTS {
                let hits = [
                    from == to,
                    from.produces() == to,
                    to.produces() == from,
                    from.controls() == to,
                    to.controls() == from,
                ]
                .iter()
                .filter(|&&b| b)
                .count();
                assert_eq!(hits, 1, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn each_row_uses_all_five_relations() {
        for &from in &ALL_ELEMENTS {
            for &r in &ALL_RELATIONS {
                let n = ALL_ELEMENTS
                    .iter()
                    .filter(|&&to| relation(from, to) == r)
                    .count();
                assert_eq!(n, 1, "{from:?} {r:?}");
            }
        }
    }

    #[test]
    fn relation_is_antisymmetric() {
        for &a in &ALL_ELEMENTS {
            for &b in &ALL_ELEMENTS {
                let flipped = match relation(a, b) {
                    WuXingRelation::Same => WuXingRelation::Same,
                    WuXingRelation::Produce => WuXingRelation::Produced,
                    WuXingRelation::Produced => WuXingRelation::Produce,
                    WuXingRelation::Overcome => WuXingRelation::Overcomed,
                    WuXingRelation::Overcomed => WuXingRelation::Overcome,
                };
                assert_eq!(relation(b, a), flipped);
            }
        }
    }

    #[test]
    fn stem_and_branch_elements_by_symbol() {
        assert_eq!(stem_element_of("丙").unwrap(), Element::Fire);
        assert_eq!(stem_element_of("gui").unwrap(), Element::Water);
        assert_eq!(branch_element_of("戌").unwrap(), Element::Earth);
        assert_eq!(branch_element_of("亥").unwrap(), Element::Water);
    }

    #[test]
    fn unknown_symbols_rejected() {
        assert!(matches!(
            stem_element_of("子"),
            Err(ChartError::InvalidDomainValue(_))
        ));
        assert!(matches!(
            branch_element_of("甲"),
            Err(ChartError::InvalidDomainValue(_))
        ));
        assert!(matches!(
            Element::parse("aether"),
            Err(ChartError::InvalidDomainValue(_))
        ));
    }

    #[test]
    fn element_parse_both_forms() {
        assert_eq!(Element::parse("金").unwrap(), Element::Metal);
        assert_eq!("water".parse::<Element>().unwrap(), Element::Water);
    }

    #[test]
    fn polarity_from_index() {
        assert_eq!(Polarity::from_index(0), Polarity::Yang);
        assert_eq!(Polarity::from_index(9), Polarity::Yin);
    }
}

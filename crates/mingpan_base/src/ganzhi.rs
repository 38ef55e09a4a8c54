//! Sexagenary (干支) codec.
//!
//! Pairing the 10 stems with the 12 branches in lockstep yields 60 pairs,
//! exactly those whose stem and branch indices share parity. Index `n`
//! maps to `(stem n mod 10, branch n mod 12)`; the inverse is the
//! Chinese Remainder solution, found here by search over the 60 positions.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, EarthlyBranch};
use crate::error::ChartError;
use crate::stem::{ALL_STEMS, HeavenlyStem};

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// Reference year: CE 1984 is 甲子 (index 0).
pub const GANZHI_EPOCH_YEAR: i32 = 1984;

/// A valid stem/branch pair.
///
/// Only the codec and [`GanZhi::new`] build values, so every `GanZhi` is one
/// of the 60 cycle members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GanZhiRepr", into = "GanZhiRepr")]
pub struct GanZhi {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

#[derive(Serialize, Deserialize)]
struct GanZhiRepr {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl TryFrom<GanZhiRepr> for GanZhi {
    type Error = ChartError;

    fn try_from(r: GanZhiRepr) -> Result<Self, Self::Error> {
        GanZhi::new(r.stem, r.branch)
    }
}

impl From<GanZhi> for GanZhiRepr {
    fn from(g: GanZhi) -> Self {
        Self {
            stem: g.stem,
            branch: g.branch,
        }
    }
}

/// Whether a stem/branch pair belongs to the 60-cycle.
pub const fn is_valid_pair(stem: HeavenlyStem, branch: EarthlyBranch) -> bool {
    stem.index() % 2 == branch.index() % 2
}

/// Convert any integer into its GanZhi, wrapping into [0, 60).
pub const fn index_to_ganzhi(n: i64) -> GanZhi {
    let i = n.rem_euclid(CYCLE_LEN as i64) as usize;
    GanZhi {
        stem: ALL_STEMS[i % 10],
        branch: ALL_BRANCHES[i % 12],
    }
}

/// Sexagenary index (0-59) of a stem/branch pair.
///
/// Fails with [`ChartError::InvalidGanZhi`] when the parities differ.
pub fn ganzhi_to_index(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<u8, ChartError> {
    let (s, b) = (stem.index(), branch.index());
    (0..CYCLE_LEN)
        .find(|n| n % 10 == s && n % 12 == b)
        .ok_or(ChartError::InvalidGanZhi { stem, branch })
}

impl GanZhi {
    /// Validating constructor.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, ChartError> {
        if is_valid_pair(stem, branch) {
            Ok(Self { stem, branch })
        } else {
            Err(ChartError::InvalidGanZhi { stem, branch })
        }
    }

    /// The stem.
    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    /// The branch.
    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    /// Sexagenary index (0 = 甲子 .. 59 = 癸亥).
    ///
    /// CRT in closed form: with s ≡ b (mod 2), n = s + 10k where
    /// 10k ≡ b - s (mod 12), i.e. k ≡ 5(b - s)/2 (mod 6).
    pub const fn index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        let k = (5 * (b - s) / 2).rem_euclid(6);
        (s + 10 * k) as u8
    }

    /// The GanZhi `steps` positions away in the cycle (negative = backward).
    pub const fn offset(self, steps: i64) -> Self {
        index_to_ganzhi(self.index() as i64 + steps)
    }

    /// Next pair in the cycle.
    pub const fn next(self) -> Self {
        self.offset(1)
    }

    /// Previous pair in the cycle.
    pub const fn prev(self) -> Self {
        self.offset(-1)
    }

    /// Parse from two symbols: "甲子" or "jia-zi" / "jia zi".
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) {
            if !a.is_ascii() && !b.is_ascii() {
                let stem = HeavenlyStem::parse(&a.to_string())
                    .map_err(|_| ChartError::InvalidDomainValue(format!("ganzhi {t:?}")))?;
                let branch = EarthlyBranch::parse(&b.to_string())?;
                return Self::new(stem, branch);
            }
        }
        let parts: Vec<&str> = t
            .split(|c: char| c == '-' || c == ' ' || c == '_')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(ChartError::InvalidDomainValue(format!("ganzhi {t:?}")));
        }
        let stem = HeavenlyStem::parse(parts[0])
            .map_err(|_| ChartError::InvalidDomainValue(format!("ganzhi {t:?}")))?;
        let branch = EarthlyBranch::parse(parts[1])?;
        Self::new(stem, branch)
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl FromStr for GanZhi {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// All 60 GanZhi in cycle order (index 0 = 甲子).
pub const ALL_GANZHI: [GanZhi; 60] = {
    let mut out = [index_to_ganzhi(0); 60];
    let mut i = 0;
    while i < 60 {
        out[i] = index_to_ganzhi(i as i64);
        i += 1;
    }
    out
};

/// Year pillar for a CE year, counted from 1984 = 甲子.
///
/// Returns `(ganzhi, order)` where order is 1-based (1..=60). Which CE year
/// a birth belongs to (the lunar new year or 立春 boundary) is the caller's
/// decision.
pub fn year_ganzhi(ce_year: i32) -> (GanZhi, u8) {
    let offset = (ce_year - GANZHI_EPOCH_YEAR).rem_euclid(60);
    let gz = index_to_ganzhi(offset as i64);
    (gz, gz.index() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_60() {
        for n in 0..60u8 {
            let gz = index_to_ganzhi(n as i64);
            assert_eq!(ganzhi_to_index(gz.stem(), gz.branch()).unwrap(), n);
            assert_eq!(gz.index(), n);
        }
    }

    #[test]
    fn rejects_all_60_invalid_pairs() {
        let mut rejected = 0;
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                if s.index() % 2 != b.index() % 2 {
                    assert_eq!(
                        ganzhi_to_index(s, b),
                        Err(ChartError::InvalidGanZhi { stem: s, branch: b })
                    );
                    assert!(GanZhi::new(s, b).is_err());
                    rejected += 1;
                }
            }
        }
        assert_eq!(rejected, 60);
    }

    #[test]
    fn index_normalizes() {
        assert_eq!(index_to_ganzhi(60), index_to_ganzhi(0));
        assert_eq!(index_to_ganzhi(-1).to_string(), "癸亥");
        assert_eq!(index_to_ganzhi(125).index(), 5);
    }

    #[test]
    fn known_indices() {
        assert_eq!(index_to_ganzhi(0).to_string(), "甲子");
        assert_eq!(index_to_ganzhi(10).to_string(), "甲戌");
        assert_eq!(index_to_ganzhi(40).to_string(), "甲辰");
        assert_eq!(index_to_ganzhi(59).to_string(), "癸亥");
    }

    #[test]
    fn all_ganzhi_table() {
        for (i, gz) in ALL_GANZHI.iter().enumerate() {
            assert_eq!(gz.index() as usize, i);
        }
        assert_eq!(ALL_GANZHI[1].to_string(), "乙丑");
    }

    #[test]
    fn offset_walks() {
        let jiazi = index_to_ganzhi(0);
        assert_eq!(jiazi.next().to_string(), "乙丑");
        assert_eq!(jiazi.prev().to_string(), "癸亥");
        assert_eq!(jiazi.offset(60), jiazi);
        assert_eq!(jiazi.offset(-120), jiazi);
    }

    #[test]
    fn parse_forms() {
        assert_eq!(GanZhi::parse("丙寅").unwrap().index(), 2);
        assert_eq!(GanZhi::parse("jia-zi").unwrap().index(), 0);
        assert_eq!(GanZhi::parse("Gui Hai").unwrap().index(), 59);
        assert!(matches!(
            GanZhi::parse("甲丑"),
            Err(ChartError::InvalidGanZhi { .. })
        ));
        assert!(matches!(
            GanZhi::parse("甲"),
            Err(ChartError::InvalidDomainValue(_))
        ));
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_ganzhi(1984), (index_to_ganzhi(0), 1));
        assert_eq!(year_ganzhi(2024).0.to_string(), "甲辰");
        assert_eq!(year_ganzhi(1983).0.to_string(), "癸亥");
        assert_eq!(year_ganzhi(2000).0.to_string(), "庚辰");
    }

    #[test]
    fn serde_rejects_invalid_pair() {
        let ok: GanZhi = serde_json::from_str(r#"{"stem":"Jia","branch":"Zi"}"#).unwrap();
        assert_eq!(ok.index(), 0);
        let bad = serde_json::from_str::<GanZhi>(r#"{"stem":"Jia","branch":"Chou"}"#);
        assert!(bad.is_err());
    }
}

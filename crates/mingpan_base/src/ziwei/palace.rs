//! The 12 palaces: Life/Body palace location, palace stems, and layout.
//!
//! Palaces are numbered from the Life Palace (position 0) and run backward
//! around the branch circle: position `p` sits on branch
//! `(life - p) mod 12`.

use serde::{Deserialize, Serialize};

use crate::branch::{EarthlyBranch, hour_branch_from_index};
use crate::error::ChartError;
use crate::stem::HeavenlyStem;
use crate::util::{branch_distance, jump_branch};

use super::star::{Star, Transformation};

/// Branch index of lunar month 1 (寅).
pub const MONTH_ANCHOR_BRANCH: u8 = 2;

/// The 12 palace names, in sequence from the Life Palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalaceName {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All 12 palace names in sequence (position 0 = 命宮).
pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

impl PalaceName {
    /// Traditional name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Life => "命宮",
            Self::Siblings => "兄弟宮",
            Self::Spouse => "夫妻宮",
            Self::Children => "子女宮",
            Self::Wealth => "財帛宮",
            Self::Health => "疾厄宮",
            Self::Travel => "遷移宮",
            Self::Friends => "交友宮",
            Self::Career => "官祿宮",
            Self::Property => "田宅宮",
            Self::Fortune => "福德宮",
            Self::Parents => "父母宮",
        }
    }

    /// 0-based sequential position.
    pub const fn position(self) -> u8 {
        match self {
            Self::Life => 0,
            Self::Siblings => 1,
            Self::Spouse => 2,
            Self::Children => 3,
            Self::Wealth => 4,
            Self::Health => 5,
            Self::Travel => 6,
            Self::Friends => 7,
            Self::Career => 8,
            Self::Property => 9,
            Self::Fortune => 10,
            Self::Parents => 11,
        }
    }

    /// 1-based palace number.
    pub const fn number(self) -> u8 {
        self.position() + 1
    }
}

/// Location of a palace: sequential position and branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PalaceRef {
    /// 0-based position counted from the Life Palace.
    pub position: u8,
    pub branch: EarthlyBranch,
}

/// A star placed in a palace, with its transformation if the year stem gives one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedStar {
    pub star: Star,
    pub transformation: Option<Transformation>,
}

/// One of the 12 palaces of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palace {
    /// 0-based position from the Life Palace.
    pub position: u8,
    /// Branch the palace occupies.
    pub branch: EarthlyBranch,
    /// Palace stem (Five Tigers rule).
    pub stem: HeavenlyStem,
    pub name: PalaceName,
    /// Whether the Body Palace falls here.
    pub is_body_palace: bool,
    pub stars: Vec<PlacedStar>,
}

fn check_month(lunar_month: u8) -> Result<(), ChartError> {
    if (1..=12).contains(&lunar_month) {
        Ok(())
    } else {
        Err(ChartError::InvalidInput("lunar month must be 1-12"))
    }
}

fn check_hour(hour_branch: u8) -> Result<(), ChartError> {
    hour_branch_from_index(hour_branch).map(|_| ())
}

/// Branch index of the Life Palace: from 寅 count forward to the month,
/// then backward by the hour.
pub fn life_palace_branch_index(lunar_month: u8, hour_branch: u8) -> Result<u8, ChartError> {
    check_month(lunar_month)?;
    check_hour(hour_branch)?;
    Ok(jump_branch(
        MONTH_ANCHOR_BRANCH,
        (lunar_month as i64 - 1) - hour_branch as i64,
    ))
}

/// Branch index of the Body Palace: from 寅 count forward to the month,
/// then forward by the hour.
pub fn body_palace_branch_index(lunar_month: u8, hour_branch: u8) -> Result<u8, ChartError> {
    check_month(lunar_month)?;
    check_hour(hour_branch)?;
    Ok(jump_branch(
        MONTH_ANCHOR_BRANCH,
        (lunar_month as i64 - 1) + hour_branch as i64,
    ))
}

/// Branch of the palace at sequential `position`.
pub const fn palace_branch(life_branch: u8, position: u8) -> EarthlyBranch {
    EarthlyBranch::from_index(jump_branch(life_branch, -(position as i64)))
}

/// Sequential position of the palace on `branch`.
pub const fn palace_position(life_branch: u8, branch: EarthlyBranch) -> u8 {
    branch_distance(branch.index(), life_branch)
}

/// Five Tigers (五虎遁): stem of the 寅 palace for a year stem.
pub const fn tiger_stem(year_stem: HeavenlyStem) -> HeavenlyStem {
    match year_stem {
        HeavenlyStem::Jia | HeavenlyStem::Ji => HeavenlyStem::Bing,
        HeavenlyStem::Yi | HeavenlyStem::Geng => HeavenlyStem::Wu,
        HeavenlyStem::Bing | HeavenlyStem::Xin => HeavenlyStem::Geng,
        HeavenlyStem::Ding | HeavenlyStem::Ren => HeavenlyStem::Ren,
        HeavenlyStem::Wu | HeavenlyStem::Gui => HeavenlyStem::Jia,
    }
}

/// Stem of the palace on `branch_index`: the 寅 stem advanced by the
/// distance from 寅, so 子 and 丑 continue past 亥.
pub const fn palace_stem(year_stem: HeavenlyStem, branch_index: u8) -> HeavenlyStem {
    let steps = branch_distance(MONTH_ANCHOR_BRANCH, branch_index % 12);
    tiger_stem(year_stem).offset(steps as i64)
}

/// Lay out the 12 empty palaces for a Life and Body Palace branch.
pub fn palace_frame(year_stem: HeavenlyStem, life_branch: u8, body_branch: u8) -> Vec<Palace> {
    ALL_PALACE_NAMES
        .iter()
        .map(|&name| {
            let position = name.position();
            let branch = palace_branch(life_branch, position);
            Palace {
                position,
                branch,
                stem: palace_stem(year_stem, branch.index()),
                name,
                is_body_palace: branch.index() == body_branch % 12,
                stars: Vec::new(),
            }
        })
        .collect()
}

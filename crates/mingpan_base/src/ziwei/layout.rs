//! The full ZiWei pipeline: palaces, bureau, stars and transformations.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::ChartError;
use crate::ganzhi::GanZhi;
use crate::nayin::{FiveElementsBureau, bureau_for};
use crate::stem::HeavenlyStem;

use super::palace::{
    Palace, PalaceRef, PlacedStar, body_palace_branch_index, life_palace_branch_index,
    palace_frame, palace_position, palace_stem,
};
use super::placement::{star_branches, tianfu_branch_index, ziwei_branch_index};
use super::star::{Star, transformation_of};

/// Result of the ZiWei pipeline for one birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiweiLayout {
    pub life_palace: PalaceRef,
    pub body_palace: PalaceRef,
    /// Life Palace stem and branch; its Na Yin fixes the bureau.
    pub life_ganzhi: GanZhi,
    pub bureau: FiveElementsBureau,
    pub ziwei_branch: EarthlyBranch,
    pub tianfu_branch: EarthlyBranch,
    /// Ordered by position, 命宮 first.
    pub palaces: Vec<Palace>,
}

impl ZiweiLayout {
    /// Palace holding `star`.
    pub fn palace_of(&self, star: Star) -> Option<&Palace> {
        self.palaces
            .iter()
            .find(|p| p.stars.iter().any(|s| s.star == star))
    }

    /// Palace on `branch`.
    pub fn palace_on(&self, branch: EarthlyBranch) -> &Palace {
        let pos = palace_position(self.life_palace.branch.index(), branch);
        &self.palaces[pos as usize]
    }
}

/// Run the pipeline for a year stem, lunar month (1-12), lunar day (1-30)
/// and hour branch index (0-11).
///
/// Out-of-range inputs fail with [`ChartError::InvalidInput`]; nothing is
/// clamped.
pub fn ziwei_layout(
    year_stem: HeavenlyStem,
    lunar_month: u8,
    lunar_day: u8,
    hour_branch: u8,
) -> Result<ZiweiLayout, ChartError> {
    let life = life_palace_branch_index(lunar_month, hour_branch)?;
    let body = body_palace_branch_index(lunar_month, hour_branch)?;
    tracing::debug!(
        life = %EarthlyBranch::from_index(life),
        body = %EarthlyBranch::from_index(body),
        "palace indices"
    );

    let life_branch = EarthlyBranch::from_index(life);
    let life_ganzhi = GanZhi::new(palace_stem(year_stem, life), life_branch)?;
    let bureau = bureau_for(life_ganzhi);
    tracing::debug!(life_ganzhi = %life_ganzhi, bureau = bureau.chinese(), "bureau");

    let ziwei = ziwei_branch_index(lunar_day, bureau)?;
    let mut palaces = palace_frame(year_stem, life, body);
    for (star, branch) in star_branches(lunar_month, lunar_day, hour_branch, bureau)? {
        let pos = palace_position(life, branch);
        palaces[pos as usize].stars.push(PlacedStar {
            star,
            transformation: transformation_of(year_stem, star),
        });
    }

    let body_branch = EarthlyBranch::from_index(body);
    Ok(ZiweiLayout {
        life_palace: PalaceRef {
            position: 0,
            branch: life_branch,
        },
        body_palace: PalaceRef {
            position: palace_position(life, body_branch),
            branch: body_branch,
        },
        life_ganzhi,
        bureau,
        ziwei_branch: EarthlyBranch::from_index(ziwei),
        tianfu_branch: EarthlyBranch::from_index(tianfu_branch_index(ziwei)),
        palaces,
    })
}

//! Star placement: the ZiWei locating rule, the TianFu mirror, the fixed
//! main-star offsets and the auxiliary star rules.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::ChartError;
use crate::nayin::FiveElementsBureau;
use crate::util::{jump_branch, wrap};

use super::palace::MONTH_ANCHOR_BRANCH;
use super::star::{AUXILIARY_STARS, MAIN_STARS, Star};

/// Which anchor a main star is counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarGroup {
    /// Counted backward from 紫微.
    ZiWei,
    /// Counted forward from 天府.
    TianFu,
}

/// Anchor and branch offset of a main star. `None` for auxiliary stars.
pub const fn main_star_offset(star: Star) -> Option<(StarGroup, i8)> {
    match star {
        Star::ZiWei => Some((StarGroup::ZiWei, 0)),
        Star::TianJi => Some((StarGroup::ZiWei, -1)),
        Star::TaiYang => Some((StarGroup::ZiWei, -3)),
        Star::WuQu => Some((StarGroup::ZiWei, -4)),
        Star::TianTong => Some((StarGroup::ZiWei, -5)),
        Star::LianZhen => Some((StarGroup::ZiWei, -8)),
        Star::TianFu => Some((StarGroup::TianFu, 0)),
        Star::TaiYin => Some((StarGroup::TianFu, 1)),
        Star::TanLang => Some((StarGroup::TianFu, 2)),
        Star::JuMen => Some((StarGroup::TianFu, 3)),
        Star::TianXiang => Some((StarGroup::TianFu, 4)),
        Star::TianLiang => Some((StarGroup::TianFu, 5)),
        Star::QiSha => Some((StarGroup::TianFu, 6)),
        Star::PoJun => Some((StarGroup::TianFu, 10)),
        Star::WenChang | Star::WenQu | Star::ZuoFu | Star::YouBi => None,
    }
}

/// Branch index of 紫微 for lunar day `day` (1-30) and a bureau.
///
/// With `q = day / B` and `r = day % B`: an exact multiple lands `q - 1`
/// steps after 寅. Otherwise the day is padded up to the next multiple by
/// `n = B - r`, and the landing point is moved back `n` steps when `n` is
/// odd or forward `n` steps when `n` is even.
pub fn ziwei_branch_index(day: u8, bureau: FiveElementsBureau) -> Result<u8, ChartError> {
    if !(1..=30).contains(&day) {
        return Err(ChartError::InvalidInput("lunar day must be 1-30"));
    }
    let d = day as i64;
    let b = bureau.number() as i64;
    let r = d % b;
    if r == 0 {
        return Ok(jump_branch(MONTH_ANCHOR_BRANCH, d / b - 1));
    }
    let n = b - r;
    let q = (d + n) / b;
    let base = jump_branch(MONTH_ANCHOR_BRANCH, q - 1);
    Ok(if n % 2 == 1 {
        jump_branch(base, -n)
    } else {
        jump_branch(base, n)
    })
}

/// Branch index of 天府: 紫微 mirrored across the 寅-申 axis.
pub const fn tianfu_branch_index(ziwei: u8) -> u8 {
    wrap(4 - ziwei as i64, 12)
}

/// Branch index of a main star given the 紫微 branch.
pub const fn main_star_branch_index(star: Star, ziwei: u8) -> Option<u8> {
    match main_star_offset(star) {
        Some((StarGroup::ZiWei, off)) => Some(jump_branch(ziwei, off as i64)),
        Some((StarGroup::TianFu, off)) => {
            Some(jump_branch(tianfu_branch_index(ziwei), off as i64))
        }
        None => None,
    }
}

/// Branch index of an auxiliary star for a lunar month (1-12) and hour
/// branch (0-11). `None` for main stars.
///
/// 文昌 and 文曲 follow the hour from 戌 and 辰; 左輔 and 右弼 follow the
/// month from 辰 and 戌.
pub const fn auxiliary_branch_index(star: Star, lunar_month: u8, hour_branch: u8) -> Option<u8> {
    let h = hour_branch as i64;
    let m = lunar_month as i64 - 1;
    match star {
        Star::WenChang => Some(wrap(10 - h, 12)),
        Star::WenQu => Some(wrap(4 + h, 12)),
        Star::ZuoFu => Some(wrap(4 + m, 12)),
        Star::YouBi => Some(wrap(10 - m, 12)),
        _ => None,
    }
}

/// Branch of every main and auxiliary star, main stars first.
///
/// Month and hour are not range-checked here; [`super::layout::ziwei_layout`]
/// validates them before placing.
pub fn star_branches(
    lunar_month: u8,
    lunar_day: u8,
    hour_branch: u8,
    bureau: FiveElementsBureau,
) -> Result<Vec<(Star, EarthlyBranch)>, ChartError> {
    let ziwei = ziwei_branch_index(lunar_day, bureau)?;
    let main = MAIN_STARS
        .iter()
        .filter_map(|&s| main_star_branch_index(s, ziwei).map(|b| (s, b)));
    let aux = AUXILIARY_STARS
        .iter()
        .filter_map(|&s| auxiliary_branch_index(s, lunar_month, hour_branch).map(|b| (s, b)));
    let placed: Vec<(Star, EarthlyBranch)> = main
        .chain(aux)
        .map(|(s, b)| (s, EarthlyBranch::from_index(b)))
        .collect();
    tracing::trace!(
        ziwei = %EarthlyBranch::from_index(ziwei),
        stars = placed.len(),
        "placed stars"
    );
    Ok(placed)
}

//! ZiWei stars and the Four Transformations (四化).

use serde::{Deserialize, Serialize};

use crate::stem::HeavenlyStem;

/// Main or auxiliary star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarKind {
    Main,
    Auxiliary,
}

/// The 14 main stars and 4 auxiliary stars placed by this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Star {
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    WenChang,
    WenQu,
    ZuoFu,
    YouBi,
}

/// The 14 main stars: ZiWei group then TianFu group.
pub const MAIN_STARS: [Star; 14] = [
    Star::ZiWei,
    Star::TianJi,
    Star::TaiYang,
    Star::WuQu,
    Star::TianTong,
    Star::LianZhen,
    Star::TianFu,
    Star::TaiYin,
    Star::TanLang,
    Star::JuMen,
    Star::TianXiang,
    Star::TianLiang,
    Star::QiSha,
    Star::PoJun,
];

/// The 4 auxiliary stars.
pub const AUXILIARY_STARS: [Star; 4] = [Star::WenChang, Star::WenQu, Star::ZuoFu, Star::YouBi];

impl Star {
    /// Traditional name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天機",
            Self::TaiYang => "太陽",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉貞",
            Self::TianFu => "天府",
            Self::TaiYin => "太陰",
            Self::TanLang => "貪狼",
            Self::JuMen => "巨門",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七殺",
            Self::PoJun => "破軍",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左輔",
            Self::YouBi => "右弼",
        }
    }

    /// Main or auxiliary.
    pub const fn kind(self) -> StarKind {
        match self {
            Self::WenChang | Self::WenQu | Self::ZuoFu | Self::YouBi => StarKind::Auxiliary,
            _ => StarKind::Main,
        }
    }
}

/// The Four Transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transformation {
    /// 化祿
    Lu,
    /// 化權
    Quan,
    /// 化科
    Ke,
    /// 化忌
    Ji,
}

/// Transformations in 祿權科忌 order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    /// Traditional name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Lu => "化祿",
            Self::Quan => "化權",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }
}

/// Stars taking 化祿, 化權, 化科, 化忌 (in that order) for a year stem.
pub const fn sihua_stars(year_stem: HeavenlyStem) -> [Star; 4] {
    use Star::*;
    match year_stem {
        HeavenlyStem::Jia => [LianZhen, PoJun, WuQu, TaiYang],
        HeavenlyStem::Yi => [TianJi, TianLiang, ZiWei, TaiYin],
        HeavenlyStem::Bing => [TianTong, TianJi, WenChang, LianZhen],
        HeavenlyStem::Ding => [TaiYin, TianTong, TianJi, JuMen],
        HeavenlyStem::Wu => [TanLang, TaiYin, YouBi, TianJi],
        HeavenlyStem::Ji => [WuQu, TanLang, TianLiang, WenQu],
        HeavenlyStem::Geng => [TaiYang, WuQu, TaiYin, TianTong],
        HeavenlyStem::Xin => [JuMen, TaiYang, WenQu, WenChang],
        HeavenlyStem::Ren => [TianLiang, ZiWei, ZuoFu, WuQu],
        HeavenlyStem::Gui => [PoJun, JuMen, TaiYin, TanLang],
    }
}

/// Transformation `star` takes under `year_stem`, if any.
pub fn transformation_of(year_stem: HeavenlyStem, star: Star) -> Option<Transformation> {
    sihua_stars(year_stem)
        .iter()
        .position(|&s| s == star)
        .map(|i| ALL_TRANSFORMATIONS[i])
}

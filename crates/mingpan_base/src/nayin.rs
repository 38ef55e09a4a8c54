//! Na Yin (納音) sounds and the ZiWei Five Elements Bureau (五行局).
//!
//! Each of the 30 Na Yin covers two consecutive sexagenary positions
//! (甲子乙丑 海中金, 丙寅丁卯 爐中火, ...). A Na Yin's element is independent
//! of the stem and branch elements of the pair it covers. The Bureau number
//! that drives ZiWei placement is read off the Na Yin element.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::ChartError;
use crate::ganzhi::{GanZhi, ganzhi_to_index};
use crate::stem::HeavenlyStem;
use crate::wuxing::Element;

/// The 30 Na Yin sounds, in cycle order starting at 甲子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum NaYin {
    HaiZhongJin,
    LuZhongHuo,
    DaLinMu,
    LuPangTu,
    JianFengJin,
    ShanTouHuo,
    JianXiaShui,
    ChengTouTu,
    BaiLaJin,
    YangLiuMu,
    QuanZhongShui,
    WuShangTu,
    PiLiHuo,
    SongBaiMu,
    ChangLiuShui,
    ShaZhongJin,
    ShanXiaHuo,
    PingDiMu,
    BiShangTu,
    JinBoJin,
    FuDengHuo,
    TianHeShui,
    DaYiTu,
    ChaiChuanJin,
    SangZheMu,
    DaXiShui,
    ShaZhongTu,
    TianShangHuo,
    ShiLiuMu,
    DaHaiShui,
}

/// All 30 Na Yin; entry `k` covers sexagenary indices `2k` and `2k + 1`.
pub const ALL_NAYIN: [NaYin; 30] = [
    NaYin::HaiZhongJin,
    NaYin::LuZhongHuo,
    NaYin::DaLinMu,
    NaYin::LuPangTu,
    NaYin::JianFengJin,
    NaYin::ShanTouHuo,
    NaYin::JianXiaShui,
    NaYin::ChengTouTu,
    NaYin::BaiLaJin,
    NaYin::YangLiuMu,
    NaYin::QuanZhongShui,
    NaYin::WuShangTu,
    NaYin::PiLiHuo,
    NaYin::SongBaiMu,
    NaYin::ChangLiuShui,
    NaYin::ShaZhongJin,
    NaYin::ShanXiaHuo,
    NaYin::PingDiMu,
    NaYin::BiShangTu,
    NaYin::JinBoJin,
    NaYin::FuDengHuo,
    NaYin::TianHeShui,
    NaYin::DaYiTu,
    NaYin::ChaiChuanJin,
    NaYin::SangZheMu,
    NaYin::DaXiShui,
    NaYin::ShaZhongTu,
    NaYin::TianShangHuo,
    NaYin::ShiLiuMu,
    NaYin::DaHaiShui,
];

impl NaYin {
    /// Traditional name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::HaiZhongJin => "海中金",
            Self::LuZhongHuo => "爐中火",
            Self::DaLinMu => "大林木",
            Self::LuPangTu => "路旁土",
            Self::JianFengJin => "劍鋒金",
            Self::ShanTouHuo => "山頭火",
            Self::JianXiaShui => "澗下水",
            Self::ChengTouTu => "城頭土",
            Self::BaiLaJin => "白蠟金",
            Self::YangLiuMu => "楊柳木",
            Self::QuanZhongShui => "泉中水",
            Self::WuShangTu => "屋上土",
            Self::PiLiHuo => "霹靂火",
            Self::SongBaiMu => "松柏木",
            Self::ChangLiuShui => "長流水",
            Self::ShaZhongJin => "沙中金",
            Self::ShanXiaHuo => "山下火",
            Self::PingDiMu => "平地木",
            Self::BiShangTu => "壁上土",
            Self::JinBoJin => "金箔金",
            Self::FuDengHuo => "覆燈火",
            Self::TianHeShui => "天河水",
            Self::DaYiTu => "大驛土",
            Self::ChaiChuanJin => "釵釧金",
            Self::SangZheMu => "桑柘木",
            Self::DaXiShui => "大溪水",
            Self::ShaZhongTu => "沙中土",
            Self::TianShangHuo => "天上火",
            Self::ShiLiuMu => "石榴木",
            Self::DaHaiShui => "大海水",
        }
    }

    /// Element of the sound (the last character of its name).
    pub const fn element(self) -> Element {
        match self {
            Self::HaiZhongJin
            | Self::JianFengJin
            | Self::BaiLaJin
            | Self::ShaZhongJin
            | Self::JinBoJin
            | Self::ChaiChuanJin => Element::Metal,
            Self::LuZhongHuo
            | Self::ShanTouHuo
            | Self::PiLiHuo
            | Self::ShanXiaHuo
            | Self::FuDengHuo
            | Self::TianShangHuo => Element::Fire,
            Self::DaLinMu
            | Self::YangLiuMu
            | Self::SongBaiMu
            | Self::PingDiMu
            | Self::SangZheMu
            | Self::ShiLiuMu => Element::Wood,
            Self::LuPangTu
            | Self::ChengTouTu
            | Self::WuShangTu
            | Self::BiShangTu
            | Self::DaYiTu
            | Self::ShaZhongTu => Element::Earth,
            Self::JianXiaShui
            | Self::QuanZhongShui
            | Self::ChangLiuShui
            | Self::TianHeShui
            | Self::DaXiShui
            | Self::DaHaiShui => Element::Water,
        }
    }
}

/// Na Yin of a GanZhi.
pub const fn nayin(gz: GanZhi) -> NaYin {
    ALL_NAYIN[(gz.index() / 2) as usize]
}

/// The Five Elements Bureau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FiveElementsBureau {
    /// 水二局
    Water2,
    /// 木三局
    Wood3,
    /// 金四局
    Metal4,
    /// 土五局
    Earth5,
    /// 火六局
    Fire6,
}

/// All 5 bureaus in ascending number order.
pub const ALL_BUREAUS: [FiveElementsBureau; 5] = [
    FiveElementsBureau::Water2,
    FiveElementsBureau::Wood3,
    FiveElementsBureau::Metal4,
    FiveElementsBureau::Earth5,
    FiveElementsBureau::Fire6,
];

impl FiveElementsBureau {
    /// Bureau number, 2..=6.
    pub const fn number(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Paired element.
    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    /// Bureau for a Na Yin element.
    pub const fn from_element(e: Element) -> Self {
        match e {
            Element::Water => Self::Water2,
            Element::Wood => Self::Wood3,
            Element::Metal => Self::Metal4,
            Element::Earth => Self::Earth5,
            Element::Fire => Self::Fire6,
        }
    }

    /// Bureau for a number in 2..=6.
    pub fn from_number(n: u8) -> Option<Self> {
        ALL_BUREAUS.iter().copied().find(|b| b.number() == n)
    }

    /// Traditional name (水二局 etc.).
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }
}

/// Bureau of a (Life Palace) GanZhi.
pub const fn bureau_for(gz: GanZhi) -> FiveElementsBureau {
    FiveElementsBureau::from_element(nayin(gz).element())
}

/// Bureau of a raw stem/branch pair.
///
/// Fails with [`ChartError::InvalidGanZhi`] when the pair is not one of the 60.
pub fn bureau_for_pair(
    stem: HeavenlyStem,
    branch: EarthlyBranch,
) -> Result<FiveElementsBureau, ChartError> {
    let idx = ganzhi_to_index(stem, branch)?;
    Ok(FiveElementsBureau::from_element(
        ALL_NAYIN[(idx / 2) as usize].element(),
    ))
}

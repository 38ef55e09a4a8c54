//! Pure-math engine for BaZi (Four Pillars) and ZiWei Dou Shu charts.
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches and their hidden stems
//! - The sexagenary (GanZhi) codec and year pillars
//! - Wu Xing relations and the Ten Gods
//! - Na Yin sounds and the ZiWei Five Elements Bureau
//! - DaYun decennial cycles
//! - ZiWei palaces, star placement and the Four Transformations
//!
//! Every function is pure and table-driven; there is no hidden state.

pub mod branch;
pub mod dayun;
pub mod error;
pub mod ganzhi;
pub mod nayin;
pub mod stem;
pub mod ten_gods;
pub mod util;
pub mod wuxing;
pub mod ziwei;

pub use branch::{ALL_BRANCHES, EarthlyBranch, hour_branch_from_clock, hour_branch_from_index};
pub use dayun::{
    DEFAULT_CYCLE_COUNT, DayunCycle, DayunDirection, Gender, MAX_CYCLE_COUNT, YEARS_PER_CYCLE, current_cycle,
    dayun_cycles, dayun_cycles_from_age, find_active_cycle,
};
pub use error::ChartError;
pub use ganzhi::{
    ALL_GANZHI, CYCLE_LEN, GanZhi, ganzhi_to_index, index_to_ganzhi, is_valid_pair, year_ganzhi,
};
pub use nayin::{ALL_BUREAUS, ALL_NAYIN, FiveElementsBureau, NaYin, bureau_for, bureau_for_pair, nayin};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_gods::{ALL_TEN_GODS, TenGod, all_ten_gods, ten_god, ten_god_for_symbols};
pub use wuxing::{
    ALL_ELEMENTS, ALL_RELATIONS, Element, Polarity, WuXingRelation, branch_element,
    branch_element_of, relation, stem_element, stem_element_of,
};
pub use ziwei::{Palace, PalaceName, PalaceRef, PlacedStar, Star, Transformation, ZiweiLayout, ziwei_layout};

//! Chart assembly on top of `mingpan_base`.
//!
//! Turns one resolved [`BirthInput`] into a [`FullChart`] with three sides:
//! - BaZi: pillars, Ten Gods, hidden stems and Na Yin
//! - ZiWei: palaces, bureau and star placement
//! - Fortune: DaYun cycles and the active cycle for a query date

pub mod bazi;
pub mod chart;
pub mod config;
pub mod error;
pub mod fortune;
pub mod input;
pub mod memo;
pub mod ziwei;

pub use bazi::{BaziChart, HiddenStem, PerPillar, StemTenGods, bazi_chart};
pub use chart::{FullChart, full_chart};
pub use config::ChartConfig;
pub use error::{ChartError, ConfigError};
pub use fortune::{FortuneChart, dayun_direction, fortune_chart};
pub use input::{BirthInput, FourPillars};
pub use memo::{ChartMemo, MemoStats};
pub use ziwei::{ZiweiChart, ziwei_chart};

//! Fortune side of the chart: the DaYun walk and the active cycle.

use mingpan_base::{ChartError, DayunCycle, DayunDirection, current_cycle, dayun_cycles_from_age};
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::input::BirthInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneChart {
    pub direction: DayunDirection,
    pub cycles: Vec<DayunCycle>,
    /// Cycle active on the configured query date. `None` without a query
    /// date or when the date falls outside every cycle.
    pub current: Option<DayunCycle>,
}

/// Walk direction: the config override, otherwise year-stem polarity and gender.
pub fn dayun_direction(input: &BirthInput, config: &ChartConfig) -> DayunDirection {
    config.dayun_direction.unwrap_or_else(|| {
        DayunDirection::for_birth(input.pillars.year.stem().polarity(), input.gender)
    })
}

/// Build the Fortune side. Requires `config.qiyun_date`.
pub fn fortune_chart(input: &BirthInput, config: &ChartConfig) -> Result<FortuneChart, ChartError> {
    let qiyun_date = config
        .qiyun_date
        .ok_or(ChartError::InvalidInput("qiyun date is required for dayun"))?;
    let direction = dayun_direction(input, config);
    let cycles = dayun_cycles_from_age(
        input.pillars.month,
        qiyun_date,
        config.qiyun_age,
        direction,
        config.dayun_count,
    )?;
    let current = config
        .query_date
        .and_then(|d| current_cycle(&cycles, d).copied());
    tracing::debug!(
        ?direction,
        cycles = cycles.len(),
        current = current.map(|c| c.order),
        "fortune chart"
    );
    Ok(FortuneChart {
        direction,
        cycles,
        current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FourPillars;
    use chrono::NaiveDate;
    use mingpan_base::Gender;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(gender: Gender) -> BirthInput {
        BirthInput {
            lunar_year: 1990,
            lunar_month: 7,
            lunar_day: 15,
            hour_branch: 6,
            is_leap_month: false,
            gender,
            pillars: FourPillars::parse("庚午", "甲申", "己卯", "壬申").unwrap(),
        }
    }

    fn config() -> ChartConfig {
        ChartConfig {
            qiyun_date: Some(ymd(1998, 3, 1)),
            qiyun_age: 8,
            dayun_count: 8,
            query_date: Some(ymd(2024, 6, 1)),
            ..ChartConfig::default()
        }
    }

    #[test]
    fn yang_year_male_walks_forward() {
        let f = fortune_chart(&input(Gender::Male), &config()).unwrap();
        assert_eq!(f.direction, DayunDirection::Forward);
        assert_eq!(f.cycles.len(), 8);
        assert_eq!(f.cycles[0].ganzhi.to_string(), "乙酉");
        assert_eq!(f.cycles[0].start_age, 8);
        // 2024-06-01 is in the third cycle (2018-03-01 .. 2028-03-01).
        let current = f.current.unwrap();
        assert_eq!(current.order, 3);
        assert_eq!(current.ganzhi.to_string(), "丁亥");
        assert_eq!((current.start_age, current.end_age), (28, 38));
    }

    #[test]
    fn yang_year_female_walks_backward() {
        let f = fortune_chart(&input(Gender::Female), &config()).unwrap();
        assert_eq!(f.direction, DayunDirection::Backward);
        assert_eq!(f.cycles[0].ganzhi.to_string(), "癸未");
    }

    #[test]
    fn override_wins() {
        let mut c = config();
        c.dayun_direction = Some(DayunDirection::Backward);
        let f = fortune_chart(&input(Gender::Male), &c).unwrap();
        assert_eq!(f.direction, DayunDirection::Backward);
    }

    #[test]
    fn no_query_date_no_current() {
        let mut c = config();
        c.query_date = None;
        assert!(fortune_chart(&input(Gender::Male), &c).unwrap().current.is_none());
        c.query_date = Some(ymd(1990, 1, 1));
        assert!(fortune_chart(&input(Gender::Male), &c).unwrap().current.is_none());
    }

    #[test]
    fn missing_qiyun_date() {
        assert_eq!(
            fortune_chart(&input(Gender::Male), &ChartConfig::default()),
            Err(ChartError::InvalidInput("qiyun date is required for dayun"))
        );
    }
}

//! DaYun (大運): decennial fortune cycles.
//!
//! Cycles step through the sexagenary cycle one position at a time from the
//! month pillar, forward or backward, each lasting exactly ten years from the
//! qiyun (起運) date. The direction and the qiyun date come from the caller.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::ganzhi::GanZhi;
use crate::wuxing::Polarity;

/// Length of one cycle in years.
pub const YEARS_PER_CYCLE: u32 = 10;

/// Default number of cycles generated for a chart.
pub const DEFAULT_CYCLE_COUNT: usize = 10;

/// Largest cycle count accepted (twice round the 60-cycle).
pub const MAX_CYCLE_COUNT: usize = 120;

/// Direction of the walk through the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayunDirection {
    Forward,
    Backward,
}

/// Gender as used by the direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl DayunDirection {
    /// Classical rule: yang-year male and yin-year female walk forward,
    /// the other two combinations walk backward.
    pub const fn for_birth(year_stem_polarity: Polarity, gender: Gender) -> Self {
        match (year_stem_polarity, gender) {
            (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => Self::Forward,
            (Polarity::Yang, Gender::Female) | (Polarity::Yin, Gender::Male) => Self::Backward,
        }
    }

    /// +1 for forward, -1 for backward.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// One ten-year cycle. `[start_date, end_date)` is half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayunCycle {
    /// Pillar ruling this cycle.
    pub ganzhi: GanZhi,
    /// Inclusive.
    pub start_date: NaiveDate,
    /// Exclusive.
    pub end_date: NaiveDate,
    /// Age at start, inclusive.
    pub start_age: u32,
    /// Age at end, exclusive.
    pub end_age: u32,
    /// 1-indexed position in the sequence.
    pub order: u16,
}

impl DayunCycle {
    /// Whether `date` falls inside this cycle.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.end_date
    }
}

fn years_after(date: NaiveDate, years: u32) -> Result<NaiveDate, ChartError> {
    years
        .checked_mul(12)
        .and_then(|m| date.checked_add_months(Months::new(m)))
        .ok_or(ChartError::InvalidInput("dayun date outside calendar range"))
}

/// Generate `count` cycles starting at age 0 on `qiyun_date`.
pub fn dayun_cycles(
    month_pillar: GanZhi,
    qiyun_date: NaiveDate,
    direction: DayunDirection,
    count: usize,
) -> Result<Vec<DayunCycle>, ChartError> {
    dayun_cycles_from_age(month_pillar, qiyun_date, 0, direction, count)
}

/// Generate `count` cycles, the first beginning at `qiyun_age` on `qiyun_date`.
///
/// Cycle `i` is the pillar `i + 1` steps from the month pillar. Both ends of
/// every cycle are measured from `qiyun_date` in whole months, so a cycle's
/// end is bit-identical to the next cycle's start even from 29 February.
///
/// Fails with [`ChartError::InvalidInput`] when `count` exceeds
/// [`MAX_CYCLE_COUNT`], or when an age or date leaves its range.
pub fn dayun_cycles_from_age(
    month_pillar: GanZhi,
    qiyun_date: NaiveDate,
    qiyun_age: u32,
    direction: DayunDirection,
    count: usize,
) -> Result<Vec<DayunCycle>, ChartError> {
    if count > MAX_CYCLE_COUNT {
        return Err(ChartError::InvalidInput("dayun cycle count too large"));
    }
    let idx0 = month_pillar.index() as i64;
    let mut cycles = Vec::with_capacity(count);
    let mut start_date = qiyun_date;

    for i in 0..count {
        // count <= MAX_CYCLE_COUNT keeps these in range.
        let span = (i as u32 + 1) * YEARS_PER_CYCLE;
        let end_date = years_after(qiyun_date, span)?;
        let start_age = qiyun_age
            .checked_add(span - YEARS_PER_CYCLE)
            .ok_or(ChartError::InvalidInput("dayun age out of range"))?;
        let end_age = start_age
            .checked_add(YEARS_PER_CYCLE)
            .ok_or(ChartError::InvalidInput("dayun age out of range"))?;
        let ganzhi = crate::ganzhi::index_to_ganzhi(idx0 + direction.step() * (i as i64 + 1));

        cycles.push(DayunCycle {
            ganzhi,
            start_date,
            end_date,
            start_age,
            end_age,
            order: (i as u16) + 1,
        });
        start_date = end_date;
    }

    tracing::trace!(
        month_pillar = %month_pillar,
        ?direction,
        count,
        "generated dayun cycles"
    );
    Ok(cycles)
}

/// Index of the cycle containing `query_date`, if any.
pub fn find_active_cycle(cycles: &[DayunCycle], query_date: NaiveDate) -> Option<usize> {
    cycles.iter().position(|c| c.contains(query_date))
}

/// Cycle containing `query_date`.
///
/// `None` before the first cycle or at/after the last cycle's end; this is a
/// valid answer, not an error.
pub fn current_cycle(cycles: &[DayunCycle], query_date: NaiveDate) -> Option<&DayunCycle> {
    find_active_cycle(cycles, query_date).map(|i| &cycles[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::index_to_ganzhi;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn jiazi_forward_three() {
        let jiazi = GanZhi::parse("甲子").unwrap();
        let cycles =
            dayun_cycles_from_age(jiazi, ymd(2000, 1, 1), 10, DayunDirection::Forward, 3).unwrap();
        let names: Vec<String> = cycles.iter().map(|c| c.ganzhi.to_string()).collect();
        assert_eq!(names, ["乙丑", "丙寅", "丁卯"]);
        assert_eq!(
            cycles.iter().map(|c| (c.start_age, c.end_age)).collect::<Vec<_>>(),
            [(10, 20), (20, 30), (30, 40)]
        );
        assert_eq!(cycles[0].start_date, ymd(2000, 1, 1));
        assert_eq!(cycles[0].end_date, ymd(2010, 1, 1));
        assert_eq!(cycles[2].end_date, ymd(2030, 1, 1));
    }

    #[test]
    fn ages_from_zero() {
        let cycles = dayun_cycles(
            index_to_ganzhi(0),
            ymd(2000, 1, 1),
            DayunDirection::Forward,
            2,
        )
        .unwrap();
        assert_eq!((cycles[0].start_age, cycles[0].end_age), (0, 10));
        assert_eq!((cycles[1].start_age, cycles[1].end_age), (10, 20));
    }

    #[test]
    fn backward_walk() {
        let cycles = dayun_cycles(
            GanZhi::parse("甲子").unwrap(),
            ymd(1995, 6, 15),
            DayunDirection::Backward,
            2,
        )
        .unwrap();
        assert_eq!(cycles[0].ganzhi.to_string(), "癸亥");
        assert_eq!(cycles[1].ganzhi.to_string(), "壬戌");
    }

    #[test]
    fn contiguous_and_ten_years() {
        let cycles = dayun_cycles(
            GanZhi::parse("丁卯").unwrap(),
            ymd(2004, 2, 29),
            DayunDirection::Forward,
            12,
        )
        .unwrap();
        for w in cycles.windows(2) {
            assert_eq!(w[0].end_date, w[1].start_date);
            assert_eq!(w[0].end_age, w[1].start_age);
            assert_eq!(w[1].ganzhi, w[0].ganzhi.next());
        }
        for c in &cycles {
            assert_eq!(c.end_age - c.start_age, 10);
            assert!(c.start_date < c.end_date);
        }
        // 2004-02-29 + 20y falls on a leap day again.
        assert_eq!(cycles[1].end_date, ymd(2024, 2, 29));
    }

    #[test]
    fn sixty_steps_wrap_to_start() {
        for start in [0i64, 17, 59] {
            let pillar = index_to_ganzhi(start);
            for dir in [DayunDirection::Forward, DayunDirection::Backward] {
                let cycles = dayun_cycles(pillar, ymd(1900, 1, 1), dir, 60).unwrap();
                assert_eq!(cycles.len(), 60);
                assert_eq!(cycles[59].ganzhi, pillar, "{pillar} {dir:?}");
            }
        }
    }

    #[test]
    fn current_cycle_half_open() {
        let cycles = dayun_cycles(
            index_to_ganzhi(0),
            ymd(2000, 1, 1),
            DayunDirection::Forward,
            3,
        )
        .unwrap();
        let at_boundary = current_cycle(&cycles, cycles[0].end_date).unwrap();
        assert_eq!(at_boundary.order, 2);
        assert_eq!(current_cycle(&cycles, ymd(2000, 1, 1)).unwrap().order, 1);
        assert_eq!(current_cycle(&cycles, ymd(2009, 12, 31)).unwrap().order, 1);
    }

    #[test]
    fn current_cycle_out_of_range() {
        let cycles = dayun_cycles(
            index_to_ganzhi(0),
            ymd(2000, 1, 1),
            DayunDirection::Forward,
            3,
        )
        .unwrap();
        assert!(current_cycle(&cycles, ymd(1999, 12, 31)).is_none());
        assert!(current_cycle(&cycles, ymd(2030, 1, 1)).is_none());
        assert!(current_cycle(&[], ymd(2000, 1, 1)).is_none());
    }

    #[test]
    fn zero_count_is_empty() {
        let cycles = dayun_cycles(
            index_to_ganzhi(0),
            ymd(2000, 1, 1),
            DayunDirection::Forward,
            0,
        )
        .unwrap();
        assert!(cycles.is_empty());
    }

    #[test]
    fn date_overflow_reported() {
        let r = dayun_cycles(
            index_to_ganzhi(0),
            NaiveDate::MAX,
            DayunDirection::Forward,
            1,
        );
        assert_eq!(
            r,
            Err(ChartError::InvalidInput("dayun date outside calendar range"))
        );
    }

    #[test]
    fn oversized_count_rejected() {
        let jiazi = index_to_ganzhi(0);
        for count in [MAX_CYCLE_COUNT + 1, usize::MAX] {
            assert_eq!(
                dayun_cycles(jiazi, ymd(2000, 1, 1), DayunDirection::Forward, count),
                Err(ChartError::InvalidInput("dayun cycle count too large"))
            );
        }
        let cycles =
            dayun_cycles(jiazi, ymd(1900, 1, 1), DayunDirection::Forward, MAX_CYCLE_COUNT)
                .unwrap();
        assert_eq!(cycles.len(), MAX_CYCLE_COUNT);
        assert_eq!(cycles[MAX_CYCLE_COUNT - 1].end_age, 1200);
    }

    #[test]
    fn age_overflow_reported() {
        let jiazi = index_to_ganzhi(0);
        assert_eq!(
            dayun_cycles_from_age(jiazi, ymd(2000, 1, 1), u32::MAX - 5, DayunDirection::Forward, 1),
            Err(ChartError::InvalidInput("dayun age out of range"))
        );
        assert_eq!(
            dayun_cycles_from_age(jiazi, ymd(2000, 1, 1), u32::MAX - 15, DayunDirection::Forward, 2),
            Err(ChartError::InvalidInput("dayun age out of range"))
        );
        let last = dayun_cycles_from_age(
            jiazi,
            ymd(2000, 1, 1),
            u32::MAX - 10,
            DayunDirection::Forward,
            1,
        )
        .unwrap();
        assert_eq!(last[0].end_age, u32::MAX);
    }

    #[test]
    fn direction_rule() {
        use Polarity::*;
        assert_eq!(DayunDirection::for_birth(Yang, Gender::Male), DayunDirection::Forward);
        assert_eq!(DayunDirection::for_birth(Yin, Gender::Female), DayunDirection::Forward);
        assert_eq!(DayunDirection::for_birth(Yang, Gender::Female), DayunDirection::Backward);
        assert_eq!(DayunDirection::for_birth(Yin, Gender::Male), DayunDirection::Backward);
    }
}

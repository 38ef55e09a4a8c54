//! Caller-side memoization for [`full_chart`].
//!
//! The chart functions stay stateless; a `ChartMemo` is owned and passed
//! around by whoever wants repeated lookups to be cheap.

use std::collections::HashMap;

use mingpan_base::ChartError;

use crate::chart::{FullChart, full_chart};
use crate::config::ChartConfig;
use crate::input::BirthInput;

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Bounded map from `(input, config)` to computed charts.
///
/// Once `capacity` entries are stored, new keys are computed but not kept.
/// Failed computations are never stored.
#[derive(Debug)]
pub struct ChartMemo {
    charts: HashMap<(BirthInput, ChartConfig), FullChart>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl ChartMemo {
    pub fn new(capacity: usize) -> Self {
        Self {
            charts: HashMap::with_capacity(capacity.min(64)),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Chart for `(input, config)`, computing it on first request.
    pub fn chart(
        &mut self,
        input: &BirthInput,
        config: &ChartConfig,
    ) -> Result<FullChart, ChartError> {
        let key = (input.clone(), config.clone());
        if let Some(cached) = self.charts.get(&key) {
            self.hits = self.hits.saturating_add(1);
            return Ok(cached.clone());
        }
        self.misses = self.misses.saturating_add(1);
        let chart = full_chart(input, config)?;
        if self.charts.len() < self.capacity {
            self.charts.insert(key, chart.clone());
        }
        Ok(chart)
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.charts.len(),
        }
    }

    pub fn clear(&mut self) {
        self.charts.clear();
    }
}

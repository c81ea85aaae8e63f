use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::spread::SpreadKind;

/// Reading counters for one calendar day.
///
/// Counters are monotonically non-decreasing within a day and satisfy
/// `total == single + three_card + celtic_cross` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    /// The day this row aggregates.
    pub day: NaiveDate,
    /// Total readings performed on this day.
    pub total: u64,
    /// Single-card readings.
    pub single: u64,
    /// Three-card readings.
    pub three_card: u64,
    /// Celtic Cross readings.
    pub celtic_cross: u64,
}

impl DailyStats {
    /// A zeroed row for the given day.
    pub fn zero(day: NaiveDate) -> Self {
        Self {
            day,
            total: 0,
            single: 0,
            three_card: 0,
            celtic_cross: 0,
        }
    }

    /// Add one completed reading of the given kind.
    pub fn record(&mut self, kind: SpreadKind) {
        self.total += 1;
        match kind {
            SpreadKind::Single => self.single += 1,
            SpreadKind::ThreeCard => self.three_card += 1,
            SpreadKind::CelticCross => self.celtic_cross += 1,
        }
    }

    /// The counter for one spread kind.
    pub fn count_for(&self, kind: SpreadKind) -> u64 {
        match kind {
            SpreadKind::Single => self.single,
            SpreadKind::ThreeCard => self.three_card,
            SpreadKind::CelticCross => self.celtic_cross,
        }
    }

    /// True if the total equals the sum of the per-kind counters.
    pub fn is_consistent(&self) -> bool {
        self.total == self.single + self.three_card + self.celtic_cross
    }
}

/// Aggregate reading counters across every recorded day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOverview {
    /// All-time total readings.
    pub total: u64,
    /// Readings completed on the reference day.
    pub today: u64,
    /// All-time single-card readings.
    pub single: u64,
    /// All-time three-card readings.
    pub three_card: u64,
    /// All-time Celtic Cross readings.
    pub celtic_cross: u64,
}

impl StatsOverview {
    /// Fold a set of daily rows into the aggregate view, treating `today`
    /// as the reference day for the today counter.
    pub fn from_days(days: &[DailyStats], today: NaiveDate) -> Self {
        let mut overview = Self {
            total: 0,
            today: 0,
            single: 0,
            three_card: 0,
            celtic_cross: 0,
        };
        for row in days {
            overview.total += row.total;
            overview.single += row.single;
            overview.three_card += row.three_card;
            overview.celtic_cross += row.celtic_cross;
            if row.day == today {
                overview.today += row.total;
            }
        }
        overview
    }
}

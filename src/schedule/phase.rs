use chrono::NaiveDate;

use crate::config::Config;
use crate::types::plan::Phase;

/// Which training block a date falls in. Boundaries come from the
/// plan config; dates before the strength block are base building,
/// dates before the taper block are strength work, everything after
/// is taper.
pub fn phase_for(date: NaiveDate, config: &Config) -> Phase {
    if date < config.build_start {
        Phase::BaseBuilding
    } else if date < config.peak_start {
        Phase::StrengthPower
    } else {
        Phase::TaperPeak
    }
}

/// Whole weeks elapsed from `from` to `to`, truncated toward zero.
pub fn weeks_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_weeks()
}

pub fn weeks_to_race(date: NaiveDate, config: &Config) -> i64 {
    weeks_between(date, config.race_date)
}

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::types::journal::RunLog;
use crate::types::plan::TrainingDay;

use super::round_to_tenth;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_runs: usize,
    pub completed_runs: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub distance_km: f64,
    pub completed_count: usize,
    pub scheduled_count: usize,
    pub avg_effort: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTimeSummary {
    pub distance_km: f64,
    pub longest_run_km: f64,
    pub session_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub progress: ProgressSummary,
    pub weekly: WeeklySummary,
    pub all_time: AllTimeSummary,
}

/// Derives the dashboard numbers from a generated schedule. `today`
/// anchors the trailing seven-day window.
pub fn summarize(
    schedule: &[TrainingDay],
    logs: &HashMap<NaiveDate, RunLog>,
    today: NaiveDate,
) -> StatsSummary {
    StatsSummary {
        progress: progress(schedule),
        weekly: weekly(schedule, logs, today),
        all_time: all_time(schedule),
    }
}

/// Season progress counts training days only; rest days neither add
/// to the total nor count as completed runs.
pub fn progress(schedule: &[TrainingDay]) -> ProgressSummary {
    let total_runs = schedule.iter().filter(|d| d.is_training_day()).count();
    let completed_runs = schedule
        .iter()
        .filter(|d| d.is_training_day() && d.is_completed)
        .count();

    let percent = if total_runs > 0 {
        (completed_runs as f64 / total_runs as f64 * 100.0).round() as u32
    } else {
        0
    };

    ProgressSummary {
        total_runs,
        completed_runs,
        percent,
    }
}

/// Trailing seven calendar days ending at `today`, inclusive.
pub fn weekly(
    schedule: &[TrainingDay],
    logs: &HashMap<NaiveDate, RunLog>,
    today: NaiveDate,
) -> WeeklySummary {
    let window_start = today - Days::new(6);

    let in_window: Vec<&TrainingDay> = schedule
        .iter()
        .filter(|d| d.date >= window_start && d.date <= today && d.is_training_day())
        .collect();

    let completed: Vec<&TrainingDay> = in_window
        .iter()
        .copied()
        .filter(|d| d.is_completed)
        .collect();

    let distance_km: f64 = completed.iter().map(|d| d.distance_km()).sum();

    let efforts: Vec<f64> = completed
        .iter()
        .filter_map(|d| logs.get(&d.date))
        .map(|log| f64::from(log.perceived_effort))
        .collect();
    let avg_effort = if efforts.is_empty() {
        0.0
    } else {
        round_to_tenth(efforts.iter().sum::<f64>() / efforts.len() as f64)
    };

    WeeklySummary {
        distance_km: round_to_tenth(distance_km),
        completed_count: completed.len(),
        scheduled_count: in_window.len(),
        avg_effort,
    }
}

pub fn all_time(schedule: &[TrainingDay]) -> AllTimeSummary {
    let completed: Vec<&TrainingDay> = schedule.iter().filter(|d| d.is_completed).collect();

    let distance_km: f64 = completed.iter().map(|d| d.distance_km()).sum();
    let longest_run_km = completed
        .iter()
        .map(|d| d.distance_km())
        .fold(0.0_f64, f64::max);
    let session_count = completed.iter().filter(|d| d.is_training_day()).count();

    AllTimeSummary {
        distance_km: round_to_tenth(distance_km),
        longest_run_km: round_to_tenth(longest_run_km),
        session_count,
    }
}

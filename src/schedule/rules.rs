use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::Config;
use crate::types::plan::{ActivityKind, Phase};

use super::phase::{weeks_between, weeks_to_race};

pub const RACE_DISTANCE_KM: f64 = 21.1;
pub const RACE_DESCRIPTION: &str = "THIS IS IT! The Melbourne Half Marathon. You've got this!";

/// One planned session, before it is wrapped into a `TrainingActivity`.
#[derive(Debug, Clone)]
pub struct Session {
    pub kind: ActivityKind,
    pub description: &'static str,
    pub distance_km: Option<f64>,
}

impl Session {
    fn run(kind: ActivityKind, description: &'static str, distance_km: f64) -> Self {
        Self {
            kind,
            description,
            distance_km: Some(distance_km),
        }
    }

    fn workout(kind: ActivityKind, description: &'static str) -> Self {
        Self {
            kind,
            description,
            distance_km: None,
        }
    }

    fn rest() -> Self {
        Self::workout(ActivityKind::RestDay, "Take it easy and recover.")
    }
}

pub fn race_session() -> Session {
    Session::run(ActivityKind::Race, RACE_DESCRIPTION, RACE_DISTANCE_KM)
}

pub fn session_for(date: NaiveDate, phase: Phase, config: &Config) -> Session {
    match phase {
        Phase::BaseBuilding => base_session(date, config),
        Phase::StrengthPower => build_session(date, config),
        Phase::TaperPeak => peak_session(date, config),
    }
}

/// Base block: two short easy runs and a Sunday long run that ramps
/// from 6 km to 10 km across the block.
fn base_session(date: NaiveDate, config: &Config) -> Session {
    match date.weekday() {
        Weekday::Tue => Session::run(ActivityKind::EasyRun, "Easy effort, focus on form.", 5.0),
        Weekday::Thu => Session::run(
            ActivityKind::EasyRun,
            "Maintain a steady, comfortable pace.",
            6.0,
        ),
        Weekday::Sun => {
            let total = weeks_between(config.start_date, config.base_ramp_end).max(1);
            let elapsed = weeks_between(config.start_date, date);
            Session::run(
                ActivityKind::LongRun,
                "Build your endurance base. Slow and steady.",
                ramp(6.0, 10.0, elapsed, total),
            )
        }
        _ => Session::rest(),
    }
}

/// Strength block: hills, gym work, and a long run ramping 10 km to
/// 16 km.
fn build_session(date: NaiveDate, config: &Config) -> Session {
    match date.weekday() {
        Weekday::Tue => Session::run(ActivityKind::EasyRun, "Recovery pace run.", 7.0),
        Weekday::Thu => Session::workout(
            ActivityKind::HillRepeats,
            "Find a moderate incline. 60s up, walk down. Repeat 6-8 times.",
        ),
        Weekday::Sat => Session::workout(
            ActivityKind::GymWorkout,
            "Focus on leg strength: Squats, Lunges, and Calf Raises.",
        ),
        Weekday::Sun => {
            let elapsed = weeks_between(config.build_start, date);
            Session::run(
                ActivityKind::LongRun,
                "Developing strength and stamina.",
                ramp(10.0, 16.0, elapsed, config.build_ramp_weeks),
            )
        }
        _ => Session::rest(),
    }
}

/// Taper block: peak mileage with alternating Friday gym sessions,
/// then a near-empty final week before the race.
fn peak_session(date: NaiveDate, config: &Config) -> Session {
    if weeks_to_race(date, config) <= 1 {
        return match date.weekday() {
            Weekday::Tue => {
                Session::run(ActivityKind::EasyRun, "Keep the legs moving, very light.", 4.0)
            }
            Weekday::Thu => Session::run(ActivityKind::EasyRun, "Pre-race shakeout run.", 3.0),
            _ => Session::rest(),
        };
    }

    match date.weekday() {
        Weekday::Mon => Session::run(ActivityKind::EasyRun, "Aerobic maintenance.", 8.0),
        Weekday::Wed => Session::run(
            ActivityKind::EasyRun,
            "Comfortable pace with light speed play.",
            10.0,
        ),
        Weekday::Fri => {
            if weeks_between(config.peak_start, date) % 2 == 0 {
                Session::workout(
                    ActivityKind::GymWorkout,
                    "Heavy lower body lifting with low reps.",
                )
            } else {
                Session::workout(
                    ActivityKind::StrengthTraining,
                    "Core stability and single-leg balance work.",
                )
            }
        }
        Weekday::Sun => {
            let elapsed = weeks_between(config.peak_start, date);
            Session::run(
                ActivityKind::LongRun,
                "Final peak mileage before the big day.",
                ramp(16.0, 21.0, elapsed, config.peak_ramp_weeks),
            )
        }
        _ => Session::rest(),
    }
}

/// Linear interpolation from `base` toward `cap` over `total` weeks,
/// clamped at the cap once the ramp is done.
fn ramp(base: f64, cap: f64, elapsed: i64, total: i64) -> f64 {
    (base + elapsed as f64 / total as f64 * (cap - base)).min(cap)
}

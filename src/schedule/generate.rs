use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::config::Config;
use crate::types::plan::{DayOverride, Phase, TrainingActivity, TrainingDay, DEFAULT_ACTIVITY_ID};

use super::phase::phase_for;
use super::rules::{race_session, session_for};
use super::round_to_tenth;

/// Builds the full season, one `TrainingDay` per calendar day from the
/// plan start through race day inclusive. Pure: the same inputs always
/// produce the same schedule.
///
/// Overrides replace a day's activity list wholesale; the day keeps
/// its phase and completion flag. A race date before the start date
/// yields an empty schedule.
pub fn generate(
    config: &Config,
    completed: &HashSet<NaiveDate>,
    overrides: &HashMap<NaiveDate, DayOverride>,
) -> Vec<TrainingDay> {
    if config.race_date < config.start_date {
        return Vec::new();
    }

    let season_days = (config.race_date - config.start_date).num_days() as usize + 1;
    let mut schedule = Vec::with_capacity(season_days);

    for date in config.start_date.iter_days() {
        if date > config.race_date {
            break;
        }

        // Race day trumps the weekly rules, whatever weekday it lands on.
        let (phase, session) = if date == config.race_date {
            (Phase::TaperPeak, race_session())
        } else {
            let phase = phase_for(date, config);
            (phase, session_for(date, phase, config))
        };

        let activities = match overrides.get(&date) {
            Some(day_override) => day_override.activities.clone(),
            None => vec![TrainingActivity {
                id: DEFAULT_ACTIVITY_ID.to_string(),
                activity: session.kind,
                description: session.description.to_string(),
                distance_km: session.distance_km.map(round_to_tenth),
            }],
        };

        schedule.push(TrainingDay {
            date,
            phase,
            activities,
            is_completed: completed.contains(&date),
        });
    }

    schedule
}

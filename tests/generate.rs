use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use runplan_rs::{
    config::Config,
    schedule::generate,
    types::plan::{ActivityKind, DayOverride, Phase, TrainingActivity},
};

fn date(s: &str) -> NaiveDate {
    s.parse().expect("date")
}

fn no_completions() -> HashSet<NaiveDate> {
    HashSet::new()
}

fn no_overrides() -> HashMap<NaiveDate, DayOverride> {
    HashMap::new()
}

#[test]
fn full_season_spans_start_through_race_day() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());

    assert_eq!(schedule.len(), 246);
    assert_eq!(schedule[0].date, date("2026-02-08"));
    assert_eq!(schedule[245].date, date("2026-10-11"));
}

#[test]
fn race_day_is_always_the_race() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());

    let race_day = schedule.last().expect("race day");
    assert_eq!(race_day.phase, Phase::TaperPeak);
    assert_eq!(race_day.activities.len(), 1);
    assert_eq!(race_day.activities[0].id, "default");
    assert_eq!(race_day.activities[0].activity, ActivityKind::Race);
    assert_eq!(race_day.activities[0].distance_km, Some(21.1));
    assert!(!race_day.is_completed);
}

#[test]
fn race_day_invariant_holds_on_any_weekday() {
    // 2026-10-06 is a Tuesday; the race rule must still win.
    let mut config = Config::default();
    config.race_date = date("2026-10-06");
    let schedule = generate(&config, &no_completions(), &no_overrides());

    let race_day = schedule.last().expect("race day");
    assert_eq!(race_day.date, date("2026-10-06"));
    assert_eq!(race_day.phase, Phase::TaperPeak);
    assert_eq!(race_day.activities[0].activity, ActivityKind::Race);
    assert_eq!(race_day.activities[0].distance_km, Some(21.1));
}

#[test]
fn empty_when_race_precedes_start() {
    let mut config = Config::default();
    config.race_date = date("2026-02-07");
    let schedule = generate(&config, &no_completions(), &no_overrides());

    assert!(schedule.is_empty());
}

#[test]
fn single_day_season_is_race_day() {
    let mut config = Config::default();
    config.race_date = config.start_date;
    let schedule = generate(&config, &no_completions(), &no_overrides());

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].activities[0].activity, ActivityKind::Race);
}

#[test]
fn base_phase_week_rhythm() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());
    let by_date: HashMap<NaiveDate, _> = schedule.iter().map(|d| (d.date, d)).collect();

    // Monday rests.
    let monday = by_date[&date("2026-02-09")];
    assert_eq!(monday.phase, Phase::BaseBuilding);
    assert_eq!(monday.activities[0].activity, ActivityKind::RestDay);
    assert_eq!(monday.activities[0].description, "Take it easy and recover.");
    assert_eq!(monday.activities[0].distance_km, None);

    // Tuesday and Thursday easy runs.
    let tuesday = by_date[&date("2026-02-10")];
    assert_eq!(tuesday.activities[0].activity, ActivityKind::EasyRun);
    assert_eq!(tuesday.activities[0].description, "Easy effort, focus on form.");
    assert_eq!(tuesday.activities[0].distance_km, Some(5.0));

    let thursday = by_date[&date("2026-02-12")];
    assert_eq!(thursday.activities[0].activity, ActivityKind::EasyRun);
    assert_eq!(thursday.activities[0].distance_km, Some(6.0));

    // Sunday long run starts at the 6 km floor.
    let sunday = by_date[&date("2026-02-08")];
    assert_eq!(sunday.activities[0].activity, ActivityKind::LongRun);
    assert_eq!(sunday.activities[0].distance_km, Some(6.0));
}

#[test]
fn strength_phase_week_rhythm() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());
    let by_date: HashMap<NaiveDate, _> = schedule.iter().map(|d| (d.date, d)).collect();

    let tuesday = by_date[&date("2026-05-05")];
    assert_eq!(tuesday.phase, Phase::StrengthPower);
    assert_eq!(tuesday.activities[0].activity, ActivityKind::EasyRun);
    assert_eq!(tuesday.activities[0].description, "Recovery pace run.");
    assert_eq!(tuesday.activities[0].distance_km, Some(7.0));

    let thursday = by_date[&date("2026-05-07")];
    assert_eq!(thursday.activities[0].activity, ActivityKind::HillRepeats);
    assert_eq!(thursday.activities[0].distance_km, None);

    let saturday = by_date[&date("2026-05-09")];
    assert_eq!(saturday.activities[0].activity, ActivityKind::GymWorkout);

    let monday = by_date[&date("2026-05-04")];
    assert_eq!(monday.activities[0].activity, ActivityKind::RestDay);
}

#[test]
fn long_run_ramps_and_caps() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());
    let by_date: HashMap<NaiveDate, _> = schedule.iter().map(|d| (d.date, d)).collect();

    let long_run_km = |d: &str| by_date[&date(d)].activities[0].distance_km;

    // Base block: 6 km floor ramping to the 10 km cap.
    assert_eq!(long_run_km("2026-02-08"), Some(6.0));
    assert_eq!(long_run_km("2026-03-08"), Some(7.5));
    assert_eq!(long_run_km("2026-04-26"), Some(10.0));

    // Strength block: 10 km ramping toward 16 km.
    assert_eq!(long_run_km("2026-05-03"), Some(10.0));
    assert_eq!(long_run_km("2026-06-28"), Some(13.7));

    // Taper block: 16 km ramping toward 21 km.
    assert_eq!(long_run_km("2026-08-02"), Some(16.0));
    assert_eq!(long_run_km("2026-09-20"), Some(19.5));
    assert_eq!(long_run_km("2026-09-27"), Some(20.0));
}

#[test]
fn taper_fridays_alternate_gym_and_strength() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());
    let by_date: HashMap<NaiveDate, _> = schedule.iter().map(|d| (d.date, d)).collect();

    let monday = by_date[&date("2026-08-03")];
    assert_eq!(monday.activities[0].activity, ActivityKind::EasyRun);
    assert_eq!(monday.activities[0].distance_km, Some(8.0));

    let wednesday = by_date[&date("2026-08-05")];
    assert_eq!(wednesday.activities[0].activity, ActivityKind::EasyRun);
    assert_eq!(wednesday.activities[0].distance_km, Some(10.0));

    let even_friday = by_date[&date("2026-08-07")];
    assert_eq!(even_friday.activities[0].activity, ActivityKind::GymWorkout);

    let odd_friday = by_date[&date("2026-08-14")];
    assert_eq!(
        odd_friday.activities[0].activity,
        ActivityKind::StrengthTraining
    );
}

#[test]
fn final_week_tapers_to_shakeouts() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());
    let by_date: HashMap<NaiveDate, _> = schedule.iter().map(|d| (d.date, d)).collect();

    let tuesday = by_date[&date("2026-10-06")];
    assert_eq!(tuesday.activities[0].activity, ActivityKind::EasyRun);
    assert_eq!(tuesday.activities[0].distance_km, Some(4.0));
    assert_eq!(
        tuesday.activities[0].description,
        "Keep the legs moving, very light."
    );

    let thursday = by_date[&date("2026-10-08")];
    assert_eq!(thursday.activities[0].activity, ActivityKind::EasyRun);
    assert_eq!(thursday.activities[0].distance_km, Some(3.0));

    // The final-week Sunday and Monday drop to rest; no last long run.
    let final_sunday = by_date[&date("2026-10-04")];
    assert_eq!(final_sunday.activities[0].activity, ActivityKind::RestDay);

    let final_monday = by_date[&date("2026-10-05")];
    assert_eq!(final_monday.activities[0].activity, ActivityKind::RestDay);
}

#[test]
fn phase_boundaries_follow_config() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());
    let by_date: HashMap<NaiveDate, _> = schedule.iter().map(|d| (d.date, d)).collect();

    assert_eq!(by_date[&date("2026-04-30")].phase, Phase::BaseBuilding);
    assert_eq!(by_date[&date("2026-05-01")].phase, Phase::StrengthPower);
    assert_eq!(by_date[&date("2026-07-31")].phase, Phase::StrengthPower);
    assert_eq!(by_date[&date("2026-08-01")].phase, Phase::TaperPeak);
}

#[test]
fn override_replaces_day_and_keeps_phase() {
    let config = Config::default();
    let yoga = TrainingActivity {
        id: "yoga-1".to_string(),
        activity: ActivityKind::Custom("Yoga".to_string()),
        description: "Studio flow session.".to_string(),
        distance_km: None,
    };
    let mut overrides = no_overrides();
    overrides.insert(
        date("2026-02-10"),
        DayOverride {
            activities: vec![yoga.clone()],
        },
    );

    let schedule = generate(&config, &no_completions(), &overrides);
    let by_date: HashMap<NaiveDate, _> = schedule.iter().map(|d| (d.date, d)).collect();

    let overridden = by_date[&date("2026-02-10")];
    assert_eq!(overridden.activities, vec![yoga]);
    assert_eq!(overridden.phase, Phase::BaseBuilding);
    assert!(!overridden.is_completed);

    // Neighboring days keep their generated defaults.
    let thursday = by_date[&date("2026-02-12")];
    assert_eq!(thursday.activities[0].id, "default");
    assert_eq!(thursday.activities[0].activity, ActivityKind::EasyRun);
}

#[test]
fn completions_mark_days_independently_of_overrides() {
    let config = Config::default();
    let mut completed = no_completions();
    completed.insert(date("2026-02-10"));

    let mut overrides = no_overrides();
    overrides.insert(
        date("2026-02-10"),
        DayOverride {
            activities: vec![TrainingActivity {
                id: "swim-1".to_string(),
                activity: ActivityKind::Custom("Swimming".to_string()),
                description: "Easy laps.".to_string(),
                distance_km: Some(1.0),
            }],
        },
    );

    let schedule = generate(&config, &completed, &overrides);
    let by_date: HashMap<NaiveDate, _> = schedule.iter().map(|d| (d.date, d)).collect();

    assert!(by_date[&date("2026-02-10")].is_completed);
    assert!(!by_date[&date("2026-02-11")].is_completed);
    assert_eq!(
        by_date[&date("2026-02-10")].activities[0].activity,
        ActivityKind::Custom("Swimming".to_string())
    );
}

#[test]
fn generation_is_deterministic() {
    let config = Config::default();
    let mut completed = no_completions();
    completed.insert(date("2026-03-03"));
    let mut overrides = no_overrides();
    overrides.insert(
        date("2026-03-05"),
        DayOverride {
            activities: vec![TrainingActivity {
                id: "a".to_string(),
                activity: ActivityKind::EasyRun,
                description: "Swapped in.".to_string(),
                distance_km: Some(4.0),
            }],
        },
    );

    let first = generate(&config, &completed, &overrides);
    let second = generate(&config, &completed, &overrides);

    assert_eq!(
        serde_json::to_value(&first).expect("json"),
        serde_json::to_value(&second).expect("json")
    );
}

#[test]
fn generated_distances_are_tenth_km_multiples() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());

    for day in &schedule {
        for activity in &day.activities {
            if let Some(km) = activity.distance_km {
                let tenths = km * 10.0;
                assert!(
                    (tenths - tenths.round()).abs() < 1e-9,
                    "{} on {} is not a 0.1 multiple",
                    km,
                    day.date
                );
            }
        }
    }
}

#[test]
fn wire_shape_uses_camel_case_and_labels() {
    let config = Config::default();
    let schedule = generate(&config, &no_completions(), &no_overrides());
    let json = serde_json::to_value(&schedule).expect("json");

    let tuesday = &json[2];
    assert_eq!(tuesday["date"], "2026-02-10");
    assert_eq!(tuesday["phase"], "Base Building");
    assert_eq!(tuesday["isCompleted"], false);
    assert_eq!(tuesday["activities"][0]["activity"], "Easy Run");
    assert_eq!(tuesday["activities"][0]["distanceKm"], 5.0);

    // Rest days carry no distance key at all.
    let monday = &json[1];
    assert_eq!(monday["activities"][0]["activity"], "Rest Day");
    assert!(monday["activities"][0].get("distanceKm").is_none());
}

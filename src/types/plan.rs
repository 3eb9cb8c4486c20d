use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Activity id used for every generated (non-override) activity.
pub const DEFAULT_ACTIVITY_ID: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "Base Building")]
    BaseBuilding,
    #[serde(rename = "Strength & Power")]
    StrengthPower,
    #[serde(rename = "Taper & Peak")]
    TaperPeak,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::BaseBuilding => "Base Building",
            Phase::StrengthPower => "Strength & Power",
            Phase::TaperPeak => "Taper & Peak",
        }
    }
}

/// Activity vocabulary. Serialized as the display label, and any label
/// outside the built-in set round-trips as `Custom`, so user-defined
/// activities survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    EasyRun,
    LongRun,
    HillRepeats,
    StrengthTraining,
    GymWorkout,
    RestDay,
    Race,
    Custom(String),
}

impl ActivityKind {
    pub const BUILTIN_LABELS: [&'static str; 7] = [
        "Easy Run",
        "Long Run",
        "Hill Repeats",
        "Strength Training",
        "Gym Workout",
        "Rest Day",
        "Race",
    ];

    pub fn label(&self) -> &str {
        match self {
            ActivityKind::EasyRun => "Easy Run",
            ActivityKind::LongRun => "Long Run",
            ActivityKind::HillRepeats => "Hill Repeats",
            ActivityKind::StrengthTraining => "Strength Training",
            ActivityKind::GymWorkout => "Gym Workout",
            ActivityKind::RestDay => "Rest Day",
            ActivityKind::Race => "Race",
            ActivityKind::Custom(name) => name,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, ActivityKind::RestDay)
    }
}

impl From<String> for ActivityKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Easy Run" => ActivityKind::EasyRun,
            "Long Run" => ActivityKind::LongRun,
            "Hill Repeats" => ActivityKind::HillRepeats,
            "Strength Training" => ActivityKind::StrengthTraining,
            "Gym Workout" => ActivityKind::GymWorkout,
            "Rest Day" => ActivityKind::RestDay,
            "Race" => ActivityKind::Race,
            _ => ActivityKind::Custom(label),
        }
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Custom(name) => name,
            other => other.label().to_string(),
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingActivity {
    pub id: String,
    pub activity: ActivityKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    pub date: NaiveDate,
    pub phase: Phase,
    pub activities: Vec<TrainingActivity>,
    pub is_completed: bool,
}

impl TrainingDay {
    /// A day counts as a training day if any activity is something
    /// other than rest.
    pub fn is_training_day(&self) -> bool {
        self.activities.iter().any(|a| !a.activity.is_rest())
    }

    /// Total planned distance across the day's activities.
    pub fn distance_km(&self) -> f64 {
        self.activities.iter().filter_map(|a| a.distance_km).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOverride {
    pub activities: Vec<TrainingActivity>,
}

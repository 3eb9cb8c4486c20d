use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::{DashMap, DashSet};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::ValidationError;
use crate::schedule::round_to_tenth;
use crate::sync::SyncMetadata;
use crate::types::journal::{RunLog, RunLogPatch, UserProfile};
use crate::types::plan::{ActivityKind, DayOverride};

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    completions: Arc<DashSet<NaiveDate>>,
    overrides: Arc<DashMap<NaiveDate, DayOverride>>,
    run_logs: Arc<DashMap<NaiveDate, RunLog>>,
    profile: Arc<RwLock<UserProfile>>,
    custom_activities: Arc<RwLock<Vec<String>>>,
    sync: Arc<SyncMetadata>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            completions: Arc::new(DashSet::new()),
            overrides: Arc::new(DashMap::new()),
            run_logs: Arc::new(DashMap::new()),
            profile: Arc::new(RwLock::new(UserProfile::default())),
            custom_activities: Arc::new(RwLock::new(Vec::new())),
            sync: Arc::new(SyncMetadata::local_only()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sync_metadata(&self) -> &SyncMetadata {
        &self.sync
    }

    /// Flips a day's completion mark and returns the new value.
    pub fn toggle_completion(&self, date: NaiveDate) -> bool {
        if self.completions.remove(&date).is_some() {
            false
        } else {
            self.completions.insert(date);
            true
        }
    }

    pub fn completions_sorted(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.completions.iter().map(|d| *d).collect();
        dates.sort_unstable();
        dates
    }

    /// Validates and stores a day override, normalizing distances to
    /// one decimal place. Returns the override as stored.
    pub fn put_override(
        &self,
        date: NaiveDate,
        mut day_override: DayOverride,
    ) -> Result<DayOverride, ValidationError> {
        validate_override(date, &day_override)?;

        for activity in &mut day_override.activities {
            if let Some(km) = activity.distance_km {
                activity.distance_km = Some(round_to_tenth(km));
            }
        }

        self.overrides.insert(date, day_override.clone());
        Ok(day_override)
    }

    pub fn remove_override(&self, date: NaiveDate) -> Option<DayOverride> {
        self.overrides.remove(&date).map(|(_, removed)| removed)
    }

    pub fn overrides_snapshot(&self) -> HashMap<NaiveDate, DayOverride> {
        self.overrides
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    /// Merges a patch into the day's log, creating it from defaults on
    /// first write. Returns the merged log.
    pub fn update_log(&self, date: NaiveDate, patch: RunLogPatch) -> RunLog {
        let mut entry = self.run_logs.entry(date).or_default();
        entry.apply(patch);
        entry.clone()
    }

    pub fn run_logs_snapshot(&self) -> HashMap<NaiveDate, RunLog> {
        self.run_logs
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    /// The inputs `schedule::generate` needs, snapshotted so the
    /// generated season is consistent even while writes continue.
    pub fn plan_inputs(&self) -> (HashSet<NaiveDate>, HashMap<NaiveDate, DayOverride>) {
        let completed = self.completions.iter().map(|d| *d).collect();
        (completed, self.overrides_snapshot())
    }

    pub async fn profile(&self) -> UserProfile {
        self.profile.read().await.clone()
    }

    pub async fn set_profile(&self, profile: UserProfile) -> UserProfile {
        let mut stored = self.profile.write().await;
        *stored = profile;
        stored.clone()
    }

    pub async fn custom_activities(&self) -> Vec<String> {
        self.custom_activities.read().await.clone()
    }

    /// Adds a custom activity name, ignoring blanks, built-in labels,
    /// and names already present. Returns the full list.
    pub async fn add_custom_activity(&self, name: &str) -> Vec<String> {
        let name = name.trim();
        let mut list = self.custom_activities.write().await;

        let is_builtin = !matches!(
            ActivityKind::from(name.to_string()),
            ActivityKind::Custom(_)
        );
        if !name.is_empty() && !is_builtin && !list.iter().any(|existing| existing == name) {
            list.push(name.to_string());
        }

        list.clone()
    }

    /// Wipes every store back to first-launch state.
    pub async fn reset_all(&self) {
        self.completions.clear();
        self.overrides.clear();
        self.run_logs.clear();
        self.custom_activities.write().await.clear();
        *self.profile.write().await = UserProfile::default();
        tracing::info!("All training data reset");
    }
}

fn validate_override(date: NaiveDate, day_override: &DayOverride) -> Result<(), ValidationError> {
    if day_override.activities.is_empty() {
        return Err(ValidationError::EmptyOverride(date));
    }

    let mut seen = HashSet::new();
    for activity in &day_override.activities {
        if !seen.insert(activity.id.as_str()) {
            return Err(ValidationError::DuplicateActivityId(activity.id.clone()));
        }
        if activity.activity.label().trim().is_empty() {
            return Err(ValidationError::BlankActivityName);
        }
        if let Some(km) = activity.distance_km {
            if km < 0.0 {
                return Err(ValidationError::NegativeDistance(km));
            }
        }
    }

    Ok(())
}

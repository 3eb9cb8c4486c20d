use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub goal_time: String,
    pub shoe_model: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Runner".to_string(),
            goal_time: "2:00:00".to_string(),
            shoe_model: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunLog {
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_distance: Option<f64>,
    /// Rate of perceived exertion, 1-10.
    pub perceived_effort: u8,
}

impl Default for RunLog {
    fn default() -> Self {
        Self {
            notes: String::new(),
            actual_distance: None,
            perceived_effort: 5,
        }
    }
}

/// Partial update for a day's log. Absent fields leave the stored
/// value untouched; a log is created from defaults on first write.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunLogPatch {
    pub notes: Option<String>,
    pub actual_distance: Option<f64>,
    pub perceived_effort: Option<u8>,
}

impl RunLog {
    pub fn apply(&mut self, patch: RunLogPatch) {
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(distance) = patch.actual_distance {
            self.actual_distance = Some(distance);
        }
        if let Some(effort) = patch.perceived_effort {
            self.perceived_effort = effort;
        }
    }
}

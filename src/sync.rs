use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Remote sync is not wired up yet; the service runs local-only and
/// reports itself as such. The device id is minted per boot so a
/// future backend can tell replicas apart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncMetadata {
    pub last_sync_time: Option<DateTime<Utc>>,
    pub device_id: Uuid,
    pub sync_enabled: bool,
}

impl SyncMetadata {
    pub fn local_only() -> Self {
        Self {
            last_sync_time: None,
            device_id: Uuid::new_v4(),
            sync_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Idle,
    Syncing,
    Success,
    Error,
    Disabled,
}

pub fn status(metadata: &SyncMetadata) -> SyncStatus {
    if metadata.sync_enabled {
        SyncStatus::Idle
    } else {
        SyncStatus::Disabled
    }
}

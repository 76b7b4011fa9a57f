use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One recorded time for a competitor at a checkpoint. Nothing prevents
/// several records for the same competitor and checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimeRecord {
    pub id: i64,
    pub enduro_id: i64,
    pub checkpoint_id: i64,
    pub competitor_id: i64,
    /// Computed start time for the entry, "HH:MM".
    pub start_time: String,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named timing point along the race route.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Checkpoint {
    pub id: i64,
    pub enduro_id: i64,
    pub name: String,
    /// Reference time in seconds, displayed as HH:MM:SS.
    pub reference_time: f64,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single timed endurance event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enduro {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub date: String,
    /// Base start time of the first competitor, "HH:MM".
    pub start_time: String,
}

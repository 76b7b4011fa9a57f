use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A competitor classification scoped to one enduro.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub enduro_id: i64,
    pub name: String,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Competitor {
    pub id: i64,
    pub enduro_id: i64,
    pub name: String,
    pub plate: String,
    pub category_id: i64,
}

/// Competitor joined with its category name for list views. The category may
/// have been deleted since the competitor was entered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompetitorWithCategory {
    pub id: i64,
    pub enduro_id: i64,
    pub name: String,
    pub plate: String,
    pub category_id: i64,
    pub category_name: Option<String>,
}

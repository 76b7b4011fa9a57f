pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use db::Database;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::Database;

    pub async fn database() -> Database {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.run_migrations().await.unwrap();
        db
    }
}

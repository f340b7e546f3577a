#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Private in-memory database per test, migrated and empty.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

/// Migrated SQLite file under `target/test-data`, pooled like the default deployment.
pub async fn get_file_db() -> Result<DatabaseConnection, anyhow::Error> {
    let url = format!("sqlite://target/test-data/{}/counter.db?mode=rwc", uuid::Uuid::new_v4());
    crate::runtime::ensure_env(&url).await?;
    let cfg = models::db::DatabaseConfig { url, max_connections: 10, ..Default::default() };
    models::db::connect_and_migrate(&cfg).await
}

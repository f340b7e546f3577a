use sea_orm::DatabaseConnection;
use anyhow::Result;

use crate::db::DatabaseConfig;


/// Counter entity operations
pub mod counter_tests;

/// Transaction handling and isolation tests
pub mod transaction_tests;

/// Fresh in-memory database with migrations applied
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    crate::db::connect_in_memory().await
}

/// File-backed database with a real multi-connection pool under `target/test-data`.
pub(crate) async fn setup_file_db(max_connections: u32) -> Result<DatabaseConnection> {
    let dir = format!("target/test-data/{}", uuid::Uuid::new_v4());
    std::fs::create_dir_all(&dir)?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{dir}/counter.db?mode=rwc"),
        max_connections,
        ..Default::default()
    };
    crate::db::connect_and_migrate(&cfg).await
}

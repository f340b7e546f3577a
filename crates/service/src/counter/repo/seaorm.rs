use sea_orm::DatabaseConnection;

use crate::counter::domain::{Counter, CounterName};
use crate::counter::ops;
use crate::counter::repository::CounterRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCounterRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl CounterRepository for SeaOrmCounterRepository {
    async fn get_or_create(&self, name: &CounterName) -> Result<Counter, ServiceError> {
        ops::get_or_create(&self.db, name).await
    }

    async fn add(&self, name: &CounterName, delta: i64) -> Result<Counter, ServiceError> {
        ops::add(&self.db, name, delta).await
    }

    async fn set(&self, name: &CounterName, value: i64) -> Result<Counter, ServiceError> {
        ops::set(&self.db, name, value).await
    }
}

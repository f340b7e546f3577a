use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use models::counter;
use crate::counter::domain::{Counter, CounterName};
use crate::errors::ServiceError;

/// Get the counter by name, creating it with value 0 when missing.
pub async fn get_or_create(db: &DatabaseConnection, name: &CounterName) -> Result<Counter, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = counter::get_or_create(&txn, name.as_str()).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found.into())
}

/// Current value; an absent counter reads as 0 and is created.
pub async fn get_value(db: &DatabaseConnection, name: &CounterName) -> Result<i64, ServiceError> {
    Ok(get_or_create(db, name).await?.value)
}

/// Atomically add `delta` and return the stored record.
pub async fn add(db: &DatabaseConnection, name: &CounterName, delta: i64) -> Result<Counter, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let updated = counter::upsert_add(&txn, name.as_str(), delta).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(name = %name, delta, value = updated.value, "counter_added");
    Ok(updated.into())
}

/// Atomically assign `value` and return the stored record.
pub async fn set(db: &DatabaseConnection, name: &CounterName, value: i64) -> Result<Counter, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let updated = counter::upsert_set(&txn, name.as_str(), value).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(name = %name, value, "counter_set");
    Ok(updated.into())
}

/// Increment by 1 and return the new value.
pub async fn increment(db: &DatabaseConnection, name: &CounterName) -> Result<i64, ServiceError> {
    Ok(add(db, name, 1).await?.value)
}

/// Decrement by 1 and return the new value.
pub async fn decrement(db: &DatabaseConnection, name: &CounterName) -> Result<i64, ServiceError> {
    Ok(add(db, name, -1).await?.value)
}

/// Reset to 0 and return the new value.
pub async fn reset(db: &DatabaseConnection, name: &CounterName) -> Result<i64, ServiceError> {
    Ok(set(db, name, 0).await?.value)
}

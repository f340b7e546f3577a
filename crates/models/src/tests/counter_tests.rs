use crate::counter;
use crate::errors::ModelError;
use sea_orm::EntityTrait;
use anyhow::Result;
use std::time::Duration;

use super::setup_test_db;

#[tokio::test]
async fn test_create_and_find_by_name() -> Result<()> {
    let db = setup_test_db().await?;

    let created = counter::create(&db, "test_counter").await?;
    assert_eq!(created.name, "test_counter");
    assert_eq!(created.value, 0);
    assert_eq!(created.created_at, created.updated_at);

    let found = counter::find_by_name(&db, "test_counter").await?.expect("stored");
    assert_eq!(found.id, created.id);
    assert!(counter::find_by_name(&db, "missing").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    counter::create(&db, "dup").await?;
    let err = counter::create(&db, "dup").await.unwrap_err();
    assert!(matches!(err, ModelError::Db(_)));
    assert_eq!(counter::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_name_validation() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(matches!(counter::create(&db, "   ").await, Err(ModelError::Validation(_))));
    let long = "x".repeat(counter::NAME_MAX_LEN + 1);
    assert!(matches!(counter::upsert_add(&db, &long, 1).await, Err(ModelError::Validation(_))));
    assert!(counter::validate_name(&"y".repeat(counter::NAME_MAX_LEN)).is_ok());
    Ok(())
}

#[tokio::test]
async fn test_insert_if_absent_reports_rows() -> Result<()> {
    let db = setup_test_db().await?;
    assert_eq!(counter::insert_if_absent(&db, "lazy").await?, 1);
    counter::upsert_add(&db, "lazy", 4).await?;
    assert_eq!(counter::insert_if_absent(&db, "lazy").await?, 0);
    let stored = counter::find_by_name(&db, "lazy").await?.expect("stored");
    assert_eq!(stored.value, 4);
    Ok(())
}

#[tokio::test]
async fn test_get_or_create_is_stable() -> Result<()> {
    let db = setup_test_db().await?;
    let first = counter::get_or_create(&db, "stable").await?;
    let second = counter::get_or_create(&db, "stable").await?;
    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);
    Ok(())
}

#[tokio::test]
async fn test_upsert_add_creates_then_accumulates() -> Result<()> {
    let db = setup_test_db().await?;
    let first = counter::upsert_add(&db, "acc", 1).await?;
    assert_eq!(first.value, 1);
    let second = counter::upsert_add(&db, "acc", -3).await?;
    assert_eq!(second.value, -2);
    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    Ok(())
}

#[tokio::test]
async fn test_upsert_set_overwrites_value_and_touches_updated_at() -> Result<()> {
    let db = setup_test_db().await?;
    let before = counter::upsert_add(&db, "set_me", 42).await?;
    tokio::time::sleep(Duration::from_millis(10)).await;
    let after = counter::upsert_set(&db, "set_me", 0).await?;
    assert_eq!(after.value, 0);
    assert_eq!(after.id, before.id);
    assert!(after.updated_at > before.updated_at);
    assert_eq!(after.created_at, before.created_at);
    Ok(())
}

#[tokio::test]
async fn test_update_value_by_identity() -> Result<()> {
    let db = setup_test_db().await?;
    let created = counter::create(&db, "by_id").await?;
    tokio::time::sleep(Duration::from_millis(10)).await;
    let updated = counter::update_value(&db, created.clone(), 99).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.value, 99);
    assert!(updated.updated_at > created.updated_at);
    Ok(())
}

#[tokio::test]
async fn test_names_are_independent() -> Result<()> {
    let db = setup_test_db().await?;
    counter::upsert_add(&db, "counter1", 5).await?;
    counter::upsert_add(&db, "counter2", -5).await?;
    assert_eq!(counter::find_by_name(&db, "counter1").await?.expect("c1").value, 5);
    assert_eq!(counter::find_by_name(&db, "counter2").await?.expect("c2").value, -5);
    assert!(counter::find_by_name(&db, "default").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_upsert_add_refuses_overflow() -> Result<()> {
    let db = setup_test_db().await?;
    counter::upsert_set(&db, "edge", i64::MAX).await?;
    assert!(matches!(counter::upsert_add(&db, "edge", 1).await, Err(ModelError::Validation(_))));
    assert_eq!(counter::find_by_name(&db, "edge").await?.expect("stored").value, i64::MAX);

    counter::upsert_set(&db, "edge", i64::MIN).await?;
    assert!(matches!(counter::upsert_add(&db, "edge", -1).await, Err(ModelError::Validation(_))));
    assert_eq!(counter::upsert_add(&db, "edge", 1).await?.value, i64::MIN + 1);
    Ok(())
}

#[tokio::test]
async fn test_get_or_create_leaves_existing_value() -> Result<()> {
    let db = setup_test_db().await?;
    counter::upsert_add(&db, "kept", 9).await?;
    let found = counter::get_or_create(&db, "kept").await?;
    assert_eq!(found.value, 9);
    assert_eq!(counter::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}

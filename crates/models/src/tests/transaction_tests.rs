use crate::counter;
use sea_orm::TransactionTrait;
use anyhow::Result;

use super::setup_test_db;

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = counter::upsert_add(&txn, "tx_commit", 3).await?;
    txn.commit().await?;

    let found = counter::find_by_name(&db, "tx_commit").await?;
    assert_eq!(found.map(|c| (c.id, c.value)), Some((created.id, 3)));
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;
    counter::upsert_add(&db, "tx_rollback", 1).await?;

    let txn = db.begin().await?;
    let inside = counter::upsert_add(&txn, "tx_rollback", 10).await?;
    assert_eq!(inside.value, 11);
    txn.rollback().await?;

    let found = counter::find_by_name(&db, "tx_rollback").await?.expect("stored");
    assert_eq!(found.value, 1);
    Ok(())
}

/// Dropping an uncommitted transaction discards its writes
#[tokio::test]
async fn test_dropped_transaction_discards_create() -> Result<()> {
    let db = setup_test_db().await?;
    {
        let txn = db.begin().await?;
        counter::get_or_create(&txn, "tx_dropped").await?;
    }
    assert!(counter::find_by_name(&db, "tx_dropped").await?.is_none());
    Ok(())
}

/// Reads inside the transaction observe its own writes
#[tokio::test]
async fn test_read_your_writes_inside_transaction() -> Result<()> {
    let db = setup_test_db().await?;
    let txn = db.begin().await?;
    counter::upsert_add(&txn, "tx_ryw", 2).await?;
    counter::upsert_add(&txn, "tx_ryw", 2).await?;
    let seen = counter::find_by_name(&txn, "tx_ryw").await?.expect("visible");
    assert_eq!(seen.value, 4);
    txn.commit().await?;
    Ok(())
}

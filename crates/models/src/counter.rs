//! `counter` entity and the storage operations the counter service is built on.
//!
//! Every helper is generic over [`ConnectionTrait`] so it runs on the pool
//! or inside a caller-owned transaction.

use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::{Expr, OnConflict}, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

pub const NAME_MAX_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "counter")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub value: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("counter name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("counter name longer than {NAME_MAX_LEN} chars")));
    }
    Ok(())
}

fn new_active(name: &str, value: i64) -> ActiveModel {
    let now: DateTimeWithTimeZone = Utc::now().into();
    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        value: Set(value),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Name.eq(name)).one(db).await?)
}

async fn find_existing<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    find_by_name(db, name)
        .await?
        .ok_or_else(|| errors::ModelError::Db(format!("counter {name} missing after write")))
}

/// Plain insert with value 0; fails on a duplicate name.
pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    Ok(new_active(name, 0).insert(db).await?)
}

/// Insert with value 0 unless the name exists. Returns rows inserted (0 or 1).
pub async fn insert_if_absent<C: ConnectionTrait>(db: &C, name: &str) -> Result<u64, errors::ModelError> {
    validate_name(name)?;
    let inserted = Entity::insert(new_active(name, 0))
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;
    Ok(inserted)
}

/// Write first, then read: the insert takes the write lock up front so a
/// SQLite transaction never has to upgrade a read lock under contention.
pub async fn get_or_create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    insert_if_absent(db, name).await?;
    find_existing(db, name).await
}

/// `value += delta` as one statement; a missing row is inserted with `value = delta`.
/// A sum outside `i64` leaves the row untouched and fails validation.
pub async fn upsert_add<C: ConnectionTrait>(db: &C, name: &str, delta: i64) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let in_range = if delta >= 0 {
        Expr::col((Entity, Column::Value)).lte(i64::MAX - delta)
    } else {
        Expr::col((Entity, Column::Value)).gte(i64::MIN - delta)
    };
    let written = Entity::insert(new_active(name, delta))
        .on_conflict(
            OnConflict::column(Column::Name)
                .value(Column::Value, Expr::col((Entity, Column::Value)).add(delta))
                .update_column(Column::UpdatedAt)
                .action_and_where(in_range)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    if written == 0 {
        return Err(errors::ModelError::Validation(format!("counter {name} would overflow")));
    }
    find_existing(db, name).await
}

/// Assign `value` as one statement, inserting the row when missing.
pub async fn upsert_set<C: ConnectionTrait>(db: &C, name: &str, value: i64) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    Entity::insert(new_active(name, value))
        .on_conflict(
            OnConflict::column(Column::Name)
                .update_columns([Column::Value, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    find_existing(db, name).await
}

/// Update-by-identity of a loaded record.
pub async fn update_value<C: ConnectionTrait>(db: &C, model: Model, value: i64) -> Result<Model, errors::ModelError> {
    let mut am: ActiveModel = model.into();
    am.value = Set(value);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

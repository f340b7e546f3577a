//! Create `counter` table.
//!
//! One row per named counter; `name` is the lookup key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Counter::Table)
                    .if_not_exists()
                    .col(uuid(Counter::Id).primary_key())
                    .col(string_len(Counter::Name, 128).not_null())
                    .col(big_integer(Counter::Value).not_null().default(0))
                    .col(timestamp_with_time_zone(Counter::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Counter::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Counter::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Counter { Table, Id, Name, Value, CreatedAt, UpdatedAt }

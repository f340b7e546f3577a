use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Counter: one row per name; also the ON CONFLICT target for upserts
        manager
            .create_index(
                Index::create()
                    .name("uniq_counter_name")
                    .table(Counter::Table)
                    .col(Counter::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_counter_name").table(Counter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Counter { Table, Name }

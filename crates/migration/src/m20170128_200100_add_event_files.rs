use entity::event_file;
use sea_orm_migration::prelude::*;

use crate::common::{create_entity_table, drop_entity_table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_entity_table(manager, event_file::Entity).await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Quote::Table)
                    .add_column(ColumnDef::new(Quote::ReferenceFile).string().null().take())
                    .take(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Quote::Table)
                    .drop_column(Quote::ReferenceFile)
                    .take(),
            )
            .await?;

        drop_entity_table(manager, event_file::Entity).await
    }
}

#[derive(DeriveIden)]
enum Quote {
    Table,
    ReferenceFile,
}

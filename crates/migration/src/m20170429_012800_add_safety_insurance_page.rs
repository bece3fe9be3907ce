use entity::website_safety_insurance_index_page;
use sea_orm_migration::prelude::*;

use crate::common::{create_entity_table, drop_entity_table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_entity_table(manager, website_safety_insurance_index_page::Entity).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_entity_table(manager, website_safety_insurance_index_page::Entity).await
    }
}

use sea_orm::EntityTrait;
use sea_orm_migration::{prelude::*, sea_orm::Schema};

pub(crate) async fn create_entity_table<'a, E: EntityTrait>(
    manager: &'a SchemaManager<'a>,
    entity: E,
) -> Result<(), DbErr> {
    let schema = Schema::new(manager.get_database_backend());
    manager
        .create_table(schema.create_table_from_entity(entity))
        .await
}

pub(crate) async fn drop_entity_table<'a, E: EntityTrait>(
    manager: &'a SchemaManager<'a>,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(entity).take())
        .await
}

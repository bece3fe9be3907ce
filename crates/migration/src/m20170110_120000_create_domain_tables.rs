use entity::{
    category, customer, event, event_photos, organization, testimonial, trip, trip_file,
    trip_photo,
};
use sea_orm_migration::prelude::*;

use crate::common::{create_entity_table, drop_entity_table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_entity_table(manager, category::Entity).await?;
        create_entity_table(manager, event::Entity).await?;
        create_entity_table(manager, event_photos::Entity).await?;
        create_entity_table(manager, organization::Entity).await?;
        create_entity_table(manager, customer::Entity).await?;
        create_entity_table(manager, trip::Entity).await?;
        create_entity_table(manager, trip_photo::Entity).await?;
        create_entity_table(manager, trip_file::Entity).await?;

        // The reference file of the quotes was added afterwards, so the table
        // is described here as it was at that time.
        manager
            .create_table(
                Table::create()
                    .table(Quote::Table)
                    .col(
                        ColumnDef::new(Quote::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                            .take(),
                    )
                    .col(ColumnDef::new(Quote::CustomerId).integer().not_null().take())
                    .col(
                        ColumnDef::new(Quote::OrganizationId)
                            .integer()
                            .not_null()
                            .take(),
                    )
                    .col(ColumnDef::new(Quote::TripId).integer().not_null().take())
                    .col(
                        ColumnDef::new(Quote::NumberOfStudents)
                            .integer()
                            .not_null()
                            .take(),
                    )
                    .col(
                        ColumnDef::new(Quote::NumberOfAdults)
                            .integer()
                            .not_null()
                            .take(),
                    )
                    .col(ColumnDef::new(Quote::DepartureDate).date().not_null().take())
                    .col(ColumnDef::new(Quote::ReturnDate).date().not_null().take())
                    .col(
                        ColumnDef::new(Quote::DepartureLocation)
                            .string()
                            .not_null()
                            .take(),
                    )
                    .col(ColumnDef::new(Quote::Comments).text().not_null().take())
                    .col(ColumnDef::new(Quote::CreatedAt).date_time().not_null().take())
                    .col(ColumnDef::new(Quote::UpdatedAt).date_time().not_null().take())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quote-customer_id")
                            .from(Quote::Table, Quote::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quote-organization_id")
                            .from(Quote::Table, Quote::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quote-trip_id")
                            .from(Quote::Table, Quote::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .take(),
            )
            .await?;

        create_entity_table(manager, testimonial::Entity).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_entity_table(manager, testimonial::Entity).await?;
        manager
            .drop_table(Table::drop().table(Quote::Table).take())
            .await?;
        drop_entity_table(manager, trip_file::Entity).await?;
        drop_entity_table(manager, trip_photo::Entity).await?;
        drop_entity_table(manager, trip::Entity).await?;
        drop_entity_table(manager, customer::Entity).await?;
        drop_entity_table(manager, organization::Entity).await?;
        drop_entity_table(manager, event_photos::Entity).await?;
        drop_entity_table(manager, event::Entity).await?;
        drop_entity_table(manager, category::Entity).await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Quote {
    Table,
    Id,
    CustomerId,
    OrganizationId,
    TripId,
    NumberOfStudents,
    NumberOfAdults,
    DepartureDate,
    ReturnDate,
    DepartureLocation,
    Comments,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Trip {
    Table,
    Id,
}

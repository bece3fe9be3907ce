mod common;
mod m20170110_120000_create_domain_tables;
mod m20170128_200100_add_event_files;
mod m20170305_153000_create_content_pages;
mod m20170429_012800_add_safety_insurance_page;

use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// The migrations, in the order they must be applied. Each one depends on the previous one.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20170110_120000_create_domain_tables::Migration),
            Box::new(m20170128_200100_add_event_files::Migration),
            Box::new(m20170305_153000_create_content_pages::Migration),
            Box::new(m20170429_012800_add_safety_insurance_page::Migration),
        ]
    }
}

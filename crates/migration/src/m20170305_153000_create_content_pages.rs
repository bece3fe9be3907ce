use entity::{
    document, image, page, website_about_index_page, website_category, website_tag,
    website_testimonals_index_page, website_testimonial_page, website_testimonial_page_categories,
    website_testimonial_page_tag, website_travel_gallery_image, website_travel_index_page,
    website_travel_page, website_travel_page_categories,
};
use sea_orm_migration::prelude::*;

use crate::common::{create_entity_table, drop_entity_table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_entity_table(manager, image::Entity).await?;
        create_entity_table(manager, document::Entity).await?;
        create_entity_table(manager, page::Entity).await?;

        create_entity_table(manager, website_category::Entity).await?;
        create_entity_table(manager, website_tag::Entity).await?;

        create_entity_table(manager, website_about_index_page::Entity).await?;

        create_entity_table(manager, website_testimonals_index_page::Entity).await?;
        create_entity_table(manager, website_testimonial_page::Entity).await?;
        create_entity_table(manager, website_testimonial_page_categories::Entity).await?;
        create_entity_table(manager, website_testimonial_page_tag::Entity).await?;

        create_entity_table(manager, website_travel_index_page::Entity).await?;
        create_entity_table(manager, website_travel_page::Entity).await?;
        create_entity_table(manager, website_travel_page_categories::Entity).await?;
        create_entity_table(manager, website_travel_gallery_image::Entity).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-page-parent_id-slug")
                    .table(page::Entity)
                    .col(page::Column::ParentId)
                    .col(page::Column::Slug)
                    .take(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_entity_table(manager, website_travel_gallery_image::Entity).await?;
        drop_entity_table(manager, website_travel_page_categories::Entity).await?;
        drop_entity_table(manager, website_travel_page::Entity).await?;
        drop_entity_table(manager, website_travel_index_page::Entity).await?;

        drop_entity_table(manager, website_testimonial_page_tag::Entity).await?;
        drop_entity_table(manager, website_testimonial_page_categories::Entity).await?;
        drop_entity_table(manager, website_testimonial_page::Entity).await?;
        drop_entity_table(manager, website_testimonals_index_page::Entity).await?;

        drop_entity_table(manager, website_about_index_page::Entity).await?;

        drop_entity_table(manager, website_tag::Entity).await?;
        drop_entity_table(manager, website_category::Entity).await?;

        drop_entity_table(manager, page::Entity).await?;
        drop_entity_table(manager, document::Entity).await?;
        drop_entity_table(manager, image::Entity).await?;

        Ok(())
    }
}

use sea_orm::entity::prelude::*;

/// Links a testimonial page to one of its tags.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "website_testimonial_page_tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tag_id: i32,
    /// The ID of the tagged testimonial page.
    pub content_object_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::website_tag::Entity",
        from = "Column::TagId",
        to = "super::website_tag::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WebsiteTag,
    #[sea_orm(
        belongs_to = "super::website_testimonial_page::Entity",
        from = "Column::ContentObjectId",
        to = "super::website_testimonial_page::Column::PageId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WebsiteTestimonialPage,
}

impl Related<super::website_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteTag.def()
    }
}

impl Related<super::website_testimonial_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteTestimonialPage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

/// Links a testimonial page to one of its categories.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "website_testimonial_page_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub page_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::website_testimonial_page::Entity",
        from = "Column::PageId",
        to = "super::website_testimonial_page::Column::PageId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WebsiteTestimonialPage,
    #[sea_orm(
        belongs_to = "super::website_category::Entity",
        from = "Column::CategoryId",
        to = "super::website_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WebsiteCategory,
}

impl Related<super::website_testimonial_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteTestimonialPage.def()
    }
}

impl Related<super::website_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::{ActiveValue::Set, entity::prelude::*};

/// The content of a testimonial page.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "website_testimonial_page")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub page_id: i32,
    /// Rich text, can't be blank.
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub full_name: String,
    pub organization: String,
    /// The trip or/and event the testimonial is about.
    pub trip_event: String,
    /// The date of the event/trip.
    pub date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::page::Entity",
        from = "Column::PageId",
        to = "super::page::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Page,
    #[sea_orm(has_many = "super::website_testimonial_page_categories::Entity")]
    WebsiteTestimonialPageCategories,
    #[sea_orm(has_many = "super::website_testimonial_page_tag::Entity")]
    WebsiteTestimonialPageTag,
}

impl Related<super::page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Page.def()
    }
}

impl Related<super::website_testimonial_page_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteTestimonialPageCategories.def()
    }
}

impl Related<super::website_testimonial_page_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteTestimonialPageTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            full_name: Set(String::new()),
            trip_event: Set(String::new()),
            ..<Self as ActiveModelTrait>::default()
        }
    }
}

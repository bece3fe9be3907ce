use sea_orm::{ActiveValue::Set, entity::prelude::*};

/// The content of a travel page, describing a past trip or event.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "website_travel_page")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub page_id: i32,
    #[sea_orm(column_type = "Text")]
    pub intro: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub destination: String,
    /// The month of the trip, formatted as [`YearMonth`](crate::types::YearMonth).
    pub date: String,
    pub start_location: String,
    pub end_location: String,
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
    #[sea_orm(has_many = "super::website_travel_page_categories::Entity")]
    WebsiteTravelPageCategories,
    #[sea_orm(has_many = "super::website_travel_gallery_image::Entity")]
    WebsiteTravelGalleryImage,
}

impl Related<super::page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Page.def()
    }
}

impl Related<super::website_travel_page_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteTravelPageCategories.def()
    }
}

impl Related<super::website_travel_gallery_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteTravelGalleryImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            start_location: Set(String::new()),
            end_location: Set(String::new()),
            ..<Self as ActiveModelTrait>::default()
        }
    }
}

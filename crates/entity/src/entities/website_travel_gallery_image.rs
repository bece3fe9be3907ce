use sea_orm::{ActiveValue::Set, entity::prelude::*};

/// An image of the gallery of a travel page.
///
/// The images of a gallery are ordered by their `sort_order`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "website_travel_gallery_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sort_order: Option<i32>,
    pub page_id: i32,
    pub image_id: i32,
    pub caption: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::website_travel_page::Entity",
        from = "Column::PageId",
        to = "super::website_travel_page::Column::PageId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WebsiteTravelPage,
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::ImageId",
        to = "super::image::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Image,
}

impl Related<super::website_travel_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteTravelPage.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            caption: Set(String::new()),
            ..<Self as ActiveModelTrait>::default()
        }
    }
}

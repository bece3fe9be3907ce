use sea_orm::entity::prelude::*;

/// The content of the safety and insurance page.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "website_safety_insurance_index_page")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub page_id: i32,
    /// Rich text, can't be blank.
    #[sea_orm(column_type = "Text")]
    pub body_left: String,
    #[sea_orm(column_type = "Text")]
    pub body_right: String,
    #[sea_orm(column_type = "Text")]
    pub body_bottom: String,
    /// The insurance document offered for download.
    pub pdf_id: Option<i32>,
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
    #[sea_orm(
        belongs_to = "super::document::Entity",
        from = "Column::PdfId",
        to = "super::document::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Document,
}

impl Related<super::page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Page.def()
    }
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

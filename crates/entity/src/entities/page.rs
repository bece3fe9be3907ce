use sea_orm::entity::prelude::*;

use crate::types::PageKind;

/// A node of the content tree.
///
/// The content of the page itself lives in the table of its kind, keyed by the page ID.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The parent node, or `None` for a root.
    pub parent_id: Option<i32>,
    pub kind: PageKind,
    pub title: String,
    /// The slug of the page, unique among its siblings.
    pub slug: String,
    /// The full path of the page, built from the slugs of its ancestors.
    pub url_path: String,
    /// The depth of the node, roots having a depth of 1.
    pub depth: i32,
    /// Whether the page is published.
    pub live: bool,
    pub first_published_at: Option<DateTime>,
    pub last_published_at: Option<DateTime>,
    #[sea_orm(column_type = "Text")]
    pub search_description: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SelfRef,
}

impl ActiveModelBehavior for ActiveModel {}

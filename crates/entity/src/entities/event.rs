use std::pin::Pin;

use sea_orm::entity::prelude::*;

/// An event organized by the agency, shown with its photos and files.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date: Date,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::event_photos::Entity")]
    EventPhotos,
    #[sea_orm(has_many = "super::event_file::Entity")]
    EventFile,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::event_photos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventPhotos.def()
    }
}

impl Related<super::event_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventFile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn before_save<'a, 'b, C>(
        mut self,
        _db: &'a C,
        insert: bool,
    ) -> Pin<Box<dyn Future<Output = Result<Self, DbErr>> + Send + 'b>>
    where
        C: ConnectionTrait,
        C: 'b,
        'a: 'b,
        Self: Send + 'b,
    {
        super::touch_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Box::pin(async move { Ok(self) })
    }
}

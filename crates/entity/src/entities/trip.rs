use std::pin::Pin;

use sea_orm::{ActiveValue::Set, entity::prelude::*};

/// A trip of the catalog.
///
/// A trip is created as a draft: it isn't offered to the visitors until it is explicitly
/// marked as ready.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "trip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// The type of trip (e.g. "International", "Educational").
    #[sea_orm(column_name = "type")]
    pub trip_type: String,
    pub destination: String,
    pub date: Date,
    pub draft: bool,
    pub start_location: String,
    pub end_location: String,
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
    #[sea_orm(has_many = "super::trip_photo::Entity")]
    TripPhoto,
    #[sea_orm(has_many = "super::trip_file::Entity")]
    TripFile,
    #[sea_orm(has_many = "super::quote::Entity")]
    Quote,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::trip_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripPhoto.def()
    }
}

impl Related<super::trip_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripFile.def()
    }
}

impl Related<super::quote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            draft: Set(true),
            start_location: Set(String::new()),
            end_location: Set(String::new()),
            ..<Self as ActiveModelTrait>::default()
        }
    }

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

use std::pin::Pin;

use sea_orm::{ActiveValue::Set, entity::prelude::*};

/// A category of the travel agency catalog, grouping events and trips.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The title of the category. Defaults to "General".
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub caption: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// The title given to a category created without one.
pub const DEFAULT_TITLE: &str = "General";

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
    #[sea_orm(has_many = "super::trip::Entity")]
    Trip,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            title: Set(DEFAULT_TITLE.to_owned()),
            caption: Set(String::new()),
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

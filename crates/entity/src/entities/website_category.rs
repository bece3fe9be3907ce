use std::pin::Pin;

use sea_orm::{
    ActiveValue::{self, Set},
    entity::prelude::*,
};

use crate::types::slugify;

/// A category of the content pages.
///
/// Categories, unlike tags, can have a hierarchy. You might have a Trip category, and under
/// that have children categories for International and Nacional.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "website_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// The slug of the category. It is derived from the name when missing.
    #[sea_orm(unique)]
    pub slug: String,
    pub icon_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub description: String,
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
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::IconId",
        to = "super::image::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Image,
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

/// Returns the slug to save if the provided one is missing, derived from the name.
pub(crate) fn missing_slug(
    slug: &ActiveValue<String>,
    name: &ActiveValue<String>,
    insert: bool,
) -> Option<String> {
    let missing = match slug {
        ActiveValue::Set(s) | ActiveValue::Unchanged(s) => s.is_empty(),
        ActiveValue::NotSet => insert,
    };
    match name {
        ActiveValue::Set(name) | ActiveValue::Unchanged(name) if missing => Some(slugify(name)),
        _ => None,
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            description: Set(String::new()),
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
        if let Some(slug) = missing_slug(&self.slug, &self.name, insert) {
            self.slug = Set(slug);
        }
        Box::pin(async move { Ok(self) })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

    use super::missing_slug;

    #[test]
    fn slug_derived_from_name() {
        assert_eq!(
            missing_slug(&NotSet, &Set("Trip Ideas".to_owned()), true).as_deref(),
            Some("trip-ideas")
        );
        assert_eq!(
            missing_slug(&Set(String::new()), &Set("Trip Ideas".to_owned()), false).as_deref(),
            Some("trip-ideas")
        );
    }

    #[test]
    fn existing_slug_preserved() {
        assert_eq!(
            missing_slug(&Set("custom".to_owned()), &Set("Trip Ideas".to_owned()), true),
            None
        );
        assert_eq!(
            missing_slug(&Unchanged("kept".to_owned()), &Set("Renamed".to_owned()), false),
            None
        );
    }

    #[test]
    fn partial_update_keeps_slug() {
        assert_eq!(missing_slug(&NotSet, &Set("Renamed".to_owned()), false), None);
    }
}

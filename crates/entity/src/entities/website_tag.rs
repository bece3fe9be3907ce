use std::pin::Pin;

use sea_orm::{ActiveValue::Set, entity::prelude::*};

/// A free-form tag of the testimonial pages.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "website_tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::website_testimonial_page_tag::Entity")]
    WebsiteTestimonialPageTag,
}

impl Related<super::website_testimonial_page_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebsiteTestimonialPageTag.def()
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
        if let Some(slug) = super::website_category::missing_slug(&self.slug, &self.name, insert) {
            self.slug = Set(slug);
        }
        Box::pin(async move { Ok(self) })
    }
}

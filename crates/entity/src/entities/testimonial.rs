use sea_orm::{ActiveValue::Set, entity::prelude::*};

/// A testimonial left by a customer, outside of the content tree.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "testimonial")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub full_name: String,
    pub organization: String,
    pub trip: String,
    pub event: String,
    /// The date of the testimonial. Defaults to the current date.
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            date: Set(chrono::Utc::now().date_naive()),
            trip: Set(String::new()),
            event: Set(String::new()),
            ..<Self as ActiveModelTrait>::default()
        }
    }
}

use std::pin::Pin;

use sea_orm::entity::prelude::*;

/// A quote requested by a customer for an organization, about a trip.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "quote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub organization_id: i32,
    pub trip_id: i32,
    pub number_of_students: i32,
    pub number_of_adults: i32,
    pub departure_date: Date,
    pub return_date: Date,
    pub departure_location: String,
    #[sea_orm(column_type = "Text")]
    pub comments: String,
    /// The path to the reference file sent back to the customer, if any.
    pub reference_file: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Organization,
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::TripId",
        to = "super::trip::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Trip,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
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

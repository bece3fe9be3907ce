//! The catalog of the travel agency: its categories, trips, events and testimonials.

use chrono::NaiveDate;
use entity::{category, event, testimonial, trip};
use itertools::Itertools as _;
use sea_orm::{
    ActiveModelBehavior as _, ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _,
    ConnectionTrait, EntityTrait, IntoActiveModel as _, QueryFilter as _, QueryOrder as _,
};
use serde::Serialize;

use crate::{
    error::{ValidationError, WebsiteResult},
    must,
};

fn required(name: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Blank(name))
    } else {
        Ok(())
    }
}

/// Creates a category of the catalog. Without a title, it is named "General".
pub async fn create_category<C: ConnectionTrait>(
    conn: &C,
    title: Option<String>,
    caption: String,
) -> WebsiteResult<category::Model> {
    let mut category = category::ActiveModel::new();
    if let Some(title) = title {
        required("title", &title)?;
        category.title = Set(title);
    }
    category.caption = Set(caption);
    Ok(category.insert(conn).await?)
}

/// The data of a new trip.
#[derive(Debug, Clone, Default)]
pub struct NewTrip {
    /// The category of the trip.
    pub category_id: i32,
    /// The title of the trip.
    pub title: String,
    /// The description of the trip.
    pub description: String,
    /// The type of the trip.
    pub trip_type: String,
    /// The destination of the trip.
    pub destination: String,
    /// The date of the trip.
    pub date: NaiveDate,
    /// Whether the trip is a draft. Defaults to `true`.
    pub draft: Option<bool>,
    /// The start location, empty by default.
    pub start_location: Option<String>,
    /// The end location, empty by default.
    pub end_location: Option<String>,
}

/// Creates a trip.
#[tracing::instrument(skip(conn))]
pub async fn create_trip<C: ConnectionTrait>(conn: &C, new: NewTrip) -> WebsiteResult<trip::Model> {
    required("title", &new.title)?;
    required("destination", &new.destination)?;
    must::have_category(conn, new.category_id).await?;

    let mut trip = trip::ActiveModel::new();
    trip.category_id = Set(new.category_id);
    trip.title = Set(new.title);
    trip.description = Set(new.description);
    trip.trip_type = Set(new.trip_type);
    trip.destination = Set(new.destination);
    trip.date = Set(new.date);
    if let Some(draft) = new.draft {
        trip.draft = Set(draft);
    }
    if let Some(start_location) = new.start_location {
        trip.start_location = Set(start_location);
    }
    if let Some(end_location) = new.end_location {
        trip.end_location = Set(end_location);
    }

    Ok(trip.insert(conn).await?)
}

/// Marks a trip as a draft or as open for quotes.
pub async fn set_trip_draft<C: ConnectionTrait>(
    conn: &C,
    trip_id: i32,
    draft: bool,
) -> WebsiteResult<trip::Model> {
    let mut trip = must::have_trip(conn, trip_id).await?.into_active_model();
    trip.draft = Set(draft);
    Ok(trip.update(conn).await?)
}

/// The data of a new event.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    /// The category of the event.
    pub category_id: i32,
    /// The title of the event.
    pub title: String,
    /// The description of the event.
    pub description: String,
    /// The date of the event.
    pub date: NaiveDate,
}

/// Creates an event.
#[tracing::instrument(skip(conn))]
pub async fn create_event<C: ConnectionTrait>(
    conn: &C,
    new: NewEvent,
) -> WebsiteResult<event::Model> {
    required("title", &new.title)?;
    must::have_category(conn, new.category_id).await?;

    Ok(event::ActiveModel {
        category_id: Set(new.category_id),
        title: Set(new.title),
        description: Set(new.description),
        date: Set(new.date),
        ..Default::default()
    }
    .insert(conn)
    .await?)
}

/// The data of a new testimonial.
#[derive(Debug, Clone, Default)]
pub struct NewTestimonial {
    /// The text of the testimonial.
    pub text: String,
    /// The name of its author.
    pub full_name: String,
    /// The organization of its author.
    pub organization: String,
    /// The trip it is about, if any.
    pub trip: Option<String>,
    /// The event it is about, if any.
    pub event: Option<String>,
    /// The date of the testimonial. Defaults to the current date.
    pub date: Option<NaiveDate>,
}

/// Creates a testimonial.
pub async fn create_testimonial<C: ConnectionTrait>(
    conn: &C,
    new: NewTestimonial,
) -> WebsiteResult<testimonial::Model> {
    required("text", &new.text)?;

    let mut testimonial = testimonial::ActiveModel::new();
    testimonial.text = Set(new.text);
    testimonial.full_name = Set(new.full_name);
    testimonial.organization = Set(new.organization);
    if let Some(trip) = new.trip {
        testimonial.trip = Set(trip);
    }
    if let Some(event) = new.event {
        testimonial.event = Set(event);
    }
    if let Some(date) = new.date {
        testimonial.date = Set(date);
    }

    Ok(testimonial.insert(conn).await?)
}

/// Returns the trips which are open for quotes, by title.
pub async fn open_trips<C: ConnectionTrait>(conn: &C) -> WebsiteResult<Vec<trip::Model>> {
    Ok(trip::Entity::find()
        .filter(trip::Column::Draft.eq(false))
        .order_by_asc(trip::Column::Title)
        .all(conn)
        .await?)
}

/// A category of the catalog with its offer.
#[derive(Serialize, Debug, Clone)]
pub struct CategoryOffer {
    /// The category.
    #[serde(flatten)]
    pub category: category::Model,
    /// The trips open for quotes, by date.
    pub trips: Vec<trip::Model>,
    /// The upcoming events, by date.
    pub events: Vec<event::Model>,
}

/// Returns the trips open for quotes and the events from `today` onwards, grouped by
/// category. The categories are sorted by title, and those without any offer are left out.
pub async fn travel_info<C: ConnectionTrait>(
    conn: &C,
    today: NaiveDate,
) -> WebsiteResult<Vec<CategoryOffer>> {
    let categories = category::Entity::find()
        .order_by_asc(category::Column::Title)
        .order_by_asc(category::Column::Id)
        .all(conn)
        .await?;

    let mut trips = trip::Entity::find()
        .filter(trip::Column::Draft.eq(false))
        .order_by_asc(trip::Column::Date)
        .order_by_asc(trip::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(|t| (t.category_id, t))
        .into_group_map();

    let mut events = event::Entity::find()
        .filter(event::Column::Date.gte(today))
        .order_by_asc(event::Column::Date)
        .order_by_asc(event::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(|e| (e.category_id, e))
        .into_group_map();

    Ok(categories
        .into_iter()
        .filter_map(|category| {
            let trips = trips.remove(&category.id).unwrap_or_default();
            let events = events.remove(&category.id).unwrap_or_default();
            (!trips.is_empty() || !events.is_empty()).then_some(CategoryOffer {
                category,
                trips,
                events,
            })
        })
        .collect())
}

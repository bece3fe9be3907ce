//! This module contains utility functions used to retrieve some objects from the database,
//! that must exist. This is why it is called `must`.
//!
//! Unlike the Rust conventions, when such an object doesn't exist, the returned value isn't
//! `Option::None` but the corresponding error (for example, `WebsiteError::TripNotFound`).

use entity::{category, event, page, quote, trip, types::PageKind};
use sea_orm::{ConnectionTrait, EntityTrait};

use crate::error::{WebsiteError, WebsiteResult};

/// Returns the domain category with the provided ID.
pub async fn have_category<C: ConnectionTrait>(
    conn: &C,
    category_id: i32,
) -> WebsiteResult<category::Model> {
    category::Entity::find_by_id(category_id)
        .one(conn)
        .await?
        .ok_or(WebsiteError::CategoryNotFound(category_id))
}

/// Returns the event with the provided ID.
pub async fn have_event<C: ConnectionTrait>(conn: &C, event_id: i32) -> WebsiteResult<event::Model> {
    event::Entity::find_by_id(event_id)
        .one(conn)
        .await?
        .ok_or(WebsiteError::EventNotFound(event_id))
}

/// Returns the trip with the provided ID.
pub async fn have_trip<C: ConnectionTrait>(conn: &C, trip_id: i32) -> WebsiteResult<trip::Model> {
    trip::Entity::find_by_id(trip_id)
        .one(conn)
        .await?
        .ok_or(WebsiteError::TripNotFound(trip_id))
}

/// Returns the quote with the provided ID.
pub async fn have_quote<C: ConnectionTrait>(conn: &C, quote_id: i32) -> WebsiteResult<quote::Model> {
    quote::Entity::find_by_id(quote_id)
        .one(conn)
        .await?
        .ok_or(WebsiteError::QuoteNotFound(quote_id))
}

/// Returns the page node with the provided ID.
pub async fn have_page<C: ConnectionTrait>(conn: &C, page_id: i32) -> WebsiteResult<page::Model> {
    page::Entity::find_by_id(page_id)
        .one(conn)
        .await?
        .ok_or(WebsiteError::PageNotFound(page_id))
}

/// Returns the live page of the provided kind which is the closest to the root of the tree.
///
/// This is used to locate the index pages.
pub async fn have_live_page_of_kind<C: ConnectionTrait>(
    conn: &C,
    kind: PageKind,
) -> WebsiteResult<page::Model> {
    crate::pages::first_live_of_kind(conn, kind)
        .await?
        .ok_or(WebsiteError::PageKindNotFound(kind))
}

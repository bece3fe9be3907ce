//! Module used to serve the routes of the website. Each handler reads the content of a page,
//! and returns it as JSON.

use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Json, Path, Query},
};
use mkenv::Layer as _;
use serde::{Deserialize, Serialize};
use tracing_actix_web::RequestId;
use website_lib::{Database, catalog, listings, quote::QuoteRequest};

use crate::{FitRequestId as _, Res, WebsiteResponse, utils::json};

pub fn website_route() -> Scope {
    web::scope("")
        .route("/", web::get().to(index))
        .route("/our-story", web::get().to(our_story))
        .route("/safety-and-insurance/", web::get().to(safety_insurance))
        .service(
            web::resource("/request-a-quote/")
                .route(web::get().to(quote_form))
                .route(web::post().to(request_quote)),
        )
        .route("/travel/", web::get().to(travel))
        .route("/travel/{slug}/", web::get().to(travel_page))
        .route("/travel-info/", web::get().to(travel_info))
        .route("/contact-us/", web::get().to(contact_us))
        .route("/testimonials/", web::get().to(testimonials))
}

async fn index(req_id: RequestId, db: Res<Database>) -> WebsiteResponse<impl Responder> {
    let limit = website_lib::env().home_listing_limit.get();
    let home = listings::home(&db.sql_conn, limit).await.fit(req_id)?;
    json(home)
}

async fn our_story(req_id: RequestId, db: Res<Database>) -> WebsiteResponse<impl Responder> {
    let about = listings::about(&db.sql_conn).await.fit(req_id)?;
    json(about)
}

async fn safety_insurance(
    req_id: RequestId,
    db: Res<Database>,
) -> WebsiteResponse<impl Responder> {
    let page = listings::safety_insurance(&db.sql_conn).await.fit(req_id)?;
    json(page)
}

#[derive(Serialize)]
struct QuoteFormResponse {
    trips: Vec<entity::trip::Model>,
}

async fn quote_form(req_id: RequestId, db: Res<Database>) -> WebsiteResponse<impl Responder> {
    let trips = catalog::open_trips(&db.sql_conn).await.fit(req_id)?;
    json(QuoteFormResponse { trips })
}

#[derive(Serialize)]
struct QuoteCreatedResponse {
    id: i32,
}

async fn request_quote(
    req_id: RequestId,
    db: Res<Database>,
    Json(body): Json<QuoteRequest>,
) -> WebsiteResponse<impl Responder> {
    let quote = website_lib::quote::request_quote(&db.sql_conn, body)
        .await
        .fit(req_id)?;
    Ok(HttpResponse::Created().json(QuoteCreatedResponse { id: quote.id }))
}

#[derive(Deserialize)]
struct TravelQuery {
    category: Option<String>,
}

async fn travel(
    req_id: RequestId,
    db: Res<Database>,
    Query(query): Query<TravelQuery>,
) -> WebsiteResponse<impl Responder> {
    let travel = listings::travel(&db.sql_conn, query.category.as_deref())
        .await
        .fit(req_id)?;
    json(travel)
}

async fn travel_page(
    req_id: RequestId,
    db: Res<Database>,
    slug: Path<String>,
) -> WebsiteResponse<impl Responder> {
    let page = listings::travel_page(&db.sql_conn, &slug)
        .await
        .fit(req_id)?;
    json(page)
}

async fn travel_info(req_id: RequestId, db: Res<Database>) -> WebsiteResponse<impl Responder> {
    let today = chrono::Utc::now().date_naive();
    let categories = catalog::travel_info(&db.sql_conn, today)
        .await
        .fit(req_id)?;
    json(categories)
}

#[derive(Serialize)]
struct ContactResponse<'a> {
    email: &'a str,
    phone: &'a str,
    address: &'a str,
}

async fn contact_us() -> WebsiteResponse<impl Responder> {
    let contact = &crate::env().contact;
    json(ContactResponse {
        email: &contact.email.get(),
        phone: &contact.phone.get(),
        address: &contact.address.get(),
    })
}

async fn testimonials(req_id: RequestId, db: Res<Database>) -> WebsiteResponse<impl Responder> {
    let testimonials = listings::testimonials(&db.sql_conn).await.fit(req_id)?;
    json(testimonials)
}

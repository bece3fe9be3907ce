//! The queries behind the content pages of the website.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use entity::{
    document, image, page, types::PageKind, website_about_index_page, website_category,
    website_safety_insurance_index_page, website_tag, website_testimonals_index_page,
    website_testimonial_page, website_testimonial_page_categories, website_testimonial_page_tag,
    website_travel_gallery_image, website_travel_index_page, website_travel_page,
    website_travel_page_categories,
};
use itertools::Itertools as _;
use sea_orm::{
    ColumnTrait as _, ConnectionTrait, EntityTrait, QueryFilter as _, QueryOrder as _,
    QuerySelect as _,
};
use serde::Serialize;

use crate::{
    error::{WebsiteError, WebsiteResult},
    must, pages,
    taxonomy::{CategoryForest, display_names},
};

/// The public part of a node of the content tree.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct PageSummary {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub url_path: String,
    pub first_published_at: Option<NaiveDateTime>,
}

impl From<page::Model> for PageSummary {
    fn from(page: page::Model) -> Self {
        Self {
            id: page.id,
            title: page.title,
            slug: page.slug,
            url_path: page.url_path,
            first_published_at: page.first_published_at,
        }
    }
}

/// A testimonial page, as listed on the website.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct TestimonialItem {
    #[serde(flatten)]
    pub page: PageSummary,
    pub text: String,
    pub full_name: String,
    pub organization: String,
    pub trip_event: String,
    pub date: Option<NaiveDate>,
    /// The displayed names of the categories.
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// A travel page, as listed on the website.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct TravelItem {
    #[serde(flatten)]
    pub page: PageSummary,
    pub intro: String,
    pub text: String,
    pub destination: String,
    /// The month of the trip, as `YYYY-MM`.
    pub date: String,
    pub start_location: String,
    pub end_location: String,
    /// The displayed names of the categories.
    pub categories: Vec<String>,
    /// The first image of the gallery, if any.
    pub main_image: Option<image::Model>,
}

/// An image of the gallery of a travel page.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct GalleryItem {
    pub id: i32,
    pub sort_order: Option<i32>,
    pub caption: String,
    pub image: image::Model,
}

/// The content of the about page.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct AboutContext {
    pub page: PageSummary,
    pub body: String,
}

/// The content of the safety and insurance page.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct SafetyInsuranceContext {
    pub page: PageSummary,
    pub body_left: String,
    pub body_right: String,
    pub body_bottom: String,
    pub pdf: Option<document::Model>,
}

/// The content of the testimonials index.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct TestimonialsContext {
    pub page: PageSummary,
    pub intro: String,
    pub testimonial_pages: Vec<TestimonialItem>,
}

/// The content of the travel index.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct TravelContext {
    pub page: PageSummary,
    pub body: String,
    /// The slug of the category the list is restricted to.
    pub category: Option<String>,
    pub travel_pages: Vec<TravelItem>,
}

/// A travel page with its whole gallery.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct TravelPageContext {
    #[serde(flatten)]
    pub travel: TravelItem,
    pub gallery: Vec<GalleryItem>,
}

/// The content of the home page.
#[derive(Serialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct HomeContext {
    /// The body of the about page, if it is published.
    pub about: Option<String>,
    pub travel_pages: Vec<TravelItem>,
    pub testimonial_pages: Vec<TestimonialItem>,
}

async fn testimonial_items<C: ConnectionTrait>(
    conn: &C,
    pages: Vec<page::Model>,
) -> WebsiteResult<Vec<TestimonialItem>> {
    let ids = pages.iter().map(|p| p.id).collect_vec();

    let mut contents = website_testimonial_page::Entity::find()
        .filter(website_testimonial_page::Column::PageId.is_in(ids.clone()))
        .all(conn)
        .await?
        .into_iter()
        .map(|c| (c.page_id, c))
        .collect::<HashMap<_, _>>();

    let forest = CategoryForest::load(conn).await?;
    let mut categories = website_testimonial_page_categories::Entity::find()
        .filter(website_testimonial_page_categories::Column::PageId.is_in(ids.clone()))
        .all(conn)
        .await?
        .into_iter()
        .map(|link| (link.page_id, link.category_id))
        .into_group_map();

    let tag_links = website_testimonial_page_tag::Entity::find()
        .filter(website_testimonial_page_tag::Column::ContentObjectId.is_in(ids))
        .all(conn)
        .await?;
    let tag_names = website_tag::Entity::find()
        .filter(website_tag::Column::Id.is_in(tag_links.iter().map(|l| l.tag_id).unique().collect_vec()))
        .all(conn)
        .await?
        .into_iter()
        .map(|t| (t.id, t.name))
        .collect::<HashMap<_, _>>();
    let mut tags = tag_links
        .into_iter()
        .filter_map(|l| Some((l.content_object_id, tag_names.get(&l.tag_id)?.clone())))
        .into_group_map();

    Ok(pages
        .into_iter()
        .filter_map(|page| {
            let content = contents.remove(&page.id)?;
            let categories = display_names(
                &forest,
                categories.remove(&page.id).unwrap_or_default(),
            );
            let tags = tags.remove(&page.id).unwrap_or_default();
            Some(TestimonialItem {
                page: page.into(),
                text: content.text,
                full_name: content.full_name,
                organization: content.organization,
                trip_event: content.trip_event,
                date: content.date,
                categories,
                tags,
            })
        })
        .collect())
}

async fn travel_items<C: ConnectionTrait>(
    conn: &C,
    pages: Vec<page::Model>,
) -> WebsiteResult<Vec<TravelItem>> {
    let ids = pages.iter().map(|p| p.id).collect_vec();

    let mut contents = website_travel_page::Entity::find()
        .filter(website_travel_page::Column::PageId.is_in(ids.clone()))
        .all(conn)
        .await?
        .into_iter()
        .map(|c| (c.page_id, c))
        .collect::<HashMap<_, _>>();

    let forest = CategoryForest::load(conn).await?;
    let mut categories = website_travel_page_categories::Entity::find()
        .filter(website_travel_page_categories::Column::PageId.is_in(ids.clone()))
        .all(conn)
        .await?
        .into_iter()
        .map(|link| (link.page_id, link.category_id))
        .into_group_map();

    // The gallery is ordered, so the first image of each page is its main image.
    let mut main_images = website_travel_gallery_image::Entity::find()
        .find_also_related(image::Entity)
        .filter(website_travel_gallery_image::Column::PageId.is_in(ids))
        .order_by_asc(website_travel_gallery_image::Column::SortOrder)
        .order_by_asc(website_travel_gallery_image::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .filter_map(|(item, image)| Some((item.page_id, image?)))
        .fold(HashMap::new(), |mut map, (page_id, image)| {
            map.entry(page_id).or_insert(image);
            map
        });

    Ok(pages
        .into_iter()
        .filter_map(|page| {
            let content = contents.remove(&page.id)?;
            let categories = display_names(
                &forest,
                categories.remove(&page.id).unwrap_or_default(),
            );
            let main_image = main_images.remove(&page.id);
            Some(TravelItem {
                page: page.into(),
                intro: content.intro,
                text: content.text,
                destination: content.destination,
                date: content.date,
                start_location: content.start_location,
                end_location: content.end_location,
                categories,
                main_image,
            })
        })
        .collect())
}

/// Returns the content of the about page.
pub async fn about<C: ConnectionTrait>(conn: &C) -> WebsiteResult<AboutContext> {
    let page = must::have_live_page_of_kind(conn, PageKind::AboutIndex).await?;
    let content = website_about_index_page::Entity::find_by_id(page.id)
        .one(conn)
        .await?
        .ok_or(WebsiteError::PageNotFound(page.id))?;
    Ok(AboutContext {
        page: page.into(),
        body: content.body,
    })
}

/// Returns the content of the safety and insurance page, with its PDF document.
pub async fn safety_insurance<C: ConnectionTrait>(
    conn: &C,
) -> WebsiteResult<SafetyInsuranceContext> {
    let page = must::have_live_page_of_kind(conn, PageKind::SafetyInsuranceIndex).await?;
    let (content, pdf) = website_safety_insurance_index_page::Entity::find_by_id(page.id)
        .find_also_related(document::Entity)
        .one(conn)
        .await?
        .ok_or(WebsiteError::PageNotFound(page.id))?;
    Ok(SafetyInsuranceContext {
        page: page.into(),
        body_left: content.body_left,
        body_right: content.body_right,
        body_bottom: content.body_bottom,
        pdf,
    })
}

/// Returns the testimonials index, with its live testimonial pages, the most recently
/// published first.
pub async fn testimonials<C: ConnectionTrait>(conn: &C) -> WebsiteResult<TestimonialsContext> {
    let page = must::have_live_page_of_kind(conn, PageKind::TestimonialsIndex).await?;
    let content = website_testimonals_index_page::Entity::find_by_id(page.id)
        .one(conn)
        .await?
        .ok_or(WebsiteError::PageNotFound(page.id))?;

    let children = pages::live_children(conn, page.id)
        .await?
        .into_iter()
        .filter(|p| p.kind == PageKind::Testimonial)
        .collect();

    Ok(TestimonialsContext {
        page: page.into(),
        intro: content.intro,
        testimonial_pages: testimonial_items(conn, children).await?,
    })
}

/// Returns the travel index, with the live travel pages, the most recently published first.
///
/// If a category slug is provided, only the travel pages of this category are listed.
pub async fn travel<C: ConnectionTrait>(
    conn: &C,
    category: Option<&str>,
) -> WebsiteResult<TravelContext> {
    let page = must::have_live_page_of_kind(conn, PageKind::TravelIndex).await?;
    let content = website_travel_index_page::Entity::find_by_id(page.id)
        .one(conn)
        .await?
        .ok_or(WebsiteError::PageNotFound(page.id))?;

    let mut travel_pages = pages::live_of_kind_query(PageKind::Travel);

    if let Some(slug) = category {
        let category = website_category::Entity::find()
            .filter(website_category::Column::Slug.eq(slug))
            .one(conn)
            .await?
            .ok_or_else(|| WebsiteError::CategorySlugNotFound(slug.to_owned()))?;
        let tagged = website_travel_page_categories::Entity::find()
            .filter(website_travel_page_categories::Column::CategoryId.eq(category.id))
            .all(conn)
            .await?
            .into_iter()
            .map(|link| link.page_id)
            .collect_vec();
        travel_pages = travel_pages.filter(page::Column::Id.is_in(tagged));
    }
    let travel_pages = travel_pages.all(conn).await?;

    Ok(TravelContext {
        page: page.into(),
        body: content.body,
        category: category.map(ToOwned::to_owned),
        travel_pages: travel_items(conn, travel_pages).await?,
    })
}

/// Returns the gallery of a travel page, in order.
pub async fn travel_gallery<C: ConnectionTrait>(
    conn: &C,
    page_id: i32,
) -> WebsiteResult<Vec<GalleryItem>> {
    Ok(website_travel_gallery_image::Entity::find()
        .find_also_related(image::Entity)
        .filter(website_travel_gallery_image::Column::PageId.eq(page_id))
        .order_by_asc(website_travel_gallery_image::Column::SortOrder)
        .order_by_asc(website_travel_gallery_image::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .filter_map(|(item, image)| {
            Some(GalleryItem {
                id: item.id,
                sort_order: item.sort_order,
                caption: item.caption,
                image: image?,
            })
        })
        .collect())
}

/// Returns the live travel page with the provided slug, with its gallery.
pub async fn travel_page<C: ConnectionTrait>(
    conn: &C,
    slug: &str,
) -> WebsiteResult<TravelPageContext> {
    let page = page::Entity::find()
        .filter(page::Column::Kind.eq(PageKind::Travel))
        .filter(page::Column::Live.eq(true))
        .filter(page::Column::Slug.eq(slug))
        .order_by_asc(page::Column::Depth)
        .order_by_asc(page::Column::Id)
        .one(conn)
        .await?
        .ok_or_else(|| WebsiteError::PageSlugNotFound(PageKind::Travel, slug.to_owned()))?;
    let page_id = page.id;

    let travel = travel_items(conn, vec![page])
        .await?
        .pop()
        .ok_or(WebsiteError::PageNotFound(page_id))?;

    Ok(TravelPageContext {
        travel,
        gallery: travel_gallery(conn, page_id).await?,
    })
}

/// Returns the content of the home page: the about page body, and the most recent travel
/// pages and testimonials.
pub async fn home<C: ConnectionTrait>(conn: &C, limit: u64) -> WebsiteResult<HomeContext> {
    let about = match about(conn).await {
        Ok(about) => Some(about.body),
        Err(WebsiteError::PageKindNotFound(_)) => None,
        Err(e) => return Err(e),
    };

    let travel_pages = pages::live_of_kind_query(PageKind::Travel)
        .limit(limit)
        .all(conn)
        .await?;
    let testimonial_pages = pages::live_of_kind_query(PageKind::Testimonial)
        .limit(limit)
        .all(conn)
        .await?;

    Ok(HomeContext {
        about,
        travel_pages: travel_items(conn, travel_pages).await?,
        testimonial_pages: testimonial_items(conn, testimonial_pages).await?,
    })
}

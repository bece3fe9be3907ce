//! The content tree of the website.
//!
//! Every content page is a node of the `page` table, which holds its position in the tree and
//! its publication state. The content itself lives in the table of the page kind, keyed by the
//! ID of the node.

use chrono::NaiveDate;
use entity::{
    page, types::{PageKind, YearMonth, slugify}, website_about_index_page,
    website_safety_insurance_index_page, website_testimonals_index_page,
    website_testimonial_page, website_testimonial_page_categories, website_testimonial_page_tag,
    website_travel_gallery_image, website_travel_index_page, website_travel_page,
    website_travel_page_categories,
};
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, ConnectionTrait, DatabaseTransaction,
    EntityTrait, IntoActiveModel as _, QueryFilter as _, QueryOrder as _, Select,
    TransactionTrait,
};

use crate::{
    error::{ValidationError, WebsiteError, WebsiteResult},
    must, sync,
};

/// An image to add to the gallery of a travel page.
#[derive(Debug, Clone)]
pub struct GalleryImageInput {
    /// The image.
    pub image_id: i32,
    /// The caption shown under the image.
    pub caption: String,
}

/// The content of a page to create, for each kind of page.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum PageContent {
    AboutIndex {
        body: String,
    },
    SafetyInsuranceIndex {
        body_left: String,
        body_right: String,
        body_bottom: String,
        pdf_id: Option<i32>,
    },
    TestimonialsIndex {
        intro: String,
    },
    Testimonial {
        text: String,
        full_name: String,
        organization: String,
        trip_event: String,
        date: Option<NaiveDate>,
        category_ids: Vec<i32>,
        tag_ids: Vec<i32>,
    },
    TravelIndex {
        body: String,
    },
    Travel {
        intro: String,
        text: String,
        destination: String,
        date: YearMonth,
        start_location: String,
        end_location: String,
        category_ids: Vec<i32>,
        gallery: Vec<GalleryImageInput>,
    },
}

impl PageContent {
    /// Returns the kind of the page holding this content.
    pub fn kind(&self) -> PageKind {
        match self {
            Self::AboutIndex { .. } => PageKind::AboutIndex,
            Self::SafetyInsuranceIndex { .. } => PageKind::SafetyInsuranceIndex,
            Self::TestimonialsIndex { .. } => PageKind::TestimonialsIndex,
            Self::Testimonial { .. } => PageKind::Testimonial,
            Self::TravelIndex { .. } => PageKind::TravelIndex,
            Self::Travel { .. } => PageKind::Travel,
        }
    }

    /// Checks the fields that can't be blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        fn required(name: &'static str, value: &str) -> Result<(), ValidationError> {
            if value.trim().is_empty() {
                Err(ValidationError::Blank(name))
            } else {
                Ok(())
            }
        }

        match self {
            Self::AboutIndex { body } => required("body", body),
            Self::SafetyInsuranceIndex { body_left, .. } => required("body_left", body_left),
            Self::TestimonialsIndex { .. } | Self::TravelIndex { .. } => Ok(()),
            Self::Testimonial {
                text, organization, ..
            } => {
                required("text", text)?;
                required("organization", organization)
            }
            Self::Travel {
                intro,
                text,
                destination,
                category_ids,
                ..
            } => {
                required("intro", intro)?;
                required("text", text)?;
                required("destination", destination)?;
                if category_ids.is_empty() {
                    return Err(ValidationError::Blank("categories"));
                }
                Ok(())
            }
        }
    }
}

/// Adds a node to the content tree, as a child of `parent`, or as a root if `None`.
///
/// The slug defaults to the slugified title, and must be unique among the siblings.
/// The new page is a draft.
pub async fn add_child<C: ConnectionTrait>(
    conn: &C,
    parent: Option<&page::Model>,
    kind: PageKind,
    title: &str,
    slug: Option<&str>,
) -> WebsiteResult<page::Model> {
    if title.trim().is_empty() {
        return Err(ValidationError::Blank("title").into());
    }

    let slug = match slug {
        Some(slug) if !slug.is_empty() => slug.to_owned(),
        _ => slugify(title),
    };
    if slug.is_empty() {
        return Err(ValidationError::Blank("slug").into());
    }

    let siblings = page::Entity::find().filter(page::Column::Slug.eq(slug.as_str()));
    let siblings = match parent {
        Some(parent) => siblings.filter(page::Column::ParentId.eq(parent.id)),
        None => siblings.filter(page::Column::ParentId.is_null()),
    };
    if siblings.one(conn).await?.is_some() {
        return Err(ValidationError::DuplicatePageSlug(slug).into());
    }

    let (depth, url_path) = match parent {
        Some(parent) => (parent.depth + 1, format!("{}{slug}/", parent.url_path)),
        None => (1, "/".to_owned()),
    };

    let page = page::ActiveModel {
        parent_id: Set(parent.map(|p| p.id)),
        kind: Set(kind),
        title: Set(title.to_owned()),
        slug: Set(slug),
        url_path: Set(url_path),
        depth: Set(depth),
        live: Set(false),
        first_published_at: Set(None),
        last_published_at: Set(None),
        search_description: Set(String::new()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(page)
}

async fn insert_content(
    txn: &DatabaseTransaction,
    page_id: i32,
    content: PageContent,
) -> WebsiteResult<()> {
    match content {
        PageContent::AboutIndex { body } => {
            website_about_index_page::ActiveModel {
                page_id: Set(page_id),
                body: Set(body),
            }
            .insert(txn)
            .await?;
        }
        PageContent::SafetyInsuranceIndex {
            body_left,
            body_right,
            body_bottom,
            pdf_id,
        } => {
            website_safety_insurance_index_page::ActiveModel {
                page_id: Set(page_id),
                body_left: Set(body_left),
                body_right: Set(body_right),
                body_bottom: Set(body_bottom),
                pdf_id: Set(pdf_id),
            }
            .insert(txn)
            .await?;
        }
        PageContent::TestimonialsIndex { intro } => {
            website_testimonals_index_page::ActiveModel {
                page_id: Set(page_id),
                intro: Set(intro),
            }
            .insert(txn)
            .await?;
        }
        PageContent::Testimonial {
            text,
            full_name,
            organization,
            trip_event,
            date,
            category_ids,
            tag_ids,
        } => {
            website_testimonial_page::ActiveModel {
                page_id: Set(page_id),
                text: Set(text),
                full_name: Set(full_name),
                organization: Set(organization),
                trip_event: Set(trip_event),
                date: Set(date),
            }
            .insert(txn)
            .await?;

            for category_id in category_ids {
                website_testimonial_page_categories::ActiveModel {
                    page_id: Set(page_id),
                    category_id: Set(category_id),
                }
                .insert(txn)
                .await?;
            }
            for tag_id in tag_ids {
                website_testimonial_page_tag::ActiveModel {
                    tag_id: Set(tag_id),
                    content_object_id: Set(page_id),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
            }
        }
        PageContent::TravelIndex { body } => {
            website_travel_index_page::ActiveModel {
                page_id: Set(page_id),
                body: Set(body),
            }
            .insert(txn)
            .await?;
        }
        PageContent::Travel {
            intro,
            text,
            destination,
            date,
            start_location,
            end_location,
            category_ids,
            gallery,
        } => {
            website_travel_page::ActiveModel {
                page_id: Set(page_id),
                intro: Set(intro),
                text: Set(text),
                destination: Set(destination),
                date: Set(date.to_string()),
                start_location: Set(start_location),
                end_location: Set(end_location),
            }
            .insert(txn)
            .await?;

            for category_id in category_ids {
                website_travel_page_categories::ActiveModel {
                    page_id: Set(page_id),
                    category_id: Set(category_id),
                }
                .insert(txn)
                .await?;
            }
            for (sort_order, image) in (0..).zip(gallery) {
                website_travel_gallery_image::ActiveModel {
                    sort_order: Set(Some(sort_order)),
                    page_id: Set(page_id),
                    image_id: Set(image.image_id),
                    caption: Set(image.caption),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
            }
        }
    }

    Ok(())
}

/// Creates a page with its content, as a child of the page with the ID `parent_id`,
/// or as a root if `None`.
#[tracing::instrument(skip(conn, content), fields(kind = %content.kind()))]
pub async fn create_page<C: TransactionTrait + ConnectionTrait>(
    conn: &C,
    parent_id: Option<i32>,
    title: &str,
    slug: Option<&str>,
    content: PageContent,
) -> WebsiteResult<page::Model> {
    content.validate()?;
    let parent = match parent_id {
        Some(id) => Some(must::have_page(conn, id).await?),
        None => None,
    };

    sync::transaction(conn, async |txn: &DatabaseTransaction| {
        let page = add_child(txn, parent.as_ref(), content.kind(), title, slug).await?;
        insert_content(txn, page.id, content).await?;
        Ok::<_, WebsiteError>(page)
    })
    .await
}

/// Publishes a page. The first publication date is only set once.
#[tracing::instrument(skip(conn))]
pub async fn publish<C: ConnectionTrait>(conn: &C, page_id: i32) -> WebsiteResult<page::Model> {
    let page = must::have_page(conn, page_id).await?;
    let now = chrono::Utc::now().naive_utc();
    let first_published_at = page.first_published_at.unwrap_or(now);

    let mut page = page.into_active_model();
    page.live = Set(true);
    page.first_published_at = Set(Some(first_published_at));
    page.last_published_at = Set(Some(now));
    Ok(page.update(conn).await?)
}

/// Turns a page back into a draft.
#[tracing::instrument(skip(conn))]
pub async fn unpublish<C: ConnectionTrait>(conn: &C, page_id: i32) -> WebsiteResult<page::Model> {
    let page = must::have_page(conn, page_id).await?;
    let mut page = page.into_active_model();
    page.live = Set(false);
    Ok(page.update(conn).await?)
}

/// Returns the live children of a page, the most recently published first.
pub async fn live_children<C: ConnectionTrait>(
    conn: &C,
    parent_id: i32,
) -> WebsiteResult<Vec<page::Model>> {
    Ok(page::Entity::find()
        .filter(page::Column::ParentId.eq(parent_id))
        .filter(page::Column::Live.eq(true))
        .order_by_desc(page::Column::FirstPublishedAt)
        .order_by_desc(page::Column::Id)
        .all(conn)
        .await?)
}

/// Returns the query of the live pages of a kind, the most recently published first.
pub fn live_of_kind_query(kind: PageKind) -> Select<page::Entity> {
    page::Entity::find()
        .filter(page::Column::Kind.eq(kind))
        .filter(page::Column::Live.eq(true))
        .order_by_desc(page::Column::FirstPublishedAt)
        .order_by_desc(page::Column::Id)
}

/// Returns the live page of the provided kind which is the closest to the root of the tree.
pub async fn first_live_of_kind<C: ConnectionTrait>(
    conn: &C,
    kind: PageKind,
) -> WebsiteResult<Option<page::Model>> {
    Ok(page::Entity::find()
        .filter(page::Column::Kind.eq(kind))
        .filter(page::Column::Live.eq(true))
        .order_by_asc(page::Column::Depth)
        .order_by_asc(page::Column::Id)
        .one(conn)
        .await?)
}

#[cfg(test)]
mod tests {
    use entity::types::YearMonth;

    use super::PageContent;
    use crate::error::ValidationError;

    #[test]
    fn required_fields() {
        let about = PageContent::AboutIndex {
            body: "  ".to_owned(),
        };
        assert_eq!(about.validate(), Err(ValidationError::Blank("body")));

        let index = PageContent::TravelIndex {
            body: String::new(),
        };
        assert_eq!(index.validate(), Ok(()));

        let travel = PageContent::Travel {
            intro: "Intro".to_owned(),
            text: "Text".to_owned(),
            destination: "Lisbon".to_owned(),
            date: YearMonth::new(2017, 4).unwrap(),
            start_location: String::new(),
            end_location: String::new(),
            category_ids: Vec::new(),
            gallery: Vec::new(),
        };
        assert_eq!(travel.validate(), Err(ValidationError::Blank("categories")));
    }
}

pub mod prelude;

pub mod category;
pub mod customer;
pub mod event;
pub mod event_file;
pub mod event_photos;
pub mod organization;
pub mod quote;
pub mod testimonial;
pub mod trip;
pub mod trip_file;
pub mod trip_photo;

pub mod document;
pub mod image;
pub mod page;
pub mod website_about_index_page;
pub mod website_category;
pub mod website_safety_insurance_index_page;
pub mod website_tag;
pub mod website_testimonals_index_page;
pub mod website_testimonial_page;
pub mod website_testimonial_page_categories;
pub mod website_testimonial_page_tag;
pub mod website_travel_gallery_image;
pub mod website_travel_index_page;
pub mod website_travel_page;
pub mod website_travel_page_categories;

use sea_orm::{ActiveValue, entity::prelude::DateTime};

/// Fills the auditing timestamps of a row that is about to be saved.
///
/// The creation date is only set on insertion, and only if the caller didn't provide one.
pub(crate) fn touch_timestamps(
    created_at: &mut ActiveValue<DateTime>,
    updated_at: &mut ActiveValue<DateTime>,
    insert: bool,
) {
    let now = chrono::Utc::now().naive_utc();
    if insert && created_at.is_not_set() {
        *created_at = ActiveValue::Set(now);
    }
    *updated_at = ActiveValue::Set(now);
}

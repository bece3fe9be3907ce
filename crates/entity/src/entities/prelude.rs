pub use super::category::Entity as Category;
pub use super::customer::Entity as Customer;
pub use super::document::Entity as Document;
pub use super::event::Entity as Event;
pub use super::event_file::Entity as EventFile;
pub use super::event_photos::Entity as EventPhotos;
pub use super::image::Entity as Image;
pub use super::organization::Entity as Organization;
pub use super::page::Entity as Page;
pub use super::quote::Entity as Quote;
pub use super::testimonial::Entity as Testimonial;
pub use super::trip::Entity as Trip;
pub use super::trip_file::Entity as TripFile;
pub use super::trip_photo::Entity as TripPhoto;
pub use super::website_about_index_page::Entity as WebsiteAboutIndexPage;
pub use super::website_category::Entity as WebsiteCategory;
pub use super::website_safety_insurance_index_page::Entity as WebsiteSafetyInsuranceIndexPage;
pub use super::website_tag::Entity as WebsiteTag;
pub use super::website_testimonals_index_page::Entity as WebsiteTestimonalsIndexPage;
pub use super::website_testimonial_page::Entity as WebsiteTestimonialPage;
pub use super::website_testimonial_page_categories::Entity as WebsiteTestimonialPageCategories;
pub use super::website_testimonial_page_tag::Entity as WebsiteTestimonialPageTag;
pub use super::website_travel_gallery_image::Entity as WebsiteTravelGalleryImage;
pub use super::website_travel_index_page::Entity as WebsiteTravelIndexPage;
pub use super::website_travel_page::Entity as WebsiteTravelPage;
pub use super::website_travel_page_categories::Entity as WebsiteTravelPageCategories;

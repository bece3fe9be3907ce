//! The sea-orm models of the website database.
//!
//! The tables are split in two families: the domain models used by the travel agency
//! (trips, quotes, events, customers and their attachments), and the content pages
//! managed through the content tree (about, safety, testimonials and travel pages).

mod entities;
pub use entities::*;

pub mod types;

pub mod prelude {
    pub use super::entities::prelude::*;
}

//! The library of the website server.
//!
//! It exposes the routes of the public website, which read the content managed by the
//! [`website_lib`] crate.

pub mod configure;
mod env;
mod error;
mod http;
mod utils;

pub use env::*;
pub use error::*;
pub use utils::*;

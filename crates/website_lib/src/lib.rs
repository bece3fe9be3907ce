//! The main crate of the travel agency website.
//!
//! This crate is used by both the website server and the administration tool. It contains
//! environment setup functions, the storage of the uploaded files, the category taxonomy,
//! the content tree of the website, and the queries used to render its pages.
//!
//! If you wish to see the crate of the server program itself, take a look
//! at the [`website_api_lib`](../website_api_lib/index.html) package.

#![warn(missing_docs)]

mod env;

pub mod attachments;
pub mod catalog;
pub mod error;
pub mod listings;
pub mod must;
pub mod pages;
pub mod panels;
pub mod password;
pub mod quote;
pub mod storage;
pub mod sync;
pub mod taxonomy;
pub mod upload;

use std::sync::Arc;

pub use env::*;
use sea_orm::DbConn;

use self::storage::{FilesystemBackend, StorageBackend};

/// Represents the database of the website, meaning the SQL database and the storage
/// of the uploaded files.
#[derive(Clone)]
pub struct Database {
    /// The SQL database connection pool.
    pub sql_conn: DbConn,
    /// The storage of the uploaded files.
    pub storage: Arc<dyn StorageBackend>,
}

impl Database {
    /// Returns the database from an existing connection and storage backend.
    pub fn from_db_conn(sql_conn: DbConn, storage: Arc<dyn StorageBackend>) -> Self {
        Self { sql_conn, storage }
    }

    /// Returns the database from the URL to the SQL database, with the uploaded files
    /// saved under the provided media root.
    pub async fn from_db_url(db_url: String, media_root: String) -> Result<Self, sea_orm::DbErr> {
        let sql_conn = sea_orm::Database::connect(db_url).await?;
        Ok(Self::from_db_conn(
            sql_conn,
            Arc::new(FilesystemBackend::new(media_root)),
        ))
    }
}

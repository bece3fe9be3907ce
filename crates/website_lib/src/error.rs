//! A module containing the [`WebsiteError`] enum, which contains various basic error types.

use entity::types::{PageKind, YearMonthParseError};
use sea_orm::TransactionError;

/// A recoverable validation failure, which must be shown to the user
/// and refuses the save.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The category was set as its own parent.
    #[error("Parent category cannot be self.")]
    SelfParent,
    /// The category would be part of a cycle of up to three categories.
    #[error("Cannot have circular Parents.")]
    CircularParents,
    /// A sibling page already uses the slug.
    #[error("the slug `{0}` is already in use by a sibling page")]
    DuplicatePageSlug(String),
    /// Another category already uses the slug.
    #[error("the slug `{0}` is already in use by another category")]
    DuplicateCategorySlug(String),
    /// A required field was left blank.
    #[error("the field `{0}` is required")]
    Blank(&'static str),
    /// A count can't be negative.
    #[error("the field `{0}` can't be negative")]
    Negative(&'static str),
    /// The email address is malformed.
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    /// The year-month date is malformed.
    #[error(transparent)]
    YearMonth(#[from] YearMonthParseError),
    /// The return date of a quote is before its departure date.
    #[error("the return date cannot be before the departure date")]
    ReturnBeforeDeparture,
    /// The trip is still a draft, so it can't be quoted.
    #[error("the trip with ID {0} is not open for quotes")]
    TripDraft(i32),
}

/// Represents any type of error that could happen when using this crate.
#[derive(thiserror::Error, Debug)]
#[rustfmt::skip]
pub enum WebsiteError {
    // --------
    // --- Internal server errors
    // --------

    /// An error from the database.
    #[error(transparent)]
    DbError(#[from] sea_orm::DbErr),
    /// An error that happened when reading or writing an uploaded file.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    /// An error that happened when hashing a password.
    #[error("password hashing error: {0}")]
    PasswordHash(argon2::password_hash::Error),

    // --------
    // --- Logical errors
    // --------

    /// The provided data was refused.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No live page of the provided kind was found.
    #[error("no live page of kind `{0}`")]
    PageKindNotFound(PageKind),
    /// The page with the provided ID was not found.
    #[error("page with ID {0} not found")]
    PageNotFound(i32),
    /// No live page of the provided kind has the provided slug.
    #[error("no live {0} with slug `{1}`")]
    PageSlugNotFound(PageKind, String),
    /// The trip with the provided ID was not found.
    #[error("trip with ID {0} not found")]
    TripNotFound(i32),
    /// The event with the provided ID was not found.
    #[error("event with ID {0} not found")]
    EventNotFound(i32),
    /// The domain category with the provided ID was not found.
    #[error("category with ID {0} not found")]
    CategoryNotFound(i32),
    /// The website category with the provided ID was not found.
    #[error("website category with ID {0} not found")]
    WebsiteCategoryNotFound(i32),
    /// The website category with the provided slug was not found.
    #[error("category `{0}` not found")]
    CategorySlugNotFound(String),
    /// The quote with the provided ID was not found.
    #[error("quote with ID {0} not found")]
    QuoteNotFound(i32),
    /// The attachment with the provided ID was not found.
    #[error("{0} with ID {1} not found")]
    AttachmentNotFound(&'static str, i32),
}

impl From<argon2::password_hash::Error> for WebsiteError {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

impl<E> From<TransactionError<E>> for WebsiteError
where
    WebsiteError: From<E>,
{
    fn from(value: TransactionError<E>) -> Self {
        match value {
            TransactionError::Connection(db_err) => From::from(db_err),
            TransactionError::Transaction(e) => From::from(e),
        }
    }
}

/// Represents the result of a computation that could return a [`WebsiteError`].
pub type WebsiteResult<T = ()> = Result<T, WebsiteError>;

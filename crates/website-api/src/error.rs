use std::fmt;

use actix_web::{HttpResponse, http::StatusCode};
use tracing_actix_web::RequestId;
use website_lib::error::WebsiteError;

#[derive(thiserror::Error, Debug)]
#[repr(i32)] // i32 to be used with clients that don't support unsigned integers
#[rustfmt::skip]
pub enum ApiErrorKind {
    // Caution: when creating a new error, you must ensure its code isn't
    // in conflict with another one in `website_lib::error::WebsiteError`.

    // --------
    // --- Internal server errors
    // --------

    // ...Errors from website_lib

    // --------
    // --- Logical errors
    // --------

    #[error("not found")]
    EndpointNotFound = 301,
    #[error("invalid request body: {0}")]
    InvalidBody(String) = 302,

    // ...Errors from website_lib

    #[error(transparent)]
    Lib(#[from] WebsiteError),
}

#[derive(serde::Serialize)]
pub struct ApiErrorKindResponse {
    pub r#type: i32,
    pub message: String,
}

impl actix_web::ResponseError for ApiErrorKind {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let (r#type, status_code) = self.get_err_type_and_status_code();
        HttpResponse::build(status_code).json(ApiErrorKindResponse {
            r#type,
            message: self.to_string(),
        })
    }
}

impl ApiErrorKind {
    pub fn get_err_type_and_status_code(&self) -> (i32, StatusCode) {
        use ApiErrorKind as E;
        use StatusCode as S;
        use website_lib::error::WebsiteError as LE;

        match self {
            E::Lib(LE::DbError(_)) => (102, S::INTERNAL_SERVER_ERROR),
            E::Lib(LE::Storage(_)) => (103, S::INTERNAL_SERVER_ERROR),
            E::Lib(LE::PasswordHash(_)) => (104, S::INTERNAL_SERVER_ERROR),

            E::EndpointNotFound => (301, S::NOT_FOUND),
            E::InvalidBody(_) => (302, S::BAD_REQUEST),
            E::Lib(LE::Validation(_)) => (303, S::BAD_REQUEST),
            E::Lib(LE::PageKindNotFound(_)) => (304, S::NOT_FOUND),
            E::Lib(LE::PageNotFound(_)) => (305, S::NOT_FOUND),
            E::Lib(LE::TripNotFound(_)) => (306, S::NOT_FOUND),
            E::Lib(LE::EventNotFound(_)) => (307, S::NOT_FOUND),
            E::Lib(LE::CategoryNotFound(_)) => (308, S::NOT_FOUND),
            E::Lib(LE::WebsiteCategoryNotFound(_)) => (309, S::NOT_FOUND),
            E::Lib(LE::CategorySlugNotFound(_)) => (310, S::NOT_FOUND),
            E::Lib(LE::QuoteNotFound(_)) => (311, S::NOT_FOUND),
            E::Lib(LE::AttachmentNotFound(_, _)) => (312, S::NOT_FOUND),
            E::Lib(LE::PageSlugNotFound(_, _)) => (313, S::NOT_FOUND),
        }
    }
}

impl From<sea_orm::DbErr> for ApiErrorKind {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Lib(value.into())
    }
}

#[derive(Debug)]
pub struct TracedError {
    pub status_code: StatusCode,
    pub r#type: i32,
    pub request_id: RequestId,
    pub error: actix_web::Error,
}

impl fmt::Display for TracedError {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for TracedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl TracedError {
    /// Wraps the error with the ID of the request it happened in, logging it on the way.
    pub fn new(error: ApiErrorKind, request_id: RequestId) -> Self {
        let (r#type, status_code) = error.get_err_type_and_status_code();
        match status_code {
            s if s.is_server_error() => tracing::error!("[{request_id}] {error}"),
            _ => tracing::debug!("[{request_id}] {error}"),
        }
        Self {
            status_code,
            r#type,
            request_id,
            error: error.into(),
        }
    }

    fn to_err_res(&self, r#type: i32) -> ErrorResponse {
        ErrorResponse {
            request_id: self.request_id.to_string(),
            r#type,
            message: self.error.to_string(),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub request_id: String,
    pub r#type: i32,
    pub message: String,
}

impl actix_web::ResponseError for TracedError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code).json(self.to_err_res(self.r#type))
    }
}

/// The type returned by the route handlers.
pub type WebsiteResponse<T> = Result<T, TracedError>;

/// Tags the error of a result with the ID of the request it happened in.
pub trait FitRequestId<T, E> {
    fn fit(self, request_id: RequestId) -> WebsiteResponse<T>;
}

impl<T, E> FitRequestId<T, E> for Result<T, E>
where
    ApiErrorKind: From<E>,
{
    fn fit(self, request_id: RequestId) -> WebsiteResponse<T> {
        self.map_err(|e| TracedError::new(ApiErrorKind::from(e), request_id))
    }
}

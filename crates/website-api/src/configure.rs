use actix_web::{
    HttpMessage as _, HttpRequest, Responder,
    error::JsonPayloadError,
    web::{self, JsonConfig},
};
use tracing_actix_web::{DefaultRootSpanBuilder, RequestId, RootSpanBuilder};
use website_lib::Database;

use crate::{ApiErrorKind, FitRequestId as _, TracedError, WebsiteResponse};

/// The actix route handler for the Not Found response.
async fn not_found(req_id: RequestId) -> WebsiteResponse<impl Responder> {
    Err::<String, _>(ApiErrorKind::EndpointNotFound).fit(req_id)
}

/// Turns a malformed JSON body into an error response carrying the request ID.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let err = ApiErrorKind::InvalidBody(err.to_string());
    match req.extensions().get::<RequestId>().copied() {
        Some(request_id) => TracedError::new(err, request_id).into(),
        None => err.into(),
    }
}

pub struct CustomRootSpanBuilder;

impl RootSpanBuilder for CustomRootSpanBuilder {
    fn on_request_start(request: &actix_web::dev::ServiceRequest) -> tracing::Span {
        #[cfg_attr(
            all(
                not(feature = "mysql"),
                not(feature = "postgres"),
                not(feature = "sqlite")
            ),
            allow(unused_variables)
        )]
        let db = request.app_data::<Database>().unwrap();
        let pool_size = {
            #[allow(unreachable_patterns)]
            match db.sql_conn {
                #[cfg(feature = "mysql")]
                sea_orm::DatabaseConnection::SqlxMySqlPoolConnection(_) => {
                    db.sql_conn.get_mysql_connection_pool().size()
                }
                #[cfg(feature = "postgres")]
                sea_orm::DatabaseConnection::SqlxPostgresPoolConnection(_) => {
                    db.sql_conn.get_postgres_connection_pool().size()
                }
                #[cfg(feature = "sqlite")]
                sea_orm::DatabaseConnection::SqlxSqlitePoolConnection(_) => {
                    db.sql_conn.get_sqlite_connection_pool().size()
                }
                _ => 0,
            }
        };
        let pool_num_idle = {
            #[allow(unreachable_patterns)]
            match db.sql_conn {
                #[cfg(feature = "mysql")]
                sea_orm::DatabaseConnection::SqlxMySqlPoolConnection(_) => {
                    db.sql_conn.get_mysql_connection_pool().num_idle()
                }
                #[cfg(feature = "postgres")]
                sea_orm::DatabaseConnection::SqlxPostgresPoolConnection(_) => {
                    db.sql_conn.get_postgres_connection_pool().num_idle()
                }
                #[cfg(feature = "sqlite")]
                sea_orm::DatabaseConnection::SqlxSqlitePoolConnection(_) => {
                    db.sql_conn.get_sqlite_connection_pool().num_idle()
                }
                _ => 0,
            }
        };

        tracing_actix_web::root_span!(
            request,
            pool_size = pool_size,
            pool_num_idle = pool_num_idle,
        )
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: tracing::Span,
        outcome: &Result<actix_web::dev::ServiceResponse<B>, actix_web::Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, db: Database) {
    let json_config = JsonConfig::default()
        .limit(1024 * 16)
        .error_handler(json_error_handler);

    cfg.app_data(db)
        .app_data(json_config)
        .service(crate::http::website_route())
        .default_service(web::to(not_found));
}

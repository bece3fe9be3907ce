use std::{panic, sync::Arc};

use anyhow::Context as _;
use futures::FutureExt as _;
use migration::MigratorTrait as _;
use mkenv::{exec::ConfigInitializer as _, prelude::*};
use sea_orm::ConnectOptions;
use tracing_subscriber::fmt::TestWriter;
use website_lib::{Database, LibEnv, storage::MemoryBackend};

pub trait IntoResult {
    type Out;

    fn into_result(self) -> anyhow::Result<Self::Out>;
}

impl IntoResult for () {
    type Out = ();

    fn into_result(self) -> anyhow::Result<Self::Out> {
        Ok(())
    }
}

impl<T, E> IntoResult for Result<T, E>
where
    anyhow::Error: From<E>,
{
    type Out = T;

    fn into_result(self) -> anyhow::Result<Self::Out> {
        self.map_err(From::from)
    }
}

pub fn init_env() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }

    let _ = tracing_subscriber::fmt()
        .with_writer(TestWriter::new())
        .try_init();

    let env = LibEnv::define();
    env.try_init()
        .map_err(|e| anyhow::anyhow!("cannot initialize the library environment: {e}"))?;
    website_lib::init_env(env);

    Ok(())
}

/// Runs the test with a fresh database: an in-memory SQLite database with every migration
/// applied, and an in-memory storage for the uploaded files.
pub async fn wrap<F, R>(test: F) -> anyhow::Result<<R as IntoResult>::Out>
where
    F: AsyncFnOnce(Database) -> R,
    R: IntoResult,
{
    init_env()?;

    // Each connection to `sqlite::memory:` opens its own database, so the pool must
    // keep a single one.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = sea_orm::Database::connect(options).await?;

    migration::Migrator::up(&db, None).await?;
    tracing::debug!("Created in-memory test database");

    let r = panic::AssertUnwindSafe(test(Database::from_db_conn(
        db,
        Arc::new(MemoryBackend::default()),
    )))
    .catch_unwind()
    .await;

    match r.map(IntoResult::into_result) {
        Ok(out) => out,
        Err(e) => {
            tracing::info!("Test failed");
            panic::resume_unwind(e)
        }
    }
}

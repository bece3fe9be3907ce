use clap::Parser;
use mkenv::prelude::*;
use website_lib::{Database, DbEnv, LibEnv};

use self::{
    category::CategoryCommand, event::EventCommand, page::PageCommand, quote::QuoteCommand,
    trip::TripCommand,
};

mod category;
mod event;
mod page;
mod quote;
mod trip;
mod upload;

#[derive(clap::Parser)]
enum Command {
    #[clap(subcommand)]
    Category(CategoryCommand),
    #[clap(subcommand)]
    Trip(TripCommand),
    #[clap(subcommand)]
    Event(EventCommand),
    #[clap(subcommand)]
    Quote(QuoteCommand),
    #[clap(subcommand)]
    Page(PageCommand),
}

mkenv::make_config! {
    struct Env {
        db_env: { DbEnv },
        lib_env: { LibEnv },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv()?;
    tracing_subscriber::fmt()
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("unable to init tracing_subscriber: {e}"))?;
    let env = Env::define();
    env.init();
    website_lib::init_env(env.lib_env);

    let db = Database::from_db_url(
        env.db_env.db_url.db_url.get(),
        env.db_env.storage.media_root.get(),
    )
    .await?;

    let cmd = Command::parse();

    match cmd {
        Command::Category(cmd) => category::category(db, cmd).await,
        Command::Trip(cmd) => trip::trip(db, cmd).await,
        Command::Event(cmd) => event::event(db, cmd).await,
        Command::Quote(cmd) => quote::quote(db, cmd).await,
        Command::Page(cmd) => page::page(db, cmd).await,
    }
}

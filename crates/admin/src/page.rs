use website_lib::{Database, pages};

#[derive(clap::Subcommand)]
pub enum PageCommand {
    /// Publishes a page of the content tree.
    Publish { page_id: i32 },

    /// Turns a page of the content tree back into a draft.
    Unpublish { page_id: i32 },
}

pub async fn page(db: Database, cmd: PageCommand) -> anyhow::Result<()> {
    let page = match cmd {
        PageCommand::Publish { page_id } => pages::publish(&db.sql_conn, page_id).await?,
        PageCommand::Unpublish { page_id } => pages::unpublish(&db.sql_conn, page_id).await?,
    };

    tracing::info!(page_id = page.id, live = page.live, "page updated");
    println!("{} ({}): live = {}", page.title, page.url_path, page.live);

    Ok(())
}

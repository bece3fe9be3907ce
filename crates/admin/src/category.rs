use sea_orm::{EntityTrait as _, QueryOrder as _};
use website_lib::{
    Database,
    catalog,
    taxonomy::{self, CategoryForest, CategoryInput},
};

#[derive(clap::Subcommand)]
pub enum CategoryCommand {
    /// Creates a category of the catalog, used by the trips and events.
    Create {
        /// The title of the category. Defaults to "General".
        #[arg(long)]
        title: Option<String>,

        #[arg(long, default_value = "")]
        caption: String,
    },

    /// Creates or updates a category of the website pages.
    Save {
        /// The ID of the category to update.
        #[arg(long)]
        id: Option<i32>,

        name: String,

        #[arg(long, default_value = "")]
        slug: String,

        #[arg(long)]
        parent: Option<i32>,

        #[arg(long)]
        icon: Option<i32>,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Lists the categories of the catalog and of the website pages.
    List,
}

async fn list(db: &Database) -> anyhow::Result<()> {
    let categories = entity::category::Entity::find()
        .order_by_asc(entity::category::Column::Title)
        .all(&db.sql_conn)
        .await?;

    let mut table =
        prettytable::Table::init(vec![prettytable::row!["ID", "Title", "Caption"]]);
    for category in categories {
        table.add_row(prettytable::row![category.id, category.title, category.caption]);
    }
    println!("Catalog categories:");
    println!("{table}");

    let website_categories = entity::website_category::Entity::find()
        .order_by_asc(entity::website_category::Column::Name)
        .all(&db.sql_conn)
        .await?;
    let forest = CategoryForest::load(&db.sql_conn).await?;

    let mut table = prettytable::Table::init(vec![prettytable::row!["ID", "Name", "Slug"]]);
    for category in website_categories {
        let name = forest
            .display_name(category.id)
            .unwrap_or(category.name);
        table.add_row(prettytable::row![category.id, name, category.slug]);
    }
    println!("Website categories:");
    println!("{table}");

    Ok(())
}

pub async fn category(db: Database, cmd: CategoryCommand) -> anyhow::Result<()> {
    match cmd {
        CategoryCommand::Create { title, caption } => {
            let category = catalog::create_category(&db.sql_conn, title, caption).await?;
            println!("Created category {} ({})", category.id, category.title);
        }
        CategoryCommand::Save {
            id,
            name,
            slug,
            parent,
            icon,
            description,
        } => {
            let category = taxonomy::save_category(
                &db.sql_conn,
                CategoryInput {
                    id,
                    name,
                    slug,
                    parent_id: parent,
                    icon_id: icon,
                    description,
                },
            )
            .await?;
            println!("Saved category {} ({})", category.id, category.slug);
        }
        CategoryCommand::List => list(&db).await?,
    }

    Ok(())
}

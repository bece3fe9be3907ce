use website_lib::{Database, attachments};

use crate::upload::{FileArg, print_removed};

#[derive(clap::Subcommand)]
pub enum QuoteCommand {
    /// Attaches a reference file to a quote, replacing the previous one.
    Attach {
        quote_id: i32,
        #[clap(flatten)]
        file: FileArg,
    },

    /// Deletes a quote with its reference file.
    Delete { quote_id: i32 },
}

pub async fn quote(db: Database, cmd: QuoteCommand) -> anyhow::Result<()> {
    match cmd {
        QuoteCommand::Attach { quote_id, file } => {
            let file = file.read().await?;
            let quote =
                attachments::store_quote_reference(&db, quote_id, &file.filename, &file.data)
                    .await?;
            if let Some(path) = quote.reference_file {
                println!("Attached {path} to quote {}", quote.id);
            }
        }
        QuoteCommand::Delete { quote_id } => {
            let paths = attachments::delete_quote(&db, quote_id).await?;
            println!("Deleted quote {quote_id}");
            print_removed(&paths);
        }
    }

    Ok(())
}

use entity::{trip_file, trip_photo};
use website_lib::{Database, attachments, catalog};

use crate::upload::{FileArg, print_removed};

#[derive(clap::Subcommand)]
pub enum TripCommand {
    /// Uploads a photo of a trip.
    AddPhoto {
        trip_id: i32,
        #[clap(flatten)]
        file: FileArg,
    },

    /// Uploads a file (usually the PDF program) of a trip.
    AddFile {
        trip_id: i32,
        #[clap(flatten)]
        file: FileArg,
    },

    /// Deletes a photo of a trip, with its stored file.
    DeletePhoto { photo_id: i32 },

    /// Deletes a file of a trip, with its stored file.
    DeleteFile { file_id: i32 },

    /// Opens a trip for quotes, or turns it back into a draft.
    Draft {
        trip_id: i32,
        #[arg(long, action = clap::ArgAction::Set)]
        draft: bool,
    },

    /// Deletes a trip with its photos, files and quotes.
    Delete { trip_id: i32 },
}

pub async fn trip(db: Database, cmd: TripCommand) -> anyhow::Result<()> {
    match cmd {
        TripCommand::AddPhoto { trip_id, file } => {
            let file = file.read().await?;
            let photo =
                attachments::store_trip_photo(&db, trip_id, &file.filename, &file.data).await?;
            println!("Saved photo {} at {}", photo.id, photo.photo);
        }
        TripCommand::AddFile { trip_id, file } => {
            let file = file.read().await?;
            let file =
                attachments::store_trip_file(&db, trip_id, &file.filename, &file.data).await?;
            println!("Saved file {} at {}", file.id, file.file);
        }
        TripCommand::DeletePhoto { photo_id } => {
            let photo = attachments::delete_attachment::<trip_photo::Entity>(&db, photo_id).await?;
            print_removed(&[photo.photo]);
        }
        TripCommand::DeleteFile { file_id } => {
            let file = attachments::delete_attachment::<trip_file::Entity>(&db, file_id).await?;
            print_removed(&[file.file]);
        }
        TripCommand::Draft { trip_id, draft } => {
            let trip = catalog::set_trip_draft(&db.sql_conn, trip_id, draft).await?;
            println!("Trip {} draft: {}", trip.id, trip.draft);
        }
        TripCommand::Delete { trip_id } => {
            let paths = attachments::delete_trip(&db, trip_id).await?;
            println!("Deleted trip {trip_id}");
            print_removed(&paths);
        }
    }

    Ok(())
}

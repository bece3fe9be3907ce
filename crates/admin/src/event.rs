use entity::{event_file, event_photos};
use website_lib::{Database, attachments};

use crate::upload::{FileArg, print_removed};

#[derive(clap::Subcommand)]
pub enum EventCommand {
    /// Uploads a photo of an event.
    AddPhoto {
        event_id: i32,
        #[clap(flatten)]
        file: FileArg,
    },

    /// Uploads a file of an event.
    AddFile {
        event_id: i32,
        #[clap(flatten)]
        file: FileArg,
    },

    /// Deletes a photo of an event, with its stored file.
    DeletePhoto { photo_id: i32 },

    /// Deletes a file of an event, with its stored file.
    DeleteFile { file_id: i32 },

    /// Deletes an event with its photos and files.
    Delete { event_id: i32 },
}

pub async fn event(db: Database, cmd: EventCommand) -> anyhow::Result<()> {
    match cmd {
        EventCommand::AddPhoto { event_id, file } => {
            let file = file.read().await?;
            let photo =
                attachments::store_event_photo(&db, event_id, &file.filename, &file.data).await?;
            println!("Saved photo {} at {}", photo.id, photo.photo);
        }
        EventCommand::AddFile { event_id, file } => {
            let file = file.read().await?;
            let file =
                attachments::store_event_file(&db, event_id, &file.filename, &file.data).await?;
            println!("Saved file {} at {}", file.id, file.file);
        }
        EventCommand::DeletePhoto { photo_id } => {
            let photo =
                attachments::delete_attachment::<event_photos::Entity>(&db, photo_id).await?;
            print_removed(&[photo.photo]);
        }
        EventCommand::DeleteFile { file_id } => {
            let file = attachments::delete_attachment::<event_file::Entity>(&db, file_id).await?;
            print_removed(&[file.file]);
        }
        EventCommand::Delete { event_id } => {
            let paths = attachments::delete_event(&db, event_id).await?;
            println!("Deleted event {event_id}");
            print_removed(&paths);
        }
    }

    Ok(())
}

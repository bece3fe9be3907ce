//! The lifecycle of the uploaded files attached to the events, trips and quotes.
//!
//! An attachment record points to a file in the [storage](crate::storage). When the record is
//! deleted, its file is removed from the storage afterwards. This cleanup is best-effort: the
//! record deletion is already committed when it happens, so a failure is only logged.

use entity::{event, event_file, event_photos, quote, trip, trip_file, trip_photo};
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, ConnectionTrait, EntityTrait,
    IntoActiveModel as _, PrimaryKeyTrait, QueryFilter as _,
};

use crate::{
    Database,
    error::{WebsiteError, WebsiteResult},
    must,
    storage::StorageBackend,
    sync,
    upload::{UploadCategory, upload_path},
};

/// An entity whose records point to a file of the storage.
pub trait Attachment: EntityTrait {
    /// The name of the attachment type, used in the errors and logs.
    const KIND: &'static str;

    /// The subdirectory in which the files of this attachment type are saved.
    const UPLOAD: UploadCategory;

    /// Returns the path of the file referenced by the record.
    fn stored_path(model: &Self::Model) -> &str;
}

impl Attachment for event_photos::Entity {
    const KIND: &'static str = "event photo";
    const UPLOAD: UploadCategory = UploadCategory::Events;

    fn stored_path(model: &Self::Model) -> &str {
        &model.photo
    }
}

impl Attachment for event_file::Entity {
    const KIND: &'static str = "event file";
    const UPLOAD: UploadCategory = UploadCategory::Events;

    fn stored_path(model: &Self::Model) -> &str {
        &model.file
    }
}

impl Attachment for trip_photo::Entity {
    const KIND: &'static str = "trip photo";
    const UPLOAD: UploadCategory = UploadCategory::TripPhotos;

    fn stored_path(model: &Self::Model) -> &str {
        &model.photo
    }
}

impl Attachment for trip_file::Entity {
    const KIND: &'static str = "trip file";
    const UPLOAD: UploadCategory = UploadCategory::TripPdf;

    fn stored_path(model: &Self::Model) -> &str {
        &model.file
    }
}

/// Removes a file from the storage, after the deletion of the record that pointed to it.
///
/// A missing file is ignored, and any other failure is logged but never returned.
pub async fn cleanup_file(storage: &dyn StorageBackend, path: &str) {
    match storage.delete(path).await {
        Ok(()) => tracing::debug!(path, "removed stored file"),
        Err(e) => tracing::warn!(path, error = %e, "could not remove stored file"),
    }
}

async fn cleanup_files(storage: &dyn StorageBackend, paths: &[String]) {
    futures::future::join_all(paths.iter().map(|path| cleanup_file(storage, path))).await;
}

async fn write_upload(
    storage: &dyn StorageBackend,
    category: UploadCategory,
    filename: &str,
    data: &[u8],
) -> WebsiteResult<String> {
    let path = upload_path(filename, category);
    storage.write(&path, data).await?;
    Ok(path)
}

/// Removes the written file if the record pointing to it couldn't be saved.
async fn discard_on_err<T>(
    storage: &dyn StorageBackend,
    path: &str,
    res: Result<T, sea_orm::DbErr>,
) -> WebsiteResult<T> {
    match res {
        Ok(out) => Ok(out),
        Err(e) => {
            cleanup_file(storage, path).await;
            Err(e.into())
        }
    }
}

/// Saves a photo of an event.
#[tracing::instrument(skip(db, data), fields(size = data.len()))]
pub async fn store_event_photo(
    db: &Database,
    event_id: i32,
    filename: &str,
    data: &[u8],
) -> WebsiteResult<event_photos::Model> {
    must::have_event(&db.sql_conn, event_id).await?;
    let storage = &*db.storage;
    let path = write_upload(storage, event_photos::Entity::UPLOAD, filename, data).await?;

    let res = event_photos::ActiveModel {
        event_id: Set(event_id),
        photo: Set(path.clone()),
        ..Default::default()
    }
    .insert(&db.sql_conn)
    .await;
    discard_on_err(storage, &path, res).await
}

/// Saves a file of an event.
#[tracing::instrument(skip(db, data), fields(size = data.len()))]
pub async fn store_event_file(
    db: &Database,
    event_id: i32,
    filename: &str,
    data: &[u8],
) -> WebsiteResult<event_file::Model> {
    must::have_event(&db.sql_conn, event_id).await?;
    let storage = &*db.storage;
    let path = write_upload(storage, event_file::Entity::UPLOAD, filename, data).await?;

    let res = event_file::ActiveModel {
        event_id: Set(event_id),
        file: Set(path.clone()),
        ..Default::default()
    }
    .insert(&db.sql_conn)
    .await;
    discard_on_err(storage, &path, res).await
}

/// Saves a photo of a trip.
#[tracing::instrument(skip(db, data), fields(size = data.len()))]
pub async fn store_trip_photo(
    db: &Database,
    trip_id: i32,
    filename: &str,
    data: &[u8],
) -> WebsiteResult<trip_photo::Model> {
    must::have_trip(&db.sql_conn, trip_id).await?;
    let storage = &*db.storage;
    let path = write_upload(storage, trip_photo::Entity::UPLOAD, filename, data).await?;

    let res = trip_photo::ActiveModel {
        trip_id: Set(trip_id),
        photo: Set(path.clone()),
        ..Default::default()
    }
    .insert(&db.sql_conn)
    .await;
    discard_on_err(storage, &path, res).await
}

/// Saves a file (usually the PDF program) of a trip.
#[tracing::instrument(skip(db, data), fields(size = data.len()))]
pub async fn store_trip_file(
    db: &Database,
    trip_id: i32,
    filename: &str,
    data: &[u8],
) -> WebsiteResult<trip_file::Model> {
    must::have_trip(&db.sql_conn, trip_id).await?;
    let storage = &*db.storage;
    let path = write_upload(storage, trip_file::Entity::UPLOAD, filename, data).await?;

    let res = trip_file::ActiveModel {
        trip_id: Set(trip_id),
        file: Set(path.clone()),
        ..Default::default()
    }
    .insert(&db.sql_conn)
    .await;
    discard_on_err(storage, &path, res).await
}

/// Attaches a reference file to a quote. The previous reference file, if any, is removed.
#[tracing::instrument(skip(db, data), fields(size = data.len()))]
pub async fn store_quote_reference(
    db: &Database,
    quote_id: i32,
    filename: &str,
    data: &[u8],
) -> WebsiteResult<quote::Model> {
    let quote = must::have_quote(&db.sql_conn, quote_id).await?;
    let previous = quote.reference_file.clone();
    let storage = &*db.storage;
    let path = write_upload(storage, UploadCategory::Quotes, filename, data).await?;

    let mut quote = quote.into_active_model();
    quote.reference_file = Set(Some(path.clone()));
    let res = quote.update(&db.sql_conn).await;
    let quote = discard_on_err(storage, &path, res).await?;

    if let Some(previous) = previous {
        cleanup_file(storage, &previous).await;
    }

    Ok(quote)
}

/// Deletes an attachment record, then removes its file from the storage.
#[tracing::instrument(skip(db), fields(kind = E::KIND))]
pub async fn delete_attachment<E>(db: &Database, id: i32) -> WebsiteResult<E::Model>
where
    E: Attachment,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let model = E::find_by_id(id)
        .one(&db.sql_conn)
        .await?
        .ok_or(WebsiteError::AttachmentNotFound(E::KIND, id))?;

    E::delete_by_id(id).exec(&db.sql_conn).await?;
    cleanup_file(&*db.storage, E::stored_path(&model)).await;

    Ok(model)
}

async fn delete_event_attachments<C: ConnectionTrait>(
    conn: &C,
    event_id: i32,
) -> WebsiteResult<Vec<String>> {
    let photos = event_photos::Entity::find()
        .filter(event_photos::Column::EventId.eq(event_id))
        .all(conn)
        .await?;
    let files = event_file::Entity::find()
        .filter(event_file::Column::EventId.eq(event_id))
        .all(conn)
        .await?;

    event_photos::Entity::delete_many()
        .filter(event_photos::Column::EventId.eq(event_id))
        .exec(conn)
        .await?;
    event_file::Entity::delete_many()
        .filter(event_file::Column::EventId.eq(event_id))
        .exec(conn)
        .await?;

    Ok(photos
        .into_iter()
        .map(|p| p.photo)
        .chain(files.into_iter().map(|f| f.file))
        .collect())
}

async fn delete_quote_rows<C: ConnectionTrait>(
    conn: &C,
    quotes: Vec<quote::Model>,
) -> WebsiteResult<Vec<String>> {
    let ids = quotes.iter().map(|q| q.id).collect::<Vec<_>>();
    quote::Entity::delete_many()
        .filter(quote::Column::Id.is_in(ids))
        .exec(conn)
        .await?;
    Ok(quotes.into_iter().filter_map(|q| q.reference_file).collect())
}

async fn delete_trip_attachments<C: ConnectionTrait>(
    conn: &C,
    trip_id: i32,
) -> WebsiteResult<Vec<String>> {
    let photos = trip_photo::Entity::find()
        .filter(trip_photo::Column::TripId.eq(trip_id))
        .all(conn)
        .await?;
    let files = trip_file::Entity::find()
        .filter(trip_file::Column::TripId.eq(trip_id))
        .all(conn)
        .await?;
    let quotes = quote::Entity::find()
        .filter(quote::Column::TripId.eq(trip_id))
        .all(conn)
        .await?;

    trip_photo::Entity::delete_many()
        .filter(trip_photo::Column::TripId.eq(trip_id))
        .exec(conn)
        .await?;
    trip_file::Entity::delete_many()
        .filter(trip_file::Column::TripId.eq(trip_id))
        .exec(conn)
        .await?;
    let references = delete_quote_rows(conn, quotes).await?;

    Ok(photos
        .into_iter()
        .map(|p| p.photo)
        .chain(files.into_iter().map(|f| f.file))
        .chain(references)
        .collect())
}

/// Deletes an event with its photos and files, then removes the files from the storage.
///
/// Returns the paths of the removed files.
#[tracing::instrument(skip(db))]
pub async fn delete_event(db: &Database, event_id: i32) -> WebsiteResult<Vec<String>> {
    must::have_event(&db.sql_conn, event_id).await?;

    let paths = sync::transaction(
        &db.sql_conn,
        async |txn: &sea_orm::DatabaseTransaction| {
            let paths = delete_event_attachments(txn, event_id).await?;
            event::Entity::delete_by_id(event_id).exec(txn).await?;
            Ok::<_, WebsiteError>(paths)
        },
    )
    .await?;

    cleanup_files(&*db.storage, &paths).await;
    tracing::info!(files = paths.len(), "deleted event");
    Ok(paths)
}

/// Deletes a trip with its photos, files and quotes, then removes the files from the storage.
///
/// Returns the paths of the removed files.
#[tracing::instrument(skip(db))]
pub async fn delete_trip(db: &Database, trip_id: i32) -> WebsiteResult<Vec<String>> {
    must::have_trip(&db.sql_conn, trip_id).await?;

    let paths = sync::transaction(
        &db.sql_conn,
        async |txn: &sea_orm::DatabaseTransaction| {
            let paths = delete_trip_attachments(txn, trip_id).await?;
            trip::Entity::delete_by_id(trip_id).exec(txn).await?;
            Ok::<_, WebsiteError>(paths)
        },
    )
    .await?;

    cleanup_files(&*db.storage, &paths).await;
    tracing::info!(files = paths.len(), "deleted trip");
    Ok(paths)
}

/// Deletes a quote, then removes its reference file from the storage.
///
/// Returns the paths of the removed files.
#[tracing::instrument(skip(db))]
pub async fn delete_quote(db: &Database, quote_id: i32) -> WebsiteResult<Vec<String>> {
    let quote = must::have_quote(&db.sql_conn, quote_id).await?;

    let paths = sync::transaction(
        &db.sql_conn,
        async |txn: &sea_orm::DatabaseTransaction| delete_quote_rows(txn, vec![quote]).await,
    )
    .await?;

    cleanup_files(&*db.storage, &paths).await;
    Ok(paths)
}

//! Generation of the paths of the uploaded files.

use std::fmt;

/// The subdirectory in which an uploaded file is saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadCategory {
    /// The photos and files of the events.
    Events,
    /// The reference files of the quotes.
    Quotes,
    /// The photos of the trips.
    TripPhotos,
    /// The PDF files of the trips.
    TripPdf,
}

impl UploadCategory {
    /// Returns the directory of the category, relative to the storage root.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Quotes => "quotes",
            Self::TripPhotos => "trips/photos",
            Self::TripPdf => "trips/pdf",
        }
    }
}

impl fmt::Display for UploadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

/// Returns a new path for an uploaded file, in the form `{category}/{uuid}.{ext}`.
///
/// The extension is everything after the last `.` of the original filename, kept as is.
/// If the filename has no `.`, the whole filename is used as the extension.
pub fn upload_path(filename: &str, category: UploadCategory) -> String {
    let ext = filename.rsplit('.').next().unwrap_or(filename);
    format!("{category}/{}.{ext}", uuid::Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{UploadCategory, upload_path};

    #[test]
    fn path_layout() {
        let path = upload_path("brochure.pdf", UploadCategory::TripPdf);
        let name = path.strip_prefix("trips/pdf/").unwrap();
        let (id, ext) = name.split_once('.').unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
        assert_eq!(ext, "pdf");
    }

    #[test]
    fn extension_kept_verbatim() {
        let path = upload_path("archive.tar.GZ", UploadCategory::Quotes);
        assert!(path.starts_with("quotes/"));
        assert!(path.ends_with(".GZ"));
        assert!(!path.ends_with(".tar.GZ"));

        let path = upload_path("photo.not-an-ext!", UploadCategory::Events);
        assert!(path.ends_with(".not-an-ext!"));
    }

    #[test]
    fn unique_across_calls() {
        let paths = (0..100)
            .map(|_| upload_path("photo.jpg", UploadCategory::TripPhotos))
            .collect::<HashSet<_>>();
        assert_eq!(paths.len(), 100);
        assert!(paths.iter().all(|p| p.ends_with(".jpg")));
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// A file read from the disk, to be uploaded.
pub struct LocalFile {
    pub filename: String,
    pub data: Vec<u8>,
}

#[derive(clap::Args)]
pub struct FileArg {
    /// The path to the file to upload.
    pub path: PathBuf,
}

impl FileArg {
    pub async fn read(&self) -> anyhow::Result<LocalFile> {
        read_file(&self.path).await
    }
}

async fn read_file(path: &Path) -> anyhow::Result<LocalFile> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid file name: {}", path.display()))?
        .to_owned();
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(LocalFile { filename, data })
}

pub fn print_removed(paths: &[String]) {
    if paths.is_empty() {
        println!("No stored file removed");
    }
    for path in paths {
        println!("Removed {path}");
    }
}

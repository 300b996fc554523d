//! Filesystem implementations of the download and print collaborators.

use placard_traits::{DeliveryError, Download, DownloadSink, PrintTarget};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tempfile::NamedTempFile;

/// Writes each download into a directory, replacing files of the same name.
///
/// Files are written to a temporary file first and renamed into place, so a
/// failed export never leaves a truncated file behind.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
    written: Arc<RwLock<Vec<PathBuf>>>,
}

impl DirectoryDownloads {
    /// Creates the directory if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            written: Arc::default(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, oldest first.
    pub fn written(&self) -> Vec<PathBuf> {
        self.written.read().map(|w| w.clone()).unwrap_or_default()
    }
}

impl DownloadSink for DirectoryDownloads {
    fn deliver(&self, download: Download) -> Result<(), DeliveryError> {
        if download.filename.contains(['/', '\\']) || download.filename.starts_with('.') {
            return Err(DeliveryError::Failed {
                filename: download.filename,
                message: "filename must not contain path separators".to_string(),
            });
        }
        let path = self.dir.join(&download.filename);
        write_atomic(&self.dir, &path, &download.bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), download.bytes.len());
        if let Ok(mut written) = self.written.write() {
            written.push(path);
        }
        Ok(())
    }
}

/// Saves the printable document to a file instead of opening a window.
#[derive(Debug, Clone)]
pub struct FilePrintTarget {
    path: PathBuf,
}

impl FilePrintTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PrintTarget for FilePrintTarget {
    fn open(&self, html: &str) -> Result<(), DeliveryError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        write_atomic(&dir, &self.path, html.as_bytes())?;
        log::info!("Wrote printable document to {}", self.path.display());
        Ok(())
    }
}

fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), DeliveryError> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.persist(path).map_err(|e| DeliveryError::Io(e.error.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downloads_land_in_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectoryDownloads::new(dir.path().join("exports")).unwrap();
        sink.deliver(Download::new("a.json", "application/json", b"{}".to_vec()))
            .unwrap();
        let path = dir.path().join("exports").join("a.json");
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
        assert_eq!(sink.written(), vec![path]);
    }

    #[test]
    fn rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectoryDownloads::new(dir.path()).unwrap();
        let err = sink
            .deliver(Download::new("../evil.png", "image/png", vec![1]))
            .unwrap_err();
        assert!(matches!(err, DeliveryError::Failed { .. }));
    }

    #[test]
    fn print_target_writes_html() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("print.html");
        FilePrintTarget::new(&path).open("<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
    }
}

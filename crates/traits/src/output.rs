//! File delivery and print-window traits.

use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliveryError {
    #[error("Popup blocked. Please allow popups for this site.")]
    PopupBlocked,

    #[error("Failed to deliver '{filename}': {message}")]
    Failed { filename: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DeliveryError {
    fn from(err: std::io::Error) -> Self {
        DeliveryError::Io(err.to_string())
    }
}

/// A file handed to the host for saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(filename: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// Saves finished exports: a browser download link, a file on disk, or memory.
pub trait DownloadSink: Debug {
    fn deliver(&self, download: Download) -> Result<(), DeliveryError>;
}

/// Opens a standalone HTML document in a new window for printing.
pub trait PrintTarget: Debug {
    fn open(&self, html: &str) -> Result<(), DeliveryError>;
}

/// Keeps every delivered file. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDownloads {
    files: Arc<RwLock<Vec<Download>>>,
}

impl InMemoryDownloads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an empty list if the lock is poisoned.
    pub fn files(&self) -> Vec<Download> {
        self.files.read().map(|f| f.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Download> {
        self.files.read().ok()?.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.files.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DownloadSink for InMemoryDownloads {
    fn deliver(&self, download: Download) -> Result<(), DeliveryError> {
        let mut files = self.files.write().map_err(|_| DeliveryError::Failed {
            filename: download.filename.clone(),
            message: "download store lock poisoned".to_string(),
        })?;
        log::debug!("Stored download '{}' ({} bytes)", download.filename, download.bytes.len());
        files.push(download);
        Ok(())
    }
}

/// Records opened documents, or refuses them like a popup blocker would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPrintTarget {
    opened: Arc<RwLock<Vec<String>>>,
    blocked: bool,
}

impl InMemoryPrintTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocked() -> Self {
        Self {
            opened: Arc::default(),
            blocked: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.read().map(|o| o.clone()).unwrap_or_default()
    }
}

impl PrintTarget for InMemoryPrintTarget {
    fn open(&self, html: &str) -> Result<(), DeliveryError> {
        if self.blocked {
            return Err(DeliveryError::PopupBlocked);
        }
        let mut opened = self.opened.write().map_err(|_| DeliveryError::Failed {
            filename: "print window".to_string(),
            message: "print store lock poisoned".to_string(),
        })?;
        opened.push(html.to_string());
        Ok(())
    }
}

//! # placard
//!
//! Announcement and flyer studio. The engine lives in `placard-core`; this
//! crate re-exports it and adds the native host pieces the CLI uses:
//! filesystem download and print sinks.
//!
//! ```no_run
//! use placard::{Studio, fs::DirectoryDownloads};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut studio = Studio::builder()
//!     .with_downloads(DirectoryDownloads::new("out")?)
//!     .build()?;
//! studio.load_preset("meeting")?;
//! studio.export_json()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fs;

pub use error::CliError;
pub use placard_core::*;

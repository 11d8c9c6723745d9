//! Forwarding, upload, and archive utilities for file-serving services.
//!
//! `fileway-core` is a collection of independent, stateless helpers for the
//! plumbing every file server grows sooner or later: zipping a directory and
//! handing it out, unzipping an upload without letting it write outside its
//! sandbox, proxying a request to a backend, persisting a multipart form,
//! hashing and content-sniffing files on disk.
//!
//! Each function reads bytes from one place and writes them to another; no
//! state is shared between calls. The archive half is synchronous and
//! blocking, the HTTP half is async and meant to be called from inside a
//! server runtime.
//!
//! # Examples
//!
//! ```no_run
//! use fileway_core::{extract, pack_dir};
//!
//! # fn main() -> fileway_core::Result<()> {
//! let packed = pack_dir("site/assets", "assets.zip")?;
//! println!("packed {} files", packed.files_added);
//!
//! let unpacked = extract("assets.zip", "restored")?;
//! println!("extracted {} files", unpacked.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod classify;
pub mod copy;
pub mod error;
pub mod hash;
pub mod http;
pub mod io;
pub mod mime;
pub mod report;
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use archive::extract;
pub use archive::pack_dir;
pub use archive::pack_file;
pub use classify::PathKind;
pub use classify::classify;
pub use copy::children_of_dir;
pub use copy::copy_dir;
pub use copy::copy_file;
pub use error::Error;
pub use error::Result;
pub use hash::file_hash;
pub use mime::file_content_type;
pub use report::ExtractReport;
pub use report::PackReport;
pub use report::UploadReport;

// Re-export types module for easier access
pub use types::DestDir;
pub use types::EntryPath;

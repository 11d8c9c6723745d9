//! Validated path types shared by the archive and upload helpers.

pub mod dest_dir;
pub mod entry_path;

pub use dest_dir::DestDir;
pub use entry_path::EntryPath;

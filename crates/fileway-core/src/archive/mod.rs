//! Zip archive packing and extraction.
//!
//! [`pack_dir`] and [`pack_file`] serialize a directory tree (or a single
//! file) into a zip archive; [`extract`] reconstructs a tree from one,
//! refusing any entry whose name would resolve outside the destination.

pub mod extract;
pub mod pack;

pub use extract::extract;
pub use pack::pack_dir;
pub use pack::pack_file;

//! HTTP forwarding and upload persistence helpers.
//!
//! The server-facing edge of the crate: proxying a request to a backend,
//! relaying the backend's answer, and persisting request bodies or multipart
//! forms to disk. Everything here is async and meant to be called from
//! handlers running inside a server runtime; the filesystem and archive
//! helpers elsewhere in the crate stay synchronous.

pub mod forward;
pub mod upload;

pub use forward::forward_request;
pub use forward::relay_response;
pub use upload::MAX_BODY_BYTES;
pub use upload::save_multipart_form;
pub use upload::save_request_body;

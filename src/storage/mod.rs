//! Storage layer for the file service.
//!
//! This module owns everything that touches the storage root on disk:
//!
//! - [`StoragePathResolver`] maps caller-supplied names to paths that stay
//!   lexically inside the storage root.
//! - [`FileService`] implements upload and download on top of the resolver
//!   and the [`AuthGate`](crate::server::auth::AuthGate).
//!
//! Nothing here knows about HTTP. The server layer extracts headers and
//! multipart fields and hands plain strings and bytes to this module.

mod resolver;
mod service;

pub use resolver::{resolve, StoragePathResolver};
pub use service::{FileService, StoredLocation};

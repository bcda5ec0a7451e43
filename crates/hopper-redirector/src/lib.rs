//! Redirector service library with optional caching.
//!
//! This crate provides a [`RedirectorService`] that resolves short codes to
//! their original URLs through a read-only [`ReadLinkStore`]. Reads can be
//! served from an in-process cache by wrapping the store in a
//! [`CachedLinkStore`].
//!
//! # Example
//!
//! ```rust
//! use hopper_core::ShortCode;
//! use hopper_redirector::{CachedLinkStore, RedirectorService};
//! use hopper_storage::InMemoryLinkStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = CachedLinkStore::new(InMemoryLinkStore::new());
//! let service = RedirectorService::new(store);
//!
//! let code = ShortCode::new("abc123")?;
//! if let Some(record) = service.resolve(&code).await? {
//!     println!("Redirect to: {}", record.original_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`ReadLinkStore`]: hopper_core::ReadLinkStore

pub mod cache;
pub mod service;

pub use cache::{CacheConfig, CachedLinkStore};
pub use hopper_core::{Redirector, RedirectorError};
pub use service::RedirectorService;

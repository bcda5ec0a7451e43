//! Core types and traits for the Hopper URL shortener.
//!
//! This crate provides the types shared by the shortener and the redirector:
//! the [`ShortCode`] key, the stored [`LinkRecord`], the [`LinkStore`]
//! persistence contract and the service traits the transport layer calls.

pub mod error;
pub mod redirector;
pub mod shortcode;
pub mod shortener;
pub mod store;

pub use error::{CoreError, RedirectorError, ShortenerError, StoreError};
pub use redirector::Redirector;
pub use shortcode::ShortCode;
pub use shortener::Shortener;
pub use store::{InsertOutcome, LinkRecord, LinkStore, ReadLinkStore};

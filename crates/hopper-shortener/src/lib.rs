//! URL shortener service implementation.
//!
//! The service validates the incoming URL, draws candidate codes from a
//! [`CodeGenerator`](hopper_generator::CodeGenerator) and claims one through
//! the store's conditional insert. Core types are re-exported from `hopper_core`.

pub mod service;
pub mod validate;

pub use hopper_core::{Shortener, ShortenerError};
pub use service::{ShortenerService, ShortenerSettings, DEFAULT_MAX_ATTEMPTS};

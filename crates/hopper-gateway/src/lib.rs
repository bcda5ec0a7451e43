//! HTTP front end for the Hopper URL shortener.
//!
//! Exposes `POST /shorten`, `GET /{code}` and `GET /healthz` on top of the
//! shortener and redirector services.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;

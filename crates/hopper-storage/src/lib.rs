//! Link store backends.

pub mod memory;
pub mod mysql;

pub use hopper_core::{InsertOutcome, LinkRecord, LinkStore, ReadLinkStore, StoreError};
pub use memory::InMemoryLinkStore;
pub use mysql::MySqlLinkStore;

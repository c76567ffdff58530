//! Upstream store access

pub mod store;

pub use store::{StoreClient, StoreError};

//! Storage layer
//!
//! Only the one-time schema setup lives here; request handlers go through
//! the store's REST interface instead of this connection.

pub mod setup;

pub use setup::{initialize, InitError};

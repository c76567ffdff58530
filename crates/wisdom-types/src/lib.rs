//! Wisdom Types - Pure type definitions for the Hamster Wisdom service
//!
//! This crate contains only data types and the boundary rules that go with
//! them (length validation, author normalization, the fallback record), with
//! no async runtime dependencies.

pub mod record;
pub mod validate;

pub use record::*;
pub use validate::*;

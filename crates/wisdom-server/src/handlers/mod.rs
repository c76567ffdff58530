//! HTTP handlers

pub mod root;
pub mod wisdom;

pub use root::root;

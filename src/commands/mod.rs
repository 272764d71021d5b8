//! Browser Bindings
//!
//! Thin wrappers over browser APIs, organized by concern.

mod clipboard;
mod storage;

pub use clipboard::*;
pub use storage::*;

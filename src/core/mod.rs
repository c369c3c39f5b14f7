//! Core functionality shared by every kernel and engine.

pub mod color;
pub mod error;
pub mod handle;
pub mod random;

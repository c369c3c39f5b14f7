//! Stateful engines. Each one is a plain-Rust core wrapped by a wasm facade
//! handle; hosts must serialize calls to a given instance (single-writer).

pub mod life;
pub mod particles;

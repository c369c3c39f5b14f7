//! Visuals Engine - four visual compute kernels behind one WASM surface
//!
//! Architecture:
//! - core/      - shared plumbing: errors, color math, RNG
//! - transfer/  - buffer transfer protocol + bounded text decoding
//! - kernels/   - stateless renderers (mandelbrot, raytrace)
//! - engines/   - stateful simulations (life, particles)
//!
//! Stateless kernels are exported as free functions; stateful engines are
//! exported as handle objects whose methods delegate to a plain-Rust core.

pub mod core;
pub mod engines;
pub mod kernels;
pub mod transfer;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Visuals WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::EngineError;
pub use engines::life::GameOfLife;
pub use engines::particles::ParticleSystem;
pub use kernels::raytrace::{Scene, SphereConfig};
pub use transfer::{ParticleBuffer, PixelBuffer};

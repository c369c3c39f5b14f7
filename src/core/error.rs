use thiserror::Error;
use wasm_bindgen::JsValue;

/// Engine-wide error type, mapped to a `JsValue` string at the wasm boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Out of memory (or an export length that does not fit the address
    /// space). Fatal; never retried.
    #[error("buffer allocation failed ({bytes} bytes)")]
    AllocationFailure { bytes: usize },

    /// Zero-sized engine dimensions are rejected at construction, never
    /// silently clamped.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Malformed text crossing the boundary. Fatal for that single call;
    /// engine and decoder state stay usable.
    #[error("text decode failed: {0}")]
    DecodeFailure(String),

    /// Scene config bytes decoded fine but did not parse as a scene.
    #[error("invalid scene config: {0}")]
    InvalidScene(String),

    /// A disposed engine handle was used again (including double dispose).
    #[error("engine handle used after dispose")]
    UseAfterDispose,
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

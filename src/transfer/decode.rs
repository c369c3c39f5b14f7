//! Bounded UTF-8 decoding for text crossing the wasm boundary.
//!
//! One browser engine caps the total bytes a single `TextDecoder` instance
//! may decode over its lifetime at 2,146,435,072. The decoder here tracks a
//! running total and swaps in a fresh backend before a decode would cross
//! that ceiling, so callers never see a failure caused by cumulative volume.
//! Malformed input fails that single call only; the decoder stays usable.

use crate::core::error::EngineError;

/// Lifetime decode ceiling of a single decoder instance, in bytes.
pub const MAX_CUMULATIVE_DECODE_BYTES: u64 = 2_146_435_072;

/// A recreatable UTF-8 decoding backend.
pub trait Utf8Backend {
    fn fresh() -> Self;
    fn decode(&mut self, bytes: &[u8]) -> Result<String, String>;
}

/// Decoder wrapper enforcing the cumulative-byte ceiling.
pub struct BoundedDecoder<B> {
    backend: B,
    decoded_bytes: u64,
}

impl<B: Utf8Backend> BoundedDecoder<B> {
    pub fn new() -> Self {
        Self {
            backend: B::fresh(),
            decoded_bytes: 0,
        }
    }

    /// Decode one payload. The backend is transparently recreated when the
    /// running total reaches the ceiling, with the counter reset to this
    /// payload's length.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<String, EngineError> {
        self.decoded_bytes += bytes.len() as u64;
        if self.decoded_bytes >= MAX_CUMULATIVE_DECODE_BYTES {
            self.backend = B::fresh();
            self.decoded_bytes = bytes.len() as u64;
        }
        self.backend.decode(bytes).map_err(EngineError::DecodeFailure)
    }

    pub fn decoded_bytes(&self) -> u64 {
        self.decoded_bytes
    }

    #[cfg(test)]
    fn force_decoded_bytes(&mut self, total: u64) {
        self.decoded_bytes = total;
    }
}

impl<B: Utf8Backend> Default for BoundedDecoder<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Native backend over std UTF-8 validation. std has no cumulative ceiling,
/// but both backends go through the same accounting so the reset logic is
/// exercised on every target.
pub struct StdUtf8;

impl Utf8Backend for StdUtf8 {
    fn fresh() -> Self {
        StdUtf8
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<String, String> {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| e.to_string())
    }
}

/// Browser backend over `TextDecoder`, matching the glue's configuration
/// (fatal on malformed input, BOM ignored).
#[cfg(target_arch = "wasm32")]
pub struct TextDecoderBackend {
    inner: web_sys::TextDecoder,
}

#[cfg(target_arch = "wasm32")]
impl Utf8Backend for TextDecoderBackend {
    fn fresh() -> Self {
        let options = web_sys::TextDecoderOptions::new();
        options.set_fatal(true);
        options.set_ignore_bom(true);
        let inner = web_sys::TextDecoder::new_with_label_and_options("utf-8", &options)
            .expect("utf-8 is a supported TextDecoder label");
        Self { inner }
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<String, String> {
        // decode_with_u8_array wants a mutable view
        let mut owned = bytes.to_vec();
        self.inner
            .decode_with_u8_array(&mut owned)
            .map_err(|e| format!("{e:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
pub type DiagnosticDecoder = BoundedDecoder<TextDecoderBackend>;

#[cfg(not(target_arch = "wasm32"))]
pub type DiagnosticDecoder = BoundedDecoder<StdUtf8>;

//! Buffer Transfer Protocol.
//!
//! Every export builds a fresh, fully-filled buffer and returns it by value:
//! ownership moves to the caller and the engine keeps no reference. At the
//! wasm boundary the generated glue materializes the return as a (ptr, len)
//! pair, copies it into a host-owned typed array and frees the wasm-side
//! allocation exactly once. The host must finish that copy before the next
//! engine call, since the next allocation may reuse the region.
//!
//! Allocation failure is fatal and surfaced as `AllocationFailure`; it is
//! never retried.

mod decode;

pub use decode::{
    BoundedDecoder, DiagnosticDecoder, StdUtf8, Utf8Backend, MAX_CUMULATIVE_DECODE_BYTES,
};

use crate::core::error::EngineError;

/// RGBA channels per pixel.
pub const CHANNELS: usize = 4;

/// f64 values per exported particle: (x, y, size, hue).
pub const PARTICLE_STRIDE: usize = 4;

/// Owned RGBA frame, row-major, top-to-bottom.
///
/// Invariant: `data.len() == width * height * 4` from construction until the
/// buffer is consumed by [`PixelBuffer::into_bytes`].
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed frame. Zero width or height gives a valid empty
    /// buffer; only genuine allocation failure errors.
    pub fn try_new(width: u32, height: u32) -> Result<Self, EngineError> {
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(EngineError::AllocationFailure { bytes: usize::MAX })?;

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| EngineError::AllocationFailure { bytes })?;
        data.resize(bytes, 0);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write one pixel by flat pixel index.
    #[inline]
    pub fn put(&mut self, pixel: usize, r: u8, g: u8, b: u8, a: u8) {
        let idx = pixel * CHANNELS;
        self.data[idx] = r;
        self.data[idx + 1] = g;
        self.data[idx + 2] = b;
        self.data[idx + 3] = a;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, handing the bytes to the caller. This is the
    /// ownership-transfer half of the protocol.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Owned particle snapshot: (x, y, size, hue) per particle in index order.
///
/// Invariant: `values.len() == count * 4` once filled.
pub struct ParticleBuffer {
    values: Vec<f64>,
}

impl ParticleBuffer {
    pub fn with_capacity(count: usize) -> Result<Self, EngineError> {
        let len = count
            .checked_mul(PARTICLE_STRIDE)
            .ok_or(EngineError::AllocationFailure { bytes: usize::MAX })?;

        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|_| EngineError::AllocationFailure {
                bytes: len * std::mem::size_of::<f64>(),
            })?;

        Ok(Self { values })
    }

    #[inline]
    pub fn push(&mut self, x: f64, y: f64, size: f64, hue: f64) {
        self.values.push(x);
        self.values.push(y);
        self.values.push(size);
        self.values.push(hue);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the buffer, handing the values to the caller.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

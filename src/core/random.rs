//! Engine-owned random source (xorshift32).
//!
//! Stateful engines each own one generator; no cross-run determinism is
//! promised to callers.

/// Seed source for engine-owned generators: wall clock on the web, a fixed
/// seed natively so tests are reproducible.
pub fn time_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() as u64 & 0xffff_ffff) as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x1234_5678
    }
}

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        // xorshift has a fixed point at zero
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform in [lo, hi).
    #[inline]
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

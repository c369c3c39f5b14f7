use wasm_bindgen::prelude::*;

use crate::core::handle::Disposable;

use super::ParticleCore;

/// Particle simulator handle.
#[wasm_bindgen]
pub struct ParticleSystem {
    core: Disposable<ParticleCore>,
}

#[wasm_bindgen]
impl ParticleSystem {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, count: u32) -> Result<ParticleSystem, JsValue> {
        Ok(Self {
            core: Disposable::new(ParticleCore::new(width, height, count)?),
        })
    }

    pub fn count(&self) -> Result<usize, JsValue> {
        Ok(self.core.get()?.count())
    }

    /// Advance the simulation by `delta` reference frames.
    pub fn update(&mut self, delta: f64) -> Result<(), JsValue> {
        self.core.get_mut()?.update(delta);
        Ok(())
    }

    /// Export (x, y, size, hue) per particle as f64s (ownership moves to the
    /// host; copy before the next engine call).
    pub fn get_data(&self) -> Result<Vec<f64>, JsValue> {
        Ok(self.core.get()?.get_data()?.into_values())
    }

    /// Release the particle set. Exactly-once: a second dispose is an error.
    pub fn dispose(&mut self) -> Result<(), JsValue> {
        self.core.dispose()?;
        Ok(())
    }
}

use wasm_bindgen::prelude::*;

use crate::core::handle::Disposable;

use super::LifeCore;

/// Toroidal Game of Life handle.
///
/// `dispose()` releases the grids; any later call on the handle (including a
/// second dispose) reports use-after-dispose instead of being ignored.
#[wasm_bindgen]
pub struct GameOfLife {
    core: Disposable<LifeCore>,
}

#[wasm_bindgen]
impl GameOfLife {
    /// Create an all-dead grid with the given dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<GameOfLife, JsValue> {
        Ok(Self {
            core: Disposable::new(LifeCore::new(width, height)?),
        })
    }

    pub fn width(&self) -> Result<u32, JsValue> {
        Ok(self.core.get()?.width())
    }

    pub fn height(&self) -> Result<u32, JsValue> {
        Ok(self.core.get()?.height())
    }

    /// Flip one cell; out-of-range coordinates wrap toroidally.
    pub fn toggle_cell(&mut self, x: u32, y: u32) -> Result<(), JsValue> {
        self.core.get_mut()?.toggle_cell(x, y);
        Ok(())
    }

    /// Advance one generation.
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.core.get_mut()?.step();
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), JsValue> {
        self.core.get_mut()?.clear();
        Ok(())
    }

    pub fn randomize(&mut self) -> Result<(), JsValue> {
        self.core.get_mut()?.randomize();
        Ok(())
    }

    /// Export the current generation as RGBA bytes (ownership moves to the
    /// host; copy before the next engine call).
    pub fn get_cells(&self) -> Result<Vec<u8>, JsValue> {
        Ok(self.core.get()?.get_cells()?.into_bytes())
    }

    /// Release the grids. Exactly-once: a second dispose is an error.
    pub fn dispose(&mut self) -> Result<(), JsValue> {
        self.core.dispose()?;
        Ok(())
    }
}

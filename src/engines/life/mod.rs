//! Conway's Game of Life on a toroidal grid.
//!
//! Double-buffered: `step()` computes the next generation entirely from a
//! read-only view of the current one, then the generations swap. No cell
//! update ever observes another cell's next-generation value.

mod facade;

pub use facade::GameOfLife;

use crate::core::error::EngineError;
use crate::core::random::{time_seed, XorShift32};
use crate::transfer::PixelBuffer;

const ALIVE: u8 = 1;
const DEAD: u8 = 0;

pub struct LifeCore {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    next_cells: Vec<u8>,
    rng: XorShift32,
}

impl LifeCore {
    /// Create an all-dead grid. Zero width or height is rejected.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(EngineError::AllocationFailure { bytes: usize::MAX })?;

        Ok(Self {
            width,
            height,
            cells: alloc_generation(size)?,
            next_cells: alloc_generation(size)?,
            rng: XorShift32::new(time_seed()),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flip the cell at (x mod W, y mod H). Out-of-range coordinates wrap,
    /// matching the toroidal addressing used everywhere else.
    pub fn toggle_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.cells[idx] ^= 1;
    }

    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)] == ALIVE
    }

    /// Advance one generation under Conway's rule (8-neighborhood, toroidal).
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = (y as usize) * (self.width as usize) + (x as usize);
                let alive = self.cells[idx] == ALIVE;
                let neighbors = self.count_neighbors(x, y);

                self.next_cells[idx] = match (alive, neighbors) {
                    (true, 2) | (true, 3) => ALIVE,
                    (false, 3) => ALIVE,
                    _ => DEAD,
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next_cells);
    }

    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Set every cell independently with probability 1/2.
    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        for cell in &mut self.cells {
            *cell = if rng.next_bool() { ALIVE } else { DEAD };
        }
    }

    /// Export the current generation: alive → (255,255,255,255),
    /// dead → (0,0,0,255). One RGBA pixel per cell, row-major.
    pub fn get_cells(&self) -> Result<PixelBuffer, EngineError> {
        let mut buffer = PixelBuffer::try_new(self.width, self.height)?;
        for (i, &cell) in self.cells.iter().enumerate() {
            let v = if cell == ALIVE { 255 } else { 0 };
            buffer.put(i, v, v, v, 255);
        }
        Ok(buffer)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        let x = (x % self.width) as usize;
        let y = (y % self.height) as usize;
        y * self.width as usize + x
    }

    fn count_neighbors(&self, x: u32, y: u32) -> u32 {
        let w = self.width as usize;
        let h = self.height as usize;
        let x = x as usize;
        let y = y as usize;

        let mut count = 0;
        for dy in [h - 1, 0, 1] {
            for dx in [w - 1, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x + dx) % w;
                let ny = (y + dy) % h;
                if self.cells[ny * w + nx] == ALIVE {
                    count += 1;
                }
            }
        }
        count
    }
}

fn alloc_generation(size: usize) -> Result<Vec<u8>, EngineError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(size)
        .map_err(|_| EngineError::AllocationFailure { bytes: size })?;
    cells.resize(size, DEAD);
    Ok(cells)
}

#[cfg(test)]
mod tests;

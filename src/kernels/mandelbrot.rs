//! Escape-time fractal kernel.
//!
//! Byte-deterministic for identical inputs: each row is computed
//! independently and written to its own slice, so the optional row
//! parallelism cannot reorder output.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::color::hsl_to_rgb;
use crate::core::error::EngineError;
use crate::transfer::{PixelBuffer, CHANNELS};

const INTERIOR: (u8, u8, u8) = (0, 0, 0);
const PALETTE_SATURATION: f64 = 0.8;
const PALETTE_LIGHTNESS: f64 = 0.5;

/// Render the Mandelbrot set over the given viewport.
///
/// Points that never escape within `max_iter` (including every point when
/// `max_iter == 0`) take the interior color; escapees take an HSL hue ramp
/// proportional to their escape iteration. A degenerate viewport
/// (`x_min == x_max` or `y_min == y_max`) collapses to identical
/// columns/rows rather than erroring.
pub fn render(
    width: u32,
    height: u32,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    max_iter: u32,
) -> Result<PixelBuffer, EngineError> {
    let mut buffer = PixelBuffer::try_new(width, height)?;
    if buffer.is_empty() {
        return Ok(buffer);
    }

    let w = width as f64;
    let h = height as f64;
    let row_len = width as usize * CHANNELS;

    let fill_row = move |py: usize, row: &mut [u8]| {
        let y0 = y_min + (y_max - y_min) * py as f64 / h;

        for px in 0..width as usize {
            let x0 = x_min + (x_max - x_min) * px as f64 / w;

            let mut x = 0.0f64;
            let mut y = 0.0f64;
            let mut iteration = 0u32;

            while x * x + y * y <= 4.0 && iteration < max_iter {
                let xtemp = x * x - y * y + x0;
                y = 2.0 * x * y + y0;
                x = xtemp;
                iteration += 1;
            }

            let idx = px * CHANNELS;
            let (r, g, b) = if iteration == max_iter {
                INTERIOR
            } else {
                let hue = 360.0 * iteration as f64 / max_iter as f64;
                hsl_to_rgb(hue, PALETTE_SATURATION, PALETTE_LIGHTNESS)
            };
            row[idx] = r;
            row[idx + 1] = g;
            row[idx + 2] = b;
            row[idx + 3] = 255;
        }
    };

    #[cfg(feature = "parallel")]
    buffer
        .data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(py, row)| fill_row(py, row));

    #[cfg(not(feature = "parallel"))]
    buffer
        .data_mut()
        .chunks_mut(row_len)
        .enumerate()
        .for_each(|(py, row)| fill_row(py, row));

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_length_is_width_height_4() {
        let buf = render(33, 17, -2.0, 1.0, -1.5, 1.5, 32).unwrap();
        assert_eq!(buf.len(), 33 * 17 * 4);
    }

    #[test]
    fn zero_dimensions_render_an_empty_frame() {
        assert_eq!(render(0, 64, -2.0, 1.0, -1.5, 1.5, 32).unwrap().len(), 0);
        assert_eq!(render(64, 0, -2.0, 1.0, -1.5, 1.5, 32).unwrap().len(), 0);
    }

    #[test]
    fn zero_max_iter_paints_interior_everywhere() {
        let buf = render(100, 100, -2.0, 1.0, -1.5, 1.5, 0).unwrap();
        for px in buf.as_bytes().chunks_exact(4) {
            assert_eq!(px, [0, 0, 0, 255]);
        }
    }

    #[test]
    fn identical_inputs_give_identical_bytes() {
        let a = render(64, 48, -2.0, 1.0, -1.5, 1.5, 50).unwrap();
        let b = render(64, 48, -2.0, 1.0, -1.5, 1.5, 50).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn degenerate_viewport_collapses_to_identical_columns() {
        let buf = render(16, 8, 0.25, 0.25, -1.5, 1.5, 40).unwrap();
        let bytes = buf.as_bytes();
        for row in bytes.chunks_exact(16 * 4) {
            let first = &row[0..4];
            for px in row.chunks_exact(4) {
                assert_eq!(px, first);
            }
        }
    }

    #[test]
    fn far_exterior_escapes_on_the_first_iteration() {
        // A viewport far outside the set escapes immediately: hue 360/max,
        // never interior black.
        let buf = render(4, 4, 10.0, 11.0, 10.0, 11.0, 25).unwrap();
        for px in buf.as_bytes().chunks_exact(4) {
            assert_ne!(&px[0..3], [0, 0, 0]);
            assert_eq!(px[3], 255);
        }
    }
}

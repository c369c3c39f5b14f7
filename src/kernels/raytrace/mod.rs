//! Analytic-sphere ray tracer.
//!
//! One primary ray per pixel from a camera at the origin, image plane at
//! z = 1 spanning ±1 in both axes. `time` alone drives the animation; the
//! kernel keeps no state between calls and identical (width, height, time)
//! always produce identical bytes.

mod scene;

pub use scene::{Scene, SphereConfig};

use scene::Sphere;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::color::{hsl_to_rgb, scale_channel};
use crate::core::error::EngineError;
use crate::transfer::{PixelBuffer, CHANNELS};

const SURFACE_SATURATION: f64 = 0.7;
const SURFACE_LIGHTNESS: f64 = 0.5;

/// Render one frame of the given scene at animation time `time` (seconds).
pub fn render(
    width: u32,
    height: u32,
    time: f64,
    scene: &Scene,
) -> Result<PixelBuffer, EngineError> {
    let mut buffer = PixelBuffer::try_new(width, height)?;
    if buffer.is_empty() {
        return Ok(buffer);
    }

    let spheres: Vec<Sphere> = scene.spheres.iter().map(|cfg| cfg.at(time)).collect();
    let light = scene.light;
    let [bg_r, bg_g, bg_b] = scene.background;
    let hue_drift = time * scene.hue_rate;

    let w = width as f64;
    let h = height as f64;
    let row_len = width as usize * CHANNELS;
    let spheres = &spheres;

    let fill_row = move |py: usize, row: &mut [u8]| {
        let y = -(py as f64 / h - 0.5) * 2.0;

        for px in 0..width as usize {
            let x = (px as f64 / w - 0.5) * 2.0;
            let dir = [x, y, 1.0];

            let mut nearest: Option<(f64, &Sphere)> = None;
            for sphere in spheres {
                if let Some(t) = intersect(dir, sphere) {
                    if nearest.map_or(true, |(best, _)| t < best) {
                        nearest = Some((t, sphere));
                    }
                }
            }

            let idx = px * CHANNELS;
            match nearest {
                Some((t, sphere)) => {
                    let hit = [dir[0] * t, dir[1] * t, dir[2] * t];
                    let normal = [
                        (hit[0] - sphere.center[0]) / sphere.radius,
                        (hit[1] - sphere.center[1]) / sphere.radius,
                        (hit[2] - sphere.center[2]) / sphere.radius,
                    ];
                    let to_light = [light[0] - hit[0], light[1] - hit[1], light[2] - hit[2]];
                    let light_dist = (to_light[0] * to_light[0]
                        + to_light[1] * to_light[1]
                        + to_light[2] * to_light[2])
                        .sqrt();

                    let dot = (normal[0] * to_light[0]
                        + normal[1] * to_light[1]
                        + normal[2] * to_light[2])
                        / light_dist;
                    let brightness = dot.max(0.0);

                    let (r, g, b) =
                        hsl_to_rgb(sphere.hue + hue_drift, SURFACE_SATURATION, SURFACE_LIGHTNESS);
                    row[idx] = scale_channel(r, brightness);
                    row[idx + 1] = scale_channel(g, brightness);
                    row[idx + 2] = scale_channel(b, brightness);
                }
                None => {
                    row[idx] = bg_r;
                    row[idx + 1] = bg_g;
                    row[idx + 2] = bg_b;
                }
            }
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

/// Nearest positive intersection of a ray from the origin with a sphere,
/// by the quadratic formula on the ray-sphere equation.
#[inline]
fn intersect(dir: [f64; 3], sphere: &Sphere) -> Option<f64> {
    let c = sphere.center;
    let a = dir[0] * dir[0] + dir[1] * dir[1] + dir[2] * dir[2];
    let b = -2.0 * (dir[0] * c[0] + dir[1] * c[1] + dir[2] * c[2]);
    let q = c[0] * c[0] + c[1] * c[1] + c[2] * c[2] - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * q;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    (t > 0.0).then_some(t)
}

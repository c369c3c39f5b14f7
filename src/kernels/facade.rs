//! Wasm exports for the stateless kernels.
//!
//! Returned vectors are the ownership-transfer half of the buffer protocol:
//! the glue copies them into host typed arrays and frees the wasm-side
//! allocation exactly once.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::transfer::DiagnosticDecoder;

use super::raytrace::Scene;

thread_local! {
    // Scene bundles arrive as raw UTF-8; decoding shares one bounded decoder
    // per thread, mirroring the glue's cached TextDecoder.
    static SCENE_DECODER: RefCell<DiagnosticDecoder> = RefCell::new(DiagnosticDecoder::new());
}

/// Render the Mandelbrot set over the given viewport as RGBA bytes.
#[wasm_bindgen]
pub fn mandelbrot(
    width: u32,
    height: u32,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    max_iter: u32,
) -> Result<Vec<u8>, JsValue> {
    let buffer = super::mandelbrot::render(width, height, x_min, x_max, y_min, y_max, max_iter)?;
    Ok(buffer.into_bytes())
}

/// Render one frame of the built-in sphere scene as RGBA bytes.
#[wasm_bindgen]
pub fn raytrace(width: u32, height: u32, time: f64) -> Result<Vec<u8>, JsValue> {
    let buffer = super::raytrace::render(width, height, time, &Scene::default())?;
    Ok(buffer.into_bytes())
}

/// Render one frame of a host-supplied scene. `scene_utf8` is a JSON scene
/// bundle as raw UTF-8 bytes.
#[wasm_bindgen(js_name = raytraceWithScene)]
pub fn raytrace_with_scene(
    width: u32,
    height: u32,
    time: f64,
    scene_utf8: &[u8],
) -> Result<Vec<u8>, JsValue> {
    let json = SCENE_DECODER.with(|d| d.borrow_mut().decode(scene_utf8))?;
    let scene = Scene::from_json(&json)?;
    let buffer = super::raytrace::render(width, height, time, &scene)?;
    Ok(buffer.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_matches_the_core_kernel_byte_for_byte() {
        let via_facade = mandelbrot(32, 32, -2.0, 1.0, -1.5, 1.5, 20).unwrap();
        let via_core =
            crate::kernels::mandelbrot::render(32, 32, -2.0, 1.0, -1.5, 1.5, 20).unwrap();
        assert_eq!(via_facade, via_core.into_bytes());
    }

    #[test]
    fn scene_bytes_round_trip_through_the_bounded_decoder() {
        let json = Scene::default().to_json();
        let custom = raytrace_with_scene(24, 24, 0.5, json.as_bytes()).unwrap();
        let builtin = raytrace(24, 24, 0.5).unwrap();
        assert_eq!(custom, builtin);
    }

    #[test]
    fn empty_scene_object_falls_back_to_the_builtin_scene() {
        let via_defaults = raytrace_with_scene(16, 16, 2.0, b"{}").unwrap();
        let builtin = raytrace(16, 16, 2.0).unwrap();
        assert_eq!(via_defaults, builtin);
    }
}

//! Scene configuration for the ray tracer.
//!
//! The default scene is the built-in demo: a single radius-2 sphere orbiting
//! in front of the camera, lit from a fixed point. Hosts can override it with
//! a JSON bundle; every field falls back to the built-in value.

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub spheres: Vec<SphereConfig>,
    /// Fixed light position.
    pub light: [f64; 3],
    /// RGB painted where no ray hits.
    pub background: [u8; 3],
    /// Degrees of surface hue drift per second.
    pub hue_rate: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            spheres: vec![SphereConfig::default()],
            light: [5.0, 5.0, -5.0],
            background: [20, 20, 30],
            hue_rate: 50.0,
        }
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidScene(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Orbit center.
    pub center: [f64; 3],
    pub radius: f64,
    /// Base surface hue in degrees; drifts by the scene's `hue_rate`.
    pub hue: f64,
    /// Orbit half-extents in x and y.
    pub orbit_amplitude: [f64; 2],
    /// Orbit angular rates in x and y (radians per second).
    pub orbit_rate: [f64; 2],
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, 10.0],
            radius: 2.0,
            hue: 0.0,
            orbit_amplitude: [2.0, 1.5],
            orbit_rate: [0.5, 0.3],
        }
    }
}

impl SphereConfig {
    /// Resolve the animated sphere position at `time`.
    pub(super) fn at(&self, time: f64) -> Sphere {
        Sphere {
            center: [
                self.center[0] + (time * self.orbit_rate[0]).cos() * self.orbit_amplitude[0],
                self.center[1] + (time * self.orbit_rate[1]).sin() * self.orbit_amplitude[1],
                self.center[2],
            ],
            radius: self.radius,
            hue: self.hue,
        }
    }
}

/// A sphere resolved at a fixed animation time.
pub(super) struct Sphere {
    pub center: [f64; 3],
    pub radius: f64,
    pub hue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_is_the_default_scene() {
        let scene = Scene::from_json("{}").unwrap();
        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.light, [5.0, 5.0, -5.0]);
        assert_eq!(scene.background, [20, 20, 30]);
    }

    #[test]
    fn partial_sphere_config_fills_in_defaults() {
        let scene =
            Scene::from_json(r#"{"spheres":[{"radius":1.0},{"hue":200.0}]}"#).unwrap();
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[0].radius, 1.0);
        assert_eq!(scene.spheres[0].center, [0.0, 0.0, 10.0]);
        assert_eq!(scene.spheres[1].hue, 200.0);
    }

    #[test]
    fn malformed_json_is_invalid_scene() {
        let err = Scene::from_json("not a scene").unwrap_err();
        assert!(matches!(err, EngineError::InvalidScene(_)));
    }

    #[test]
    fn default_sphere_orbits_around_its_center() {
        let cfg = SphereConfig::default();
        let s = cfg.at(0.0);
        assert_eq!(s.center, [2.0, 0.0, 10.0]);
        let s = cfg.at(std::f64::consts::PI);
        assert!((s.center[0] - (std::f64::consts::PI * 0.5).cos() * 2.0).abs() < 1e-12);
    }
}

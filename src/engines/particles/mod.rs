//! Particle simulator: N particles under simple kinematics.
//!
//! Boundary policy is **bounce**: a particle crossing an edge reflects the
//! offending velocity component with a 0.95 damping factor and clamps back
//! into range. Gravity pulls vy down each update and hue cycles continuously,
//! so the host gets the classic bouncing-confetti look.

mod facade;

pub use facade::ParticleSystem;

use crate::core::error::EngineError;
use crate::core::random::{time_seed, XorShift32};
use crate::transfer::ParticleBuffer;

const WALL_DAMPING: f64 = 0.95;
/// vy gained per reference frame (delta = 1).
const GRAVITY_PER_FRAME: f64 = 0.5;
/// Degrees of hue advanced per reference frame.
const HUE_PER_FRAME: f64 = 0.5;

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
    hue: f64,
    age: f64,
}

pub struct ParticleCore {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleCore {
    /// Spawn `count` particles at random positions inside the field with
    /// random velocity, size and hue. Zero width or height is rejected;
    /// zero count is a valid (empty) system.
    pub fn new(width: u32, height: u32, count: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        let mut particles = Vec::new();
        particles
            .try_reserve_exact(count as usize)
            .map_err(|_| EngineError::AllocationFailure {
                bytes: count as usize * std::mem::size_of::<Particle>(),
            })?;

        let w = width as f64;
        let h = height as f64;
        let mut rng = XorShift32::new(time_seed() ^ count.rotate_left(16));

        for _ in 0..count {
            particles.push(Particle {
                x: rng.range_f64(0.0, w),
                y: rng.range_f64(0.0, h),
                vx: rng.range_f64(-2.0, 2.0),
                vy: rng.range_f64(-2.0, 2.0),
                size: rng.range_f64(2.0, 7.0),
                hue: rng.range_f64(0.0, 360.0),
                age: 0.0,
            });
        }

        Ok(Self {
            particles,
            width: w,
            height: h,
        })
    }

    pub fn count(&self) -> usize {
        self.particles.len()
    }

    /// Advance every particle by one `delta`-scaled tick (delta = 1 is one
    /// reference frame). Equal deltas always apply identical kinematics.
    pub fn update(&mut self, delta: f64) {
        for p in &mut self.particles {
            p.x += p.vx * delta;
            p.y += p.vy * delta;

            if p.x < 0.0 || p.x > self.width {
                p.vx *= -WALL_DAMPING;
                p.x = p.x.clamp(0.0, self.width);
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy *= -WALL_DAMPING;
                p.y = p.y.clamp(0.0, self.height);
            }

            p.vy += GRAVITY_PER_FRAME * delta;
            p.hue = (p.hue + HUE_PER_FRAME * delta).rem_euclid(360.0);
            p.age += delta;
        }
    }

    /// Export (x, y, size, hue) per particle in stable index order.
    pub fn get_data(&self) -> Result<ParticleBuffer, EngineError> {
        let mut buffer = ParticleBuffer::with_capacity(self.particles.len())?;
        for p in &self.particles {
            buffer.push(p.x, p.y, p.size, p.hue);
        }
        Ok(buffer)
    }
}

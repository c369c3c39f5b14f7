//! Stateless kernels: one call, one fully-rendered frame.

pub mod mandelbrot;
pub mod raytrace;

pub mod facade;

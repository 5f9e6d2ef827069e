//! Randomization helpers for particle creation.
//!
//! Fresh particles draw their position, velocity direction, radius, and color
//! from the simulation's own [`SmallRng`], so a seeded simulation spawns a
//! reproducible sequence of particles.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Random unit vector, picked by spherical angles.
pub fn random_direction(rng: &mut SmallRng) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(0.0..PI);
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Random point in the spawn region: a column spanning the middle half of
/// the box in x/z and the upper half of the box in y.
///
/// For the default `half_extent = 2.0` that is x, z in (-1, 1) and
/// y in (0, 2).
pub fn spawn_position(rng: &mut SmallRng, half_extent: f32) -> Vec3 {
    let h = half_extent;
    Vec3::new(
        rng.gen_range(-h / 2.0..h / 2.0),
        rng.gen_range(0.0..h),
        rng.gen_range(-h / 2.0..h / 2.0),
    )
}

/// Random RGB color, each channel in `[0, 1)`.
pub fn random_color(rng: &mut SmallRng) -> Vec3 {
    Vec3::new(rng.gen(), rng.gen(), rng.gen())
}

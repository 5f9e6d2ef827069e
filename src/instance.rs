//! Render-facing particle layout.
//!
//! The host renderer only reads a particle's position, radius, and color.
//! [`ParticleInstance`] packs those into a `Pod` struct that can be memcpy'd
//! straight into an instance buffer: `vec3` attributes are padded to 16 bytes
//! (position + radius in the first 16, color + padding in the second), so the
//! layout lines up with std140/std430-style shader structs.

use crate::particle::Particle;
use bytemuck::{Pod, Zeroable};

/// Per-particle instance data for buffer upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Sphere center, world space.
    pub position: [f32; 3],
    /// Sphere radius; doubles as the instance scale.
    pub radius: f32,
    /// RGB color, each channel in `[0, 1)`.
    pub color: [f32; 3],
    _pad: f32,
}

impl From<&Particle> for ParticleInstance {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position.to_array(),
            radius: p.radius,
            color: p.color.to_array(),
            _pad: 0.0,
        }
    }
}

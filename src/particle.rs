//! Particle state and the per-particle update step.
//!
//! Each [`Particle`] is an independent sphere: it never interacts with other
//! particles, only with the walls of the bounding cube (in [`Mode::Bounded`]).
//! [`Particle::update`] advances one particle by one frame's elapsed time and
//! is the whole of the physics in this crate: a rest check, quadratic drag,
//! a semi-implicit Euler step, and (bounded mode only) a continuous collision
//! scan against the six walls with restitution.

use glam::Vec3;
use log::trace;

/// Update rule a particle is permanently bound to at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Confined to the cube `[-half_extent, half_extent]^3`. Bounces off the
    /// walls and settles once its potential plus vertical kinetic energy
    /// drops below the rest threshold.
    Bounded,
    /// No walls. Settles once speed drops below the rest threshold.
    FreeFall,
}

/// A single spherical particle.
///
/// Everything except `position`, `velocity`, and `settled` is fixed at spawn.
/// The struct is a plain value; [`crate::Simulation`] owns the live set and
/// hands out read-only slices to the host for rendering.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// World position of the sphere center, meters.
    pub position: Vec3,
    /// Velocity, meters per second.
    pub velocity: Vec3,
    /// Sphere radius, meters. Always positive.
    pub radius: f32,
    /// Mass, kilograms. Fixed at 1.0 for every particle today; kept as a
    /// field so heavier particles are a parameter change, not a formula
    /// change.
    pub mass: f32,
    /// Drag coefficient for the quadratic drag term.
    pub drag_coefficient: f32,
    /// Gravitational acceleration, m/s^2.
    pub gravity: Vec3,
    /// Render color, RGB with each channel in `[0, 1)`.
    pub color: Vec3,
    /// Once true the particle is permanently excluded from integration.
    /// Never transitions back to false.
    pub settled: bool,
    /// Half-size of the bounding cube (bounded mode).
    pub half_extent: f32,
    /// Fraction of a velocity component's magnitude kept (with sign flipped)
    /// after a wall hit.
    pub restitution: f32,
    /// Bounded-mode rest threshold: potential plus vertical kinetic energy
    /// below this value counts as at rest.
    pub rest_energy: f32,
    /// Free-fall rest threshold on speed, m/s.
    pub rest_speed: f32,
    /// Which update rule this particle follows.
    pub mode: Mode,
}

impl Particle {
    /// Advance this particle by `dt` seconds.
    ///
    /// Settled particles are left untouched. `dt = 0` is a valid call: the
    /// rest check still runs (it is time-independent), the state is otherwise
    /// unchanged.
    pub fn update(&mut self, dt: f32) {
        if self.settled {
            return;
        }
        match self.mode {
            Mode::Bounded => self.update_bounded(dt),
            Mode::FreeFall => self.update_free_fall(dt),
        }
    }

    /// Potential plus vertical kinetic energy, with height measured from the
    /// particle's lowest point to the box floor.
    ///
    /// Horizontal motion is deliberately ignored: a particle hugging the
    /// floor with little vertical motion counts as at rest even while it is
    /// still drifting sideways.
    fn rest_check_energy(&self) -> f32 {
        let height = self.position.y - self.radius + self.half_extent;
        self.mass * -self.gravity.y * height
            + self.mass * self.velocity.y * self.velocity.y / 2.0
    }

    fn update_bounded(&mut self, dt: f32) {
        if self.rest_check_energy() < self.rest_energy {
            self.settled = true;
            trace!("particle settled at {:?}", self.position);
            return;
        }

        let (mut velocity, mut position) = self.integrate(dt);

        // Continuous collision scan, per axis and per side. Every crossed
        // boundary reflects its velocity component immediately; `t` tracks
        // only the earliest impact time and decides where the particle ends
        // up. Corner hits (several boundaries in one step) therefore reflect
        // on every crossed axis while repositioning to the first contact.
        let mut t = f32::INFINITY;
        for axis in 0..3 {
            if position[axis] + self.radius > self.half_extent {
                let gap = self.half_extent - (self.position[axis] + self.radius);
                if velocity[axis] != 0.0 {
                    t = t.min(gap / velocity[axis].abs());
                }
                velocity[axis] *= -self.restitution;
            }
            if position[axis] - self.radius < -self.half_extent {
                let gap = (self.position[axis] - self.radius) + self.half_extent;
                if velocity[axis] != 0.0 {
                    t = t.min(gap / velocity[axis].abs());
                }
                velocity[axis] *= -self.restitution;
            }
        }

        // Advance only to the moment of first contact, using the reflected
        // velocity. The rest of the step is dropped until the next tick.
        if t.is_finite() {
            position = self.position + velocity * t;
        }

        self.velocity = velocity;
        self.position = position;
    }

    fn update_free_fall(&mut self, dt: f32) {
        if self.velocity.length() < self.rest_speed {
            self.settled = true;
            trace!("particle settled at {:?}", self.position);
            return;
        }
        let (velocity, position) = self.integrate(dt);
        self.velocity = velocity;
        self.position = position;
    }

    /// Semi-implicit Euler step under gravity and drag.
    ///
    /// Drag scales the velocity vector itself by `-|v|^2 * c / m`, so the
    /// drag force magnitude grows with the cube of speed. The velocity is
    /// updated first and the new velocity moves the position.
    fn integrate(&self, dt: f32) -> (Vec3, Vec3) {
        let drag_scale = -self.velocity.length_squared() * self.drag_coefficient / self.mass;
        let acceleration = self.gravity + self.velocity * drag_scale;
        let velocity = self.velocity + acceleration * dt;
        let position = self.position + velocity * dt;
        (velocity, position)
    }
}

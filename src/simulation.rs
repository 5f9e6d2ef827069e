//! Simulation collection and its tunable parameters.
//!
//! [`Simulation`] owns the live set of particles and the RNG that spawns
//! them. The host drives it: spawn on input events, `tick` once per frame
//! with the frame's elapsed time, then read the particle slice (or packed
//! [`ParticleInstance`]s) for rendering. The simulation never creates or
//! destroys particles on its own.

use crate::error::ParamError;
use crate::instance::ParticleInstance;
use crate::particle::{Mode, Particle};
use crate::spawn;
use glam::Vec3;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Tunable simulation parameters, fixed at construction.
///
/// Defaults reproduce the stock behavior: a `[-2, 2]^3` box, gravity of
/// 10 m/s^2 straight down, drag coefficient 0.05, restitution 0.90, and the
/// rest thresholds 1.0 (energy, bounded) and 0.01 m/s (speed, free-fall).
#[derive(Clone, Debug)]
pub struct Params {
    /// Update rule for every particle this simulation spawns.
    pub mode: Mode,
    /// Half-size of the bounding cube.
    pub half_extent: f32,
    /// Gravitational acceleration, m/s^2.
    pub gravity: Vec3,
    /// Quadratic drag coefficient.
    pub drag_coefficient: f32,
    /// Speed of freshly spawned particles, m/s.
    pub spawn_speed: f32,
    /// Radius of freshly spawned particles is drawn uniformly from here.
    pub radius_range: Range<f32>,
    /// Velocity fraction kept (sign flipped) after a wall bounce.
    pub restitution: f32,
    /// Bounded-mode rest threshold (potential + vertical kinetic energy).
    pub rest_energy: f32,
    /// Free-fall rest threshold on speed, m/s.
    pub rest_speed: f32,
}

impl Params {
    /// Stock parameters for the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            half_extent: 2.0,
            gravity: Vec3::new(0.0, -10.0, 0.0),
            drag_coefficient: 0.05,
            spawn_speed: match mode {
                Mode::Bounded => 10.0,
                Mode::FreeFall => 8.0,
            },
            radius_range: 0.05..0.30,
            restitution: 0.90,
            rest_energy: 1.0,
            rest_speed: 0.01,
        }
    }

    /// Check every parameter against its domain.
    pub fn validate(&self) -> Result<(), ParamError> {
        let finite = [
            ("half_extent", self.half_extent),
            ("drag_coefficient", self.drag_coefficient),
            ("spawn_speed", self.spawn_speed),
            ("restitution", self.restitution),
            ("rest_energy", self.rest_energy),
            ("rest_speed", self.rest_speed),
            ("radius_range.start", self.radius_range.start),
            ("radius_range.end", self.radius_range.end),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name });
            }
        }
        if !self.gravity.is_finite() {
            return Err(ParamError::NonFinite { name: "gravity" });
        }
        if self.half_extent <= 0.0 {
            return Err(ParamError::NonPositiveHalfExtent(self.half_extent));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ParamError::RestitutionOutOfRange(self.restitution));
        }
        if self.radius_range.start <= 0.0 || self.radius_range.start >= self.radius_range.end {
            return Err(ParamError::EmptyRadiusRange {
                start: self.radius_range.start,
                end: self.radius_range.end,
            });
        }
        let non_negative = [
            ("drag_coefficient", self.drag_coefficient),
            ("spawn_speed", self.spawn_speed),
            ("rest_energy", self.rest_energy),
            ("rest_speed", self.rest_speed),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ParamError::NegativeScalar { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(Mode::Bounded)
    }
}

/// A collection of independent particles advanced by an external tick.
///
/// One calling thread per instance; `tick` mutates the particles in place
/// and particle order never affects the outcome (particles do not read each
/// other's state).
pub struct Simulation {
    params: Params,
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl Simulation {
    /// Create an empty simulation with stock parameters for `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            params: Params::new(mode),
            particles: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an empty simulation with custom, validated parameters.
    pub fn with_params(params: Params) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self {
            params,
            particles: Vec::new(),
            rng: SmallRng::from_entropy(),
        })
    }

    /// Reseed the spawn RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// The parameters this simulation was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Append one freshly randomized particle and return it.
    pub fn spawn(&mut self) -> &Particle {
        let particle = self.make_particle();
        let index = self.particles.len();
        self.particles.push(particle);
        debug!(
            "spawned particle #{index} (r = {:.3} m, |v| = {:.2} m/s)",
            particle.radius,
            particle.velocity.length()
        );
        &self.particles[index]
    }

    /// Append `count` freshly randomized particles.
    pub fn spawn_many(&mut self, count: usize) {
        for _ in 0..count {
            self.spawn();
        }
    }

    /// Remove every particle.
    pub fn clear(&mut self) {
        debug!("clearing {} particles", self.particles.len());
        self.particles.clear();
    }

    /// Advance every non-settled particle by `dt` seconds.
    ///
    /// `dt` below zero (or NaN) is caller misuse and is clamped to zero so
    /// no particle ever integrates backwards.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt >= 0.0 {
            dt
        } else {
            warn!("tick called with invalid dt = {dt}; clamping to 0");
            0.0
        };
        for particle in &mut self.particles {
            particle.update(dt);
        }
    }

    /// Read-only view of the live particles, in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles, settled ones included.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True if no particles are live.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// How many particles have permanently come to rest.
    pub fn settled_count(&self) -> usize {
        self.particles.iter().filter(|p| p.settled).count()
    }

    /// True once every live particle has settled. Vacuously true when empty.
    pub fn all_settled(&self) -> bool {
        self.particles.iter().all(|p| p.settled)
    }

    /// Collect render instances for every live particle, in spawn order.
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles.iter().map(ParticleInstance::from).collect()
    }

    /// Rebuild `out` with one render instance per live particle, reusing its
    /// allocation across frames.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.particles.iter().map(ParticleInstance::from));
    }

    fn make_particle(&mut self) -> Particle {
        let params = &self.params;
        let rng = &mut self.rng;
        Particle {
            position: spawn::spawn_position(rng, params.half_extent),
            velocity: spawn::random_direction(rng) * params.spawn_speed,
            radius: rng.gen_range(params.radius_range.clone()),
            mass: 1.0,
            drag_coefficient: params.drag_coefficient,
            gravity: params.gravity,
            color: spawn::random_color(rng),
            settled: false,
            half_extent: params.half_extent,
            restitution: params.restitution,
            rest_energy: params.rest_energy,
            rest_speed: params.rest_speed,
            mode: params.mode,
        }
    }
}

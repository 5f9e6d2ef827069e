//! # bouncebox
//!
//! CPU simulation of independent spherical particles under gravity and
//! quadratic drag, bouncing inside a fixed cubic box, producing render-ready
//! position/radius/color state every frame.
//!
//! The crate does no rendering. A host owns the frame loop: it spawns
//! particles on input events, calls [`Simulation::tick`] with each frame's
//! elapsed time, and reads the particle state back for drawing.
//!
//! ## Quick Start
//!
//! ```
//! use bouncebox::prelude::*;
//!
//! let mut sim = Simulation::new(Mode::Bounded).with_seed(7);
//! sim.spawn_many(3);
//!
//! let mut time = Time::new();
//! time.set_fixed_delta(Some(1.0 / 60.0));
//!
//! for _ in 0..600 {
//!     let (_, dt) = time.update();
//!     sim.tick(dt);
//! }
//!
//! for p in sim.particles() {
//!     println!("{:?} r={} color={:?}", p.position, p.radius, p.color);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! A [`Particle`] is a sphere with a position, velocity, radius, and color.
//! Particles are independent: they collide with the box walls, never with
//! each other. Once a particle's rest heuristic fires its `settled` flag is
//! set and it is permanently excluded from further updates (it stays in the
//! collection and keeps rendering).
//!
//! ### Modes
//!
//! A particle is bound to one [`Mode`] for life, chosen when its simulation
//! is constructed:
//!
//! | Mode | Walls | Rest heuristic |
//! |------|-------|----------------|
//! | [`Mode::Bounded`] | bounces inside `[-2, 2]^3` with restitution 0.90 | potential + vertical kinetic energy < 1.0 |
//! | [`Mode::FreeFall`] | none | speed < 0.01 m/s |
//!
//! ### Parameters
//!
//! Everything tunable lives in [`Params`] and is fixed at construction:
//!
//! ```
//! use bouncebox::prelude::*;
//!
//! let mut params = Params::new(Mode::Bounded);
//! params.restitution = 0.5;
//! let sim = Simulation::with_params(params).unwrap();
//! ```
//!
//! ### Rendering handoff
//!
//! [`Simulation::particles`] exposes the full per-particle state read-only;
//! [`Simulation::write_instances`] packs the render-facing fields into
//! [`ParticleInstance`]s ([`bytemuck::Pod`]) ready for buffer upload.

pub mod error;
pub mod instance;
pub mod particle;
pub mod simulation;
pub mod spawn;
pub mod time;

pub use bytemuck;
pub use error::ParamError;
pub use glam::Vec3;
pub use instance::ParticleInstance;
pub use particle::{Mode, Particle};
pub use simulation::{Params, Simulation};
pub use time::Time;

/// Convenient re-exports for common usage.
///
/// ```
/// use bouncebox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ParamError;
    pub use crate::instance::ParticleInstance;
    pub use crate::particle::{Mode, Particle};
    pub use crate::simulation::{Params, Simulation};
    pub use crate::time::Time;
    pub use crate::Vec3;
}

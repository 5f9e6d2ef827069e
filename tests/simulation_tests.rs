//! Integration tests for the particle simulation.
//!
//! These exercise the observable contract end-to-end: settling, wall
//! containment, restitution, drag, and the render handoff, driven through
//! the public API only.

use bouncebox::prelude::*;

const DT: f32 = 1.0 / 60.0;

/// A bounded particle built by hand for kinematics checks, with gravity and
/// drag off and the rest thresholds zeroed so nothing settles early.
fn inert_particle() -> Particle {
    Particle {
        position: Vec3::ZERO,
        velocity: Vec3::ZERO,
        radius: 0.1,
        mass: 1.0,
        drag_coefficient: 0.0,
        gravity: Vec3::ZERO,
        color: Vec3::ONE,
        settled: false,
        half_extent: 2.0,
        restitution: 0.90,
        rest_energy: 0.0,
        rest_speed: 0.0,
        mode: Mode::Bounded,
    }
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn test_bounded_particles_settle_within_bounded_steps() {
    for seed in [1u64, 2, 3, 4, 5] {
        let mut sim = Simulation::new(Mode::Bounded).with_seed(seed);
        sim.spawn_many(8);

        let mut steps = 0;
        while !sim.all_settled() && steps < 10_000 {
            sim.tick(DT);
            steps += 1;
        }

        assert!(
            sim.all_settled(),
            "seed {seed}: {}/{} settled after {steps} steps",
            sim.settled_count(),
            sim.len()
        );
    }
}

#[test]
fn test_settled_particles_never_move_again() {
    let mut sim = Simulation::new(Mode::Bounded).with_seed(6);
    sim.spawn_many(8);

    for _ in 0..10_000 {
        if sim.all_settled() {
            break;
        }
        sim.tick(DT);
    }
    assert!(sim.all_settled());

    let frozen: Vec<(Vec3, Vec3)> = sim
        .particles()
        .iter()
        .map(|p| (p.position, p.velocity))
        .collect();

    for _ in 0..100 {
        sim.tick(DT);
    }

    for (p, (position, velocity)) in sim.particles().iter().zip(&frozen) {
        assert_eq!(p.position, *position);
        assert_eq!(p.velocity, *velocity);
    }
}

// ============================================================================
// Wall containment
// ============================================================================

#[test]
fn test_particles_stay_near_the_box() {
    let mut sim = Simulation::new(Mode::Bounded).with_seed(7);
    sim.spawn_many(16);
    let half_extent = sim.params().half_extent;

    for _ in 0..2_000 {
        sim.tick(DT);
        for p in sim.particles() {
            for axis in 0..3 {
                assert!(
                    p.position[axis].abs() <= half_extent + p.radius + 1e-3,
                    "particle escaped on axis {axis}: {:?} (r = {})",
                    p.position,
                    p.radius
                );
            }
        }
    }
}

// ============================================================================
// Restitution
// ============================================================================

#[test]
fn test_single_wall_strike_damps_one_component() {
    let mut p = inert_particle();
    p.position = Vec3::new(1.85, 0.3, -0.2);
    p.velocity = Vec3::new(2.0, 0.5, 0.25);

    p.update(0.1);

    // Only the x component reflects: -0.90 * 2.0. y and z integrate freely
    // (gravity and drag are off, so they are unchanged).
    assert!((p.velocity.x - (-1.8)).abs() < 1e-6);
    assert_eq!(p.velocity.y, 0.5);
    assert_eq!(p.velocity.z, 0.25);

    // The step truncates at the contact time gap / |v| = 0.05 / 2.0.
    let t = 0.025;
    assert!((p.position.x - (1.85 - 1.8 * t)).abs() < 1e-6);
    assert!((p.position.y - (0.3 + 0.5 * t)).abs() < 1e-6);
    assert!((p.position.z - (-0.2 + 0.25 * t)).abs() < 1e-6);
}

// ============================================================================
// Free fall
// ============================================================================

#[test]
fn test_free_fall_settles_and_stays_settled() {
    // Spawn already below the rest speed: the first tick retires every
    // particle, and nothing may move from then on.
    let mut params = Params::new(Mode::FreeFall);
    params.spawn_speed = 0.005;
    let mut sim = Simulation::with_params(params).unwrap().with_seed(8);
    sim.spawn_many(4);

    sim.tick(DT);
    assert!(sim.all_settled());

    let frozen: Vec<Vec3> = sim.particles().iter().map(|p| p.position).collect();
    for _ in 0..100 {
        sim.tick(DT);
    }
    for (p, position) in sim.particles().iter().zip(&frozen) {
        assert_eq!(p.position, *position);
    }
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_never_increases_speed() {
    let mut p = inert_particle();
    p.mode = Mode::FreeFall;
    p.drag_coefficient = 0.05;
    p.velocity = Vec3::new(6.0, -3.0, 2.0);

    let mut speed = p.velocity.length();
    for _ in 0..1_000 {
        p.update(DT);
        let next = p.velocity.length();
        assert!(next < speed, "speed rose from {speed} to {next}");
        speed = next;
    }
}

// ============================================================================
// Concrete drop scenario
// ============================================================================

#[test]
fn test_dropped_particle_descends_bounces_and_settles() {
    let mut p = Particle {
        position: Vec3::new(0.0, 1.9, 0.0),
        velocity: Vec3::ZERO,
        radius: 0.1,
        gravity: Vec3::new(0.0, -10.0, 0.0),
        drag_coefficient: 0.05,
        rest_energy: 1.0,
        ..inert_particle()
    };
    let floor = -p.half_extent + p.radius;

    let mut last_y = p.position.y;
    let mut bounced = false;
    let mut steps = 0;
    while !p.settled && steps < 10_000 {
        p.update(0.1);
        steps += 1;

        if p.velocity.y > 0.0 {
            bounced = true;
        }
        if !bounced && !p.settled {
            assert!(
                p.position.y < last_y,
                "height rose before first floor contact at step {steps}"
            );
        }
        assert!(
            p.position.y >= floor - 1e-4,
            "sank through the floor: y = {} at step {steps}",
            p.position.y
        );
        last_y = p.position.y;
    }

    assert!(bounced, "never reached the floor");
    assert!(p.settled, "never settled after {steps} steps");
}

// ============================================================================
// Render handoff
// ============================================================================

#[test]
fn test_instances_track_particles_across_ticks() {
    let mut sim = Simulation::new(Mode::Bounded).with_seed(9);
    sim.spawn_many(12);

    let mut instances = Vec::new();
    for _ in 0..60 {
        sim.tick(DT);
        sim.write_instances(&mut instances);
        assert_eq!(instances.len(), sim.len());
        for (inst, p) in instances.iter().zip(sim.particles()) {
            assert_eq!(inst.position, p.position.to_array());
            assert_eq!(inst.radius, p.radius);
            assert_eq!(inst.color, p.color.to_array());
        }
    }

    let bytes: &[u8] = bouncebox::bytemuck::cast_slice(&instances);
    assert_eq!(bytes.len(), instances.len() * 32);
}

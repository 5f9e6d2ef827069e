//! Headless demo: drop particles into the box and tick at a fixed step
//! until every one of them settles.
//!
//! Run with: `cargo run --release [particle_count]`

use bouncebox::prelude::*;

fn main() {
    env_logger::init();

    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    let mut sim = Simulation::new(Mode::Bounded).with_seed(0xB0B);
    sim.spawn_many(count);

    println!("=== bouncebox demo ===");
    println!("Particles: {count}");
    println!("Box: [-{h}, {h}]^3", h = sim.params().half_extent);

    let mut time = Time::new();
    time.set_fixed_delta(Some(1.0 / 60.0));

    let max_steps: u64 = 100_000;
    let mut steps: u64 = 0;
    while !sim.all_settled() && steps < max_steps {
        let (_, dt) = time.update();
        sim.tick(dt);
        steps += 1;
        if steps % 120 == 0 {
            log::info!("step {steps}: {}/{} settled", sim.settled_count(), sim.len());
        }
    }

    if sim.all_settled() {
        println!(
            "All {} particles settled after {steps} steps ({:.1} s simulated)",
            sim.len(),
            steps as f32 / 60.0
        );
    } else {
        eprintln!(
            "Gave up after {max_steps} steps with {}/{} settled",
            sim.settled_count(),
            sim.len()
        );
    }
}

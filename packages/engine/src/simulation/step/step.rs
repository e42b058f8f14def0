use crate::systems::audio::AudioCue;
use crate::systems::boundary::resolve_boundaries;
use crate::systems::collision::resolve_collisions;
use crate::systems::energy::measure_energy;
use crate::systems::forces::accumulate_forces;
use crate::systems::integrator::integrate;

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore, elapsed_seconds: f32) -> bool {
    if !world.running {
        return false;
    }

    let perf_on = world.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Settings are read once; commands between frames only affect the next step
    let cfg = world.settings.snapshot(&world.bounds, elapsed_seconds);

    // === PER-BODY PASS ===
    // Forces, integration, containment and trail, body by body in arena order.
    // Later bodies see the already advanced positions of earlier ones.
    let mut floor_contacts = 0u32;
    for i in 0..world.bodies.len() {
        if world.bodies[i].fixed {
            continue;
        }

        accumulate_forces(i, &mut world.bodies, &world.springs, &cfg);

        let body = &mut world.bodies[i];
        integrate(body, cfg.dt);

        let contacts = resolve_boundaries(body, &cfg);
        if contacts.floor {
            floor_contacts += 1;
            world.cues.push(AudioCue::bounce());
        }

        if cfg.record_trails {
            body.trail.push(body.position);
        }
    }

    // === COLLISIONS ===
    let collisions = if perf_on {
        let t0 = PerfTimer::start();
        let n = resolve_collisions(&mut world.bodies, &mut world.cues);
        world.stats.collision_ms = t0.elapsed_ms();
        n
    } else {
        resolve_collisions(&mut world.bodies, &mut world.cues)
    };

    // === STATS ===
    let energy = measure_energy(&world.bodies, cfg.gravity, world.bounds.height);
    let stats = &mut world.stats;
    stats.dt = cfg.dt;
    stats.body_count = world.bodies.len() as u32;
    stats.spring_count = world.springs.len() as u32;
    stats.collisions = collisions;
    stats.floor_contacts = floor_contacts;
    stats.kinetic_energy = energy.kinetic;
    stats.potential_energy = energy.potential;
    if let Some(t) = step_start {
        stats.step_ms = t.elapsed_ms();
    } else {
        stats.step_ms = 0.0;
        stats.collision_ms = 0.0;
    }

    world.frame += 1;
    true
}

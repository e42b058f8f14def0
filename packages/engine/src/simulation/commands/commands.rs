use super::perf_stats::StepStats;
use super::WorldCore;

pub(super) fn set_running(world: &mut WorldCore, running: bool) {
    if world.running != running {
        log::debug!("simulation {}", if running { "started" } else { "paused" });
    }
    world.running = running;
}

pub(super) fn toggle_running(world: &mut WorldCore) -> bool {
    let running = !world.running;
    set_running(world, running);
    running
}

pub(super) fn clear(world: &mut WorldCore) {
    let removed = world.bodies.len();
    world.bodies.clear();
    world.springs.clear();
    world.stats = StepStats::default();
    world.render.bodies.clear();
    world.render.trails.clear();
    set_running(world, false);
    log::info!("cleared {} bodies", removed);
}

pub(super) fn reset(world: &mut WorldCore) {
    for body in world.bodies.iter_mut() {
        body.reset_motion();
    }
    set_running(world, false);
    log::info!("reset {} bodies", world.bodies.len());
}

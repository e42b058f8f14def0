use std::sync::Arc;

use crate::domain::materials::MaterialRegistry;

use super::perf_stats::StepStats;
use super::settings::{Bounds, CreateSettings, PhysicsSettings};
use super::RenderBuffers;
use super::WorldCore;

pub(super) fn create_world_core(materials: MaterialRegistry) -> WorldCore {
    let mut create = CreateSettings::default();
    if materials.get(&create.material).is_none() {
        if let Some(first) = materials.iter().next() {
            create.material = first.key.clone();
        }
    }

    WorldCore {
        materials: Arc::new(materials),
        bodies: Vec::new(),
        springs: Vec::new(),
        settings: PhysicsSettings::default(),
        bounds: Bounds::default(),
        create,
        running: false,
        next_id: 1,
        frame: 0,
        cues: Vec::new(),
        stats: StepStats::default(),
        perf_enabled: false,
        render: RenderBuffers {
            bodies: Vec::new(),
            trails: Vec::new(),
        },
    }
}

pub(super) fn load_material_bundle(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let registry = MaterialRegistry::from_bundle_json(json).map_err(|e| {
        log::warn!("material bundle rejected: {}", e);
        e
    })?;

    if registry.get(&world.create.material).is_none() {
        if let Some(first) = registry.iter().next() {
            world.create.material = first.key.clone();
        }
    }

    log::info!("loaded {} materials", registry.material_count());
    world.materials = Arc::new(registry);
    Ok(())
}

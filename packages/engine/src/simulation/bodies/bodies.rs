use serde::Serialize;

use crate::core::Vec3;
use crate::domain::materials::format_hex_color;
use crate::domain::shapes::ShapeKind;
use crate::systems::audio::AudioCue;
use crate::systems::body::{Body, BodyParams, Spring};

use super::WorldCore;

/// Snapshot of one body for the info panel
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyInfo {
    pub id: u32,
    pub shape: &'static str,
    pub material: Option<String>,
    pub color: String,
    pub fixed: bool,
    pub mass: f32,
    pub size: f32,
    pub moment_of_inertia: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub speed: f32,
    pub kinetic_energy: f32,
    pub potential_energy: f32,
}

/// Ids are handed out in increasing order and bodies are only ever removed
/// all at once, so the arena stays sorted by id.
pub(super) fn body_index(world: &WorldCore, id: u32) -> Option<usize> {
    world.bodies.binary_search_by_key(&id, |b| b.id).ok()
}

/// Insert without validation or cue. Scenario presets go through here.
pub(super) fn insert_body(world: &mut WorldCore, params: BodyParams) -> Result<u32, String> {
    let id = world.next_id;
    world.next_id = id
        .checked_add(1)
        .ok_or_else(|| "body id space exhausted".to_string())?;
    world.bodies.push(Body::new(id, params));
    Ok(id)
}

pub(super) fn create_body(world: &mut WorldCore, params: BodyParams) -> Result<u32, String> {
    params.validate().map_err(|e| {
        log::warn!("body rejected: {}", e);
        e
    })?;

    let shape = params.shape;
    let position = params.position;
    let id = insert_body(world, params)?;
    world.cues.push(AudioCue::create());

    log::debug!(
        "created {} body {} at ({:.2}, {:.2})",
        shape.as_str(),
        id,
        position.x,
        position.y
    );
    Ok(id)
}

pub(super) fn spawn_body(
    world: &mut WorldCore,
    shape: &str,
    x: f32,
    y: f32,
    size: f32,
    material: &str,
    mass: f32,
) -> Result<u32, String> {
    let shape: ShapeKind = shape.parse()?;
    let material = world
        .materials
        .get(material)
        .ok_or_else(|| format!("unknown material: {}", material))?;

    let mass = if mass > 0.0 { Some(mass) } else { None };
    let params = BodyParams::from_material(shape, Vec3::xy(x, y), size, material, mass);
    create_body(world, params)
}

/// Click-to-create: the configured mass is scaled by the material density.
pub(super) fn spawn_default(world: &mut WorldCore, x: f32, y: f32) -> Result<u32, String> {
    let create = world.create.clone();
    let material = world
        .materials
        .get(&create.material)
        .ok_or_else(|| format!("unknown material: {}", create.material))?;

    let mass = create.mass * material.density;
    let params =
        BodyParams::from_material(create.shape, Vec3::xy(x, y), create.size, material, Some(mass));
    create_body(world, params)
}

pub(super) fn create_spring(
    world: &mut WorldCore,
    a_id: u32,
    b_id: u32,
    rest_length: f32,
    stiffness: f32,
    damping: f32,
) -> Result<(), String> {
    let a = body_index(world, a_id).ok_or_else(|| format!("no body with id {}", a_id))?;
    let b = body_index(world, b_id).ok_or_else(|| format!("no body with id {}", b_id))?;

    let spring = Spring::new(a, b, rest_length, stiffness, damping);
    spring.validate(world.bodies.len())?;
    world.springs.push(spring);
    Ok(())
}

pub(super) fn apply_force(world: &mut WorldCore, id: u32, fx: f32, fy: f32) -> Result<(), String> {
    if !fx.is_finite() || !fy.is_finite() {
        return Err(format!("force must be finite, got ({}, {})", fx, fy));
    }
    let index = body_index(world, id).ok_or_else(|| format!("no body with id {}", id))?;

    let body = &mut world.bodies[index];
    if body.fixed {
        return Err(format!("body {} is fixed", id));
    }
    body.apply_force(Vec3::xy(fx, fy));
    world.cues.push(AudioCue::force());
    Ok(())
}

pub(super) fn body_at(world: &WorldCore, x: f32, y: f32) -> Option<u32> {
    let point = Vec3::xy(x, y);
    world
        .bodies
        .iter()
        .rev()
        .find(|b| (point - b.position).planar_length() < b.size())
        .map(|b| b.id)
}

pub(super) fn body_info(world: &WorldCore, id: u32) -> Option<BodyInfo> {
    let body = world.body(id)?;
    Some(BodyInfo {
        id: body.id,
        shape: body.shape.kind().as_str(),
        material: body.material.clone(),
        color: format_hex_color(body.color),
        fixed: body.fixed,
        mass: body.mass,
        size: body.size(),
        moment_of_inertia: body.moment_of_inertia,
        position: body.position,
        velocity: body.velocity,
        acceleration: body.acceleration,
        speed: body.velocity.length(),
        kinetic_energy: body.kinetic_energy(),
        potential_energy: body.potential_energy(world.settings.gravity, world.bounds.height),
    })
}

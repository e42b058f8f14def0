//! Demo presets. Each one clears the world (which also pauses it) and
//! inserts its bodies without a create cue.

use std::str::FromStr;

use crate::core::Vec3;
use crate::domain::shapes::ShapeKind;
use crate::systems::body::{BodyParams, Spring};

use super::bodies::insert_body;
use super::commands;
use super::settings::Parameter;
use super::WorldCore;

const METAL_GREY: u32 = 0xC0C0C0;

/// Built-in demo scene
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Three metal spheres of different mass dropped side by side
    Gravity,
    /// A single sphere launched sideways
    Pendulum,
    /// Rubber and metal spheres on a head-on course
    Collision,
    /// Light planet circling a fixed heavy sun
    Orbital,
    /// Weight hanging from a fixed anchor on a damped spring
    Spring,
    /// Three materials sinking through thick air
    Fluid,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Gravity,
        Scenario::Pendulum,
        Scenario::Collision,
        Scenario::Orbital,
        Scenario::Spring,
        Scenario::Fluid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Gravity => "gravity",
            Scenario::Pendulum => "pendulum",
            Scenario::Collision => "collision",
            Scenario::Orbital => "orbital",
            Scenario::Spring => "spring",
            Scenario::Fluid => "fluid",
        }
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .iter()
            .copied()
            .find(|sc| sc.as_str() == s)
            .ok_or_else(|| format!("unknown scenario: {}", s))
    }
}

#[allow(clippy::too_many_arguments)]
fn sphere(
    x: f32,
    y: f32,
    size: f32,
    mass: f32,
    friction: f32,
    restitution: f32,
    color: u32,
    material: &str,
) -> BodyParams {
    BodyParams {
        shape: ShapeKind::Sphere,
        position: Vec3::xy(x, y),
        velocity: Vec3::zero(),
        size,
        mass,
        friction,
        restitution,
        color,
        material: Some(material.to_string()),
        fixed: false,
    }
}

/// Body params of a preset, before insertion
fn preset_bodies(world: &WorldCore, scenario: Scenario) -> Result<Vec<BodyParams>, String> {
    let bodies = match scenario {
        Scenario::Gravity => [0.5f32, 1.0, 2.0]
            .iter()
            .enumerate()
            .map(|(i, &mass)| {
                sphere(-3.0 + i as f32 * 3.0, 8.0, mass.sqrt(), mass, 0.6, 0.3, METAL_GREY, "metal")
            })
            .collect(),
        Scenario::Pendulum => vec![
            sphere(0.0, -2.0, 0.8, 1.0, 0.1, 0.9, METAL_GREY, "metal").with_velocity(Vec3::xy(3.0, 0.0)),
        ],
        Scenario::Collision => vec![
            sphere(-5.0, 0.0, 1.0, 1.0, 0.8, 0.9, 0xFF6B6B, "rubber").with_velocity(Vec3::xy(5.0, 0.0)),
            sphere(5.0, 0.0, 1.2, 2.0, 0.6, 0.3, METAL_GREY, "metal").with_velocity(Vec3::xy(-3.0, 0.0)),
        ],
        Scenario::Orbital => vec![
            sphere(0.0, 0.0, 2.0, 10.0, 0.1, 0.1, 0xFFD700, "metal").fixed(),
            sphere(6.0, 0.0, 0.6, 0.5, 0.1, 0.2, 0x87CEEB, "ice").with_velocity(Vec3::xy(0.0, 4.0)),
        ],
        Scenario::Spring => {
            let mut anchor = sphere(0.0, 5.0, 0.5, 1000.0, 1.0, 0.1, 0x696969, "metal").fixed();
            anchor.shape = ShapeKind::Cube;
            vec![anchor, sphere(0.0, 0.0, 1.0, 1.0, 0.6, 0.3, METAL_GREY, "metal")]
        }
        Scenario::Fluid => {
            let mut out = Vec::with_capacity(3);
            for (key, x, size) in [("metal", -2.0f32, 0.8f32), ("wood", 0.0, 1.2), ("ice", 2.0, 1.0)] {
                let material = world
                    .materials
                    .get(key)
                    .ok_or_else(|| format!("fluid scenario needs material {}", key))?;
                out.push(BodyParams::from_material(ShapeKind::Sphere, Vec3::xy(x, 8.0), size, material, None));
            }
            out
        }
    };
    Ok(bodies)
}

pub(super) fn load_scenario(world: &mut WorldCore, scenario: Scenario) -> Result<(), String> {
    // Resolve everything first so a failing preset leaves the world untouched
    let bodies = preset_bodies(world, scenario)?;
    let needed = u32::try_from(bodies.len()).map_err(|e| e.to_string())?;
    if world.next_id.checked_add(needed).is_none() {
        return Err("body id space exhausted".to_string());
    }

    commands::clear(world);

    let first = world.bodies.len();
    for params in bodies {
        insert_body(world, params)?;
    }

    match scenario {
        Scenario::Spring => {
            world.springs.push(Spring::new(first, first + 1, 3.0, 50.0, 0.8));
        }
        Scenario::Fluid => {
            world.settings.set(Parameter::AirResistance, 0.1)?;
        }
        _ => {}
    }

    log::info!("loaded scenario {} ({} bodies)", scenario.as_str(), world.bodies.len());
    Ok(())
}

//! Force accumulation for one body
//!
//! Order matters and is fixed: gravity overwrites the y baseline, then drag,
//! springs and attraction add on top. Everything is expressed directly as
//! acceleration (force / mass).

use crate::core::Vec3;
use crate::systems::body::{pair_mut, Body, Spring};
use crate::systems::step_config::StepConfig;

/// Bodies heavier than this pull on every other body
pub const ATTRACTOR_MIN_MASS: f32 = 5.0;
/// Coupling constant for attraction (not a physical G)
pub const ATTRACTION_STRENGTH: f32 = 0.1;
/// Attraction is skipped at separations at or below this
pub const ATTRACTION_MIN_DISTANCE: f32 = 0.1;

/// Reset `bodies[index]` and accumulate every force acting on it.
///
/// Springs touching the body also push on their other endpoint, which is
/// why this needs the whole body list.
pub fn accumulate_forces(index: usize, bodies: &mut [Body], springs: &[Spring], cfg: &StepConfig) {
    if bodies[index].fixed {
        return;
    }

    bodies[index].acceleration = Vec3::zero();
    apply_gravity(&mut bodies[index], cfg.gravity);
    apply_air_resistance(&mut bodies[index], cfg.air_resistance);

    for spring in springs.iter().filter(|s| s.touches(index)) {
        apply_spring(spring, bodies);
    }

    apply_attraction(index, bodies);
}

/// Gravity sets the y baseline (overwrite, not add)
#[inline(always)]
pub fn apply_gravity(body: &mut Body, gravity: f32) {
    body.acceleration.y = -gravity;
}

/// Quadratic drag opposite the planar velocity; z is untouched
#[inline(always)]
pub fn apply_air_resistance(body: &mut Body, air_resistance: f32) {
    let speed = body.velocity.planar_length();
    if speed <= 0.0 {
        return;
    }

    let drag = air_resistance * speed * speed;
    let drag_x = -drag * (body.velocity.x / speed);
    let drag_y = -drag * (body.velocity.y / speed);

    body.acceleration.x += drag_x / body.mass;
    body.acceleration.y += drag_y / body.mass;
}

/// Hooke force plus velocity damping on both endpoints.
///
/// Damping uses the full relative velocity vector rather than its component
/// along the spring.
pub fn apply_spring(spring: &Spring, bodies: &mut [Body]) {
    let (a, b) = pair_mut(bodies, spring.a, spring.b);

    let delta = (b.position - a.position).planar();
    let distance = delta.planar_length();
    if distance <= 0.0 {
        return;
    }

    let displacement = distance - spring.rest_length;
    let stretch = delta * (spring.stiffness * displacement / distance);
    let damping = (b.velocity - a.velocity).planar() * spring.damping;
    let force = stretch + damping;

    if !a.fixed {
        a.acceleration += force * (1.0 / a.mass);
    }
    if !b.fixed {
        b.acceleration -= force * (1.0 / b.mass);
    }
}

/// Pull from every sufficiently heavy body onto `bodies[index]`
pub fn apply_attraction(index: usize, bodies: &mut [Body]) {
    if bodies.len() < 2 {
        return;
    }

    let position = bodies[index].position;
    let mass = bodies[index].mass;
    let mut pull = Vec3::zero();

    for (j, other) in bodies.iter().enumerate() {
        if j == index || other.mass <= ATTRACTOR_MIN_MASS {
            continue;
        }

        let delta = (other.position - position).planar();
        let distance = delta.planar_length();
        if distance <= ATTRACTION_MIN_DISTANCE {
            continue;
        }

        let force = (other.mass * mass) / (distance * distance) * ATTRACTION_STRENGTH;
        pull += delta * (force / distance / mass);
    }

    bodies[index].acceleration += pull;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shapes::ShapeKind;
    use crate::systems::body::BodyParams;

    fn body(id: u32, x: f32, y: f32, mass: f32) -> Body {
        Body::new(
            id,
            BodyParams {
                shape: ShapeKind::Sphere,
                position: Vec3::xy(x, y),
                velocity: Vec3::zero(),
                size: 0.5,
                mass,
                friction: 0.5,
                restitution: 0.5,
                color: 0xFFFFFF,
                material: None,
                fixed: false,
            },
        )
    }

    fn no_drag() -> StepConfig {
        StepConfig { air_resistance: 0.0, ..StepConfig::default() }
    }

    #[test]
    fn gravity_overwrites_previous_acceleration() {
        let mut bodies = vec![body(1, 0.0, 0.0, 1.0)];
        bodies[0].acceleration = Vec3::new(4.0, -100.0, 2.0);

        accumulate_forces(0, &mut bodies, &[], &no_drag());

        assert_eq!(bodies[0].acceleration, Vec3::xy(0.0, -9.8));
    }

    #[test]
    fn drag_opposes_velocity_and_scales_with_mass() {
        let mut light = body(1, 0.0, 0.0, 1.0);
        let mut heavy = body(2, 0.0, 0.0, 4.0);
        light.velocity = Vec3::xy(3.0, 4.0);
        heavy.velocity = Vec3::xy(3.0, 4.0);

        apply_air_resistance(&mut light, 0.1);
        apply_air_resistance(&mut heavy, 0.1);

        // |v| = 5, drag = 0.1 * 25 = 2.5 along -(0.6, 0.8)
        assert!((light.acceleration.x + 1.5).abs() < 1e-5);
        assert!((light.acceleration.y + 2.0).abs() < 1e-5);
        assert!((heavy.acceleration.x * 4.0 - light.acceleration.x).abs() < 1e-5);
    }

    #[test]
    fn drag_skips_resting_body() {
        let mut b = body(1, 0.0, 0.0, 1.0);
        b.velocity = Vec3::new(0.0, 0.0, 3.0);
        apply_air_resistance(&mut b, 1.0);
        assert_eq!(b.acceleration, Vec3::zero());
    }

    #[test]
    fn stretched_spring_pulls_endpoints_together() {
        let mut bodies = vec![body(1, 0.0, 0.0, 1.0), body(2, 5.0, 0.0, 2.0)];
        let spring = Spring::new(0, 1, 3.0, 10.0, 0.0);

        apply_spring(&spring, &mut bodies);

        // force = 10 * (5 - 3) = 20
        assert!((bodies[0].acceleration.x - 20.0).abs() < 1e-4);
        assert!((bodies[1].acceleration.x + 10.0).abs() < 1e-4);
    }

    #[test]
    fn spring_damping_uses_relative_velocity() {
        let mut bodies = vec![body(1, 0.0, 0.0, 1.0), body(2, 3.0, 0.0, 1.0)];
        bodies[1].velocity = Vec3::xy(0.0, 2.0);
        let spring = Spring::new(0, 1, 3.0, 10.0, 0.5);

        apply_spring(&spring, &mut bodies);

        // at rest length only damping acts: 0.5 * (0, 2)
        assert!((bodies[0].acceleration.y - 1.0).abs() < 1e-5);
        assert!((bodies[1].acceleration.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn spring_leaves_fixed_endpoint_alone() {
        let mut bodies = vec![body(1, 0.0, 0.0, 1000.0), body(2, 0.0, -5.0, 1.0)];
        bodies[0].fixed = true;
        let spring = Spring::new(0, 1, 3.0, 50.0, 0.8);

        apply_spring(&spring, &mut bodies);

        assert_eq!(bodies[0].acceleration, Vec3::zero());
        assert!((bodies[1].acceleration.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn heavy_bodies_attract_light_ones() {
        let mut bodies = vec![body(1, 0.0, 0.0, 1.0), body(2, 2.0, 0.0, 10.0)];

        apply_attraction(0, &mut bodies);

        // (10 * 1) / 4 * 0.1 = 0.25, divided by own mass 1
        assert!((bodies[0].acceleration.x - 0.25).abs() < 1e-5);
        assert_eq!(bodies[0].acceleration.y, 0.0);

        // The light body is below the threshold and does not pull back
        apply_attraction(1, &mut bodies);
        assert_eq!(bodies[1].acceleration, Vec3::zero());
    }

    #[test]
    fn attraction_skips_near_coincident_bodies() {
        let mut bodies = vec![body(1, 0.0, 0.0, 1.0), body(2, 0.05, 0.0, 50.0)];
        apply_attraction(0, &mut bodies);
        assert_eq!(bodies[0].acceleration, Vec3::zero());
    }
}

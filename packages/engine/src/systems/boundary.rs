//! Containment in the axis-aligned boundary box
//!
//! Uses the global restitution and friction from the step config, not the
//! body's material values. Only the floor applies friction.

use crate::systems::body::Body;
use crate::systems::step_config::StepConfig;

/// Which faces a body touched this step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryContacts {
    pub floor: bool,
    pub wall: bool,
    pub ceiling: bool,
}

impl BoundaryContacts {
    pub fn any(&self) -> bool {
        self.floor || self.wall || self.ceiling
    }
}

/// Clamp the body inside the box and reflect velocity on contact.
///
/// Floor, wall and ceiling checks are independent.
pub fn resolve_boundaries(body: &mut Body, cfg: &StepConfig) -> BoundaryContacts {
    let mut contacts = BoundaryContacts::default();
    let size = body.size();
    let hw = cfg.half_width;
    let hh = cfg.half_height;

    // Floor
    if body.position.y - size < -hh {
        body.position.y = -hh + size;
        body.velocity.y = -body.velocity.y * cfg.restitution;
        body.velocity.x *= 1.0 - cfg.friction;
        contacts.floor = true;
    }

    // Walls
    if body.position.x - size < -hw {
        body.position.x = -hw + size;
        body.velocity.x = -body.velocity.x * cfg.restitution;
        contacts.wall = true;
    } else if body.position.x + size > hw {
        body.position.x = hw - size;
        body.velocity.x = -body.velocity.x * cfg.restitution;
        contacts.wall = true;
    }

    // Ceiling
    if body.position.y + size > hh {
        body.position.y = hh - size;
        body.velocity.y = -body.velocity.y * cfg.restitution;
        contacts.ceiling = true;
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;
    use crate::domain::shapes::ShapeKind;
    use crate::systems::body::BodyParams;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        Body::new(
            1,
            BodyParams {
                shape: ShapeKind::Sphere,
                position: Vec3::xy(x, y),
                velocity: Vec3::xy(vx, vy),
                size: 0.8,
                mass: 2.0,
                friction: 0.9,
                restitution: 0.9,
                color: 0,
                material: None,
                fixed: false,
            },
        )
    }

    #[test]
    fn floor_reflects_with_global_restitution_and_friction() {
        let cfg = StepConfig::default();
        let mut b = ball(0.0, -7.2, 2.0, -5.0);

        let contacts = resolve_boundaries(&mut b, &cfg);

        assert!(contacts.floor && !contacts.wall && !contacts.ceiling);
        assert!((b.position.y - (-7.5 + 0.8)).abs() < 1e-5);
        assert!((b.velocity.y - 4.0).abs() < 1e-5);
        assert!((b.velocity.x - 1.4).abs() < 1e-5);
    }

    #[test]
    fn walls_reflect_without_friction() {
        let cfg = StepConfig::default();
        let mut left = ball(-9.5, 0.0, -3.0, 1.0);
        let mut right = ball(9.5, 0.0, 3.0, 1.0);

        assert!(resolve_boundaries(&mut left, &cfg).wall);
        assert!(resolve_boundaries(&mut right, &cfg).wall);

        assert!((left.position.x + 9.2).abs() < 1e-5);
        assert!((left.velocity.x - 2.4).abs() < 1e-5);
        assert!((right.position.x - 9.2).abs() < 1e-5);
        assert!((right.velocity.x + 2.4).abs() < 1e-5);
        assert_eq!(left.velocity.y, 1.0);
    }

    #[test]
    fn ceiling_reflects() {
        let cfg = StepConfig::default();
        let mut b = ball(0.0, 7.0, 0.0, 6.0);

        let contacts = resolve_boundaries(&mut b, &cfg);

        assert!(contacts.ceiling && !contacts.floor);
        assert!((b.position.y - 6.7).abs() < 1e-5);
        assert!((b.velocity.y + 4.8).abs() < 1e-5);
    }

    #[test]
    fn corner_hits_floor_and_wall_together() {
        let cfg = StepConfig::default();
        let mut b = ball(-9.9, -7.4, -1.0, -1.0);
        let contacts = resolve_boundaries(&mut b, &cfg);
        assert!(contacts.floor && contacts.wall);
    }

    #[test]
    fn reflection_never_adds_kinetic_energy() {
        for &restitution in &[0.0f32, 0.25, 0.5, 0.8, 0.99] {
            let cfg = StepConfig { restitution, ..StepConfig::default() };
            let mut b = ball(0.0, -7.3, 0.0, -6.0);
            let before = 0.5 * b.mass * b.velocity.y * b.velocity.y;

            resolve_boundaries(&mut b, &cfg);

            let after = 0.5 * b.mass * b.velocity.y * b.velocity.y;
            assert!(after < before, "restitution {} gained energy", restitution);
        }

        let cfg = StepConfig { restitution: 1.0, ..StepConfig::default() };
        let mut b = ball(0.0, -7.3, 0.0, -6.0);
        resolve_boundaries(&mut b, &cfg);
        assert_eq!(b.velocity.y, 6.0);
    }

    #[test]
    fn inside_the_box_nothing_happens() {
        let cfg = StepConfig::default();
        let mut b = ball(1.0, 1.0, 2.0, 3.0);
        let contacts = resolve_boundaries(&mut b, &cfg);
        assert!(!contacts.any());
        assert_eq!(b.velocity, Vec3::xy(2.0, 3.0));
    }
}

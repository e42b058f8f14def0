//! Semi-implicit (symplectic) Euler
//!
//! Velocity is advanced first and the new velocity moves the position. `dt`
//! is variable: elapsed frame time × simulation speed.

use crate::systems::body::Body;

/// Advance one body by `dt`. Fixed bodies are left untouched.
#[inline]
pub fn integrate(body: &mut Body, dt: f32) {
    if body.fixed {
        return;
    }

    body.velocity += body.acceleration * dt;
    body.position += body.velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;
    use crate::domain::shapes::ShapeKind;
    use crate::systems::body::BodyParams;

    fn falling_body(fixed: bool) -> Body {
        let mut body = Body::new(
            1,
            BodyParams {
                shape: ShapeKind::Cube,
                position: Vec3::new(0.0, 10.0, 1.0),
                velocity: Vec3::new(2.0, 0.0, -1.0),
                size: 1.0,
                mass: 1.0,
                friction: 0.0,
                restitution: 0.0,
                color: 0,
                material: None,
                fixed,
            },
        );
        body.acceleration = Vec3::new(0.0, -10.0, 0.0);
        body
    }

    #[test]
    fn velocity_updates_before_position() {
        let mut body = falling_body(false);
        integrate(&mut body, 0.5);

        assert_eq!(body.velocity, Vec3::new(2.0, -5.0, -1.0));
        // position uses the new velocity: 10 + (-5 * 0.5)
        assert_eq!(body.position, Vec3::new(1.0, 7.5, 0.5));
    }

    #[test]
    fn fixed_body_does_not_move() {
        let mut body = falling_body(true);
        integrate(&mut body, 0.5);

        assert_eq!(body.velocity, Vec3::new(2.0, 0.0, -1.0));
        assert_eq!(body.position, Vec3::new(0.0, 10.0, 1.0));
    }
}

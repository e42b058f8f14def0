use crate::core::Vec3;
use crate::domain::materials::Material;
use crate::domain::shapes::{Shape, ShapeKind};

use super::trail::Trail;

/// Everything needed to create a body. Validated before the body exists.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyParams {
    pub shape: ShapeKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub size: f32,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub material: Option<String>,
    pub fixed: bool,
}

impl BodyParams {
    /// Body of `material`; mass is `size × density` unless `mass` overrides it
    pub fn from_material(
        shape: ShapeKind,
        position: Vec3,
        size: f32,
        material: &Material,
        mass: Option<f32>,
    ) -> Self {
        Self {
            shape,
            position,
            velocity: Vec3::zero(),
            size,
            mass: mass.unwrap_or_else(|| material.mass_for_size(size)),
            friction: material.friction,
            restitution: material.restitution,
            color: material.color,
            material: Some(material.key.clone()),
            fixed: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Reject anything that would break the step's numeric assumptions
    pub fn validate(&self) -> Result<(), String> {
        if !self.position.is_finite() || !self.velocity.is_finite() {
            return Err("body position and velocity must be finite".to_string());
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(format!("body size must be positive, got {}", self.size));
        }
        if !self.mass.is_finite() || self.mass < 0.0 {
            return Err(format!("body mass must be finite and non-negative, got {}", self.mass));
        }
        if !self.fixed && self.mass <= 0.0 {
            return Err("a free body needs a positive mass".to_string());
        }
        if !self.friction.is_finite() || !self.restitution.is_finite() {
            return Err("friction and restitution must be finite".to_string());
        }
        Ok(())
    }
}

/// A simulated object. Rotation is not integrated; the moment of inertia is
/// kept for the info panel.
#[derive(Clone, Debug)]
pub struct Body {
    pub id: u32,

    // === Kinematic state ===
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,

    // === Shape and material ===
    pub shape: Shape,
    pub mass: f32,
    pub moment_of_inertia: f32,
    /// Material friction. The floor uses the global value instead.
    pub friction: f32,
    /// Material restitution, used for body-body collisions
    pub restitution: f32,
    pub color: u32,
    pub material: Option<String>,

    /// Excluded from integration, infinite mass in collisions
    pub fixed: bool,

    pub trail: Trail,
}

impl Body {
    /// Build a body from already validated params
    pub fn new(id: u32, params: BodyParams) -> Self {
        let shape = Shape::new(params.shape, params.size);
        let moment_of_inertia = shape.moment_of_inertia(params.mass);

        Self {
            id,
            position: params.position,
            velocity: params.velocity,
            acceleration: Vec3::zero(),
            shape,
            mass: params.mass,
            moment_of_inertia,
            friction: params.friction,
            restitution: params.restitution,
            color: params.color,
            material: params.material,
            fixed: params.fixed,
            trail: Trail::new(),
        }
    }

    /// Collision radius
    #[inline]
    pub fn size(&self) -> f32 {
        self.shape.size()
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Potential energy measured from the floor of a box `height` tall
    pub fn potential_energy(&self, gravity: f32, height: f32) -> f32 {
        self.mass * gravity * (self.position.y + height / 2.0)
    }

    /// Apply an instantaneous force (velocity change of f/m)
    pub fn apply_force(&mut self, force: Vec3) {
        self.velocity += force * (1.0 / self.mass);
    }

    /// Zero motion state and history, keep the position
    pub fn reset_motion(&mut self) {
        self.velocity = Vec3::zero();
        self.acceleration = Vec3::zero();
        self.trail.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::materials::MaterialRegistry;

    fn rubber_params() -> BodyParams {
        let registry = MaterialRegistry::builtin();
        let rubber = registry.get("rubber").expect("builtin");
        BodyParams::from_material(ShapeKind::Sphere, Vec3::xy(1.0, 2.0), 2.0, rubber, None)
    }

    #[test]
    fn material_params_derive_mass_from_density() {
        let params = rubber_params();
        assert!((params.mass - 2.4).abs() < 1e-5);
        assert_eq!(params.restitution, 0.9);
        assert_eq!(params.material.as_deref(), Some("rubber"));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validation_rejects_broken_bodies() {
        let mut p = rubber_params();
        p.size = 0.0;
        assert!(p.validate().is_err());

        let mut p = rubber_params();
        p.mass = 0.0;
        assert!(p.validate().is_err());
        assert!(p.clone().fixed().validate().is_ok());

        let mut p = rubber_params();
        p.position.x = f32::NAN;
        assert!(p.validate().is_err());

        let mut p = rubber_params();
        p.restitution = f32::INFINITY;
        assert!(p.validate().is_err());
    }

    #[test]
    fn new_body_carries_moment_of_inertia() {
        let body = Body::new(7, rubber_params());
        assert_eq!(body.id, 7);
        assert_eq!(body.size(), 2.0);
        assert!((body.moment_of_inertia - 0.4 * 2.4 * 4.0).abs() < 1e-5);
        assert!(body.trail.is_empty());
    }

    #[test]
    fn reset_motion_keeps_position() {
        let mut body = Body::new(1, rubber_params().with_velocity(Vec3::xy(3.0, 0.0)));
        body.acceleration = Vec3::xy(0.0, -9.8);
        body.trail.push(body.position);

        body.reset_motion();

        assert_eq!(body.position, Vec3::xy(1.0, 2.0));
        assert_eq!(body.velocity, Vec3::zero());
        assert_eq!(body.acceleration, Vec3::zero());
        assert!(body.trail.is_empty());
    }
}

//! Body shapes
//!
//! Collision and force code never looks at the shape: every body is treated
//! as a circle of radius `size()`. The shape only feeds the moment of inertia
//! (display) and the renderer.

use std::str::FromStr;

pub const SHAPE_SPHERE: u8 = 0;
pub const SHAPE_CUBE: u8 = 1;
pub const SHAPE_CYLINDER: u8 = 2;

/// Shape tag without payload, used by create commands and the JS boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Cube,
    Cylinder,
}

impl ShapeKind {
    pub fn code(self) -> u8 {
        match self {
            ShapeKind::Sphere => SHAPE_SPHERE,
            ShapeKind::Cube => SHAPE_CUBE,
            ShapeKind::Cylinder => SHAPE_CYLINDER,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            SHAPE_SPHERE => Some(ShapeKind::Sphere),
            SHAPE_CUBE => Some(ShapeKind::Cube),
            SHAPE_CYLINDER => Some(ShapeKind::Cylinder),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Cylinder => "cylinder",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sphere" => Ok(ShapeKind::Sphere),
            "cube" => Ok(ShapeKind::Cube),
            "cylinder" => Ok(ShapeKind::Cylinder),
            _ => Err(format!("unknown shape: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Cube { edge: f32 },
    /// Height is always twice the radius
    Cylinder { radius: f32, height: f32 },
}

impl Shape {
    pub fn new(kind: ShapeKind, size: f32) -> Self {
        match kind {
            ShapeKind::Sphere => Shape::Sphere { radius: size },
            ShapeKind::Cube => Shape::Cube { edge: size },
            ShapeKind::Cylinder => Shape::Cylinder { radius: size, height: size * 2.0 },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Cube { .. } => ShapeKind::Cube,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
        }
    }

    /// Characteristic size; doubles as the collision radius
    pub fn size(&self) -> f32 {
        match *self {
            Shape::Sphere { radius } => radius,
            Shape::Cube { edge } => edge,
            Shape::Cylinder { radius, .. } => radius,
        }
    }

    /// Scalar moment of inertia about the center of mass
    pub fn moment_of_inertia(&self, mass: f32) -> f32 {
        match *self {
            Shape::Sphere { radius } => 0.4 * mass * radius * radius,
            Shape::Cube { edge } => mass * edge * edge / 6.0,
            Shape::Cylinder { radius, .. } => 0.5 * mass * radius * radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moment_of_inertia_per_shape() {
        let sphere = Shape::new(ShapeKind::Sphere, 2.0);
        let cube = Shape::new(ShapeKind::Cube, 2.0);
        let cylinder = Shape::new(ShapeKind::Cylinder, 2.0);

        assert!((sphere.moment_of_inertia(5.0) - 8.0).abs() < 1e-5);
        assert!((cube.moment_of_inertia(6.0) - 4.0).abs() < 1e-5);
        assert!((cylinder.moment_of_inertia(1.0) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn cylinder_height_is_twice_radius() {
        assert_eq!(
            Shape::new(ShapeKind::Cylinder, 1.5),
            Shape::Cylinder { radius: 1.5, height: 3.0 }
        );
    }

    #[test]
    fn kind_round_trips_through_codes_and_names() {
        for kind in [ShapeKind::Sphere, ShapeKind::Cube, ShapeKind::Cylinder] {
            assert_eq!(ShapeKind::from_code(kind.code()), Some(kind));
            assert_eq!(kind.as_str().parse::<ShapeKind>(), Ok(kind));
        }
        assert_eq!(ShapeKind::from_code(9), None);
        assert!("cone".parse::<ShapeKind>().is_err());
    }
}

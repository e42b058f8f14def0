//! Pairwise body-body collisions
//!
//! Brute force over every unordered pair in index order. Every body is a
//! circle of radius `size()` regardless of its shape. Resolution is
//! positional correction (half the overlap each) followed by a normal
//! impulse using the lower of the two material restitutions.

use crate::systems::audio::AudioCue;
use crate::systems::body::{pair_mut, Body};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionOutcome {
    /// Penetration depth that was corrected
    pub overlap: f32,
    /// Unscaled impulse `-(1 + e) * vn`; zero when the bodies were separating
    pub impulse: f32,
}

#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let delta = (b.position - a.position).planar();
    delta.planar_length() < a.size() + b.size()
}

/// Resolve one pair. Returns `None` when they do not touch or sit exactly on
/// top of each other (no usable normal).
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> Option<CollisionOutcome> {
    let delta = (b.position - a.position).planar();
    let distance = delta.planar_length();
    let reach = a.size() + b.size();
    if distance >= reach || distance == 0.0 {
        return None;
    }

    let normal = delta * (1.0 / distance);

    // Push apart, half the overlap each
    let overlap = reach - distance;
    let separation = normal * (overlap * 0.5);
    if !a.fixed {
        a.position -= separation;
    }
    if !b.fixed {
        b.position += separation;
    }

    if a.fixed && b.fixed {
        return Some(CollisionOutcome { overlap, impulse: 0.0 });
    }

    let normal_velocity = (b.velocity - a.velocity).planar_dot(normal);
    if normal_velocity > 0.0 {
        return Some(CollisionOutcome { overlap, impulse: 0.0 });
    }

    let restitution = a.restitution.min(b.restitution);
    let impulse = -(1.0 + restitution) * normal_velocity;
    let effective_mass = if a.fixed {
        b.mass
    } else if b.fixed {
        a.mass
    } else {
        a.mass + b.mass
    };
    let scalar = impulse / effective_mass;

    if !a.fixed {
        a.velocity -= normal * (scalar * b.mass);
    }
    if !b.fixed {
        b.velocity += normal * (scalar * a.mass);
    }

    Some(CollisionOutcome { overlap, impulse })
}

/// Resolve every overlapping pair once. Returns how many pairs collided.
pub fn resolve_collisions(bodies: &mut [Body], cues: &mut Vec<AudioCue>) -> u32 {
    let n = bodies.len();
    let mut resolved = 0u32;

    for i in 0..n {
        for j in (i + 1)..n {
            if !overlaps(&bodies[i], &bodies[j]) {
                continue;
            }
            let (a, b) = pair_mut(bodies, i, j);
            if let Some(outcome) = resolve_pair(a, b) {
                resolved += 1;
                if let Some(cue) = AudioCue::collision(outcome.impulse) {
                    cues.push(cue);
                }
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;
    use crate::domain::shapes::ShapeKind;
    use crate::systems::audio::CueKind;
    use crate::systems::body::BodyParams;

    fn ball(x: f32, vx: f32, size: f32, mass: f32, restitution: f32) -> Body {
        Body::new(
            1,
            BodyParams {
                shape: ShapeKind::Sphere,
                position: Vec3::xy(x, 0.0),
                velocity: Vec3::xy(vx, 0.0),
                size,
                mass,
                friction: 0.5,
                restitution,
                color: 0,
                material: None,
                fixed: false,
            },
        )
    }

    #[test]
    fn head_on_pair_conserves_momentum() {
        let mut a = ball(-0.9, 5.0, 1.0, 1.0, 0.9);
        let mut b = ball(1.0, -3.0, 1.2, 2.0, 0.3);
        let pa = a.velocity * a.mass;
        let pb = b.velocity * b.mass;

        let outcome = resolve_pair(&mut a, &mut b).expect("overlapping");

        let dpa = a.velocity * a.mass - pa;
        let dpb = b.velocity * b.mass - pb;
        assert!((dpa.x + dpb.x).abs() < 1e-4);
        assert!((dpa.y + dpb.y).abs() < 1e-4);
        assert!((outcome.impulse - 10.4).abs() < 1e-4);
        // e = min(0.9, 0.3) = 0.3
        assert!((a.velocity.x - (5.0 - 10.4 / 3.0 * 2.0)).abs() < 1e-4);
        assert!((b.velocity.x - (-3.0 + 10.4 / 3.0)).abs() < 1e-4);
    }

    #[test]
    fn overlap_is_split_evenly() {
        let mut a = ball(-0.5, 0.0, 1.0, 1.0, 0.5);
        let mut b = ball(0.5, 0.0, 1.0, 1.0, 0.5);

        let outcome = resolve_pair(&mut a, &mut b).expect("overlapping");

        assert!((outcome.overlap - 1.0).abs() < 1e-5);
        assert!((a.position.x + 1.0).abs() < 1e-5);
        assert!((b.position.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn separating_pair_gets_no_impulse() {
        let mut a = ball(-0.5, -1.0, 1.0, 1.0, 0.5);
        let mut b = ball(0.5, 1.0, 1.0, 1.0, 0.5);

        let outcome = resolve_pair(&mut a, &mut b).expect("overlapping");

        assert_eq!(outcome.impulse, 0.0);
        assert_eq!(a.velocity.x, -1.0);
        assert_eq!(b.velocity.x, 1.0);
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut a = ball(0.0, 1.0, 1.0, 1.0, 0.5);
        let mut b = ball(0.0, -1.0, 1.0, 1.0, 0.5);
        assert!(resolve_pair(&mut a, &mut b).is_none());
        assert_eq!(a.position, b.position);
    }

    #[test]
    fn fixed_body_is_immovable() {
        let mut wall = ball(0.0, 0.0, 1.0, 10.0, 0.5);
        wall.fixed = true;
        let mut b = ball(1.5, -2.0, 1.0, 1.0, 0.5);

        let outcome = resolve_pair(&mut wall, &mut b).expect("overlapping");

        assert_eq!(wall.position, Vec3::zero());
        assert_eq!(wall.velocity, Vec3::zero());
        assert!((b.position.x - 1.75).abs() < 1e-5);
        // M = b.mass; dv = J / 1 * wall.mass = 1.5 * 2 * 10
        assert!((outcome.impulse - 3.0).abs() < 1e-5);
        assert!((b.velocity.x - (-2.0 + 30.0)).abs() < 1e-4);
    }

    #[test]
    fn two_fixed_bodies_stay_put() {
        let mut a = ball(0.0, 0.0, 1.0, 1.0, 0.5);
        let mut b = ball(1.0, 0.0, 1.0, 1.0, 0.5);
        a.fixed = true;
        b.fixed = true;

        let outcome = resolve_pair(&mut a, &mut b).expect("overlapping");

        assert_eq!(outcome.impulse, 0.0);
        assert_eq!(a.position.x, 0.0);
        assert_eq!(b.position.x, 1.0);
    }

    #[test]
    fn resolve_collisions_counts_pairs_and_emits_cues() {
        let mut bodies = vec![
            ball(-0.9, 5.0, 1.0, 1.0, 0.9),
            ball(1.0, -3.0, 1.2, 2.0, 0.3),
            ball(8.0, 0.0, 0.5, 1.0, 0.5),
        ];
        let mut cues = Vec::new();

        let resolved = resolve_collisions(&mut bodies, &mut cues);

        assert_eq!(resolved, 1);
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].kind, CueKind::Collision);
        assert!((cues[0].frequency - 1240.0).abs() < 1e-2);
    }
}

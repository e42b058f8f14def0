use super::WorldCore;

/// Floats per body in the body buffer:
/// `id, shape, x, y, z, vx, vy, vz, ax, ay, az, size, color, fixed,
/// trail_offset, trail_len`. `trail_offset` counts points, not floats.
pub const BODY_STRIDE: usize = 16;
/// Floats per trail point (x, y, z)
pub const TRAIL_STRIDE: usize = 3;

pub(super) fn collect_render_data(world: &mut WorldCore) -> usize {
    let render = &mut world.render;
    render.bodies.clear();
    render.trails.clear();
    render.bodies.reserve(world.bodies.len() * BODY_STRIDE);

    for body in &world.bodies {
        let trail_offset = render.trails.len() / TRAIL_STRIDE;
        for p in body.trail.iter() {
            render.trails.extend_from_slice(&[p.x, p.y, p.z]);
        }

        render.bodies.extend_from_slice(&[
            body.id as f32,
            body.shape.kind().code() as f32,
            body.position.x,
            body.position.y,
            body.position.z,
            body.velocity.x,
            body.velocity.y,
            body.velocity.z,
            body.acceleration.x,
            body.acceleration.y,
            body.acceleration.z,
            body.size(),
            // 0xRRGGBB fits the f32 mantissa exactly
            body.color as f32,
            if body.fixed { 1.0 } else { 0.0 },
            trail_offset as f32,
            body.trail.len() as f32,
        ]);
    }

    world.bodies.len()
}

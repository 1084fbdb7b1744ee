//! Generic field-of-view computation.
//!
//! A cell is visible if a ray marched between it and the origin passes
//! no opaque cell strictly between the endpoints. Rays are marched in
//! both directions and either clear ray grants visibility, so the
//! relation is symmetric in the endpoints. The map is supplied as an
//! opacity oracle over `[x, y]` offsets, this crate knows nothing about
//! tile types.

/// Cells on the discrete line from `a` towards `b`, excluding `b`
/// itself.
pub fn line(a: [i32; 2], b: [i32; 2]) -> impl Iterator<Item = [i32; 2]> {
    let d = [(b[0] - a[0]).abs(), -(b[1] - a[1]).abs()];
    let step = [(b[0] - a[0]).signum(), (b[1] - a[1]).signum()];
    let mut p = a;
    let mut err = d[0] + d[1];

    std::iter::from_fn(move || {
        if p == b {
            None
        } else {
            let ret = p;

            let e2 = 2 * err;
            if e2 >= d[1] {
                err += d[1];
                p[0] += step[0];
            }
            if e2 <= d[0] {
                err += d[0];
                p[1] += step[1];
            }
            Some(ret)
        }
    })
}

/// Whether the ray marched from `a` to `b` crosses no opaque cell.
///
/// The endpoints themselves never block, an observer standing in a
/// doorway still sees out of it and an opaque target is seen as a
/// boundary.
pub fn los_clear(
    a: [i32; 2],
    b: [i32; 2],
    is_opaque: impl Fn([i32; 2]) -> bool,
) -> bool {
    line(a, b).skip(1).all(|p| !is_opaque(p))
}

/// Offsets from the origin that are visible within `radius`.
///
/// The sweep covers the Euclidean disc `dx² + dy² <= radius²`, ties at
/// the exact boundary included. An offset is visible when the marched
/// ray is clear in at least one direction. The origin itself is always
/// visible. Output order is row-major and deterministic; a zero radius
/// yields only the origin and a negative one nothing.
pub fn visible_offsets(
    radius: i32,
    is_opaque: impl Fn([i32; 2]) -> bool,
) -> Vec<[i32; 2]> {
    let mut ret = Vec::new();
    let r2 = radius * radius;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let p = [dx, dy];
            if los_clear([0, 0], p, &is_opaque)
                || los_clear(p, [0, 0], &is_opaque)
            {
                ret.push(p);
            }
        }
    }

    ret
}

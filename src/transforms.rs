//! types and constants facillitating geometry and transforms

use serde::{Deserialize, Serialize};

/// PhantomData tag used to denote the f32 logical space in which the schematic exists
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub struct SchematicSpace;

/// SchematicSpace Point
pub type SSPoint = euclid::Point2D<f32, SchematicSpace>;
/// SchematicSpace Vector
pub type SSVec = euclid::Vector2D<f32, SchematicSpace>;
/// SchematicSpace Box
pub type SSBox = euclid::Box2D<f32, SchematicSpace>;

/// node-key point - SchematicSpace quantized to whole logical units
pub type NSPoint = euclid::Point2D<i32, SchematicSpace>;

/// grid unit of the logical space
pub const GRID: f32 = 20.0;
/// tolerance for point-on-segment tests (wire junctions, terminal contacts)
pub const SEG_TOL: f32 = 5.0;
/// tolerance for terminal proximity shorts and cursor snapping
pub const CONN_TOL: f32 = 15.0;
/// tolerance for component drag snapping
pub const DRAG_TOL: f32 = 20.0;

/// rounds a scalar to the nearest multiple of [`GRID`]. Idempotent.
pub fn snap(v: f32) -> f32 {
    (v / GRID).round() * GRID
}

/// snaps both coordinates of a point to the grid
pub fn snap_point(p: SSPoint) -> SSPoint {
    SSPoint::new(snap(p.x), snap(p.y))
}

/// rotates a point about the origin, counter-clockwise positive, angle in degrees
pub fn rotate(p: SSPoint, angle_deg: f32) -> SSPoint {
    let rad = angle_deg.to_radians();
    let (sin_a, cos_a) = rad.sin_cos();
    SSPoint::new(p.x * cos_a - p.y * sin_a, p.x * sin_a + p.y * cos_a)
}

/// maps local points to world points: mirror (negate x), then rotate,
/// then translate by origin, then uniform scale of the final coordinates.
/// The order is load-bearing for rotated/mirrored symbols.
pub fn transform_points(
    local: &[SSPoint],
    origin: SSPoint,
    rotation_deg: f32,
    mirror: bool,
    scale: f32,
) -> Vec<SSPoint> {
    local
        .iter()
        .map(|p| {
            let p = if mirror { SSPoint::new(-p.x, p.y) } else { *p };
            let p = rotate(p, rotation_deg);
            SSPoint::new((p.x + origin.x) * scale, (p.y + origin.y) * scale)
        })
        .collect()
}

/// true if `p` lies within `tol` of segment `a`-`b`.
/// Rejects early via the segment's bounding box inflated by `tol`;
/// a degenerate segment degrades to a point-distance test.
pub fn point_near_segment(p: SSPoint, a: SSPoint, b: SSPoint, tol: f32) -> bool {
    let bb = SSBox::from_points([a, b]).inflate(tol, tol);
    if !bb.contains(p) {
        return false;
    }
    let len = (b - a).length();
    if len == 0.0 {
        return (p - a).length() < tol;
    }
    let cross = ((b.x - a.x) * (a.y - p.y) - (a.x - p.x) * (b.y - a.y)).abs();
    cross / len < tol
}

/// projects `p` onto segment `a`-`b`, clamping the projection parameter to [0, 1].
/// A degenerate segment returns `a`.
pub fn closest_point_on_segment(p: SSPoint, a: SSPoint, b: SSPoint) -> SSPoint {
    let l = b - a;
    let len_sq = l.square_length();
    if len_sq == 0.0 {
        return a;
    }
    let u = ((p - a).dot(l) / len_sq).clamp(0.0, 1.0);
    a + l * u
}

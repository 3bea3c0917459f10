//! wire segments, drawn by the user to connect terminals

use crate::transforms::{closest_point_on_segment, point_near_segment, SSPoint};
use serde::{Deserialize, Serialize};

/// a straight wire segment between two logical-coordinate endpoints.
/// Electrically unordered, but `src` is the designated anchor endpoint:
/// anything found touching this wire mid-span is connected to `src`,
/// not to the exact contact point.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Wire {
    pub src: SSPoint,
    pub dst: SSPoint,
}

impl Wire {
    pub fn new(src: SSPoint, dst: SSPoint) -> Self {
        Wire { src, dst }
    }

    /// true if `p` lies on this wire's segment within `tol`
    pub fn occupies(&self, p: SSPoint, tol: f32) -> bool {
        point_near_segment(p, self.src, self.dst, tol)
    }

    /// closest point of this wire's segment to `p`
    pub fn project(&self, p: SSPoint) -> SSPoint {
        closest_point_on_segment(p, self.src, self.dst)
    }

    pub fn endpoints(&self) -> [SSPoint; 2] {
        [self.src, self.dst]
    }
}

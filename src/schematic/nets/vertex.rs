//! petgraph vertices weight
//! in GraphMap, also serve as the keys

use crate::transforms::{NSPoint, SSPoint};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// a node of the connectivity graph. Keys are world coordinates quantized
/// to the nearest whole logical unit, so the same electrical point reached
/// through different transform paths lands on the same key regardless of
/// float drift. Real nodes sit at least a tolerance apart, far beyond the
/// one-unit bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct NetVertex(pub NSPoint);

impl NetVertex {
    /// quantize a world point to its node key
    pub fn from_ssp(p: SSPoint) -> Self {
        NetVertex(NSPoint::new(p.x.round() as i32, p.y.round() as i32))
    }
}

impl From<SSPoint> for NetVertex {
    fn from(p: SSPoint) -> Self {
        NetVertex::from_ssp(p)
    }
}

impl PartialOrd for NetVertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NetVertex {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0.x, self.0.y).cmp(&(other.0.x, other.0.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drifted_points_share_a_key() {
        let a = NetVertex::from_ssp(SSPoint::new(99.99998, 100.00001));
        let b = NetVertex::from_ssp(SSPoint::new(100.0, 100.0));
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_points_get_distinct_keys() {
        let a = NetVertex::from_ssp(SSPoint::new(100.0, 100.0));
        let b = NetVertex::from_ssp(SSPoint::new(120.0, 100.0));
        assert_ne!(a, b);
    }
}

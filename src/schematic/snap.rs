//! interactive snapping: cursor snap targets for wire drawing and
//! whole-component snap offsets for dragging

use crate::schematic::devices::Device;
use crate::schematic::wire::Wire;
use crate::transforms::{SSPoint, SSVec, SEG_TOL};
use log::trace;

/// best snap target for a cursor position, or None if nothing is within
/// `threshold` (caller then falls back to plain grid snapping).
///
/// Terminals and wire endpoints compete on raw distance; wire-interior
/// projections are only consulted when the best of those is not already
/// within [`SEG_TOL`] — endpoints win over mid-span landings.
pub fn find_snap_target(
    query: SSPoint,
    devices: &[Device],
    wires: &[Wire],
    threshold: f32,
) -> Option<SSPoint> {
    let mut best: Option<SSPoint> = None;
    let mut min_dist = f32::INFINITY;

    for dev in devices {
        for pt in dev.world_terminals() {
            let d = (query - pt).length();
            if d < min_dist && d < threshold {
                min_dist = d;
                best = Some(pt);
            }
        }
    }
    for wire in wires {
        for pt in wire.endpoints() {
            let d = (query - pt).length();
            if d < min_dist && d < threshold {
                min_dist = d;
                best = Some(pt);
            }
        }
    }
    if min_dist > SEG_TOL {
        for wire in wires {
            let pt = wire.project(query);
            let d = (query - pt).length();
            if d < min_dist && d < threshold {
                min_dist = d;
                best = Some(pt);
            }
        }
    }
    trace!("snap query {:?} -> {:?}", query, best);
    best
}

/// snap offset for dragging the device at `index` to the unsnapped
/// position `raw_target`: the translation making the single globally
/// closest (own terminal, other point) pair coincide, if that pair is
/// closer than `threshold`. Not a fit over multiple pairs.
pub fn find_drag_snap_offset(
    index: usize,
    raw_target: SSPoint,
    devices: &[Device],
    wires: &[Wire],
    threshold: f32,
) -> Option<SSVec> {
    let my_terms = devices[index].world_terminals_at(raw_target);

    let mut best: Option<SSVec> = None;
    let mut min_dist = f32::INFINITY;
    let mut consider = |mine: SSPoint, other: SSPoint| {
        let d = (mine - other).length();
        if d < min_dist && d < threshold {
            min_dist = d;
            best = Some(other - mine);
        }
    };

    for (oi, other) in devices.iter().enumerate() {
        if oi == index {
            continue;
        }
        for opt in other.world_terminals() {
            for &mine in &my_terms {
                consider(mine, opt);
            }
        }
    }
    for wire in wires {
        for opt in wire.endpoints() {
            for &mine in &my_terms {
                consider(mine, opt);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schematic::devices::{DesignatorPool, DeviceClass};
    use crate::transforms::{CONN_TOL, DRAG_TOL};
    use approx::assert_relative_eq;

    fn p(x: f32, y: f32) -> SSPoint {
        SSPoint::new(x, y)
    }

    fn res_at(pos: SSPoint, pool: &mut DesignatorPool) -> Device {
        let mut d = Device::new(DeviceClass::new_res(), pos, pool);
        d.pos = pos;
        d
    }

    #[test]
    fn nothing_in_range_returns_none() {
        let mut pool = DesignatorPool::new();
        let dev = res_at(p(500.0, 500.0), &mut pool);
        assert_eq!(
            find_snap_target(p(0.0, 0.0), &[dev], &[], CONN_TOL),
            None
        );
    }

    #[test]
    fn snaps_to_nearest_terminal() {
        let mut pool = DesignatorPool::new();
        // terminals at (70, 100) and (130, 100)
        let dev = res_at(p(100.0, 100.0), &mut pool);
        let got = find_snap_target(p(75.0, 103.0), &[dev], &[], CONN_TOL).unwrap();
        assert_relative_eq!(got.x, 70.0);
        assert_relative_eq!(got.y, 100.0);
    }

    #[test]
    fn snaps_to_wire_endpoint() {
        let w = Wire::new(p(0.0, 0.0), p(100.0, 0.0));
        let got = find_snap_target(p(98.0, 4.0), &[], &[w], CONN_TOL).unwrap();
        assert_eq!(got, p(100.0, 0.0));
    }

    #[test]
    fn terminal_within_seg_tol_beats_closer_interior_projection() {
        let mut pool = DesignatorPool::new();
        // terminal at (70, 100); wire runs right under the query point
        let dev = res_at(p(100.0, 100.0), &mut pool);
        let w = Wire::new(p(0.0, 104.0), p(200.0, 104.0));
        // query 4 from the terminal, 1 from the wire interior
        let got = find_snap_target(p(70.0, 103.0), &[dev], &[w], CONN_TOL).unwrap();
        assert_eq!(got, p(70.0, 100.0));
    }

    #[test]
    fn interior_projection_used_as_fallback() {
        let w = Wire::new(p(0.0, 0.0), p(200.0, 0.0));
        // far from both endpoints, 8 above the span
        let got = find_snap_target(p(100.0, 8.0), &[], &[w], CONN_TOL).unwrap();
        assert_relative_eq!(got.x, 100.0);
        assert_relative_eq!(got.y, 0.0);
    }

    #[test]
    fn drag_snap_aligns_closest_pair() {
        let mut pool = DesignatorPool::new();
        let anchor = res_at(p(100.0, 100.0), &mut pool); // terminals (70,100), (130,100)
        let dragged = res_at(p(0.0, 0.0), &mut pool);
        let devices = [anchor, dragged];
        // dragged to (173, 98): its n1 lands at (143, 98), 13.2 from (130, 100)
        let off = find_drag_snap_offset(1, p(173.0, 98.0), &devices, &[], DRAG_TOL).unwrap();
        assert_relative_eq!(off.x, -13.0);
        assert_relative_eq!(off.y, 2.0);
    }

    #[test]
    fn drag_snap_none_beyond_threshold() {
        let mut pool = DesignatorPool::new();
        let anchor = res_at(p(1000.0, 1000.0), &mut pool);
        let dragged = res_at(p(0.0, 0.0), &mut pool);
        let devices = [anchor, dragged];
        assert_eq!(
            find_drag_snap_offset(1, p(0.0, 0.0), &devices, &[], DRAG_TOL),
            None
        );
    }

    #[test]
    fn drag_snap_to_wire_endpoint() {
        let mut pool = DesignatorPool::new();
        let dragged = res_at(p(0.0, 0.0), &mut pool);
        let w = Wire::new(p(75.0, 3.0), p(300.0, 300.0));
        // n2 at (30, 0) hypothetically; wire src 45.1 away - too far at (0,0),
        // but dragging to (40, 0) puts n2 at (70, 0), 5.8 from (75, 3)
        let off = find_drag_snap_offset(0, p(40.0, 0.0), &[dragged], &[w], DRAG_TOL).unwrap();
        assert_relative_eq!(off.x, 5.0);
        assert_relative_eq!(off.y, 3.0);
    }
}

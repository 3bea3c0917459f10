//! petgraph edge weights for the connectivity graph

use serde::{Deserialize, Serialize};

/// which construction rule inserted an edge. Diagnostic only; resolution
/// treats all edges alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum EdgeKind {
    /// a wire's own span, endpoint to endpoint
    #[default]
    WireBody,
    /// a wire endpoint landing mid-span on another wire (T-junction)
    Junction,
    /// a device terminal landing on a wire's span
    Contact,
    /// two bare terminals close enough to short without a wire
    Proximity,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetEdge {
    pub kind: EdgeKind,
}

impl NetEdge {
    pub fn new(kind: EdgeKind) -> Self {
        NetEdge { kind }
    }
}

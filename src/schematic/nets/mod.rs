//! electrical connectivity: graph construction over coordinate keys and
//! connected-component resolution into named nets

mod edge;
mod vertex;

pub use edge::{EdgeKind, NetEdge};
pub use vertex::NetVertex;

use crate::schematic::devices::Device;
use crate::schematic::wire::Wire;
use crate::transforms::{point_near_segment, SSPoint, CONN_TOL, SEG_TOL};
use log::{debug, trace};
use petgraph::graphmap::GraphMap;
use std::collections::{HashMap, HashSet, VecDeque};

/// the undirected connectivity graph. Symmetric by construction; a
/// zero-length wire degenerates to a harmless self-loop.
#[derive(Debug, Clone)]
pub struct Nets(pub Box<GraphMap<NetVertex, NetEdge, petgraph::Undirected>>);

impl Default for Nets {
    fn default() -> Self {
        Nets(Box::new(GraphMap::new()))
    }
}

/// (device index, terminal index, world position) for every terminal in
/// document order. This ordering drives resolution and must stay stable.
fn terminal_points(devices: &[Device]) -> Vec<(usize, usize, SSPoint)> {
    let mut out = Vec::new();
    for (di, dev) in devices.iter().enumerate() {
        for (ti, pt) in dev.world_terminals().into_iter().enumerate() {
            out.push((di, ti, pt));
        }
    }
    out
}

impl Nets {
    fn add_edge(&mut self, a: SSPoint, b: SSPoint, kind: EdgeKind) {
        self.0
            .add_edge(NetVertex::from_ssp(a), NetVertex::from_ssp(b), NetEdge::new(kind));
    }

    /// builds the graph from scratch for one document snapshot.
    ///
    /// Edge rules, in order, all additive:
    /// 1. every wire spans its two endpoints
    /// 2. a wire endpoint on another wire's span connects to that wire's
    ///    `src` endpoint (T-junctions anchor to the other wire's start,
    ///    not the contact point)
    /// 3. a terminal on a wire's span connects to that wire's `src`
    /// 4. two terminals within the connection tolerance short directly
    pub fn build(devices: &[Device], wires: &[Wire]) -> Self {
        let mut nets = Nets::default();

        for wire in wires {
            nets.add_edge(wire.src, wire.dst, EdgeKind::WireBody);
        }

        for (i, w1) in wires.iter().enumerate() {
            for (j, w2) in wires.iter().enumerate() {
                if i == j {
                    continue;
                }
                if point_near_segment(w1.src, w2.src, w2.dst, SEG_TOL) {
                    nets.add_edge(w1.src, w2.src, EdgeKind::Junction);
                }
                if point_near_segment(w1.dst, w2.src, w2.dst, SEG_TOL) {
                    nets.add_edge(w1.dst, w2.src, EdgeKind::Junction);
                }
            }
        }

        let terminals = terminal_points(devices);
        for &(_, _, pt) in &terminals {
            for wire in wires {
                if wire.occupies(pt, SEG_TOL) {
                    nets.add_edge(pt, wire.src, EdgeKind::Contact);
                }
            }
        }

        for i in 0..terminals.len() {
            for j in (i + 1)..terminals.len() {
                let (p1, p2) = (terminals[i].2, terminals[j].2);
                if (p1 - p2).length() < CONN_TOL {
                    nets.add_edge(p1, p2, EdgeKind::Proximity);
                }
            }
        }

        debug!(
            "connectivity graph: {} nodes, {} edges",
            nets.0.node_count(),
            nets.0.edge_count()
        );
        nets
    }

    /// all keys reachable from `start`, including `start` itself
    fn flood(&self, start: NetVertex, visited: &mut HashSet<NetVertex>) -> Vec<NetVertex> {
        let mut group = vec![start];
        visited.insert(start);
        let mut queue = VecDeque::from([start]);
        while let Some(cur) = queue.pop_front() {
            if !self.0.contains_node(cur) {
                continue;
            }
            for nb in self.0.neighbors(cur) {
                if visited.insert(nb) {
                    group.push(nb);
                    queue.push_back(nb);
                }
            }
        }
        group
    }
}

/// the resolver's output: a name for every coordinate key that belongs
/// to some net
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetMap {
    map: HashMap<NetVertex, String>,
}

impl NetMap {
    /// resolved name at a world point, if the point is part of any net
    pub fn name_at(&self, p: SSPoint) -> Option<&str> {
        self.map.get(&NetVertex::from_ssp(p)).map(String::as_str)
    }

    pub fn name_at_key(&self, key: NetVertex) -> Option<&str> {
        self.map.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NetVertex, &str)> {
        self.map.iter().map(|(k, v)| (k, v.as_str()))
    }
}

/// resolves every terminal of the document into named nets.
///
/// Pure function of the inputs in their given order. Traversal starts from
/// each not-yet-visited terminal in (device order, terminal order); each
/// discovered group is named by the first net label in it, else the first
/// non-blank terminal override, else an auto name `N_<k>` counted in
/// discovery order from 1. Isolated terminals form singleton groups.
pub fn resolve_nets(devices: &[Device], wires: &[Wire]) -> NetMap {
    let nets = Nets::build(devices, wires);
    let terminals = terminal_points(devices);

    let mut visited: HashSet<NetVertex> = HashSet::new();
    let mut map: HashMap<NetVertex, String> = HashMap::new();
    let mut auto_counter = 1u32;

    for &(_, _, pt) in &terminals {
        let start = NetVertex::from_ssp(pt);
        if visited.contains(&start) {
            continue;
        }
        let group = nets.flood(start, &mut visited);
        let group_set: HashSet<NetVertex> = group.iter().copied().collect();

        let mut label: Option<&str> = None;
        let mut custom: Option<&str> = None;
        for &(di, ti, tp) in &terminals {
            if !group_set.contains(&NetVertex::from_ssp(tp)) {
                continue;
            }
            let dev = &devices[di];
            if let Some(l) = dev.net_label() {
                if label.is_none() {
                    label = Some(l);
                }
            } else if let Some(c) = dev.terminals[ti].override_name() {
                if custom.is_none() {
                    custom = Some(c);
                }
            }
        }

        let name = match label.or(custom) {
            Some(n) => n.to_string(),
            None => {
                let n = format!("N_{}", auto_counter);
                auto_counter += 1;
                n
            }
        };
        trace!("net {}: {} points", name, group.len());
        for key in group {
            map.insert(key, name.clone());
        }
    }

    NetMap { map }
}

//! device instances and their terminals, where wires go to get attached

mod devicetype;
pub mod params;

pub use devicetype::{DeviceClass, Graphics};

use crate::transforms::{snap_point, transform_points, SSPoint, SSVec};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// a named connection point at a fixed offset from its owner's origin
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Terminal {
    pub name: String,
    /// position relative to the owning device, pre-transform
    pub offset: SSVec,
    /// user-assigned net name for this terminal; blank means unset
    pub net_override: String,
}

impl Terminal {
    pub fn new(name: &str, offset: SSVec) -> Self {
        Terminal {
            name: name.to_string(),
            offset,
            net_override: String::new(),
        }
    }

    /// the override, if it carries anything beyond whitespace
    pub fn override_name(&self) -> Option<&str> {
        let trimmed = self.net_override.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// hands out per-prefix default designators, scoped to one document
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DesignatorPool {
    counts: HashMap<String, u32>,
}

impl DesignatorPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// next designator for `prefix`: "R1", "R2", ...
    pub fn next(&mut self, prefix: &str) -> String {
        let n = self.counts.entry(prefix.to_string()).or_insert(0);
        *n += 1;
        format!("{}{}", prefix, n)
    }
}

/// a placed device instance
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Device {
    pub name: String,
    pub class: DeviceClass,
    /// world position of the device origin
    pub pos: SSPoint,
    /// rotation in degrees, counter-clockwise positive
    pub rotation: f32,
    /// mirrored across the local y-axis before rotation
    pub mirror: bool,
    /// ordered, non-empty
    pub terminals: Vec<Terminal>,
}

impl Device {
    pub fn new(class: DeviceClass, pos: SSPoint, designators: &mut DesignatorPool) -> Self {
        let name = designators.next(class.prefix());
        let terminals = class.default_terminals();
        Device {
            name,
            class,
            pos: snap_point(pos),
            rotation: 0.0,
            mirror: false,
            terminals,
        }
    }

    /// the net name this device imposes on its group, if it is a net label
    pub fn net_label(&self) -> Option<&str> {
        self.class.is_net_label().then_some(self.name.as_str())
    }

    /// world positions of all terminals, recomputed from the current
    /// pos/rotation/mirror on every call. Order matches `self.terminals`.
    pub fn world_terminals(&self) -> Vec<SSPoint> {
        let local: Vec<SSPoint> = self.terminals.iter().map(|t| t.offset.to_point()).collect();
        transform_points(&local, self.pos, self.rotation, self.mirror, 1.0)
    }

    /// world positions as if the device origin sat at `pos` instead
    pub fn world_terminals_at(&self, pos: SSPoint) -> Vec<SSPoint> {
        let local: Vec<SSPoint> = self.terminals.iter().map(|t| t.offset.to_point()).collect();
        transform_points(&local, pos, self.rotation, self.mirror, 1.0)
    }

    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 90.0) % 360.0;
    }

    pub fn flip(&mut self) {
        self.mirror = !self.mirror;
    }
}

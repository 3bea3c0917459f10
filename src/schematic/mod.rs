//! the schematic document: placed devices, drawn wires, and the entry
//! points collaborators call on a snapshot of them

pub mod devices;
pub mod nets;
pub mod snap;
pub mod wire;

pub use devices::{Device, DeviceClass, DesignatorPool, Terminal};
pub use nets::{resolve_nets, NetMap, NetVertex};
pub use snap::{find_drag_snap_offset, find_snap_target};
pub use wire::Wire;

use crate::netlist::{self, Analysis, NetlistError};
use crate::transforms::{SSPoint, SSVec};
use serde::{Deserialize, Serialize};

/// one schematic document. The core treats `devices` and `wires` as an
/// immutable snapshot for the duration of each resolution or snap query.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Schematic {
    pub devices: Vec<Device>,
    pub wires: Vec<Wire>,
    pub designators: DesignatorPool,
    pub analyses: Vec<Analysis>,
}

impl Schematic {
    pub fn new() -> Self {
        Schematic {
            devices: Vec::new(),
            wires: Vec::new(),
            designators: DesignatorPool::new(),
            analyses: netlist::default_deck(),
        }
    }

    /// places a new device of `class` at `pos` (grid-snapped), naming it
    /// from this document's designator pool
    pub fn add_device(&mut self, class: DeviceClass, pos: SSPoint) -> &Device {
        let dev = Device::new(class, pos, &mut self.designators);
        self.devices.push(dev);
        self.devices.last().unwrap()
    }

    pub fn add_wire(&mut self, src: SSPoint, dst: SSPoint) {
        self.wires.push(Wire::new(src, dst));
    }

    /// resolves every terminal into named nets; see [`nets::resolve_nets`]
    pub fn resolve_nets(&self) -> NetMap {
        nets::resolve_nets(&self.devices, &self.wires)
    }

    /// best snap target for a cursor position; see [`snap::find_snap_target`]
    pub fn find_snap_target(&self, query: SSPoint, threshold: f32) -> Option<SSPoint> {
        snap::find_snap_target(query, &self.devices, &self.wires, threshold)
    }

    /// snap offset for dragging the device at `index`; see
    /// [`snap::find_drag_snap_offset`]
    pub fn find_drag_snap_offset(
        &self,
        index: usize,
        raw_target: SSPoint,
        threshold: f32,
    ) -> Option<SSVec> {
        snap::find_drag_snap_offset(index, raw_target, &self.devices, &self.wires, threshold)
    }

    /// formats the document as a netlist; see [`netlist::export`]
    pub fn netlist(&self) -> Result<String, NetlistError> {
        netlist::export(self)
    }
}

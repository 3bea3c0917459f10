//! krets - schematic capture core
//!
//! The heart of the crate is electrical connectivity resolution: given
//! placed devices (each with positioned terminals) and user-drawn wire
//! segments, decide which terminals are electrically one node and give
//! every node a deterministic name. Around that sit the geometry kernel
//! the resolver and interactive snapping both lean on, the snap engine
//! itself, and a netlist formatter consuming the resolver's output.
//!
//! Rendering, event dispatch, dialogs and persistence all live outside;
//! they talk to this crate through [`schematic::Schematic`] and the free
//! functions it delegates to.

pub mod netlist;
pub mod schematic;
pub mod transforms;

pub use schematic::Schematic;

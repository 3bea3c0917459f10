//! netlist formatting: one card per non-label device, node names from the
//! resolver, plus the document's analysis cards

use crate::schematic::devices::params::SourceFunction;
use crate::schematic::{DeviceClass, Schematic};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NetlistError {
    /// a device position, terminal offset, or wire endpoint is NaN or
    /// infinite. Callers must hand the core finite coordinates; this is
    /// the boundary where that promise is checked.
    #[error("non-finite coordinate in {0}")]
    NonFinite(String),
}

/// analysis commands of the simulation deck
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum AnalysisKind {
    Op,
    Tran,
    Dc,
    Ac,
    Tf,
    Noise,
}

impl AnalysisKind {
    pub fn card(&self) -> &'static str {
        match self {
            AnalysisKind::Op => ".OP",
            AnalysisKind::Tran => ".TRAN",
            AnalysisKind::Dc => ".DC",
            AnalysisKind::Ac => ".AC",
            AnalysisKind::Tf => ".TF",
            AnalysisKind::Noise => ".NOISE",
        }
    }
}

/// one analysis card: emitted when active, parameters kept verbatim
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Analysis {
    pub kind: AnalysisKind,
    pub params: String,
    pub active: bool,
}

impl Analysis {
    pub fn new(kind: AnalysisKind, params: &str, active: bool) -> Self {
        Analysis {
            kind,
            params: params.to_string(),
            active,
        }
    }
}

/// the default simulation deck for a fresh document: transient enabled,
/// the rest present but inactive
pub fn default_deck() -> Vec<Analysis> {
    vec![
        Analysis::new(AnalysisKind::Tran, "1n 100n", true),
        Analysis::new(AnalysisKind::Dc, "VIN 0 3.3 0.1", false),
        Analysis::new(AnalysisKind::Ac, "DEC 10 1 10k", false),
        Analysis::new(AnalysisKind::Op, "", false),
        Analysis::new(AnalysisKind::Tf, "V(out) VIN", false),
        Analysis::new(AnalysisKind::Noise, "V(out) VIN 10", false),
    ]
}

fn check_finite(sch: &Schematic) -> Result<(), NetlistError> {
    for dev in &sch.devices {
        if !dev.pos.x.is_finite() || !dev.pos.y.is_finite() || !dev.rotation.is_finite() {
            return Err(NetlistError::NonFinite(format!("device {}", dev.name)));
        }
        for t in &dev.terminals {
            if !t.offset.x.is_finite() || !t.offset.y.is_finite() {
                return Err(NetlistError::NonFinite(format!(
                    "terminal {} of {}",
                    t.name, dev.name
                )));
            }
        }
    }
    for (i, w) in sch.wires.iter().enumerate() {
        if ![w.src.x, w.src.y, w.dst.x, w.dst.y]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(NetlistError::NonFinite(format!("wire {}", i)));
        }
    }
    Ok(())
}

/// formats the whole document. Net labels are omitted (they only name
/// nets); a terminal whose point is somehow absent from the resolver's
/// map gets an `NC_<device>_<terminal>` placeholder.
pub fn export(sch: &Schematic) -> Result<String, NetlistError> {
    check_finite(sch)?;
    let node_map = sch.resolve_nets();

    let mut lines = vec!["* generated by krets".to_string(), ".OPTIONS POST".to_string()];

    for dev in &sch.devices {
        if dev.net_label().is_some() {
            continue;
        }
        let nodes: Vec<String> = dev
            .terminals
            .iter()
            .zip(dev.world_terminals())
            .map(|(t, pt)| match node_map.name_at(pt) {
                Some(n) => n.to_string(),
                None => format!("NC_{}_{}", dev.name, t.name),
            })
            .collect();
        let nodes = nodes.join(" ");

        let line = match &dev.class {
            DeviceClass::M { params, .. } => format!(
                "{} {} {} W={} L={}",
                dev.name, nodes, params.model, params.w, params.l
            ),
            DeviceClass::V(p) | DeviceClass::I(p) => {
                format!("{} {} {}", dev.name, nodes, p.card_fragment())
            }
            DeviceClass::R(raw) | DeviceClass::L(raw) | DeviceClass::C(raw) => {
                format!("{} {} {}", dev.name, nodes, raw.raw)
            }
            DeviceClass::Pin => unreachable!("net labels are skipped above"),
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("* --- Simulation Settings ---".to_string());
    for a in sch.analyses.iter().filter(|a| a.active) {
        lines.push(format!("{} {}", a.kind.card(), a.params).trim_end().to_string());
    }
    lines.push(".END".to_string());

    Ok(lines.join("\n"))
}

//! device parameter value objects, independent of any editing UI

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// raw user-entered device value, e.g. "1k", "10u"
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Raw {
    pub raw: String,
}
impl Raw {
    pub fn new(raw: String) -> Self {
        Raw { raw }
    }
}

/// mosfet parameters
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamM {
    pub model: String,
    pub w: String,
    pub l: String,
}
impl ParamM {
    pub fn new(p_type: bool) -> Self {
        ParamM {
            model: if p_type { "pch" } else { "nch" }.to_string(),
            w: "1u".to_string(),
            l: "0.18u".to_string(),
        }
    }
}

/// behavior shared by all source waveform variants
#[enum_dispatch]
pub trait SourceFunction {
    /// the value fragment appended after the node list on a netlist card
    fn card_fragment(&self) -> String;
    /// short text shown next to the symbol
    fn summary(&self) -> String;
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Dc {
    pub dc_val: String,
}
impl Default for Dc {
    fn default() -> Self {
        Dc {
            dc_val: "5".to_string(),
        }
    }
}
impl SourceFunction for Dc {
    fn card_fragment(&self) -> String {
        format!("DC {}", self.dc_val)
    }
    fn summary(&self) -> String {
        format!("DC {}", self.dc_val)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Ac {
    pub mag: String,
    pub phase: String,
}
impl Default for Ac {
    fn default() -> Self {
        Ac {
            mag: "1".to_string(),
            phase: "0".to_string(),
        }
    }
}
impl SourceFunction for Ac {
    fn card_fragment(&self) -> String {
        format!("AC {} {}", self.mag, self.phase)
    }
    fn summary(&self) -> String {
        format!("AC {}", self.mag)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Pulse {
    pub v1: String,
    pub v2: String,
    pub td: String,
    pub tr: String,
    pub tf: String,
    pub pw: String,
    pub per: String,
}
impl Default for Pulse {
    fn default() -> Self {
        Pulse {
            v1: "0".to_string(),
            v2: "5".to_string(),
            td: "0".to_string(),
            tr: "1n".to_string(),
            tf: "1n".to_string(),
            pw: "10n".to_string(),
            per: "20n".to_string(),
        }
    }
}
impl SourceFunction for Pulse {
    fn card_fragment(&self) -> String {
        format!(
            "PULSE({} {} {} {} {} {} {})",
            self.v1, self.v2, self.td, self.tr, self.tf, self.pw, self.per
        )
    }
    fn summary(&self) -> String {
        "PULSE".to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Sin {
    pub vo: String,
    pub va: String,
    pub freq: String,
    pub td: String,
    pub theta: String,
}
impl Default for Sin {
    fn default() -> Self {
        Sin {
            vo: "0".to_string(),
            va: "1".to_string(),
            freq: "1k".to_string(),
            td: "0".to_string(),
            theta: "0".to_string(),
        }
    }
}
impl SourceFunction for Sin {
    fn card_fragment(&self) -> String {
        format!(
            "SIN({} {} {} {} {})",
            self.vo, self.va, self.freq, self.td, self.theta
        )
    }
    fn summary(&self) -> String {
        "SIN".to_string()
    }
}

/// tagged variant over the source waveform parameter sets
#[enum_dispatch(SourceFunction)]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum SourceParam {
    Dc,
    Ac,
    Pulse,
    Sin,
}

impl Default for SourceParam {
    fn default() -> Self {
        SourceParam::Dc(Dc::default())
    }
}

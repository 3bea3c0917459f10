//! device classes: designator prefix, terminal layout, symbol graphics, parameters

use super::params::{ParamM, Raw, SourceFunction, SourceParam};
use super::Terminal;
use crate::transforms::{SSBox, SSPoint, SSVec};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// symbol outline as polylines in local coordinates, plus the hit bounds
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Graphics {
    pub pts: Vec<Vec<SSPoint>>,
    pub bounds: SSBox,
}

impl Graphics {
    fn bounds_centered(w: f32, h: f32) -> SSBox {
        SSBox::new(
            SSPoint::new(-w / 2.0, -h / 2.0),
            SSPoint::new(w / 2.0, h / 2.0),
        )
    }

    pub fn new_res() -> Self {
        Self {
            pts: vec![vec![
                SSPoint::new(-30.0, 0.0),
                SSPoint::new(-20.0, 0.0),
                SSPoint::new(-15.0, -10.0),
                SSPoint::new(-5.0, 10.0),
                SSPoint::new(5.0, -10.0),
                SSPoint::new(15.0, 10.0),
                SSPoint::new(20.0, 0.0),
                SSPoint::new(30.0, 0.0),
            ]],
            bounds: Self::bounds_centered(70.0, 30.0),
        }
    }

    pub fn new_ind() -> Self {
        Self {
            pts: vec![
                vec![SSPoint::new(-30.0, 0.0), SSPoint::new(-20.0, 0.0)],
                vec![SSPoint::new(20.0, 0.0), SSPoint::new(30.0, 0.0)],
                vec![
                    SSPoint::new(-20.0, 0.0),
                    SSPoint::new(-20.0, -10.0),
                    SSPoint::new(-10.0, -10.0),
                    SSPoint::new(-10.0, 0.0),
                ],
                vec![
                    SSPoint::new(-10.0, 0.0),
                    SSPoint::new(-10.0, -10.0),
                    SSPoint::new(0.0, -10.0),
                    SSPoint::new(0.0, 0.0),
                ],
                vec![
                    SSPoint::new(0.0, 0.0),
                    SSPoint::new(0.0, -10.0),
                    SSPoint::new(10.0, -10.0),
                    SSPoint::new(10.0, 0.0),
                ],
                vec![
                    SSPoint::new(10.0, 0.0),
                    SSPoint::new(10.0, -10.0),
                    SSPoint::new(20.0, -10.0),
                    SSPoint::new(20.0, 0.0),
                ],
            ],
            bounds: Self::bounds_centered(70.0, 30.0),
        }
    }

    pub fn new_cap() -> Self {
        Self {
            pts: vec![
                vec![SSPoint::new(-30.0, 0.0), SSPoint::new(-5.0, 0.0)],
                vec![SSPoint::new(5.0, 0.0), SSPoint::new(30.0, 0.0)],
                vec![SSPoint::new(-5.0, -15.0), SSPoint::new(-5.0, 15.0)],
                vec![SSPoint::new(5.0, -15.0), SSPoint::new(5.0, 15.0)],
            ],
            bounds: Self::bounds_centered(70.0, 40.0),
        }
    }

    fn source_body() -> Vec<Vec<SSPoint>> {
        // octagon standing in for the source circle, plus terminal stubs
        vec![
            vec![SSPoint::new(0.0, -20.0), SSPoint::new(0.0, -15.0)],
            vec![SSPoint::new(0.0, 15.0), SSPoint::new(0.0, 20.0)],
            vec![
                SSPoint::new(6.0, -14.0),
                SSPoint::new(14.0, -6.0),
                SSPoint::new(14.0, 6.0),
                SSPoint::new(6.0, 14.0),
                SSPoint::new(-6.0, 14.0),
                SSPoint::new(-14.0, 6.0),
                SSPoint::new(-14.0, -6.0),
                SSPoint::new(-6.0, -14.0),
                SSPoint::new(6.0, -14.0),
            ],
        ]
    }

    pub fn new_vsource() -> Self {
        let mut pts = Self::source_body();
        pts.push(vec![SSPoint::new(-3.0, -8.0), SSPoint::new(3.0, -8.0)]);
        pts.push(vec![SSPoint::new(0.0, -11.0), SSPoint::new(0.0, -5.0)]);
        pts.push(vec![SSPoint::new(-3.0, 8.0), SSPoint::new(3.0, 8.0)]);
        Self {
            pts,
            bounds: Self::bounds_centered(40.0, 40.0),
        }
    }

    pub fn new_isource() -> Self {
        let mut pts = Self::source_body();
        pts.push(vec![SSPoint::new(0.0, -8.0), SSPoint::new(0.0, 8.0)]);
        pts.push(vec![
            SSPoint::new(-4.0, 4.0),
            SSPoint::new(0.0, 8.0),
            SSPoint::new(4.0, 4.0),
        ]);
        Self {
            pts,
            bounds: Self::bounds_centered(40.0, 40.0),
        }
    }

    pub fn new_mos(p_type: bool) -> Self {
        let mut pts = vec![
            vec![SSPoint::new(-10.0, -15.0), SSPoint::new(-10.0, 15.0)],
            vec![SSPoint::new(0.0, -15.0), SSPoint::new(0.0, 15.0)],
            vec![
                SSPoint::new(0.0, -10.0),
                SSPoint::new(20.0, -10.0),
                SSPoint::new(20.0, -25.0),
            ],
            vec![
                SSPoint::new(0.0, 10.0),
                SSPoint::new(20.0, 10.0),
                SSPoint::new(20.0, 25.0),
            ],
            vec![SSPoint::new(0.0, 0.0), SSPoint::new(20.0, 0.0)],
        ];
        if p_type {
            pts.push(vec![SSPoint::new(-30.0, 0.0), SSPoint::new(-16.0, 0.0)]);
            // gate bubble
            pts.push(vec![
                SSPoint::new(-16.0, 0.0),
                SSPoint::new(-13.0, -3.0),
                SSPoint::new(-10.0, 0.0),
                SSPoint::new(-13.0, 3.0),
                SSPoint::new(-16.0, 0.0),
            ]);
            pts.push(vec![
                SSPoint::new(15.0, -5.0),
                SSPoint::new(10.0, 0.0),
                SSPoint::new(15.0, 5.0),
            ]);
        } else {
            pts.push(vec![SSPoint::new(-30.0, 0.0), SSPoint::new(-10.0, 0.0)]);
            pts.push(vec![
                SSPoint::new(5.0, -5.0),
                SSPoint::new(10.0, 0.0),
                SSPoint::new(5.0, 5.0),
            ]);
        }
        Self {
            pts,
            bounds: Self::bounds_centered(60.0, 60.0),
        }
    }

    pub fn new_pin() -> Self {
        Self {
            pts: vec![vec![SSPoint::new(-10.0, 0.0), SSPoint::new(0.0, 0.0)]],
            bounds: Self::bounds_centered(30.0, 30.0),
        }
    }
}

lazy_static! {
    static ref RES_GRAPHICS: Graphics = Graphics::new_res();
    static ref IND_GRAPHICS: Graphics = Graphics::new_ind();
    static ref CAP_GRAPHICS: Graphics = Graphics::new_cap();
    static ref VSOURCE_GRAPHICS: Graphics = Graphics::new_vsource();
    static ref ISOURCE_GRAPHICS: Graphics = Graphics::new_isource();
    static ref NMOS_GRAPHICS: Graphics = Graphics::new_mos(false);
    static ref PMOS_GRAPHICS: Graphics = Graphics::new_mos(true);
    static ref PIN_GRAPHICS: Graphics = Graphics::new_pin();
}

/// the class of a device: what it is electrically, with its parameters.
/// Net-label capability is a property of the class, decided here and
/// nowhere else.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum DeviceClass {
    R(Raw),
    L(Raw),
    C(Raw),
    M { p_type: bool, params: ParamM },
    V(SourceParam),
    I(SourceParam),
    Pin,
}

impl DeviceClass {
    pub fn new_res() -> Self {
        DeviceClass::R(Raw::new("1k".to_string()))
    }
    pub fn new_ind() -> Self {
        DeviceClass::L(Raw::new("1k".to_string()))
    }
    pub fn new_cap() -> Self {
        DeviceClass::C(Raw::new("1k".to_string()))
    }
    pub fn new_mos(p_type: bool) -> Self {
        DeviceClass::M {
            p_type,
            params: ParamM::new(p_type),
        }
    }
    pub fn new_vsource() -> Self {
        DeviceClass::V(SourceParam::default())
    }
    pub fn new_isource() -> Self {
        DeviceClass::I(SourceParam::default())
    }
    pub fn new_pin() -> Self {
        DeviceClass::Pin
    }

    /// designator prefix used for default device names
    pub fn prefix(&self) -> &'static str {
        match self {
            DeviceClass::R(_) => "R",
            DeviceClass::L(_) => "L",
            DeviceClass::C(_) => "C",
            DeviceClass::M { p_type: false, .. } => "M_N",
            DeviceClass::M { p_type: true, .. } => "M_P",
            DeviceClass::V(_) => "V",
            DeviceClass::I(_) => "I",
            DeviceClass::Pin => "PIN",
        }
    }

    /// terminal names and local offsets for a fresh instance of this class
    pub fn default_terminals(&self) -> Vec<Terminal> {
        let t = |name: &str, x: f32, y: f32| Terminal::new(name, SSVec::new(x, y));
        match self {
            DeviceClass::R(_) | DeviceClass::L(_) | DeviceClass::C(_) => {
                vec![t("n1", -30.0, 0.0), t("n2", 30.0, 0.0)]
            }
            DeviceClass::M { .. } => vec![
                t("D", 20.0, -25.0),
                t("G", -30.0, 0.0),
                t("S", 20.0, 25.0),
                t("B", 20.0, 0.0),
            ],
            DeviceClass::V(_) => vec![t("+", 0.0, -20.0), t("-", 0.0, 20.0)],
            DeviceClass::I(_) => vec![t("in", 0.0, -20.0), t("out", 0.0, 20.0)],
            DeviceClass::Pin => vec![t("pin", 0.0, 0.0)],
        }
    }

    pub fn graphics(&self) -> &'static Graphics {
        match self {
            DeviceClass::R(_) => &RES_GRAPHICS,
            DeviceClass::L(_) => &IND_GRAPHICS,
            DeviceClass::C(_) => &CAP_GRAPHICS,
            DeviceClass::M { p_type: false, .. } => &NMOS_GRAPHICS,
            DeviceClass::M { p_type: true, .. } => &PMOS_GRAPHICS,
            DeviceClass::V(_) => &VSOURCE_GRAPHICS,
            DeviceClass::I(_) => &ISOURCE_GRAPHICS,
            DeviceClass::Pin => &PIN_GRAPHICS,
        }
    }

    /// true for the class whose instances name their whole net
    pub fn is_net_label(&self) -> bool {
        matches!(self, DeviceClass::Pin)
    }

    /// short value text shown next to the symbol
    pub fn summary(&self) -> String {
        match self {
            DeviceClass::R(raw) | DeviceClass::L(raw) | DeviceClass::C(raw) => raw.raw.clone(),
            DeviceClass::M { params, .. } => params.model.clone(),
            DeviceClass::V(p) | DeviceClass::I(p) => p.summary(),
            DeviceClass::Pin => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        assert_eq!(DeviceClass::new_res().prefix(), "R");
        assert_eq!(DeviceClass::new_mos(true).prefix(), "M_P");
        assert_eq!(DeviceClass::new_mos(false).prefix(), "M_N");
        assert_eq!(DeviceClass::new_pin().prefix(), "PIN");
    }

    #[test]
    fn only_pin_is_net_label() {
        assert!(DeviceClass::new_pin().is_net_label());
        assert!(!DeviceClass::new_res().is_net_label());
        assert!(!DeviceClass::new_vsource().is_net_label());
    }

    #[test]
    fn terminal_layouts_nonempty() {
        for class in [
            DeviceClass::new_res(),
            DeviceClass::new_ind(),
            DeviceClass::new_cap(),
            DeviceClass::new_mos(false),
            DeviceClass::new_vsource(),
            DeviceClass::new_isource(),
            DeviceClass::new_pin(),
        ] {
            assert!(!class.default_terminals().is_empty());
        }
        assert_eq!(DeviceClass::new_mos(true).default_terminals().len(), 4);
    }
}

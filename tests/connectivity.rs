//! end-to-end: place devices, wire them, resolve, export

use krets::schematic::{DeviceClass, Schematic};
use krets::transforms::{SSPoint, CONN_TOL, DRAG_TOL};

fn p(x: f32, y: f32) -> SSPoint {
    SSPoint::new(x, y)
}

/// a small RC low-pass: V1 drives R1 into C1, pins name the supply,
/// input and output nets
fn rc_lowpass() -> Schematic {
    let mut sch = Schematic::new();

    // V1 at (100, 200): + at (100, 180), - at (100, 220)
    sch.add_device(DeviceClass::new_vsource(), p(100.0, 200.0));
    // R1 at (240, 120), horizontal: n1 (210, 120), n2 (270, 120)
    sch.add_device(DeviceClass::new_res(), p(240.0, 120.0));
    // C1 at (400, 200): n1 (370, 200), n2 (430, 200)
    sch.add_device(DeviceClass::new_cap(), p(400.0, 200.0));

    sch.add_device(DeviceClass::new_pin(), p(100.0, 120.0));
    sch.devices[3].name = "VIN".to_string();
    sch.add_device(DeviceClass::new_pin(), p(340.0, 120.0));
    sch.devices[4].name = "OUT".to_string();
    sch.add_device(DeviceClass::new_pin(), p(100.0, 280.0));
    sch.devices[5].name = "GND".to_string();

    // source + up to the input pin and across to R1.n1
    sch.add_wire(p(100.0, 180.0), p(100.0, 120.0));
    sch.add_wire(p(100.0, 120.0), p(210.0, 120.0));
    // R1.n2 across to the output pin and down into C1.n1
    sch.add_wire(p(270.0, 120.0), p(340.0, 120.0));
    sch.add_wire(p(340.0, 120.0), p(370.0, 200.0));
    // grounds
    sch.add_wire(p(100.0, 220.0), p(100.0, 280.0));
    sch.add_wire(p(430.0, 200.0), p(430.0, 280.0));
    sch.add_wire(p(430.0, 280.0), p(100.0, 280.0));

    sch
}

#[test]
fn rc_lowpass_nets_resolve_by_pin_names() {
    let sch = rc_lowpass();
    let map = sch.resolve_nets();

    assert_eq!(map.name_at(p(100.0, 180.0)), Some("VIN"));
    assert_eq!(map.name_at(p(210.0, 120.0)), Some("VIN"));
    assert_eq!(map.name_at(p(270.0, 120.0)), Some("OUT"));
    assert_eq!(map.name_at(p(370.0, 200.0)), Some("OUT"));
    assert_eq!(map.name_at(p(100.0, 220.0)), Some("GND"));
    assert_eq!(map.name_at(p(430.0, 200.0)), Some("GND"));
}

#[test]
fn rc_lowpass_netlist_cards() {
    let out = rc_lowpass().netlist().unwrap();
    assert!(out.contains("V1 VIN GND DC 5"), "{}", out);
    assert!(out.contains("R1 VIN OUT 1k"), "{}", out);
    assert!(out.contains("C1 OUT GND 1k"), "{}", out);
    assert!(out.contains(".TRAN 1n 100n"), "{}", out);
    assert!(out.ends_with(".END"), "{}", out);
}

#[test]
fn netlist_is_reproducible() {
    let sch = rc_lowpass();
    assert_eq!(sch.netlist().unwrap(), sch.netlist().unwrap());
}

#[test]
fn t_junction_tap_joins_mid_span() {
    let mut sch = Schematic::new();
    sch.add_device(DeviceClass::new_res(), p(240.0, 40.0)); // n1 (210, 40), n2 (270, 40)
    sch.add_device(DeviceClass::new_pin(), p(100.0, 200.0));
    sch.devices[1].name = "BUS".to_string();

    // horizontal bus through (100, 200); tap rises from its interior
    sch.add_wire(p(0.0, 200.0), p(300.0, 200.0));
    sch.add_wire(p(210.0, 200.0), p(210.0, 40.0));

    let map = sch.resolve_nets();
    assert_eq!(map.name_at(p(210.0, 40.0)), Some("BUS"));
}

#[test]
fn wire_draw_snaps_to_terminal_then_falls_back() {
    let sch = rc_lowpass();
    // near R1.n1
    let got = sch.find_snap_target(p(214.0, 117.0), CONN_TOL).unwrap();
    assert_eq!(got, p(210.0, 120.0));
    // empty region: caller grid-snaps instead
    assert_eq!(sch.find_snap_target(p(700.0, 700.0), CONN_TOL), None);
}

#[test]
fn drag_snap_pulls_capacitor_onto_wire_end() {
    let sch = rc_lowpass();
    // dragging C1 (index 2) so its n1 lands near the wire end (370, 200):
    // raw target (412, 197) puts n1 at (382, 197), 12.4 away
    let off = sch.find_drag_snap_offset(2, p(412.0, 197.0), DRAG_TOL).unwrap();
    assert!((off.x - (-12.0)).abs() < 1e-4);
    assert!((off.y - 3.0).abs() < 1e-4);
}

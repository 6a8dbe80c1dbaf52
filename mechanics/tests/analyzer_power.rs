use mechanics::{concentration_for_distance, AnalyzerSpec, GasAnalyzer, GaugeReadout, Hand, Vec3f};

#[test]
fn gauge_tiers_match_reference_readings() {
    let fills: Vec<f32> = [0.5, 5.0, 15.0].into_iter().map(concentration_for_distance).collect();
    assert_eq!(fills, vec![1.0, 0.5, 0.0]);
}

#[test]
fn long_hold_toggles_exactly_once() {
    let spec = AnalyzerSpec::default();
    let mut device = GasAnalyzer::new(&spec).expect("default spec is valid");
    device.grab(Hand::Left);

    let dt = 1.0 / 60.0;
    let mut toggles = 0;
    // Ten seconds of continuous trigger.
    for _ in 0..600 {
        if device.trigger(true, dt).is_some_and(|p| p.toggled) {
            toggles += 1;
        }
    }
    assert_eq!(toggles, 1);
    assert!(device.is_on());

    device.trigger(false, dt);
    for _ in 0..600 {
        if device.trigger(true, dt).is_some_and(|p| p.toggled) {
            toggles += 1;
        }
    }
    assert_eq!(toggles, 2);
    assert!(!device.is_on());
}

#[test]
fn powered_device_reads_nearest_zone() {
    let spec = AnalyzerSpec { hold_duration: 0.0, ..Default::default() };
    let mut device = GasAnalyzer::new(&spec).expect("valid spec");
    assert!(device.hold_trigger(0.0).toggled);

    let zones = [Vec3f::new(0.0, 0.0, 20.0), Vec3f::new(0.0, 0.0, 0.4)];
    match device.readout(Vec3f::ZERO, &zones) {
        Some(GaugeReadout::Reading { distance, fill }) => {
            assert!((distance - 0.4).abs() < 1e-6);
            assert_eq!(fill, 1.0);
        }
        other => panic!("expected a reading, got {other:?}"),
    }
}

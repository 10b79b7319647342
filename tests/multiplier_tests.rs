use rstest::rstest;
use tirepressure::multipliers::{
    option_tables, parse_factor, parse_finite, Multiplier, RideStyle, RimType, Surface,
    TireCasing, WheelDiameter, WheelPosition,
};

#[rstest]
#[case(TireCasing::Thin, 1.025)]
#[case(TireCasing::Standard, 1.0)]
#[case(TireCasing::Reinforced, 0.95)]
#[case(TireCasing::Double, 0.9)]
fn test_tire_casing(#[case] m: TireCasing, #[case] expected: f64) {
    assert_eq!(m.factor(), expected);
}

#[rstest]
#[case(RideStyle::Cross, 0.6)]
#[case(RideStyle::Gravel, 0.9)]
#[case(RideStyle::XcountryMtb, 0.9)]
#[case(RideStyle::Road, 1.0)]
#[case(RideStyle::Fat, 1.0)]
#[case(RideStyle::EnduroMtb, 1.05)]
#[case(RideStyle::TrailMtb, 1.05)]
#[case(RideStyle::DownhillMtb, 1.1)]
fn test_ride_style(#[case] m: RideStyle, #[case] expected: f64) {
    assert_eq!(m.factor(), expected);
}

#[test]
fn test_remaining_tables() {
    assert_eq!(WheelPosition::Front.factor(), 0.94);
    assert_eq!(WheelPosition::Rear.factor(), 1.0);
    assert_eq!(RimType::TubelessCrochet.factor(), 1.03);
    assert_eq!(RimType::TubelessStraightSide.factor(), 0.955);
    assert_eq!(RimType::Tubes.factor(), 1.05);
    assert_eq!(Surface::Dry.factor(), 1.0);
    assert_eq!(Surface::Snow.factor(), 0.5);
    assert_eq!(Surface::Wet.factor(), 0.9);
    assert_eq!(WheelDiameter::Iso622.factor(), 622.0);
    assert_eq!(WheelDiameter::Iso584.factor(), 584.0);
    assert_eq!(WheelDiameter::Iso571.factor(), 571.0);
}

#[rstest]
#[case(RideStyle::XcountryMtb, "XCOUNTRY_MTB")]
#[case(RideStyle::DownhillMtb, "DOWNHILL_MTB")]
fn test_display_names(#[case] m: RideStyle, #[case] expected: &str) {
    assert_eq!(m.to_string(), expected);
}

#[test]
fn test_wheel_diameter_labels() {
    assert_eq!(WheelDiameter::Iso622.to_string(), "700C");
    assert_eq!(WheelDiameter::Iso584.to_string(), "650B");
    assert_eq!(WheelDiameter::Iso571.to_string(), "650C");
}

#[rstest]
#[case("tubeless_straight_side", Ok(0.955))]
#[case("TUBES", Ok(1.05))]
#[case(" 1.2 ", Ok(1.2))]
fn test_parse_factor(#[case] input: &str, #[case] expected: Result<f64, ()>) {
    assert_eq!(parse_factor::<RimType>(input).map_err(|_| ()), expected);
}

#[test]
fn test_parse_factor_rejects_garbage() {
    let err = parse_factor::<Surface>("mud").unwrap_err();
    assert!(err.contains("DRY"), "error should list choices: {}", err);
    assert!(parse_factor::<Surface>("NaN").is_err());
    assert!(parse_factor::<Surface>("inf").is_err());
}

#[test]
fn test_label_prefers_first_preset() {
    // ROAD and FAT share a factor; the first declared wins
    assert_eq!(RideStyle::label(1.0), "ROAD (1)");
    assert_eq!(RideStyle::label(0.77), "custom (0.77)");
    assert_eq!(TireCasing::from_factor(0.95), Some(TireCasing::Reinforced));
}

#[test]
fn test_option_tables() {
    let tables = option_tables();
    let names: Vec<&str> = tables.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        vec!["ride_style", "tire_casing", "rim_type", "surface", "wheel_position", "wheel_diameter"]
    );
    let (_, rides) = &tables[0];
    assert_eq!(rides.len(), 8);
    assert_eq!(rides[0], ("CROSS".to_string(), 0.6));
}

#[rstest]
#[case("97.5", Ok(97.5))]
#[case(" 34 ", Ok(34.0))]
#[case("inf", Err(()))]
#[case("NaN", Err(()))]
#[case("heavy", Err(()))]
fn test_parse_finite(#[case] input: &str, #[case] expected: Result<f64, ()>) {
    assert_eq!(parse_finite(input).map_err(|_| ()), expected);
}

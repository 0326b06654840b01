use super::*;
use rstest::rstest;

#[test]
fn test_sample_new() {
    assert_eq!(Sample::new(0.0).map(Sample::value), Some(0.0));
    assert_eq!(Sample::new(42.5).map(Sample::value), Some(42.5));
    assert_eq!(Sample::new(100.0), None);
    assert_eq!(Sample::new(-0.5), None);
    assert_eq!(Sample::new(f64::NAN), None);
}

#[rstest]
#[case(0.0, 0.0)] // 1
#[case(0.42, 42.0)] // 2
#[case(0.105, 10.5)] // 3
#[case(0.5, 50.0)] // 4
#[case(-1.0, 0.0)] // 5
#[case(f64::NAN, 0.0)] // 6
fn test_sample_from_unit(#[case] unit: f64, #[case] expected: f64) {
    assert_eq!(Sample::from_unit(unit).value(), expected);
}

#[test]
fn test_sample_from_unit_stays_below_scale() {
    for unit in [1.0, 1.5, f64::INFINITY, UNIT_MAX] {
        let sample = Sample::from_unit(unit);
        assert!(sample.value() < SAMPLE_SCALE, "{unit} -> {}", sample.value());
        assert!(Sample::new(sample.value()).is_some());
    }
}

#[rstest]
#[case("0", 0)] // 1
#[case("1", 1)] // 2
#[case("9", 9)] // 3
#[case(" 4 ", 4)] // 4
fn test_multiplier_parse(#[case] input: &str, #[case] expected: u8) {
    assert_eq!(input.parse::<Multiplier>().unwrap().get(), expected);
}

#[rstest]
#[case("10")] // 1
#[case("-1")] // 2
#[case("x")] // 3
#[case("")] // 4
#[case("1.5")] // 5
fn test_multiplier_parse_invalid(#[case] input: &str) {
    let err = input.parse::<Multiplier>().unwrap_err();
    assert_eq!(err.value, input);
}

#[test]
fn test_multiplier_try_from() {
    assert_eq!(Multiplier::try_from(9).unwrap(), Multiplier::MAX);
    assert_eq!(Multiplier::try_from(0).unwrap(), Multiplier::MIN);
    assert_eq!(Multiplier::try_from(10).unwrap_err().value, "10");
    assert_eq!(u8::from(Multiplier::ONE), 1);
}

#[test]
fn test_multiplier_all() {
    let all = Multiplier::all().map(Multiplier::get).collect::<Vec<_>>();
    assert_eq!(all, (0..=9).collect::<Vec<u8>>());
}

#[test]
fn test_scale_matches_product() {
    for m in Multiplier::all() {
        for s in [0.0, 0.25, 1.0, 10.5, 33.3, 50.0, 99.99] {
            let sample = Sample::new(s).unwrap();
            let scaled = sample * m;
            assert_eq!(scaled.value(), s * f64::from(m.get()));
            assert!(scaled.value() >= 0.0);
        }
    }
}

#[test]
fn test_scale_by_zero() {
    for s in [0.0, 1e-9, 42.0, 77.7, 99.999] {
        assert_eq!((Sample::new(s).unwrap() * Multiplier::MIN).value(), 0.0);
    }
}

#[rstest]
#[case(42.0, "42.0")] // 1
#[case(94.5, "94.5")] // 2
#[case(0.0, "0.0")] // 3
#[case(33.25, "33.25")] // 4
#[case(1e-5, "1e-05")] // 5
#[case(0.0001, "0.0001")] // 6
#[case(2.5e-5, "2.5e-05")] // 7
#[case(1e-10, "1e-10")] // 8
fn test_display(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(Sample::new(value).unwrap().to_string(), expected);
    assert_eq!((Sample::new(value).unwrap() * Multiplier::ONE).to_string(), expected);
}

#[test]
fn test_display_exponent() {
    assert_eq!(Float(1e16).to_string(), "1e+16");
    assert_eq!(Float(1.5e300).to_string(), "1.5e+300");
    assert_eq!(Float(-2e-7).to_string(), "-2e-07");
    assert_eq!(Float(123.0).to_string(), "123.0");
}

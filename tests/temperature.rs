//! 온도 변환 규칙 회귀 테스트.
use unit_converter_toolbox::conversion::ConversionError;
use unit_converter_toolbox::registry::{ConversionRow, Registry};
use unit_converter_toolbox::units::{convert_temperature, TemperatureUnit};

fn value_of(rows: &[ConversionRow], key: &str) -> f64 {
    rows.iter()
        .find(|r| r.unit_key == key)
        .map(|r| r.value)
        .unwrap_or_else(|| panic!("missing row for unit {key}"))
}

#[test]
fn zero_celsius() {
    let registry = Registry::standard();
    let rows = registry.convert_all("temperature", "c", 0.0).unwrap();
    assert!((value_of(&rows, "f") - 32.0).abs() < 1e-9);
    assert!((value_of(&rows, "k") - 273.15).abs() < 1e-9);
    assert_eq!(value_of(&rows, "c"), 0.0);
}

#[test]
fn boiling_point_fahrenheit() {
    let registry = Registry::standard();
    let rows = registry.convert_all("temperature", "f", 212.0).unwrap();
    assert!((value_of(&rows, "c") - 100.0).abs() < 1e-9);
    assert!((value_of(&rows, "k") - 373.15).abs() < 1e-9);
}

#[test]
fn absolute_zero_kelvin() {
    let registry = Registry::standard();
    let rows = registry.convert_all("temperature", "k", 0.0).unwrap();
    assert!((value_of(&rows, "c") + 273.15).abs() < 1e-9);
    assert!((value_of(&rows, "f") + 459.67).abs() < 1e-9);
}

#[test]
fn source_row_keeps_input_value() {
    let registry = Registry::standard();
    let rows = registry.convert_all("temperature", "f", 98.6).unwrap();
    let source = rows.iter().find(|r| r.is_source).unwrap();
    assert_eq!(source.unit_key, "f");
    assert_eq!(source.value, 98.6);
}

#[test]
fn unrecognized_unit_key_is_an_error() {
    let registry = Registry::standard();
    match registry.convert_all("temperature", "r", 100.0) {
        Err(ConversionError::UnknownUnit(u)) => assert_eq!(u, "r"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn pairwise_conversion_matches_pivot_rule() {
    let f = convert_temperature(25.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert!((f - 77.0).abs() < 1e-9);
    let k = convert_temperature(-40.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin);
    assert!((k - 233.15).abs() < 1e-9);
}

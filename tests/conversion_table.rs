//! 변환 테이블(convert_all) 회귀 테스트.
use unit_converter_toolbox::conversion::{self, ConversionError};
use unit_converter_toolbox::quantity::Category;
use unit_converter_toolbox::registry::{ConversionRow, Registry};

fn value_of(rows: &[ConversionRow], key: &str) -> f64 {
    rows.iter()
        .find(|r| r.unit_key == key)
        .map(|r| r.value)
        .unwrap_or_else(|| panic!("missing row for unit {key}"))
}

#[test]
fn length_from_meter() {
    let registry = Registry::standard();
    let rows = registry.convert_all("length", "m", 1.0).unwrap();
    assert!((value_of(&rows, "cm") - 100.0).abs() < 1e-9);
    assert!((value_of(&rows, "mm") - 1000.0).abs() < 1e-9);
    assert!((value_of(&rows, "km") - 0.001).abs() < 1e-12);
}

#[test]
fn weight_from_kilogram() {
    let registry = Registry::standard();
    let rows = registry.convert_all("weight", "kg", 1.0).unwrap();
    assert!((value_of(&rows, "g") - 1000.0).abs() < 1e-9);
    assert!((value_of(&rows, "lb") - 2.20462).abs() < 1e-4);
}

#[test]
fn pressure_from_atm_and_bar() {
    let registry = Registry::standard();
    let rows = registry.convert_all("pressure", "atm", 1.0).unwrap();
    assert!((value_of(&rows, "bar") - 1.01325).abs() < 1e-9);

    let rows = registry.convert_all("pressure", "bar", 1.0).unwrap();
    assert!((value_of(&rows, "pa") - 100_000.0).abs() < 1e-5);
    // mmHg와 Torr는 같은 배율을 쓰므로 결과도 같아야 한다.
    assert!((value_of(&rows, "mmhg") - value_of(&rows, "torr")).abs() < 1e-9);
}

#[test]
fn volume_from_gallon() {
    let registry = Registry::standard();
    let rows = registry.convert_all("volume", "gal", 1.0).unwrap();
    assert!((value_of(&rows, "l") - 3.78541).abs() < 1e-9);
    assert!((value_of(&rows, "ml") - 3785.41).abs() < 1e-6);
}

#[test]
fn area_from_hectare() {
    let registry = Registry::standard();
    let rows = registry.convert_all("area", "ha", 1.0).unwrap();
    assert!((value_of(&rows, "m2") - 10_000.0).abs() < 1e-6);
    assert!((value_of(&rows, "km2") - 0.01).abs() < 1e-12);
}

#[test]
fn source_row_is_unique_and_exact() {
    let registry = Registry::standard();
    let value = 123.456;
    for def in registry.categories() {
        let units = registry.units(def.category.key()).unwrap();
        let rows = registry
            .convert_all(def.category.key(), units[0].key, value)
            .unwrap();
        let sources: Vec<&ConversionRow> = rows.iter().filter(|r| r.is_source).collect();
        assert_eq!(sources.len(), 1, "category {}", def.category.key());
        assert_eq!(sources[0].unit_key, units[0].key);
        // 원본 행은 재계산 없이 입력값 그대로여야 한다.
        assert_eq!(sources[0].value, value);
    }
}

#[test]
fn rows_follow_declared_unit_order() {
    let registry = Registry::standard();
    for def in registry.categories() {
        let units = registry.units(def.category.key()).unwrap();
        let rows = registry
            .convert_all(def.category.key(), units[0].key, 1.0)
            .unwrap();
        assert_eq!(rows.len(), units.len());
        for (row, unit) in rows.iter().zip(units.iter()) {
            assert_eq!(row.unit_key, unit.key);
            assert_eq!(row.label_key, unit.label_key);
        }
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let registry = Registry::standard();
    match registry.convert_all("speed", "m", 1.0) {
        Err(ConversionError::UnknownCategory(c)) => assert_eq!(c, "speed"),
        other => panic!("unexpected result: {other:?}"),
    }
    match registry.convert_all("length", "furlong", 1.0) {
        Err(ConversionError::UnknownUnit(u)) => assert_eq!(u, "furlong"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(registry.units("speed").is_err());
}

#[test]
fn pairwise_convert_accepts_aliases() {
    let cat = conversion::parse_category("massa").unwrap();
    assert_eq!(cat, Category::Weight);
    let cm = conversion::convert(Category::Length, 1.0, "metro", "cm").unwrap();
    assert!((cm - 100.0).abs() < 1e-9);
    assert!(conversion::convert(Category::Length, 1.0, "m", "parsec").is_err());
}

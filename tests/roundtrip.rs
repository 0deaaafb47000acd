//! 선형 카테고리의 왕복 변환 항등성 테스트.
use unit_converter_toolbox::registry::Registry;

#[test]
fn linear_categories_round_trip() {
    let registry = Registry::standard();
    let value = 123.456;
    for category in ["pressure", "length", "weight", "volume", "area"] {
        let units = registry.units(category).unwrap();
        for from in &units {
            let rows = registry.convert_all(category, from.key, value).unwrap();
            for row in &rows {
                let back = registry.convert_all(category, row.unit_key, row.value).unwrap();
                let restored = back.iter().find(|r| r.unit_key == from.key).unwrap();
                assert!(
                    ((restored.value - value) / value).abs() < 1e-9,
                    "{category}: {} -> {} -> {} drifted to {}",
                    from.key,
                    row.unit_key,
                    from.key,
                    restored.value
                );
            }
        }
    }
}

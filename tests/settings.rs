//! 설정 직렬화와 언어 결정 로직 테스트.
use unit_converter_toolbox::config::Config;
use unit_converter_toolbox::i18n::{resolve_language, Language, Translator};
use unit_converter_toolbox::quantity::Category;

#[test]
fn config_toml_round_trip() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed.language, "auto");
    assert_eq!(parsed.precision, 2);
    assert_eq!(parsed.default_category, Category::Pressure);
    assert_eq!(parsed.default_units.key_for(Category::Weight), "kg");
    assert_eq!(parsed.default_units.key_for(Category::Temperature), "c");
}

#[test]
fn language_resolution_prefers_cli_then_config() {
    assert_eq!(resolve_language("pt", None), "pt-br");
    assert_eq!(resolve_language("en-uk", Some("pt-br")), "en-us");
    assert_eq!(resolve_language("auto", Some("en-us")), "en-us");
    assert_eq!(resolve_language("xx", Some("pt-br")), "pt-br");
}

#[test]
fn translator_falls_back_to_portuguese() {
    let pt = Translator::new("pt-br");
    assert_eq!(pt.language(), Language::Pt);
    assert_eq!(pt.t("category.weight"), "Massa");

    let en = Translator::new("en-us");
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.t("category.weight"), "Mass");
    assert_eq!(en.t("unit.length.m"), "Meter (m)");
}

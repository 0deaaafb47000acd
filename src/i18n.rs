use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERTER: &str = "main_menu.converter";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CONVERTER_HEADING: &str = "converter.heading";
    pub const CONVERTER_PROMPT_CATEGORY: &str = "converter.prompt_category";
    pub const CONVERTER_PROMPT_FROM_UNIT: &str = "converter.prompt_from_unit";
    pub const CONVERTER_PROMPT_VALUE: &str = "converter.prompt_value";
    pub const CONVERTER_PROMPT_PRECISION: &str = "converter.prompt_precision";
    pub const CONVERTER_TABLE_UNIT: &str = "converter.table_unit";
    pub const CONVERTER_TABLE_VALUE: &str = "converter.table_value";
    pub const CONVERTER_SOURCE_MARKER: &str = "converter.source_marker";
    pub const CONVERTER_INFO_INITIAL: &str = "converter.info_initial";
    pub const CONVERTER_INFO_CATEGORY_CHANGED: &str = "converter.info_category_changed";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_PRECISION: &str = "settings.current_precision";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_PRECISION: &str = "settings.prompt_precision";
    pub const SETTINGS_LANG_RESTART: &str = "settings.lang_restart";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_INVALID: &str = "settings.invalid";

    pub const GUI_HEADING: &str = "gui.heading";
    pub const GUI_TIP: &str = "gui.tip";
    pub const GUI_CATEGORY: &str = "gui.category";
    pub const GUI_FROM_UNIT: &str = "gui.from_unit";
    pub const GUI_VALUE: &str = "gui.value";
    pub const GUI_PRECISION: &str = "gui.precision";
    pub const GUI_CONVERT: &str = "gui.convert";
    pub const GUI_SETTINGS_TITLE: &str = "gui.settings.title";
    pub const GUI_SETTINGS_LANG: &str = "gui.settings.lang";
    pub const GUI_SETTINGS_SAVE: &str = "gui.settings.save";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Pt
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Pt => "pt-br",
            Language::En => "en-us",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(pt-br/en-us)에 따라 번역기를 생성한다. 알 수 없는 코드는 pt로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 포르투갈어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pt-br".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "pt" | "pt-br" => Some("pt-br".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("pt") => Some("pt-br".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "pt" => Some("pt-br".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// 포르투갈어 기본 문자열 테이블.
fn pt(key: &str) -> &'static str {
    match key {
        "general.error_prefix" => "Erro",
        "general.app_exit" => "Encerrando. Até logo.",

        "main_menu.title" => "=== Conversor de Unidades ===",
        "main_menu.converter" => "Converter unidades",
        "main_menu.settings" => "Configurações",
        "main_menu.exit" => "Sair",
        "prompt.menu_select" => "Seleção do menu: ",
        "error.invalid_selection_retry" => "Entrada inválida. Selecione novamente.",

        "converter.heading" => "-- Conversão de Unidades --",
        "converter.prompt_category" => "Número da categoria: ",
        "converter.prompt_from_unit" => "Número da unidade de origem: ",
        "converter.prompt_value" => "Valor: ",
        "converter.prompt_precision" => "Casas decimais (0-10, Enter = padrão): ",
        "converter.table_unit" => "Unidade",
        "converter.table_value" => "Valor",
        "converter.source_marker" => "← (valor original)",
        "converter.info_initial" => "Selecione uma categoria, insira um valor e clique em Converter",
        "converter.info_category_changed" => "Categoria alterada. Insira um valor e clique em Converter",

        "error.invalid_number" => "Por favor, insira um valor numérico válido",

        "settings.heading" => "-- Configurações --",
        "settings.current_language" => "Idioma atual",
        "settings.current_precision" => "Casas decimais padrão",
        "settings.prompt_change" => "1) Idioma  2) Casas decimais  (Enter cancela): ",
        "settings.prompt_language" => "Idioma (auto/pt-br/en-us): ",
        "settings.prompt_precision" => "Casas decimais (0-10): ",
        "settings.lang_restart" => "O idioma será aplicado na próxima execução.",
        "settings.saved" => "Configurações salvas.",
        "settings.invalid" => "Entrada inválida; nada foi alterado.",

        "gui.heading" => "Conversor de Unidades",
        "gui.tip" => "Converta um valor para todas as unidades da categoria.",
        "gui.category" => "Categoria",
        "gui.from_unit" => "Unidade de origem",
        "gui.value" => "Valor",
        "gui.precision" => "Casas decimais",
        "gui.convert" => "Converter",
        "gui.settings.title" => "Configurações",
        "gui.settings.lang" => "Idioma",
        "gui.settings.save" => "Salvar configurações",

        "category.pressure" => "Pressão",
        "category.length" => "Comprimento",
        "category.weight" => "Massa",
        "category.temperature" => "Temperatura",
        "category.volume" => "Volume",
        "category.area" => "Área",

        "unit.pressure.bar" => "BAR",
        "unit.pressure.pa" => "Pascal (Pa)",
        "unit.pressure.kpa" => "Kilopascal (kPa)",
        "unit.pressure.mpa" => "Megapascal (MPa)",
        "unit.pressure.psi" => "PSI",
        "unit.pressure.atm" => "Atmosfera (atm)",
        "unit.pressure.mmhg" => "Milímetro de Mercúrio (mmHg)",
        "unit.pressure.torr" => "Torr",

        "unit.length.m" => "Metro (m)",
        "unit.length.km" => "Quilômetro (km)",
        "unit.length.cm" => "Centímetro (cm)",
        "unit.length.mm" => "Milímetro (mm)",
        "unit.length.mi" => "Milha (mi)",
        "unit.length.yd" => "Jarda (yd)",
        "unit.length.ft" => "Pé (ft)",
        "unit.length.in" => "Polegada (in)",

        "unit.weight.kg" => "Quilograma (kg)",
        "unit.weight.g" => "Grama (g)",
        "unit.weight.mg" => "Miligrama (mg)",
        "unit.weight.t" => "Tonelada (t)",
        "unit.weight.lb" => "Libra (lb)",
        "unit.weight.oz" => "Onça (oz)",

        "unit.temperature.c" => "Celsius (°C)",
        "unit.temperature.f" => "Fahrenheit (°F)",
        "unit.temperature.k" => "Kelvin (K)",

        "unit.volume.l" => "Litro (L)",
        "unit.volume.ml" => "Mililitro (mL)",
        "unit.volume.m3" => "Metro Cúbico (m³)",
        "unit.volume.cm3" => "Centímetro Cúbico (cm³)",
        "unit.volume.gal" => "Galão (gal)",
        "unit.volume.qt" => "Quarto (qt)",
        "unit.volume.pt" => "Pint (pt)",
        "unit.volume.cup" => "Xícara (cup)",

        "unit.area.m2" => "Metro Quadrado (m²)",
        "unit.area.km2" => "Quilômetro Quadrado (km²)",
        "unit.area.cm2" => "Centímetro Quadrado (cm²)",
        "unit.area.ha" => "Hectare (ha)",
        "unit.area.acre" => "Acre",
        "unit.area.ft2" => "Pé Quadrado (ft²)",

        _ => "?",
    }
}

/// 영어 오버레이 테이블. 없는 키는 None을 돌려 pt 폴백을 태운다.
fn en(key: &str) -> Option<&'static str> {
    let s = match key {
        "general.error_prefix" => "Error",
        "general.app_exit" => "Exiting. Goodbye.",

        "main_menu.title" => "=== Unit Converter ===",
        "main_menu.converter" => "Convert units",
        "main_menu.settings" => "Settings",
        "main_menu.exit" => "Exit",
        "prompt.menu_select" => "Menu selection: ",
        "error.invalid_selection_retry" => "Invalid input. Please select again.",

        "converter.heading" => "-- Unit Conversion --",
        "converter.prompt_category" => "Category number: ",
        "converter.prompt_from_unit" => "Source unit number: ",
        "converter.prompt_value" => "Value: ",
        "converter.prompt_precision" => "Decimal places (0-10, Enter = default): ",
        "converter.table_unit" => "Unit",
        "converter.table_value" => "Value",
        "converter.source_marker" => "← (original value)",
        "converter.info_initial" => "Select a category, enter a value and press Convert",
        "converter.info_category_changed" => "Category changed. Enter a value and press Convert",

        "error.invalid_number" => "Please enter a valid numeric value",

        "settings.heading" => "-- Settings --",
        "settings.current_language" => "Current language",
        "settings.current_precision" => "Default decimal places",
        "settings.prompt_change" => "1) Language  2) Decimal places  (Enter cancels): ",
        "settings.prompt_language" => "Language (auto/pt-br/en-us): ",
        "settings.prompt_precision" => "Decimal places (0-10): ",
        "settings.lang_restart" => "Language takes effect on next start.",
        "settings.saved" => "Settings saved.",
        "settings.invalid" => "Invalid input; nothing changed.",

        "gui.heading" => "Unit Converter",
        "gui.tip" => "Convert a value to every unit in the category.",
        "gui.category" => "Category",
        "gui.from_unit" => "Source unit",
        "gui.value" => "Value",
        "gui.precision" => "Decimal places",
        "gui.convert" => "Convert",
        "gui.settings.title" => "Settings",
        "gui.settings.lang" => "Language",
        "gui.settings.save" => "Save settings",

        "category.pressure" => "Pressure",
        "category.length" => "Length",
        "category.weight" => "Mass",
        "category.temperature" => "Temperature",
        "category.volume" => "Volume",
        "category.area" => "Area",

        "unit.pressure.bar" => "BAR",
        "unit.pressure.pa" => "Pascal (Pa)",
        "unit.pressure.kpa" => "Kilopascal (kPa)",
        "unit.pressure.mpa" => "Megapascal (MPa)",
        "unit.pressure.psi" => "PSI",
        "unit.pressure.atm" => "Atmosphere (atm)",
        "unit.pressure.mmhg" => "Millimeter of Mercury (mmHg)",
        "unit.pressure.torr" => "Torr",

        "unit.length.m" => "Meter (m)",
        "unit.length.km" => "Kilometer (km)",
        "unit.length.cm" => "Centimeter (cm)",
        "unit.length.mm" => "Millimeter (mm)",
        "unit.length.mi" => "Mile (mi)",
        "unit.length.yd" => "Yard (yd)",
        "unit.length.ft" => "Foot (ft)",
        "unit.length.in" => "Inch (in)",

        "unit.weight.kg" => "Kilogram (kg)",
        "unit.weight.g" => "Gram (g)",
        "unit.weight.mg" => "Milligram (mg)",
        "unit.weight.t" => "Tonne (t)",
        "unit.weight.lb" => "Pound (lb)",
        "unit.weight.oz" => "Ounce (oz)",

        "unit.temperature.c" => "Celsius (°C)",
        "unit.temperature.f" => "Fahrenheit (°F)",
        "unit.temperature.k" => "Kelvin (K)",

        "unit.volume.l" => "Liter (L)",
        "unit.volume.ml" => "Milliliter (mL)",
        "unit.volume.m3" => "Cubic Meter (m³)",
        "unit.volume.cm3" => "Cubic Centimeter (cm³)",
        "unit.volume.gal" => "Gallon (gal)",
        "unit.volume.qt" => "Quart (qt)",
        "unit.volume.pt" => "Pint (pt)",
        "unit.volume.cup" => "Cup (cup)",

        "unit.area.m2" => "Square Meter (m²)",
        "unit.area.km2" => "Square Kilometer (km²)",
        "unit.area.cm2" => "Square Centimeter (cm²)",
        "unit.area.ha" => "Hectare (ha)",
        "unit.area.acre" => "Acre",
        "unit.area.ft2" => "Square Foot (ft²)",

        _ => return None,
    };
    Some(s)
}

use crate::quantity::Category;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 카테고리 키
    UnknownCategory(String),
    /// 알 수 없는 단위 키
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownCategory(c) => write!(f, "categoria desconhecida: {c}"),
            ConversionError::UnknownUnit(u) => write!(f, "unidade desconhecida: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열 키를 카테고리로 해석한다. 포르투갈어/영어 별칭을 함께 허용한다.
pub fn parse_category(s: &str) -> Result<Category, ConversionError> {
    match s.to_lowercase().as_str() {
        "pressure" | "pressao" | "pressão" => Ok(Category::Pressure),
        "length" | "comprimento" => Ok(Category::Length),
        "weight" | "mass" | "massa" => Ok(Category::Weight),
        "temperature" | "temperatura" => Ok(Category::Temperature),
        "volume" => Ok(Category::Volume),
        "area" | "área" => Ok(Category::Area),
        _ => Err(ConversionError::UnknownCategory(s.to_string())),
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `bar`, `kpa`, `m`, `c`, `gal`, `ft2` 등 레지스트리 키를
/// 사용하며, 철자로 풀어 쓴 별칭도 일부 허용한다.
pub fn convert(
    category: Category,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match category {
        Category::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        Category::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        Category::Weight => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        Category::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        Category::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        Category::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "bar" => Ok(PressureUnit::Bar),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "psi" => Ok(PressureUnit::Psi),
        "atm" | "atmosfera" | "atmosphere" => Ok(PressureUnit::Atm),
        "mmhg" => Ok(PressureUnit::MmHg),
        "torr" => Ok(PressureUnit::Torr),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metro" => Ok(LengthUnit::Meter),
        "km" => Ok(LengthUnit::Kilometer),
        "cm" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        "mi" | "mile" | "milha" => Ok(LengthUnit::Mile),
        "yd" | "yard" | "jarda" => Ok(LengthUnit::Yard),
        "ft" | "foot" | "pé" | "pe" => Ok(LengthUnit::Foot),
        "in" | "inch" | "polegada" => Ok(LengthUnit::Inch),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "g" | "gram" | "grama" => Ok(MassUnit::Gram),
        "mg" => Ok(MassUnit::Milligram),
        "t" | "ton" | "tonelada" => Ok(MassUnit::Tonne),
        "lb" | "lbs" | "libra" => Ok(MassUnit::Pound),
        "oz" | "onça" | "onca" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "l" | "liter" | "litro" => Ok(VolumeUnit::Liter),
        "ml" => Ok(VolumeUnit::Milliliter),
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "cm3" | "cm^3" => Ok(VolumeUnit::CubicCentimeter),
        "gal" | "galão" | "galao" => Ok(VolumeUnit::Gallon),
        "qt" => Ok(VolumeUnit::Quart),
        "pt" => Ok(VolumeUnit::Pint),
        "cup" | "xícara" | "xicara" => Ok(VolumeUnit::Cup),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2" | "m^2" => Ok(AreaUnit::SquareMeter),
        "km2" | "km^2" => Ok(AreaUnit::SquareKilometer),
        "cm2" | "cm^2" => Ok(AreaUnit::SquareCentimeter),
        "ha" | "hectare" => Ok(AreaUnit::Hectare),
        "acre" => Ok(AreaUnit::Acre),
        "ft2" | "ft^2" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::quantity::Category;
use crate::units::*;

/// 허용하는 최대 소수점 자리수.
pub const MAX_PRECISION: u8 = 10;

/// 각 카테고리별 기본 입력 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub pressure: PressureUnit,
    pub length: LengthUnit,
    pub weight: MassUnit,
    pub temperature: TemperatureUnit,
    pub volume: VolumeUnit,
    pub area: AreaUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::Bar,
            length: LengthUnit::Meter,
            weight: MassUnit::Kilogram,
            temperature: TemperatureUnit::Celsius,
            volume: VolumeUnit::Liter,
            area: AreaUnit::SquareMeter,
        }
    }
}

impl DefaultUnits {
    /// 카테고리의 기본 입력 단위 키를 돌려준다.
    pub fn key_for(&self, category: Category) -> &'static str {
        match category {
            Category::Pressure => self.pressure.key(),
            Category::Length => self.length.key(),
            Category::Weight => self.weight.key(),
            Category::Temperature => self.temperature.key(),
            Category::Volume => self.volume.key(),
            Category::Area => self.area.key(),
        }
    }
}

/// 애플리케이션 설정을 표현한다. 입력한 값 자체는 저장하지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: String,
    pub precision: u8,
    pub default_category: Category,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            precision: 2,
            default_category: Category::Pressure,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "erro de E/S de arquivo: {e}"),
            ConfigError::Serde(e) => write!(f, "erro ao interpretar a configuração: {e}"),
            ConfigError::Serialize(e) => write!(f, "erro ao serializar a configuração: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.precision = cfg.precision.min(MAX_PRECISION);
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}

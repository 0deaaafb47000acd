use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다. 배율이 아닌 전용 규칙으로 변환한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// 화면 표시 순서를 그대로 보존한 전체 목록.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// 레지스트리 키.
    pub fn key(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "c",
            TemperatureUnit::Fahrenheit => "f",
            TemperatureUnit::Kelvin => "k",
        }
    }

    /// 번역 테이블의 표시 이름 키.
    pub fn label_key(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "unit.temperature.c",
            TemperatureUnit::Fahrenheit => "unit.temperature.f",
            TemperatureUnit::Kelvin => "unit.temperature.k",
        }
    }
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - 273.15,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => value_c + 273.15,
    }
}

/// 온도를 서로 다른 단위로 변환한다. 섭씨를 중간 기준으로 쓴다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let c = to_celsius(value, from);
    from_celsius(c, to)
}

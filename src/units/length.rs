use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
}

impl LengthUnit {
    /// 화면 표시 순서를 그대로 보존한 전체 목록.
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Mile,
        LengthUnit::Yard,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    /// 레지스트리 키.
    pub fn key(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Mile => "mi",
            LengthUnit::Yard => "yd",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        }
    }

    /// 번역 테이블의 표시 이름 키.
    pub fn label_key(self) -> &'static str {
        match self {
            LengthUnit::Meter => "unit.length.m",
            LengthUnit::Kilometer => "unit.length.km",
            LengthUnit::Centimeter => "unit.length.cm",
            LengthUnit::Millimeter => "unit.length.mm",
            LengthUnit::Mile => "unit.length.mi",
            LengthUnit::Yard => "unit.length.yd",
            LengthUnit::Foot => "unit.length.ft",
            LengthUnit::Inch => "unit.length.in",
        }
    }

    /// 이 단위 1을 미터로 환산하는 배율.
    pub fn to_base(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Mile => 1609.34,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    value * unit.to_base()
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    value_m / unit.to_base()
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}

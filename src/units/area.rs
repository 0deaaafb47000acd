use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareKilometer,
    SquareCentimeter,
    Hectare,
    Acre,
    SquareFoot,
}

impl AreaUnit {
    /// 화면 표시 순서를 그대로 보존한 전체 목록.
    pub const ALL: [AreaUnit; 6] = [
        AreaUnit::SquareMeter,
        AreaUnit::SquareKilometer,
        AreaUnit::SquareCentimeter,
        AreaUnit::Hectare,
        AreaUnit::Acre,
        AreaUnit::SquareFoot,
    ];

    /// 레지스트리 키.
    pub fn key(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m2",
            AreaUnit::SquareKilometer => "km2",
            AreaUnit::SquareCentimeter => "cm2",
            AreaUnit::Hectare => "ha",
            AreaUnit::Acre => "acre",
            AreaUnit::SquareFoot => "ft2",
        }
    }

    /// 번역 테이블의 표시 이름 키.
    pub fn label_key(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "unit.area.m2",
            AreaUnit::SquareKilometer => "unit.area.km2",
            AreaUnit::SquareCentimeter => "unit.area.cm2",
            AreaUnit::Hectare => "unit.area.ha",
            AreaUnit::Acre => "unit.area.acre",
            AreaUnit::SquareFoot => "unit.area.ft2",
        }
    }

    /// 이 단위 1을 제곱미터로 환산하는 배율.
    pub fn to_base(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareKilometer => 1_000_000.0,
            AreaUnit::SquareCentimeter => 0.0001,
            AreaUnit::Hectare => 10_000.0,
            AreaUnit::Acre => 4046.86,
            AreaUnit::SquareFoot => 0.092903,
        }
    }
}

fn to_square_meter(value: f64, unit: AreaUnit) -> f64 {
    value * unit.to_base()
}

fn from_square_meter(value_m2: f64, unit: AreaUnit) -> f64 {
    value_m2 / unit.to_base()
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let m2 = to_square_meter(value, from);
    from_square_meter(m2, to)
}

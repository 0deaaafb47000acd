use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Milligram,
    Tonne,
    Pound,
    Ounce,
}

impl MassUnit {
    /// 화면 표시 순서를 그대로 보존한 전체 목록.
    pub const ALL: [MassUnit; 6] = [
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Milligram,
        MassUnit::Tonne,
        MassUnit::Pound,
        MassUnit::Ounce,
    ];

    /// 레지스트리 키.
    pub fn key(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Milligram => "mg",
            MassUnit::Tonne => "t",
            MassUnit::Pound => "lb",
            MassUnit::Ounce => "oz",
        }
    }

    /// 번역 테이블의 표시 이름 키.
    pub fn label_key(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "unit.weight.kg",
            MassUnit::Gram => "unit.weight.g",
            MassUnit::Milligram => "unit.weight.mg",
            MassUnit::Tonne => "unit.weight.t",
            MassUnit::Pound => "unit.weight.lb",
            MassUnit::Ounce => "unit.weight.oz",
        }
    }

    /// 이 단위 1을 kg으로 환산하는 배율.
    pub fn to_base(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 0.001,
            MassUnit::Milligram => 0.000001,
            MassUnit::Tonne => 1000.0,
            MassUnit::Pound => 0.453592,
            MassUnit::Ounce => 0.0283495,
        }
    }
}

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    value * unit.to_base()
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    value / unit.to_base()
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}

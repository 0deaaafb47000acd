use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 bar이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    Pascal,
    KiloPascal,
    MegaPascal,
    Psi,
    Atm,
    MmHg,
    Torr,
}

impl PressureUnit {
    /// 화면 표시 순서를 그대로 보존한 전체 목록.
    pub const ALL: [PressureUnit; 8] = [
        PressureUnit::Bar,
        PressureUnit::Pascal,
        PressureUnit::KiloPascal,
        PressureUnit::MegaPascal,
        PressureUnit::Psi,
        PressureUnit::Atm,
        PressureUnit::MmHg,
        PressureUnit::Torr,
    ];

    /// 레지스트리 키.
    pub fn key(self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Pascal => "pa",
            PressureUnit::KiloPascal => "kpa",
            PressureUnit::MegaPascal => "mpa",
            PressureUnit::Psi => "psi",
            PressureUnit::Atm => "atm",
            PressureUnit::MmHg => "mmhg",
            PressureUnit::Torr => "torr",
        }
    }

    /// 번역 테이블의 표시 이름 키.
    pub fn label_key(self) -> &'static str {
        match self {
            PressureUnit::Bar => "unit.pressure.bar",
            PressureUnit::Pascal => "unit.pressure.pa",
            PressureUnit::KiloPascal => "unit.pressure.kpa",
            PressureUnit::MegaPascal => "unit.pressure.mpa",
            PressureUnit::Psi => "unit.pressure.psi",
            PressureUnit::Atm => "unit.pressure.atm",
            PressureUnit::MmHg => "unit.pressure.mmhg",
            PressureUnit::Torr => "unit.pressure.torr",
        }
    }

    /// 이 단위 1을 bar로 환산하는 배율.
    pub fn to_base(self) -> f64 {
        match self {
            PressureUnit::Bar => 1.0,
            PressureUnit::Pascal => 0.00001,
            PressureUnit::KiloPascal => 0.01,
            PressureUnit::MegaPascal => 10.0,
            PressureUnit::Psi => 0.0689476,
            PressureUnit::Atm => 1.01325,
            PressureUnit::MmHg => 0.00133322,
            PressureUnit::Torr => 0.00133322,
        }
    }
}

fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    value * unit.to_base()
}

fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    value_bar / unit.to_base()
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let bar = to_bar(value, from);
    from_bar(bar, to)
}

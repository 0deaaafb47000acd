use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
    CubicCentimeter,
    Gallon,
    Quart,
    Pint,
    Cup,
}

impl VolumeUnit {
    /// 화면 표시 순서를 그대로 보존한 전체 목록.
    pub const ALL: [VolumeUnit; 8] = [
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::CubicMeter,
        VolumeUnit::CubicCentimeter,
        VolumeUnit::Gallon,
        VolumeUnit::Quart,
        VolumeUnit::Pint,
        VolumeUnit::Cup,
    ];

    /// 레지스트리 키.
    pub fn key(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "l",
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::CubicCentimeter => "cm3",
            VolumeUnit::Gallon => "gal",
            VolumeUnit::Quart => "qt",
            VolumeUnit::Pint => "pt",
            VolumeUnit::Cup => "cup",
        }
    }

    /// 번역 테이블의 표시 이름 키.
    pub fn label_key(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "unit.volume.l",
            VolumeUnit::Milliliter => "unit.volume.ml",
            VolumeUnit::CubicMeter => "unit.volume.m3",
            VolumeUnit::CubicCentimeter => "unit.volume.cm3",
            VolumeUnit::Gallon => "unit.volume.gal",
            VolumeUnit::Quart => "unit.volume.qt",
            VolumeUnit::Pint => "unit.volume.pt",
            VolumeUnit::Cup => "unit.volume.cup",
        }
    }

    /// 이 단위 1을 리터로 환산하는 배율.
    pub fn to_base(self) -> f64 {
        match self {
            VolumeUnit::Liter => 1.0,
            VolumeUnit::Milliliter => 0.001,
            VolumeUnit::CubicMeter => 1000.0,
            VolumeUnit::CubicCentimeter => 0.001,
            VolumeUnit::Gallon => 3.78541,
            VolumeUnit::Quart => 0.946353,
            VolumeUnit::Pint => 0.473176,
            VolumeUnit::Cup => 0.236588,
        }
    }
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    value * unit.to_base()
}

fn from_liter(value_l: f64, unit: VolumeUnit) -> f64 {
    value_l / unit.to_base()
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let l = to_liter(value, from);
    from_liter(l, to)
}

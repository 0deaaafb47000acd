use serde::{Deserialize, Serialize};

/// 다루는 변환 카테고리를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Pressure,
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
}

impl Category {
    /// 화면 표시 순서를 그대로 보존한 전체 카테고리 목록.
    pub const ALL: [Category; 6] = [
        Category::Pressure,
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Area,
    ];

    /// 레지스트리 키. 질량 카테고리는 역사적 이유로 `weight` 키를 쓴다.
    pub fn key(self) -> &'static str {
        match self {
            Category::Pressure => "pressure",
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Area => "area",
        }
    }

    /// 번역 테이블에서 표시 이름을 찾을 때 쓰는 키.
    pub fn label_key(self) -> &'static str {
        match self {
            Category::Pressure => "category.pressure",
            Category::Length => "category.length",
            Category::Weight => "category.weight",
            Category::Temperature => "category.temperature",
            Category::Volume => "category.volume",
            Category::Area => "category.area",
        }
    }
}

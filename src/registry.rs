use crate::conversion::ConversionError;
use crate::quantity::Category;
use crate::units::{
    temperature, AreaUnit, LengthUnit, MassUnit, PressureUnit, TemperatureUnit, VolumeUnit,
};

/// 선형 카테고리 단위 한 개의 메타데이터. `to_base`는 기준 단위 환산 배율이다.
#[derive(Debug, Clone, Copy)]
pub struct LinearUnit {
    pub key: &'static str,
    pub label_key: &'static str,
    pub to_base: f64,
}

/// 온도 카테고리 단위 한 개의 메타데이터. 배율 없이 전용 규칙으로 변환한다.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureRow {
    pub key: &'static str,
    pub label_key: &'static str,
    pub unit: TemperatureUnit,
}

/// 카테고리별 변환 규칙. 선형 배율 테이블 또는 온도 전용 규칙 중 하나다.
#[derive(Debug, Clone)]
pub enum CategoryRule {
    Linear(Vec<LinearUnit>),
    Temperature(Vec<TemperatureRow>),
}

/// 카테고리 한 개의 정의. 단위 목록은 선언 순서 = 표시 순서이다.
#[derive(Debug, Clone)]
pub struct CategoryDef {
    pub category: Category,
    pub label_key: &'static str,
    pub rule: CategoryRule,
}

impl CategoryDef {
    /// 단위 키/표시 이름 키 목록을 선언 순서대로 돌려준다.
    pub fn unit_list(&self) -> Vec<UnitInfo> {
        match &self.rule {
            CategoryRule::Linear(units) => units
                .iter()
                .map(|u| UnitInfo {
                    key: u.key,
                    label_key: u.label_key,
                })
                .collect(),
            CategoryRule::Temperature(units) => units
                .iter()
                .map(|u| UnitInfo {
                    key: u.key,
                    label_key: u.label_key,
                })
                .collect(),
        }
    }
}

/// 선택 컨트롤 채우기에 쓰는 단위 요약.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInfo {
    pub key: &'static str,
    pub label_key: &'static str,
}

/// 변환 결과 한 줄. `is_source`는 입력 단위에 해당하는 행에만 참이다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRow {
    pub unit_key: &'static str,
    pub label_key: &'static str,
    pub value: f64,
    pub is_source: bool,
}

/// 카테고리/단위 메타데이터 레지스트리.
///
/// 시작 시 한 번 만들어 읽기 전용으로 공유한다. 전역 상태가 아니라 호출자가
/// 명시적으로 들고 다니므로 테스트에서 독립 인스턴스를 쓸 수 있다.
#[derive(Debug, Clone)]
pub struct Registry {
    categories: Vec<CategoryDef>,
}

impl Registry {
    /// 기본 카테고리 여섯 종으로 레지스트리를 구성한다.
    pub fn standard() -> Self {
        let categories = Category::ALL
            .iter()
            .map(|&category| CategoryDef {
                category,
                label_key: category.label_key(),
                rule: rule_for(category),
            })
            .collect();
        Self { categories }
    }

    /// 선언 순서대로 카테고리 정의를 돌려준다.
    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    /// 카테고리 키로 정의를 찾는다.
    pub fn category(&self, key: &str) -> Result<&CategoryDef, ConversionError> {
        self.categories
            .iter()
            .find(|c| c.category.key() == key)
            .ok_or_else(|| ConversionError::UnknownCategory(key.to_string()))
    }

    /// 카테고리의 단위 목록을 선언 순서대로 돌려준다.
    pub fn units(&self, category_key: &str) -> Result<Vec<UnitInfo>, ConversionError> {
        Ok(self.category(category_key)?.unit_list())
    }

    /// 입력값을 카테고리의 모든 단위로 환산한 행 목록을 돌려준다.
    ///
    /// 행 순서는 단위 선언 순서를 그대로 따르고, 입력 단위에 해당하는 행은
    /// 값을 재계산하지 않고 원본 그대로 담는다. 키 조회가 실패하면 행을 하나도
    /// 만들지 않고 오류를 돌려준다.
    pub fn convert_all(
        &self,
        category_key: &str,
        from_unit_key: &str,
        value: f64,
    ) -> Result<Vec<ConversionRow>, ConversionError> {
        let def = self.category(category_key)?;
        match &def.rule {
            CategoryRule::Linear(units) => {
                let from = units
                    .iter()
                    .find(|u| u.key == from_unit_key)
                    .ok_or_else(|| ConversionError::UnknownUnit(from_unit_key.to_string()))?;
                let base = value * from.to_base;
                Ok(units
                    .iter()
                    .map(|u| {
                        let is_source = u.key == from.key;
                        ConversionRow {
                            unit_key: u.key,
                            label_key: u.label_key,
                            value: if is_source { value } else { base / u.to_base },
                            is_source,
                        }
                    })
                    .collect())
            }
            CategoryRule::Temperature(units) => {
                let from = units
                    .iter()
                    .find(|u| u.key == from_unit_key)
                    .ok_or_else(|| ConversionError::UnknownUnit(from_unit_key.to_string()))?
                    .unit;
                let celsius = temperature::to_celsius(value, from);
                Ok(units
                    .iter()
                    .map(|u| {
                        let is_source = u.unit == from;
                        ConversionRow {
                            unit_key: u.key,
                            label_key: u.label_key,
                            value: if is_source {
                                value
                            } else {
                                temperature::from_celsius(celsius, u.unit)
                            },
                            is_source,
                        }
                    })
                    .collect())
            }
        }
    }
}

fn rule_for(category: Category) -> CategoryRule {
    match category {
        Category::Pressure => CategoryRule::Linear(
            PressureUnit::ALL
                .iter()
                .map(|u| LinearUnit {
                    key: u.key(),
                    label_key: u.label_key(),
                    to_base: u.to_base(),
                })
                .collect(),
        ),
        Category::Length => CategoryRule::Linear(
            LengthUnit::ALL
                .iter()
                .map(|u| LinearUnit {
                    key: u.key(),
                    label_key: u.label_key(),
                    to_base: u.to_base(),
                })
                .collect(),
        ),
        Category::Weight => CategoryRule::Linear(
            MassUnit::ALL
                .iter()
                .map(|u| LinearUnit {
                    key: u.key(),
                    label_key: u.label_key(),
                    to_base: u.to_base(),
                })
                .collect(),
        ),
        Category::Temperature => CategoryRule::Temperature(
            TemperatureUnit::ALL
                .iter()
                .map(|&unit| TemperatureRow {
                    key: unit.key(),
                    label_key: unit.label_key(),
                    unit,
                })
                .collect(),
        ),
        Category::Volume => CategoryRule::Linear(
            VolumeUnit::ALL
                .iter()
                .map(|u| LinearUnit {
                    key: u.key(),
                    label_key: u.label_key(),
                    to_base: u.to_base(),
                })
                .collect(),
        ),
        Category::Area => CategoryRule::Linear(
            AreaUnit::ALL
                .iter()
                .map(|u| LinearUnit {
                    key: u.key(),
                    label_key: u.label_key(),
                    to_base: u.to_base(),
                })
                .collect(),
        ),
    }
}

use crate::category::Category;
use crate::i18n::keys;
use crate::units::{convert_length, convert_volume, convert_weight, LengthUnit, VolumeUnit, WeightUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// From/To 단위가 선택되지 않음
    MissingSelection,
    /// 입력 값이 비어 있거나 숫자가 아님
    InvalidInput,
    /// 두 단위가 같은 카테고리에 속하지 않음
    IncompatibleUnits,
}

impl ConvertError {
    /// 사용자 알림 문자열의 i18n 키. 미선택과 잘못된 값은 같은 알림을 공유한다.
    pub fn alert_key(self) -> &'static str {
        match self {
            ConvertError::MissingSelection | ConvertError::InvalidInput => {
                keys::ALERT_FILL_ALL_FIELDS
            }
            ConvertError::IncompatibleUnits => keys::ALERT_INCOMPATIBLE_UNITS,
        }
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::MissingSelection => write!(f, "단위가 선택되지 않았습니다"),
            ConvertError::InvalidInput => write!(f, "입력 값이 숫자가 아닙니다"),
            ConvertError::IncompatibleUnits => write!(f, "호환되지 않는 단위 종류입니다"),
        }
    }
}

impl std::error::Error for ConvertError {}

fn category_contains(category: Category, label: &str) -> bool {
    match category {
        Category::Length => LengthUnit::from_label(label).is_some(),
        Category::Weight => WeightUnit::from_label(label).is_some(),
        Category::Volume => VolumeUnit::from_label(label).is_some(),
    }
}

/// 두 라벨이 함께 속하는 카테고리를 찾는다.
///
/// 고정 순서(길이, 무게, 부피)로 탐색하여 첫 일치를 반환한다. 한쪽이
/// 모르는 라벨이거나 서로 다른 카테고리면 None.
pub fn resolve_category(from_label: &str, to_label: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|c| category_contains(*c, from_label) && category_contains(*c, to_label))
}

/// 라벨로 전달된 두 단위 사이에서 값을 변환한다.
pub fn convert(value: f64, from_label: &str, to_label: &str) -> Result<f64, ConvertError> {
    let category = resolve_category(from_label, to_label).ok_or(ConvertError::IncompatibleUnits)?;
    match category {
        Category::Length => {
            let from = LengthUnit::from_label(from_label).ok_or(ConvertError::IncompatibleUnits)?;
            let to = LengthUnit::from_label(to_label).ok_or(ConvertError::IncompatibleUnits)?;
            Ok(convert_length(value, from, to))
        }
        Category::Weight => {
            let from = WeightUnit::from_label(from_label).ok_or(ConvertError::IncompatibleUnits)?;
            let to = WeightUnit::from_label(to_label).ok_or(ConvertError::IncompatibleUnits)?;
            Ok(convert_weight(value, from, to))
        }
        Category::Volume => {
            let from = VolumeUnit::from_label(from_label).ok_or(ConvertError::IncompatibleUnits)?;
            let to = VolumeUnit::from_label(to_label).ok_or(ConvertError::IncompatibleUnits)?;
            Ok(convert_volume(value, from, to))
        }
    }
}

/// 카테고리의 선택 메뉴 라벨 목록.
pub fn selectable_labels(category: Category) -> Vec<&'static str> {
    match category {
        Category::Length => LengthUnit::SELECTABLE.iter().map(|u| u.label()).collect(),
        Category::Weight => WeightUnit::SELECTABLE.iter().map(|u| u.label()).collect(),
        Category::Volume => VolumeUnit::SELECTABLE.iter().map(|u| u.label()).collect(),
    }
}

/// 무게 단위. 내부 기준은 그램이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Gram,
    Kilogram,
    Ounce,
    Pound,
}

impl WeightUnit {
    /// 환산표 전체. 카테고리 판별과 라벨 해석의 기준이 된다.
    pub const ALL: [WeightUnit; 4] = [
        WeightUnit::Gram,
        WeightUnit::Kilogram,
        WeightUnit::Ounce,
        WeightUnit::Pound,
    ];

    /// 선택 메뉴에 노출되는 단위.
    pub const SELECTABLE: [WeightUnit; 4] = WeightUnit::ALL;

    /// 화면에 표시되는 단위 라벨.
    pub fn label(self) -> &'static str {
        match self {
            WeightUnit::Gram => "Grams (g)",
            WeightUnit::Kilogram => "Kilograms (kg)",
            WeightUnit::Ounce => "Ounces (oz)",
            WeightUnit::Pound => "Pounds (lb)",
        }
    }

    /// 1 단위가 몇 g인지 반환한다.
    pub fn scale_g(self) -> f64 {
        match self {
            WeightUnit::Gram => 1.0,
            WeightUnit::Kilogram => 1000.0,
            WeightUnit::Ounce => 28.3495,
            WeightUnit::Pound => 453.592,
        }
    }

    /// 라벨 문자열을 단위로 해석한다. 모르는 라벨이면 None.
    pub fn from_label(label: &str) -> Option<WeightUnit> {
        WeightUnit::ALL.into_iter().find(|u| u.label() == label)
    }
}

fn to_grams(value: f64, unit: WeightUnit) -> f64 {
    value * unit.scale_g()
}

fn from_grams(value_g: f64, unit: WeightUnit) -> f64 {
    value_g / unit.scale_g()
}

/// 무게를 다른 단위로 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    let g = to_grams(value, from);
    from_grams(g, to)
}

/// 부피 단위. 내부 기준은 밀리리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    FluidOunce,
    Cup,
    Pint,
    Quart,
    Gallon,
}

impl VolumeUnit {
    /// 환산표 전체. 카테고리 판별과 라벨 해석의 기준이 된다.
    pub const ALL: [VolumeUnit; 7] = [
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
        VolumeUnit::FluidOunce,
        VolumeUnit::Cup,
        VolumeUnit::Pint,
        VolumeUnit::Quart,
        VolumeUnit::Gallon,
    ];

    /// 선택 메뉴에 노출되는 단위.
    pub const SELECTABLE: [VolumeUnit; 7] = VolumeUnit::ALL;

    /// 화면에 표시되는 단위 라벨.
    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "Milliliters (ml)",
            VolumeUnit::Liter => "Liters (l)",
            VolumeUnit::FluidOunce => "Fluid Ounces (fl oz)",
            VolumeUnit::Cup => "Cups (cup)",
            VolumeUnit::Pint => "Pints (pt)",
            VolumeUnit::Quart => "Quarts (qt)",
            VolumeUnit::Gallon => "Gallons (gal)",
        }
    }

    /// 1 단위가 몇 ml인지 반환한다.
    pub fn scale_ml(self) -> f64 {
        match self {
            VolumeUnit::Milliliter => 1.0,
            VolumeUnit::Liter => 1000.0,
            VolumeUnit::FluidOunce => 29.5753,
            VolumeUnit::Cup => 240.0,
            VolumeUnit::Pint => 473.176,
            VolumeUnit::Quart => 946.353,
            // US 갤런의 정확값은 3785.41 ml이지만 기존 환산표와의 호환을 위해
            // 반올림된 배율을 유지한다.
            VolumeUnit::Gallon => 3785.0,
        }
    }

    /// 라벨 문자열을 단위로 해석한다. 모르는 라벨이면 None.
    pub fn from_label(label: &str) -> Option<VolumeUnit> {
        VolumeUnit::ALL.into_iter().find(|u| u.label() == label)
    }
}

fn to_milliliters(value: f64, unit: VolumeUnit) -> f64 {
    value * unit.scale_ml()
}

fn from_milliliters(value_ml: f64, unit: VolumeUnit) -> f64 {
    value_ml / unit.scale_ml()
}

/// 부피를 다른 단위로 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    let ml = to_milliliters(value, from);
    from_milliliters(ml, to)
}

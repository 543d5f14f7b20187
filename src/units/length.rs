/// 길이 단위. 내부 기준은 밀리미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    /// 환산표 전체. 카테고리 판별과 라벨 해석의 기준이 된다.
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    /// 선택 메뉴에 노출되는 단위. Yard는 환산표에만 있고 메뉴에는 없다.
    pub const SELECTABLE: [LengthUnit; 7] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Mile,
    ];

    /// 화면에 표시되는 단위 라벨.
    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "Millimeters (mm)",
            LengthUnit::Centimeter => "Centimeters (cm)",
            LengthUnit::Meter => "Meters (m)",
            LengthUnit::Kilometer => "Kilometers (km)",
            LengthUnit::Inch => "Inches (in)",
            LengthUnit::Foot => "Feet (ft)",
            LengthUnit::Yard => "Yards (yd)",
            LengthUnit::Mile => "Miles (mi)",
        }
    }

    /// 1 단위가 몇 mm인지 반환한다.
    pub fn scale_mm(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Centimeter => 10.0,
            LengthUnit::Meter => 1000.0,
            LengthUnit::Kilometer => 1_000_000.0,
            LengthUnit::Inch => 25.4,
            LengthUnit::Foot => 304.8,
            LengthUnit::Yard => 914.4,
            LengthUnit::Mile => 1_609_344.0,
        }
    }

    /// 라벨 문자열을 단위로 해석한다. 모르는 라벨이면 None.
    pub fn from_label(label: &str) -> Option<LengthUnit> {
        LengthUnit::ALL.into_iter().find(|u| u.label() == label)
    }
}

fn to_millimeters(value: f64, unit: LengthUnit) -> f64 {
    value * unit.scale_mm()
}

fn from_millimeters(value_mm: f64, unit: LengthUnit) -> f64 {
    value_mm / unit.scale_mm()
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    let mm = to_millimeters(value, from);
    from_millimeters(mm, to)
}

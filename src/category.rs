/// 다루는 측정 카테고리를 나타낸다.
///
/// 단위 환산은 항상 같은 카테고리 안에서만 성립하며, 각 카테고리는
/// 배율 1의 기준 단위(길이=mm, 무게=g, 부피=ml)를 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Length,
    Weight,
    Volume,
}

impl Category {
    /// 카테고리 판별 시 사용하는 고정 탐색 순서.
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Volume];

    /// 해당 카테고리의 기준 단위 표기.
    pub fn base_unit(self) -> &'static str {
        match self {
            Category::Length => "mm",
            Category::Weight => "g",
            Category::Volume => "ml",
        }
    }
}

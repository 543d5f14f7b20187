use crate::conversion::{self, ConvertError};

/// 변환 폼의 상태 레코드.
///
/// 핸들러는 기존 상태를 바꾸지 않고 새 상태를 반환한다. 단위는 화면
/// 라벨 문자열 그대로 보관하며 빈 문자열은 미선택을 뜻한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// 입력 값의 원본 문자열
    pub value: String,
    /// From 단위 라벨
    pub from_unit: String,
    /// To 단위 라벨
    pub to_unit: String,
    /// 마지막으로 성공한 변환 결과
    pub result: Option<f64>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 값 입력 핸들러.
    pub fn set_value(&self, value: &str) -> FormState {
        FormState {
            value: value.to_string(),
            ..self.clone()
        }
    }

    /// From 단위 선택 핸들러.
    pub fn set_from_unit(&self, label: &str) -> FormState {
        FormState {
            from_unit: label.to_string(),
            ..self.clone()
        }
    }

    /// To 단위 선택 핸들러.
    pub fn set_to_unit(&self, label: &str) -> FormState {
        FormState {
            to_unit: label.to_string(),
            ..self.clone()
        }
    }

    /// 변환 실행 핸들러. 다음 상태와 알림용 오류를 돌려준다.
    ///
    /// 검사 순서는 단위 선택, 값 해석, 카테고리 판별이다. 어느 단계든
    /// 실패하면 결과는 None으로 접힌다.
    pub fn convert(&self) -> (FormState, Option<ConvertError>) {
        let mut next = self.clone();
        if self.from_unit.is_empty() || self.to_unit.is_empty() {
            next.result = None;
            return (next, Some(ConvertError::MissingSelection));
        }
        let value = match self.value.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                next.result = None;
                return (next, Some(ConvertError::InvalidInput));
            }
        };
        match conversion::convert(value, &self.from_unit, &self.to_unit) {
            Ok(converted) => {
                next.result = Some(converted);
                (next, None)
            }
            Err(err) => {
                next.result = None;
                (next, Some(err))
            }
        }
    }

    /// 결과 표시 문자열. 소수점 둘째 자리까지, 결과가 없으면 "0".
    pub fn result_text(&self) -> String {
        match self.result {
            Some(v) => format!("{v:.2}"),
            None => "0".to_string(),
        }
    }
}

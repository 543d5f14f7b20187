//! 변환 폼 상태 전이와 알림 회귀 테스트.

use unit_converter::conversion::ConvertError;
use unit_converter::form::FormState;
use unit_converter::i18n::Translator;

#[test]
fn handlers_return_new_state_without_touching_old() {
    let initial = FormState::new();
    let with_value = initial.set_value("42");
    assert_eq!(initial.value, "");
    assert_eq!(with_value.value, "42");

    let with_from = with_value.set_from_unit("Meters (m)");
    assert_eq!(with_value.from_unit, "");
    assert_eq!(with_from.from_unit, "Meters (m)");
}

#[test]
fn millimeters_to_meters_shows_two_decimals() {
    let form = FormState::new()
        .set_value("1000")
        .set_from_unit("Millimeters (mm)")
        .set_to_unit("Meters (m)");
    let (form, alert) = form.convert();
    assert!(alert.is_none());
    assert_eq!(form.result, Some(1.0));
    assert_eq!(form.result_text(), "1.00");
}

#[test]
fn kilograms_to_pounds_rounds_to_two_decimals() {
    let form = FormState::new()
        .set_value("1")
        .set_from_unit("Kilograms (kg)")
        .set_to_unit("Pounds (lb)");
    let (form, alert) = form.convert();
    assert!(alert.is_none());
    assert_eq!(form.result_text(), "2.20");
}

#[test]
fn missing_from_unit_gives_missing_selection() {
    let form = FormState::new()
        .set_value("5")
        .set_to_unit("Meters (m)");
    let (form, alert) = form.convert();
    assert_eq!(alert, Some(ConvertError::MissingSelection));
    assert_eq!(form.result, None);
    assert_eq!(form.result_text(), "0");
}

#[test]
fn missing_to_unit_gives_missing_selection() {
    let form = FormState::new()
        .set_value("5")
        .set_from_unit("Meters (m)");
    let (_, alert) = form.convert();
    assert_eq!(alert, Some(ConvertError::MissingSelection));
}

#[test]
fn empty_value_with_units_selected_is_invalid_input() {
    let form = FormState::new()
        .set_from_unit("Meters (m)")
        .set_to_unit("Feet (ft)");
    let (form, alert) = form.convert();
    assert_eq!(alert, Some(ConvertError::InvalidInput));
    assert_eq!(form.result, None);
}

#[test]
fn non_numeric_value_is_invalid_input() {
    let form = FormState::new()
        .set_value("abc")
        .set_from_unit("Meters (m)")
        .set_to_unit("Feet (ft)");
    let (_, alert) = form.convert();
    assert_eq!(alert, Some(ConvertError::InvalidInput));
}

#[test]
fn selection_check_runs_before_value_parse() {
    // 값과 단위가 모두 비어도 알림은 미선택 쪽이 먼저다.
    let (_, alert) = FormState::new().convert();
    assert_eq!(alert, Some(ConvertError::MissingSelection));
}

#[test]
fn cross_category_collapses_previous_result() {
    let form = FormState::new()
        .set_value("1000")
        .set_from_unit("Millimeters (mm)")
        .set_to_unit("Meters (m)");
    let (form, _) = form.convert();
    assert_eq!(form.result, Some(1.0));

    let form = form.set_to_unit("Grams (g)");
    let (form, alert) = form.convert();
    assert_eq!(alert, Some(ConvertError::IncompatibleUnits));
    assert_eq!(form.result, None);
    assert_eq!(form.result_text(), "0");
}

#[test]
fn value_with_surrounding_whitespace_still_parses() {
    let form = FormState::new()
        .set_value("  2.5 ")
        .set_from_unit("Liters (l)")
        .set_to_unit("Milliliters (ml)");
    let (form, alert) = form.convert();
    assert!(alert.is_none());
    assert_eq!(form.result, Some(2500.0));
}

#[test]
fn english_alert_literals_are_preserved() {
    let tr = Translator::new_with_pack("en-us", None);
    assert_eq!(
        tr.t(ConvertError::MissingSelection.alert_key()),
        "Please fill all fields"
    );
    assert_eq!(
        tr.t(ConvertError::InvalidInput.alert_key()),
        "Please fill all fields"
    );
    assert_eq!(
        tr.t(ConvertError::IncompatibleUnits.alert_key()),
        "Incompatible unit types selected"
    );
}

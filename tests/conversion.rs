//! 환산표와 카테고리 판별 회귀 테스트.

use unit_converter::category::Category;
use unit_converter::conversion::{convert, resolve_category, selectable_labels, ConvertError};
use unit_converter::i18n::keys;

#[test]
fn millimeters_to_meters() {
    let v = convert(1000.0, "Millimeters (mm)", "Meters (m)").unwrap();
    assert!((v - 1.0).abs() < 1e-12);
}

#[test]
fn kilograms_to_pounds() {
    let v = convert(1.0, "Kilograms (kg)", "Pounds (lb)").unwrap();
    assert!((v - 2.20462).abs() < 1e-4);
}

#[test]
fn gallons_to_liters_uses_rounded_factor() {
    let v = convert(1.0, "Gallons (gal)", "Liters (l)").unwrap();
    assert!((v - 3.785).abs() < 1e-9);
}

#[test]
fn miles_to_kilometers() {
    let v = convert(1.0, "Miles (mi)", "Kilometers (km)").unwrap();
    assert!((v - 1.609344).abs() < 1e-12);
}

#[test]
fn cups_to_fluid_ounces() {
    let v = convert(1.0, "Cups (cup)", "Fluid Ounces (fl oz)").unwrap();
    assert!((v - 8.1149).abs() < 1e-3);
}

#[test]
fn same_unit_returns_value_exactly() {
    let v = convert(7.25, "Meters (m)", "Meters (m)").unwrap();
    assert_eq!(v, 7.25);
    let v = convert(0.1, "Fluid Ounces (fl oz)", "Fluid Ounces (fl oz)").unwrap();
    assert_eq!(v, 0.1);
}

#[test]
fn round_trip_stays_close() {
    let out = convert(12.34, "Meters (m)", "Feet (ft)").unwrap();
    let back = convert(out, "Feet (ft)", "Meters (m)").unwrap();
    assert!((back - 12.34).abs() < 1e-9);
}

#[test]
fn negative_values_convert_linearly() {
    let v = convert(-3.0, "Meters (m)", "Centimeters (cm)").unwrap();
    assert_eq!(v, -300.0);
}

#[test]
fn resolve_category_finds_shared_category() {
    assert_eq!(
        resolve_category("Meters (m)", "Feet (ft)"),
        Some(Category::Length)
    );
    assert_eq!(
        resolve_category("Grams (g)", "Pounds (lb)"),
        Some(Category::Weight)
    );
    assert_eq!(
        resolve_category("Cups (cup)", "Milliliters (ml)"),
        Some(Category::Volume)
    );
}

#[test]
fn resolve_category_rejects_mixed_or_unknown() {
    assert_eq!(resolve_category("Meters (m)", "Grams (g)"), None);
    assert_eq!(resolve_category("Parsecs (pc)", "Meters (m)"), None);
}

#[test]
fn cross_category_is_incompatible() {
    let err = convert(5.0, "Meters (m)", "Grams (g)").unwrap_err();
    assert_eq!(err, ConvertError::IncompatibleUnits);
}

#[test]
fn unknown_label_is_incompatible() {
    let err = convert(1.0, "Parsecs (pc)", "Meters (m)").unwrap_err();
    assert_eq!(err, ConvertError::IncompatibleUnits);
}

#[test]
fn yards_convert_via_table_but_stay_out_of_menus() {
    let v = convert(1.0, "Yards (yd)", "Meters (m)").unwrap();
    assert!((v - 0.9144).abs() < 1e-12);

    let length_menu = selectable_labels(Category::Length);
    assert_eq!(length_menu.len(), 7);
    assert!(!length_menu.contains(&"Yards (yd)"));
}

#[test]
fn menu_sizes_per_category() {
    assert_eq!(selectable_labels(Category::Length).len(), 7);
    assert_eq!(selectable_labels(Category::Weight).len(), 4);
    assert_eq!(selectable_labels(Category::Volume).len(), 7);
}

#[test]
fn missing_and_invalid_share_one_alert_key() {
    assert_eq!(
        ConvertError::MissingSelection.alert_key(),
        keys::ALERT_FILL_ALL_FIELDS
    );
    assert_eq!(
        ConvertError::InvalidInput.alert_key(),
        keys::ALERT_FILL_ALL_FIELDS
    );
    assert_eq!(
        ConvertError::IncompatibleUnits.alert_key(),
        keys::ALERT_INCOMPATIBLE_UNITS
    );
}

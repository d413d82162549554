use super::*;
use crate::catalog;
use crate::units::{Unit, UnitTable};

fn metric_table() -> UnitTable {
    UnitTable::new(vec![
        Unit::new(1_000_000.0, "M"),
        Unit::new(1_000.0, "K"),
        Unit::new(1.0, ""),
    ])
}

fn metric() -> FormatOptions {
    FormatOptions::new().with_table(metric_table())
}

#[test]
fn test_default_precision() {
    assert_eq!(format(1_234_567.0, &metric()).unwrap(), "1.23M");
}

#[test]
fn test_max_significant_digits() {
    let options = metric().with_max_significant_digits(2);
    assert_eq!(format(12_345.0, &options).unwrap(), "12K");
}

#[test]
fn test_negative_value() {
    assert_eq!(format(-12_345.0, &metric()).unwrap(), "-12.3K");
}

#[test]
fn test_missing_value() {
    assert_eq!(format(None, &metric()).unwrap(), "");
}

#[test]
fn test_nan_uses_empty_value() {
    let options = metric().with_empty_value("n/a");
    assert_eq!(format(f64::NAN, &options).unwrap(), "n/a");
    assert_eq!(format(None, &options).unwrap(), "n/a");
}

#[test]
fn test_infinity_bypasses_units() {
    let options = metric().with_separator(" ").with_empty_value("n/a");
    assert_eq!(format(f64::INFINITY, &options).unwrap(), "Infinity");
    assert_eq!(format(f64::NEG_INFINITY, &options).unwrap(), "-Infinity");
}

#[test]
fn test_empty_table_error() {
    let options = FormatOptions::new().with_table(UnitTable::new(Vec::new()));
    assert_eq!(format(10.0, &options), Err(UnitError::EmptyTable));
}

#[test]
fn test_zero_threshold_error() {
    let options = FormatOptions::new().with_table(vec![Unit::new(0.0, "")]);
    assert!(matches!(
        format(10.0, &options),
        Err(UnitError::NonPositiveThreshold { index: 0, .. })
    ));
}

#[test]
fn test_non_finite_input_skips_table_validation() {
    let options = FormatOptions::new().with_table(UnitTable::new(Vec::new()));
    assert_eq!(format(None, &options).unwrap(), "");
    assert_eq!(format(f64::NAN, &options).unwrap(), "");
    assert_eq!(format(f64::INFINITY, &options).unwrap(), "Infinity");
}

#[test]
fn test_unsorted_table() {
    let options = FormatOptions::new().with_table(vec![
        Unit::new(1.0, ""),
        Unit::new(1_000.0, "K"),
        Unit::new(1_000_000.0, "M"),
    ]);
    assert_eq!(format(1_234_567.0, &options).unwrap(), "1.23M");
    assert_eq!(format(42.0, &options).unwrap(), "42");
}

#[test]
fn test_sign_symmetry() {
    let options = metric().with_separator(" ");
    for value in [0.001, 0.75, 1.0, 999.0, 1_000.0, 12_345.0, 987_654.0, 3.2e9] {
        let positive = format(value, &options).unwrap();
        let negative = format(-value, &options).unwrap();
        assert!(!positive.starts_with('-'));
        assert_eq!(negative, format!("-{}", positive), "value {}", value);
    }
}

#[test]
fn test_separator_only_before_suffix() {
    let options = metric().with_separator(" ");
    assert_eq!(format(12.0, &options).unwrap(), "12");
    assert_eq!(format(12_000.0, &options).unwrap(), "12 K");
}

#[test]
fn test_below_smallest_threshold() {
    let options = FormatOptions::new().with_table(vec![Unit::new(1.0, "s"), Unit::new(60.0, "min")]);
    assert_eq!(format(0.001, &options).unwrap(), "0.001s");
    assert_eq!(format(0.0, &options).unwrap(), "0s");
}

#[test]
fn test_default_table() {
    let options = FormatOptions::default();
    assert_eq!(format(999.0, &options).unwrap(), "999");
    assert_eq!(format(1_500.0, &options).unwrap(), "1.5K");
    assert_eq!(format(2_340_000_000.0, &options).unwrap(), "2.34B");
    assert_eq!(format(7e15, &options).unwrap(), "7000T");
}

#[test]
fn test_locale_and_grouping() {
    let options = FormatOptions::new()
        .with_table(catalog::BYTES.clone())
        .with_locale("de-DE")
        .with_separator(" ");
    assert_eq!(format(8_388_608.0, &options).unwrap(), "8,39 MB");

    let options = metric().with_max_significant_digits(6).with_grouping(true);
    assert_eq!(format(123_456_789_012.0, &options).unwrap(), "123,457M");

    let options = options.with_locale("de-DE");
    assert_eq!(format(123_456_789_012.0, &options).unwrap(), "123.457M");
}

#[test]
fn test_min_significant_digits() {
    let options = metric().with_min_significant_digits(3);
    assert_eq!(format(2_000.0, &options).unwrap(), "2.00K");

    // minimum above maximum is clamped to the maximum
    let options = metric()
        .with_min_significant_digits(5)
        .with_max_significant_digits(2);
    assert_eq!(format(2_000.0, &options).unwrap(), "2.0K");
}

#[test]
fn test_unit_formatter_reuses_table() {
    let formatter = UnitFormatter::new(metric().with_separator(" ")).unwrap();
    assert_eq!(formatter.format(1_234_567.0), "1.23 M");
    assert_eq!(formatter.format(-12_345.0), "-12.3 K");
    assert_eq!(formatter.format(None), "");
    assert_eq!(formatter.table().largest().suffix, "M");
}

#[test]
fn test_unit_formatter_rejects_bad_table() {
    let result = UnitFormatter::new(FormatOptions::new().with_table(vec![Unit::new(-5.0, "x")]));
    assert!(matches!(
        result,
        Err(UnitError::NonPositiveThreshold { index: 0, .. })
    ));
}

#[test]
fn test_unit_formatter_matches_format() {
    let options = FormatOptions::new()
        .with_table(catalog::SECONDS.clone())
        .with_max_significant_digits(4);
    let formatter = UnitFormatter::new(options.clone()).unwrap();
    for value in [0.0, 1e-7, 0.25, 59.99, 61.0, 3_599.5, 1e6] {
        assert_eq!(formatter.format(value), format(value, &options).unwrap());
    }
}

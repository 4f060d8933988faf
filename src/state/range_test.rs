use super::*;

fn form(min: &str, max: &str) -> RangeForm {
    RangeForm { min: min.to_owned(), max: max.to_owned() }
}

// =============================================================
// Field setters
// =============================================================

#[test]
fn setters_accept_in_bounds_integers() {
    let mut f = RangeForm::default();
    assert!(f.set_min("0".to_owned()));
    assert!(f.set_max("100".to_owned()));
    assert_eq!(f, form("0", "100"));
}

#[test]
fn setters_accept_clearing_the_field() {
    let mut f = form("5", "9");
    assert!(f.set_min(String::new()));
    assert_eq!(f.min, "");
}

#[test]
fn setters_reject_out_of_bounds_values() {
    let mut f = RangeForm::default();
    assert!(!f.set_min("-1".to_owned()));
    assert!(!f.set_max("101".to_owned()));
    assert_eq!(f, RangeForm::default());
}

#[test]
fn setters_reject_non_numeric_text() {
    let mut f = RangeForm::default();
    assert!(!f.set_min("abc".to_owned()));
    assert!(!f.set_max("1.5".to_owned()));
    assert_eq!(f, RangeForm::default());
}

// =============================================================
// Live validation
// =============================================================

#[test]
fn no_message_while_fields_are_incomplete() {
    assert_eq!(RangeForm::default().live_error(), None);
    assert_eq!(form("3", "").live_error(), None);
    assert_eq!(form("", "9").live_error(), None);
}

#[test]
fn inverted_bounds_report_min_greater_than_max() {
    assert_eq!(form("9", "3").live_error(), Some("Min cannot be greater than Max."));
}

#[test]
fn equal_bounds_report_same_value() {
    assert_eq!(form("4", "4").live_error(), Some("Min and Max cannot be the same."));
}

#[test]
fn valid_bounds_report_nothing() {
    assert_eq!(form("3", "9").live_error(), None);
}

// =============================================================
// Readiness
// =============================================================

#[test]
fn ready_only_with_valid_ascending_bounds() {
    assert!(form("0", "100").is_ready());
    assert!(form("3", "9").is_ready());
    assert!(!form("9", "3").is_ready());
    assert!(!form("4", "4").is_ready());
    assert!(!form("", "9").is_ready());
    assert!(!RangeForm::default().is_ready());
}

#[test]
fn bounds_surface_parse_errors() {
    assert_eq!(form("", "9").bounds(), Err(RangeError::NotANumber));
    assert_eq!(form("3", "9").bounds(), Ok((3, 9)));
}

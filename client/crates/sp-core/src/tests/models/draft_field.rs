use crate::DraftField;

use std::str::FromStr;

#[test]
fn test_draft_field_str_conversions_agree() {
    for field in DraftField::ALL {
        assert_eq!(DraftField::from_str(field.as_str()).unwrap(), field);
    }
}

#[test]
fn test_draft_field_from_str_unknown() {
    let err = DraftField::from_str("goals").unwrap_err();
    assert!(err.to_string().contains("goals"));
}


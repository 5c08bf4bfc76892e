use crate::{Biometrics, DraftField, FieldUpdate, Goals, Identity, Profile};

use std::collections::BTreeMap;

fn sample_profile() -> Profile {
    let identity = Identity::new("u1", "a@b.com").unwrap();
    let biometrics = Biometrics {
        age: 30,
        gender: "f".into(),
        height_cm: 170.0,
        weight_kg: 65.5,
        activity_level: "1.2".into(),
    };
    let goals = Goals::new(1800, BTreeMap::from([("protein".to_string(), 120)]));
    Profile::new(identity, "Anna", biometrics, goals, false)
}

#[test]
fn given_identity_when_fallback_then_everything_else_is_zeroed() {
    let identity = Identity::new("u1", "a@b.com").unwrap();

    let profile = Profile::fallback(identity.clone());

    assert_eq!(profile.identity(), &identity);
    assert_eq!(profile.name, "");
    assert_eq!(profile.biometrics, Biometrics::default());
    assert_eq!(profile.goals().daily_kcal, 0);
    assert!(profile.goals().macros_target.is_empty());
    assert!(!profile.biometrics.is_setup_complete());
}

#[test]
fn given_text_field_when_apply_then_stored_verbatim() {
    let mut profile = sample_profile();

    assert_eq!(
        profile.apply_draft_field(DraftField::Name, "  Mario "),
        FieldUpdate::Applied
    );
    assert_eq!(
        profile.apply_draft_field(DraftField::Gender, "m"),
        FieldUpdate::Applied
    );
    assert_eq!(
        profile.apply_draft_field(DraftField::ActivityLevel, ""),
        FieldUpdate::Applied
    );

    assert_eq!(profile.name, "  Mario ");
    assert_eq!(profile.biometrics.gender, "m");
    assert_eq!(profile.biometrics.activity_level, "");
}

#[test]
fn given_numeric_input_when_apply_then_parsed() {
    let mut profile = sample_profile();

    profile.apply_draft_field(DraftField::Age, "31");
    profile.apply_draft_field(DraftField::HeightCm, " 171.5 ");
    profile.apply_draft_field(DraftField::WeightKg, "70");

    assert_eq!(profile.biometrics.age, 31);
    assert_eq!(profile.biometrics.height_cm, 171.5);
    assert_eq!(profile.biometrics.weight_kg, 70.0);
}

#[test]
fn given_non_numeric_input_when_apply_then_previous_value_retained() {
    let mut profile = sample_profile();
    let before = profile.biometrics.clone();

    for raw in ["abc", "", "-3", "12.5", "NaN"] {
        assert_eq!(
            profile.apply_draft_field(DraftField::Age, raw),
            FieldUpdate::Retained,
            "age input {raw:?}"
        );
    }
    for raw in ["tall", "-170", "inf", "NaN"] {
        assert_eq!(
            profile.apply_draft_field(DraftField::HeightCm, raw),
            FieldUpdate::Retained,
            "height input {raw:?}"
        );
        assert_eq!(
            profile.apply_draft_field(DraftField::WeightKg, raw),
            FieldUpdate::Retained,
            "weight input {raw:?}"
        );
    }

    assert_eq!(profile.biometrics, before);
}

#[test]
fn given_edits_when_applied_then_identity_goals_and_first_login_untouched() {
    let synced = sample_profile();
    let mut draft = synced.clone();
    draft.apply_draft_field(DraftField::Name, "Mario");
    draft.apply_draft_field(DraftField::WeightKg, "80");

    assert_eq!(draft.name, "Mario");
    assert_eq!(draft.biometrics.weight_kg, 80.0);
    assert_eq!(draft.identity(), synced.identity());
    assert_eq!(draft.goals(), synced.goals());
    assert_eq!(draft.is_first_login, synced.is_first_login);
}

#[test]
fn test_with_goals_keeps_everything_else() {
    let profile = sample_profile();
    let goals = Goals::new(2200, BTreeMap::from([("protein".to_string(), 150)]));

    let merged = profile.clone().with_goals(goals.clone());

    assert_eq!(merged.goals(), &goals);
    assert_eq!(merged.name, profile.name);
    assert_eq!(merged.biometrics, profile.biometrics);
    assert_eq!(merged.identity(), profile.identity());
}

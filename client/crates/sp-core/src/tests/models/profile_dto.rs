use crate::{Identity, ProfileDto};

use serde_json::json;

#[test]
fn given_full_payload_when_decode_then_maps_wire_names() {
    let payload = json!({
        "uid": "u1",
        "email": "a@b.com",
        "name": "Mario",
        "biometrics": {
            "age": 40,
            "gender": "m",
            "height": 180.0,
            "weight": 82.3,
            "activityLevel": "1.55"
        },
        "goals": {
            "dailyKcal": 2400,
            "macrosTarget": { "protein": 160, "carbs": 250 }
        },
        "firstLogin": true
    });

    let dto: ProfileDto = serde_json::from_value(payload).unwrap();
    let profile = dto.into_profile(Identity::new("u1", "a@b.com").unwrap());

    assert_eq!(profile.name, "Mario");
    assert_eq!(profile.biometrics.height_cm, 180.0);
    assert_eq!(profile.biometrics.weight_kg, 82.3);
    assert_eq!(profile.biometrics.activity_level, "1.55");
    assert_eq!(profile.goals().daily_kcal, 2400);
    assert_eq!(profile.goals().macros_target["carbs"], 250);
    assert!(profile.is_first_login);
}

#[test]
fn given_sparse_payload_when_decode_then_defaults_fill_in() {
    let dto: ProfileDto = serde_json::from_value(json!({ "uid": "u1" })).unwrap();

    assert_eq!(dto.name, "");
    assert_eq!(dto.biometrics.weight, 0.0);
    assert_eq!(dto.goals.daily_kcal, 0);
    assert!(!dto.first_login);
}

#[test]
fn given_profile_when_encode_then_identity_is_flattened() {
    let identity = Identity::new("u1", "a@b.com").unwrap();
    let mut profile = crate::Profile::fallback(identity);
    profile.name = "Mario".into();

    let value = serde_json::to_value(ProfileDto::from(&profile)).unwrap();

    assert_eq!(value["uid"], "u1");
    assert_eq!(value["email"], "a@b.com");
    assert_eq!(value["name"], "Mario");
    assert_eq!(value["biometrics"]["activityLevel"], "");
    assert_eq!(value["goals"]["dailyKcal"], 0);
    assert_eq!(value["firstLogin"], false);
}

use crate::Identity;

#[test]
fn test_identity_accessors() {
    let identity = Identity::new("u1", "a@b.com").unwrap();
    assert_eq!(identity.id(), "u1");
    assert_eq!(identity.email(), "a@b.com");
}

#[test]
fn test_identity_rejects_blank_id() {
    assert!(Identity::new("", "a@b.com").is_err());
    assert!(Identity::new("   ", "a@b.com").is_err());
}

#[test]
fn test_identity_allows_empty_email() {
    let identity = Identity::new("u1", "").unwrap();
    assert_eq!(identity.email(), "");
}

#[test]
fn test_identity_display() {
    let identity = Identity::new("u1", "a@b.com").unwrap();
    assert_eq!(identity.to_string(), "u1 <a@b.com>");
}

#[test]
fn test_identity_deserialize_validates_id() {
    let identity: Identity = serde_json::from_str(r#"{"id":"u1","email":"a@b.com"}"#).unwrap();
    assert_eq!(identity, Identity::new("u1", "a@b.com").unwrap());

    let blank = serde_json::from_str::<Identity>(r#"{"id":"  ","email":"a@b.com"}"#);
    assert!(blank.unwrap_err().to_string().contains("identity id must not be empty"));
}

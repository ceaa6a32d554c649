use crate::domain::value_objects::{VendorId, VendorLookup};

#[test]
fn test_lookup_by_uuid() {
    let id = VendorId::new();
    assert_eq!(VendorLookup::parse(&id.to_string()).unwrap(), VendorLookup::Id(id));
}

#[test]
fn test_lookup_by_slug() {
    match VendorLookup::parse("mummy-treats").unwrap() {
        VendorLookup::Slug(slug) => assert_eq!(slug.as_str(), "mummy-treats"),
        other => panic!("expected slug lookup, got {:?}", other),
    }
}

#[test]
fn test_lookup_rejects_garbage() {
    assert!(VendorLookup::parse("not a slug!").is_err());
}

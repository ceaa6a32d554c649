use crate::domain::value_objects::Price;

#[test]
fn test_price_rejects_negative() {
    assert!(Price::try_new(-1).is_err());
    assert_eq!(Price::try_new(0).unwrap().cents(), 0);
}

#[test]
fn test_price_display() {
    assert_eq!(Price::try_new(1250).unwrap().to_string(), "12.50");
    assert_eq!(Price::try_new(7).unwrap().to_string(), "0.07");
}

#[test]
fn test_price_deserialize_validates() {
    assert!(serde_json::from_str::<Price>("-5").is_err());
    assert_eq!(serde_json::from_str::<Price>("500").unwrap().cents(), 500);
}

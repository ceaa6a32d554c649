use crate::domain::value_objects::BusinessName;

#[test]
fn test_business_name_whitespace_is_collapsed() {
    let name = BusinessName::try_new("  Mummy   J2\tTreats ").unwrap();
    assert_eq!(name.as_str(), "Mummy J2 Treats");
}

#[test]
fn test_business_name_length_bounds() {
    assert!(BusinessName::try_new("A").is_err());
    assert!(BusinessName::try_new("   ").is_err());
    assert!(BusinessName::try_new("x".repeat(BusinessName::MAX_LENGTH + 1)).is_err());
    assert!(BusinessName::try_new("x".repeat(BusinessName::MAX_LENGTH)).is_ok());
}

#[test]
fn test_business_name_derives_slug() {
    let name = BusinessName::try_new("Crème Brûlée & Co.").unwrap();
    assert_eq!(name.to_slug().unwrap().as_str(), "creme-brulee-co");
}

#[test]
fn test_business_name_line_breaks_separate_words() {
    let name = BusinessName::try_new("Cakes\nand\r\nPies").unwrap();
    assert_eq!(name.as_str(), "Cakes and Pies");
}

#[test]
fn test_business_name_strips_non_whitespace_controls() {
    let name = BusinessName::try_new("Sweet\u{7}Corner").unwrap();
    assert_eq!(name.as_str(), "SweetCorner");
}

use shared_kernel::domain::media::MediaCandidate;
use shared_kernel::domain::patch::PatchValue;

use crate::domain::params::{PatchProductParams, PatchVendorParams};
use crate::domain::value_objects::{BusinessName, Description, Price};

#[test]
fn test_name_with_empty_image_keeps_image_out_of_update() {
    let params = PatchVendorParams {
        business_name: Some(BusinessName::try_new("New Name").unwrap()),
        image_url: MediaCandidate::from(""),
        ..Default::default()
    };

    let update = params.to_partial_update();

    assert_eq!(update.table(), "vendors");
    assert_eq!(update.columns(), vec!["business_name"]);
    assert!(update.skipped_media().contains(&"image_url"));
    assert!(!update.is_empty());
}

#[test]
fn test_provided_image_is_trimmed_into_update() {
    let params = PatchVendorParams {
        og_image_url: MediaCandidate::from("  https://new.png  "),
        ..Default::default()
    };

    let update = params.to_partial_update();

    assert_eq!(update.value_of("og_image_url"), Some(&PatchValue::Text("https://new.png".into())));
    assert!(!update.contains("image_url"));
    assert!(!update.contains("featured_image_url"));
}

#[test]
fn test_only_blank_media_is_an_empty_patch() {
    let params = PatchVendorParams {
        image_url: MediaCandidate::from("   "),
        featured_image_url: MediaCandidate::Null,
        og_image_url: MediaCandidate::NonString,
        ..Default::default()
    };

    assert!(params.to_partial_update().is_empty());
}

#[test]
fn test_explicit_null_description_clears_it() {
    let params = PatchVendorParams {
        description: Some(None),
        ..Default::default()
    };

    let update = params.to_partial_update();
    assert_eq!(update.value_of("description"), Some(&PatchValue::NullableText(None)));
}

#[test]
fn test_product_patch_columns() {
    let params = PatchProductParams {
        description: Some(Some(Description::try_new("Fresh daily").unwrap())),
        price: Some(Price::try_new(1500).unwrap()),
        is_available: Some(false),
        image_url: MediaCandidate::Missing,
        ..Default::default()
    };

    let update = params.to_partial_update();

    assert_eq!(update.table(), "products");
    assert_eq!(update.columns(), vec!["description", "price_cents", "is_available"]);
    assert_eq!(update.value_of("price_cents"), Some(&PatchValue::BigInt(1500)));
    assert_eq!(update.skipped_media(), &["image_url"]);
}

#[test]
fn test_media_rejected_by_media_url_alone_is_an_empty_patch() {
    let params = PatchProductParams {
        image_url: MediaCandidate::from("https://new.png\u{7}"),
        ..Default::default()
    };

    let update = params.to_partial_update();

    assert!(update.is_empty());
    assert_eq!(update.skipped_media(), &["image_url"]);
}

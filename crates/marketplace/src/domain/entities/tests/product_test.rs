use shared_kernel::domain::media::MediaCandidate;
use shared_kernel::domain::value_objects::MediaUrl;

use crate::domain::entities::Product;
use crate::domain::params::PatchProductParams;
use crate::domain::value_objects::{Price, ProductName, VendorId};

fn product() -> Product {
    Product::builder(
        VendorId::new(),
        ProductName::try_new("Chin Chin").unwrap(),
        Price::try_new(1200).unwrap(),
    )
    .with_optional_image_url(Some(MediaUrl::try_new("https://cdn.example.com/chin.png").unwrap()))
    .build()
}

#[test]
fn test_blank_image_is_preserved_while_price_changes() {
    let mut product = product();
    let params = PatchProductParams {
        price: Some(Price::try_new(1500).unwrap()),
        image_url: MediaCandidate::from("  "),
        ..Default::default()
    };

    assert!(product.apply_patch(&params).unwrap());
    assert_eq!(product.price().cents(), 1500);
    assert_eq!(
        product.image_url().map(|u| u.as_str()),
        Some("https://cdn.example.com/chin.png")
    );
    assert_eq!(product.version(), 2);
}

#[test]
fn test_new_image_replaces_old() {
    let mut product = product();
    let params = PatchProductParams {
        image_url: MediaCandidate::from("/uploads/chin-v2.png"),
        ..Default::default()
    };

    assert!(product.apply_patch(&params).unwrap());
    assert_eq!(product.image_url().map(|u| u.as_str()), Some("/uploads/chin-v2.png"));
}

#[test]
fn test_no_op_patch() {
    let mut product = product();
    assert!(!product.apply_patch(&PatchProductParams::default()).unwrap());
    assert_eq!(product.version(), 1);
}

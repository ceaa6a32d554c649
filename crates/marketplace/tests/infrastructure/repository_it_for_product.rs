// crates/marketplace/tests/infrastructure/repository_it_for_product.rs

use std::sync::Arc;
use marketplace::domain::entities::{Product, Vendor};
use marketplace::domain::params::PatchProductParams;
use marketplace::domain::repositories::{ProductRepository, VendorRepository};
use marketplace::domain::value_objects::{BusinessName, Price, ProductName};
use marketplace::infrastructure::postgres::repositories::{PostgresProductRepository, PostgresVendorRepository};
use shared_kernel::application::pagination::PageRequest;
use shared_kernel::domain::media::MediaCandidate;
use shared_kernel::domain::transaction::TransactionManagerExt;
use shared_kernel::domain::value_objects::{MediaUrl, Slug};
use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;

#[tokio::test]
async fn test_product_patch_keeps_image_on_blank_value() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let vendors = Arc::new(PostgresVendorRepository::new(pool.clone()));
    let products = Arc::new(PostgresProductRepository::new(pool.clone()));
    let tx_manager = PostgresTransactionManager::new(pool);

    let vendor = Vendor::builder(BusinessName::try_new("Bakery").unwrap(), Slug::try_new("bakery").unwrap()).build();
    let product = Product::builder(
        *vendor.id(),
        ProductName::try_new("Croissant").unwrap(),
        Price::try_new(150).unwrap(),
    )
    .with_optional_image_url(Some(MediaUrl::try_new("https://croissant.png").unwrap()))
    .build();

    let (v_repo, p_repo) = (vendors.clone(), products.clone());
    let (v, p) = (vendor.clone(), product.clone());
    tx_manager
        .run_in_transaction(move |tx| Box::pin(async move {
            v_repo.create_vendor(&v, tx).await?;
            p_repo.create_product(&p, tx).await
        }))
        .await
        .expect("Insert failed");

    let params = PatchProductParams {
        price: Some(Price::try_new(175).unwrap()),
        image_url: MediaCandidate::from(""),
        ..Default::default()
    };
    let (p_repo, id) = (products.clone(), *product.id());
    tx_manager
        .run_in_transaction(move |tx| Box::pin(async move {
            p_repo.patch_product_by_id(&id, 1, &params, tx).await
        }))
        .await
        .expect("Patch failed");

    let stored = products.find_product_by_id(product.id(), None).await.unwrap().unwrap();
    assert_eq!(stored.price().cents(), 175);
    assert_eq!(stored.image_url().map(|u| u.as_str()), Some("https://croissant.png"));
    assert_eq!(stored.version(), 2);

    let page = products.list_products_by_vendor(vendor.id(), PageRequest::new(1, 20)).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name().as_str(), "Croissant");
}

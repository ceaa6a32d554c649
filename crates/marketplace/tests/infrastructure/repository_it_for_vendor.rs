// crates/marketplace/tests/infrastructure/repository_it_for_vendor.rs

use std::sync::Arc;
use marketplace::domain::entities::Vendor;
use marketplace::domain::params::PatchVendorParams;
use marketplace::domain::repositories::VendorRepository;
use marketplace::domain::value_objects::{BusinessName, Description, VendorId};
use marketplace::infrastructure::postgres::repositories::PostgresVendorRepository;
use shared_kernel::application::pagination::PageRequest;
use shared_kernel::domain::media::MediaCandidate;
use shared_kernel::domain::transaction::TransactionManagerExt;
use shared_kernel::domain::value_objects::{MediaUrl, Slug};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;

struct Ctx {
    repo: Arc<PostgresVendorRepository>,
    tx_manager: PostgresTransactionManager,
    _container: testcontainers::ContainerAsync<testcontainers_modules::postgres::Postgres>,
}

async fn setup() -> Ctx {
    let (pool, container) = crate::common::setup_postgres_test_db().await;
    Ctx {
        repo: Arc::new(PostgresVendorRepository::new(pool.clone())),
        tx_manager: PostgresTransactionManager::new(pool),
        _container: container,
    }
}

fn vendor(slug: &str) -> Vendor {
    Vendor::builder(
        BusinessName::try_new("Old Name").unwrap(),
        Slug::try_new(slug).unwrap(),
    )
    .with_optional_image_url(Some(MediaUrl::try_new("https://old.png").unwrap()))
    .with_optional_og_image_url(Some(MediaUrl::try_new("https://og.png").unwrap()))
    .build()
}

async fn insert(ctx: &Ctx, vendor: &Vendor) {
    let repo = ctx.repo.clone();
    let v = vendor.clone();
    ctx.tx_manager
        .run_in_transaction(move |tx| Box::pin(async move { repo.create_vendor(&v, tx).await }))
        .await
        .expect("Insert failed");
}

async fn patch(ctx: &Ctx, id: VendorId, expected_version: i32, params: PatchVendorParams) -> Result<()> {
    let repo = ctx.repo.clone();
    ctx.tx_manager
        .run_in_transaction(move |tx| {
            Box::pin(async move { repo.patch_vendor_by_id(&id, expected_version, &params, tx).await })
        })
        .await
}

#[tokio::test]
async fn test_name_update_with_empty_image_preserves_image() {
    let ctx = setup().await;
    let v = vendor("old-name");
    insert(&ctx, &v).await;

    let params = PatchVendorParams {
        business_name: Some(BusinessName::try_new("New Name").unwrap()),
        image_url: MediaCandidate::from(""),
        og_image_url: MediaCandidate::from("   "),
        ..Default::default()
    };
    patch(&ctx, *v.id(), 1, params).await.expect("Patch failed");

    let stored = ctx.repo.find_vendor_by_id(v.id(), None).await.unwrap().unwrap();
    assert_eq!(stored.business_name().as_str(), "New Name");
    assert_eq!(stored.image_url().map(|u| u.as_str()), Some("https://old.png"));
    assert_eq!(stored.og_image_url().map(|u| u.as_str()), Some("https://og.png"));
    assert_eq!(stored.version(), 2);
}

#[tokio::test]
async fn test_new_image_overwrites_and_null_or_number_is_ignored() {
    let ctx = setup().await;
    let v = vendor("images");
    insert(&ctx, &v).await;

    let params = PatchVendorParams {
        image_url: MediaCandidate::from("  https://new.png "),
        og_image_url: MediaCandidate::Null,
        featured_image_url: MediaCandidate::NonString,
        ..Default::default()
    };
    patch(&ctx, *v.id(), 1, params).await.expect("Patch failed");

    let stored = ctx.repo.find_vendor_by_id(v.id(), None).await.unwrap().unwrap();
    assert_eq!(stored.image_url().map(|u| u.as_str()), Some("https://new.png"));
    assert_eq!(stored.og_image_url().map(|u| u.as_str()), Some("https://og.png"));
    assert!(stored.featured_image_url().is_none());
}

#[tokio::test]
async fn test_nullable_text_can_be_cleared() {
    let ctx = setup().await;
    let v = Vendor::builder(BusinessName::try_new("Cakes").unwrap(), Slug::try_new("cakes").unwrap())
        .with_optional_description(Some(Description::try_new("Homemade").unwrap()))
        .build();
    insert(&ctx, &v).await;

    let params = PatchVendorParams { description: Some(None), ..Default::default() };
    patch(&ctx, *v.id(), 1, params).await.expect("Patch failed");

    let stored = ctx.repo.find_vendor_by_id(v.id(), None).await.unwrap().unwrap();
    assert!(stored.description().is_none());
}

#[tokio::test]
async fn test_stale_version_is_a_conflict() {
    let ctx = setup().await;
    let v = vendor("stale");
    insert(&ctx, &v).await;

    let params = PatchVendorParams {
        business_name: Some(BusinessName::try_new("First").unwrap()),
        ..Default::default()
    };
    patch(&ctx, *v.id(), 1, params.clone()).await.expect("First patch failed");

    let err = patch(&ctx, *v.id(), 1, params).await.unwrap_err();
    assert!(err.is_concurrency_conflict());
}

#[tokio::test]
async fn test_patch_unknown_vendor_is_not_found() {
    let ctx = setup().await;

    let params = PatchVendorParams {
        business_name: Some(BusinessName::try_new("Ghost").unwrap()),
        ..Default::default()
    };
    let err = patch(&ctx, VendorId::new(), 1, params).await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity: "Vendor", .. }));
}

#[tokio::test]
async fn test_duplicate_slug_is_already_exists() {
    let ctx = setup().await;
    insert(&ctx, &vendor("twin")).await;

    let repo = ctx.repo.clone();
    let dup = vendor("twin");
    let err = ctx.tx_manager
        .run_in_transaction(move |tx| Box::pin(async move { repo.create_vendor(&dup, tx).await }))
        .await
        .unwrap_err();

    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_lookup_by_slug_and_listing() {
    let ctx = setup().await;
    let v = vendor("listed");
    insert(&ctx, &v).await;

    let hidden = Vendor::builder(BusinessName::try_new("Hidden").unwrap(), Slug::try_new("hidden").unwrap())
        .with_activity(false)
        .build();
    insert(&ctx, &hidden).await;

    let by_slug = ctx.repo.find_vendor_by_slug(v.slug()).await.unwrap().unwrap();
    assert_eq!(by_slug.id(), v.id());
    assert!(ctx.repo.exists_vendor_by_slug(v.slug()).await.unwrap());

    let page = ctx.repo.list_active_vendors(PageRequest::new(1, 10)).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].slug().as_str(), "listed");
}

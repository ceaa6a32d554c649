#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::domain::value_objects::Slug;
    use shared_kernel::errors::DomainError;

    use crate::application::get_vendor::{GetVendorQuery, GetVendorUseCase};
    use crate::domain::entities::Vendor;
    use crate::domain::repositories::VendorRepositoryStub;
    use crate::domain::value_objects::{BusinessName, VendorId};

    fn vendor() -> Vendor {
        Vendor::builder(
            BusinessName::try_new("Small Chops Hub").unwrap(),
            Slug::try_new("small-chops-hub").unwrap(),
        )
        .build()
    }

    #[tokio::test]
    async fn test_get_vendor_by_id_and_by_slug() {
        let vendor = vendor();
        let use_case = GetVendorUseCase::new(Arc::new(VendorRepositoryStub::with_vendor(vendor.clone())));

        let by_id = use_case
            .execute(GetVendorQuery::try_from_path(&vendor.id().to_string()).unwrap())
            .await
            .unwrap();
        let by_slug = use_case
            .execute(GetVendorQuery::try_from_path("small-chops-hub").unwrap())
            .await
            .unwrap();

        assert_eq!(by_id, vendor);
        assert_eq!(by_slug, vendor);
    }

    #[tokio::test]
    async fn test_get_vendor_not_found() {
        let use_case = GetVendorUseCase::new(Arc::new(VendorRepositoryStub::default()));

        let result = use_case
            .execute(GetVendorQuery::try_from_path(&VendorId::new().to_string()).unwrap())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { entity: "Vendor", .. })));
    }
}

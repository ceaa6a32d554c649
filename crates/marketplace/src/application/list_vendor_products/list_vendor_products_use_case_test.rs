#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::application::pagination::PageRequest;
    use shared_kernel::domain::value_objects::Slug;
    use shared_kernel::errors::DomainError;

    use crate::application::list_vendor_products::{ListVendorProductsQuery, ListVendorProductsUseCase};
    use crate::domain::entities::{Product, Vendor};
    use crate::domain::repositories::{ProductRepositoryStub, VendorRepositoryStub};
    use crate::domain::value_objects::{BusinessName, Price, ProductName, VendorId};

    #[tokio::test]
    async fn test_lists_products_of_vendor_only() {
        let vendor = Vendor::builder(
            BusinessName::try_new("Donut Den").unwrap(),
            Slug::try_new("donut-den").unwrap(),
        )
        .build();
        let vendor_id = *vendor.id();

        let products = ProductRepositoryStub::default();
        {
            let mut stored = products.products.lock().unwrap();
            for (owner, name) in [(vendor_id, "Glazed"), (VendorId::new(), "Other"), (vendor_id, "Jam")] {
                stored.push(
                    Product::builder(owner, ProductName::try_new(name).unwrap(), Price::try_new(300).unwrap()).build(),
                );
            }
        }

        let use_case = ListVendorProductsUseCase::new(
            Arc::new(VendorRepositoryStub::with_vendor(vendor)),
            Arc::new(products),
        );

        let page = use_case
            .execute(ListVendorProductsQuery { vendor_id, page: PageRequest::default() })
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        let names: Vec<&str> = page.items.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Glazed", "Jam"]);
    }

    #[tokio::test]
    async fn test_unknown_vendor_is_not_found() {
        let use_case = ListVendorProductsUseCase::new(
            Arc::new(VendorRepositoryStub::default()),
            Arc::new(ProductRepositoryStub::default()),
        );

        let result = use_case
            .execute(ListVendorProductsQuery { vendor_id: VendorId::new(), page: PageRequest::default() })
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}

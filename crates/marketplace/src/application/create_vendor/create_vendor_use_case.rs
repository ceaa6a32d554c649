// crates/marketplace/src/application/create_vendor/create_vendor_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::value_objects::Slug;
use shared_kernel::errors::{DomainError, Result};

use crate::application::create_vendor::CreateVendorCommand;
use crate::domain::entities::Vendor;
use crate::domain::repositories::VendorRepository;

/// Nombre de suffixes numériques essayés avant d'abandonner (`boutique-2` ... `boutique-50`)
const MAX_SLUG_ATTEMPTS: u32 = 50;

pub struct CreateVendorUseCase {
    repo: Arc<dyn VendorRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl CreateVendorUseCase {
    pub fn new(repo: Arc<dyn VendorRepository>, tx_manager: Arc<dyn TransactionManager>) -> Self {
        Self { repo, tx_manager }
    }

    pub async fn execute(&self, cmd: CreateVendorCommand) -> Result<Vendor> {
        let slug = self.resolve_unique_slug(&cmd).await?;

        // Un média vide à l'inscription = pas de média, jamais une chaîne vide en base
        let vendor = Vendor::builder(cmd.business_name, slug)
            .with_optional_description(cmd.description)
            .with_optional_phone(cmd.phone)
            .with_optional_location(cmd.location)
            .with_optional_image_url(cmd.image_url.to_media_url()?)
            .with_optional_featured_image_url(cmd.featured_image_url.to_media_url()?)
            .with_optional_og_image_url(cmd.og_image_url.to_media_url()?)
            .build();

        let repo = self.repo.clone();
        let to_save = vendor.clone();
        self.tx_manager
            .run_in_transaction(move |tx| {
                Box::pin(async move { repo.create_vendor(&to_save, tx).await })
            })
            .await?;

        tracing::info!(vendor_id = %vendor.id(), slug = %vendor.slug(), "Vendor created");
        Ok(vendor)
    }

    async fn resolve_unique_slug(&self, cmd: &CreateVendorCommand) -> Result<Slug> {
        let base = cmd.business_name.to_slug()?;
        if !self.repo.exists_vendor_by_slug(&base).await? {
            return Ok(base);
        }

        for n in 2..=MAX_SLUG_ATTEMPTS {
            let suffix = format!("-{}", n);
            let stem: String = base.as_str().chars().take(Slug::MAX_LEN - suffix.len()).collect();
            let candidate = Slug::try_new(format!("{}{}", stem.trim_end_matches('-'), suffix))?;

            if !self.repo.exists_vendor_by_slug(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(DomainError::AlreadyExists {
            entity: "Vendor",
            field: "slug",
            value: base.as_str().to_string(),
        })
    }
}

// backend/services/marketplace/api-server/src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// Application
use marketplace::application::create_product::CreateProductUseCase;
use marketplace::application::create_vendor::CreateVendorUseCase;
use marketplace::application::get_vendor::GetVendorUseCase;
use marketplace::application::list_vendor_products::ListVendorProductsUseCase;
use marketplace::application::list_vendors::ListVendorsUseCase;
use marketplace::application::update_product::UpdateProductUseCase;
use marketplace::application::update_vendor::UpdateVendorUseCase;

// Infrastructure
use marketplace::infrastructure::api::http::{build_router, AppState};
use marketplace::infrastructure::postgres::repositories::{PostgresProductRepository, PostgresVendorRepository};
use marketplace::infrastructure::postgres::utils::run_marketplace_migrations;

// Shared Kernel
use shared_kernel::infrastructure::postgres::factories::PostgresContext;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;

const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    run_server(SocketAddr::from(([0, 0, 0, 0], port))).await
}

async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    // --- 1. BASE DE DONNÉES ---
    let pg_ctx = PostgresContext::builder("MARKETPLACE")?.build().await?;
    run_marketplace_migrations(&pg_ctx.pool()).await?;

    // --- 2. REPOSITORIES ---
    let vendor_repo = Arc::new(PostgresVendorRepository::new(pg_ctx.pool()));
    let product_repo = Arc::new(PostgresProductRepository::new(pg_ctx.pool()));
    let tx_manager = Arc::new(PostgresTransactionManager::new(pg_ctx.pool()));

    // --- 3. USE CASES ---
    let state = AppState {
        create_vendor: Arc::new(CreateVendorUseCase::new(vendor_repo.clone(), tx_manager.clone())),
        get_vendor: Arc::new(GetVendorUseCase::new(vendor_repo.clone())),
        list_vendors: Arc::new(ListVendorsUseCase::new(vendor_repo.clone())),
        update_vendor: Arc::new(UpdateVendorUseCase::new(vendor_repo.clone(), tx_manager.clone())),
        create_product: Arc::new(CreateProductUseCase::new(
            vendor_repo.clone(),
            product_repo.clone(),
            tx_manager.clone(),
        )),
        list_vendor_products: Arc::new(ListVendorProductsUseCase::new(vendor_repo, product_repo.clone())),
        update_product: Arc::new(UpdateProductUseCase::new(product_repo, tx_manager)),
    };

    // --- 4. SERVEUR HTTP ---
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "🚀 Marketplace API listening");

    axum::serve(listener, app).await?;
    Ok(())
}

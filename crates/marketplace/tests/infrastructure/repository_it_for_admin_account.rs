// crates/marketplace/tests/infrastructure/repository_it_for_admin_account.rs

use std::sync::Arc;
use marketplace::application::seed_admin::{SeedAdminCommand, SeedAdminOutcome, SeedAdminUseCase};
use marketplace::domain::repositories::AdminAccountRepository;
use marketplace::domain::services::PasswordHasher;
use marketplace::domain::value_objects::Email;
use marketplace::infrastructure::postgres::repositories::PostgresAdminAccountRepository;
use marketplace::infrastructure::security::Pbkdf2PasswordHasher;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;

#[tokio::test]
async fn test_seed_admin_is_idempotent() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = Arc::new(PostgresAdminAccountRepository::new(pool.clone()));
    let hasher = Arc::new(Pbkdf2PasswordHasher::with_rounds(1_000));
    let use_case = SeedAdminUseCase::new(
        repo.clone(),
        hasher.clone(),
        Arc::new(PostgresTransactionManager::new(pool)),
    );

    let command = || SeedAdminCommand::try_new(" Admin@Example.com ", "correct horse battery".into(), None).unwrap();

    let first = use_case.execute(command()).await.unwrap();
    assert!(matches!(first, SeedAdminOutcome::Created(_)));

    let second = use_case.execute(command()).await.unwrap();
    assert!(matches!(second, SeedAdminOutcome::AlreadyPresent));

    let email = Email::try_new("admin@example.com").unwrap();
    let stored = repo.find_admin_by_email(&email).await.unwrap().expect("Admin should exist");
    assert_eq!(stored.display_name().as_str(), "Administrator");
    assert!(hasher.verify("correct horse battery", stored.password_hash()).unwrap());
}

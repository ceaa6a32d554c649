// crates/shared-kernel/src/infrastructure/retry.rs

use rand::Rng;
use std::time::Duration;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 20,
        }
    }
}

impl RetryConfig {
    /// Backoff exponentiel (2^attempt * base) + jitter jusqu'à 25 % de la base
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let base = self.initial_backoff_ms.saturating_mul(2u64.saturating_pow(attempt));
        let jitter = rand::rng().random_range(0..base / 4 + 1);
        Duration::from_millis(base + jitter)
    }
}

/// Rejoue `action` tant qu'elle échoue sur un conflit de version.
/// Toute autre erreur est propagée immédiatement.
pub async fn with_retry<F, Fut, T>(config: RetryConfig, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    for attempt in 0..=config.max_retries {
        match action().await {
            Ok(res) => return Ok(res),
            Err(e) if e.is_concurrency_conflict() && attempt < config.max_retries => {
                let backoff = config.backoff_for(attempt);

                tracing::warn!(
                    "🔄 Concurrency conflict (attempt {}/{}), retrying in {:?}...",
                    attempt + 1,
                    config.max_retries,
                    backoff
                );

                tokio::time::sleep(backoff).await;
            }
            Err(e) if e.is_concurrency_conflict() => break,
            Err(e) => return Err(e),
        }
    }

    Err(DomainError::TooManyConflicts(format!(
        "Operation failed after {} retries due to persistent conflicts",
        config.max_retries
    )))
}

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use socialscrape_core::{ApiKeyCredentials, SecretKey};

use crate::errors::HostError;
use crate::provider::{BlockCost, ProviderConfig};
use crate::schema::{CredentialsMeta, ScraperInput};
use crate::validate::validate_input;

/// Services the hosting platform provides around a block run.
#[async_trait]
pub trait Host: Send + Sync {
    /// Validate raw input against the block's input schema and parse it.
    fn validate_input(&self, raw: &Value) -> Result<ScraperInput, HostError> {
        validate_input(raw).map_err(HostError::InvalidInput)
    }

    /// Resolve the credential referenced by `meta` for `provider`.
    async fn credentials(
        &self,
        provider: &ProviderConfig,
        meta: &CredentialsMeta,
    ) -> Result<ApiKeyCredentials, HostError>;

    /// Charge `cost` for one execution of `block_id`.
    async fn report_cost(&self, block_id: &str, cost: &BlockCost) -> Result<(), HostError>;
}

/// Local host: keys come from the provider's environment variable.
#[derive(Debug, Default)]
pub struct EnvHost {
    api_key: Option<SecretKey>,
    fallback_to_test_key: bool,
    charged: Mutex<u64>,
}

impl EnvHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `key` instead of reading the environment.
    pub fn with_api_key(mut self, key: SecretKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Fall back to the provider's test credential when no key is configured.
    pub fn with_test_key_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_test_key = enabled;
        self
    }

    /// Sum of all costs reported through this host.
    pub fn total_charged(&self) -> u64 {
        self.charged.lock().map(|total| *total).unwrap_or(0)
    }

    fn resolve_key(&self, provider: &ProviderConfig) -> Option<SecretKey> {
        if let Some(key) = &self.api_key {
            return Some(key.clone());
        }
        std::env::var(provider.api_key_env_var)
            .ok()
            .filter(|value| !value.is_empty())
            .map(SecretKey::new)
    }
}

#[async_trait]
impl Host for EnvHost {
    async fn credentials(
        &self,
        provider: &ProviderConfig,
        meta: &CredentialsMeta,
    ) -> Result<ApiKeyCredentials, HostError> {
        if meta.provider != provider.name {
            return Err(HostError::ProviderMismatch {
                expected: provider.name.to_string(),
                actual: meta.provider.clone(),
            });
        }

        match self.resolve_key(provider) {
            Some(key) => Ok(ApiKeyCredentials::new(
                meta.id.clone(),
                provider.name,
                meta.title.clone(),
                key,
            )),
            None if self.fallback_to_test_key => Ok(provider.test_credentials()),
            None => Err(HostError::MissingCredentials(format!(
                "set {} for provider '{}'",
                provider.api_key_env_var, provider.name
            ))),
        }
    }

    async fn report_cost(&self, block_id: &str, cost: &BlockCost) -> Result<(), HostError> {
        let mut total = self
            .charged
            .lock()
            .map_err(|_| HostError::Cost("failed to lock cost ledger".to_string()))?;
        *total = total.saturating_add(cost.amount);
        info!(
            block_id,
            amount = cost.amount,
            cost_type = ?cost.cost_type,
            total = *total,
            "cost reported"
        );
        Ok(())
    }
}

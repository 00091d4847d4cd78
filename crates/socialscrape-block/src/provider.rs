use serde::{Deserialize, Serialize};

use socialscrape_core::{ApiKeyCredentials, SecretKey};

use crate::schema::CredentialsMeta;

/// Unit a block cost is charged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCostType {
    Run,
    Byte,
    Second,
}

/// Cost charged by the host for a block execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCost {
    pub amount: u64,
    pub cost_type: BlockCostType,
}

/// Host-managed source of injected credentials and cost accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub name: &'static str,
    /// Environment variable holding the API key for local runs.
    pub api_key_env_var: &'static str,
    pub credential_title: &'static str,
    pub base_cost: BlockCost,
}

impl ProviderConfig {
    /// Credential metadata the block input carries for this provider.
    pub fn credentials_meta(&self, id: impl Into<String>) -> CredentialsMeta {
        CredentialsMeta {
            id: id.into(),
            provider: self.name.to_string(),
            credential_type: "api_key".to_string(),
            title: Some(self.credential_title.to_string()),
        }
    }

    /// Fixed credential used by block self-tests and local runs without a key.
    pub fn test_credentials(&self) -> ApiKeyCredentials {
        ApiKeyCredentials::new(
            format!("{}-test-credentials", self.name),
            self.name,
            Some(format!("Mock {}", self.credential_title)),
            SecretKey::new(format!("mock-{}-api-key", self.name)),
        )
    }

    pub fn test_credentials_meta(&self) -> CredentialsMeta {
        let creds = self.test_credentials();
        CredentialsMeta {
            id: creds.id,
            provider: creds.provider,
            credential_type: "api_key".to_string(),
            title: creds.title,
        }
    }
}

/// Provider for the social scraper block.
pub fn social_scraper_provider() -> ProviderConfig {
    ProviderConfig {
        name: "social_scraper",
        api_key_env_var: "SOCIAL_SCRAPER_API_KEY",
        credential_title: "Social Scraper API Key",
        base_cost: BlockCost {
            amount: 1,
            cost_type: BlockCostType::Run,
        },
    }
}

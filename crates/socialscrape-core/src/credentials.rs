use std::fmt;

/// API key material. Formatting never reveals the key.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw key for outbound requests.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// API-key credential injected by the host for a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyCredentials {
    pub id: String,
    pub provider: String,
    pub title: Option<String>,
    pub api_key: SecretKey,
}

impl ApiKeyCredentials {
    pub fn new(
        id: impl Into<String>,
        provider: impl Into<String>,
        title: Option<String>,
        api_key: SecretKey,
    ) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
            title,
            api_key,
        }
    }
}

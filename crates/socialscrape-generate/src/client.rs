use async_trait::async_trait;

use socialscrape_core::{ApiKeyCredentials, ScrapeData};

use crate::errors::ClientError;
use crate::generator::{GeneratorOptions, RecordGenerator};

/// Trait implemented by clients that can scrape social media targets.
#[async_trait]
pub trait ScrapeClient: Send + Sync {
    /// Scrape `urls`, collecting up to `limit` posts per URL.
    async fn scrape_social_media(
        &self,
        urls: &[String],
        limit: u32,
        include_comments: bool,
    ) -> Result<ScrapeData, ClientError>;
}

/// Client that fabricates records instead of issuing requests.
///
/// The credential is held the way a networked client would hold it, but the
/// mock never reads the key.
#[derive(Debug, Clone)]
pub struct MockSocialClient {
    credentials: ApiKeyCredentials,
    generator: RecordGenerator,
}

impl MockSocialClient {
    pub fn new(credentials: ApiKeyCredentials) -> Self {
        Self::with_options(credentials, GeneratorOptions::default())
    }

    pub fn with_options(credentials: ApiKeyCredentials, options: GeneratorOptions) -> Self {
        Self {
            credentials,
            generator: RecordGenerator::new(options),
        }
    }

    pub fn credentials(&self) -> &ApiKeyCredentials {
        &self.credentials
    }
}

#[async_trait]
impl ScrapeClient for MockSocialClient {
    async fn scrape_social_media(
        &self,
        urls: &[String],
        limit: u32,
        include_comments: bool,
    ) -> Result<ScrapeData, ClientError> {
        Ok(self.generator.generate(urls, limit, include_comments))
    }
}

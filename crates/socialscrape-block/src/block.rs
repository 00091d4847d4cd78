use std::time::Instant;

use serde_json::{Value, json};
use tracing::{debug, info, warn};

use socialscrape_core::ApiKeyCredentials;
use socialscrape_generate::{
    GeneratorOptions, MockSocialClient, ScrapeClient, serialize_records,
};

use crate::errors::{BlockError, HostError};
use crate::host::Host;
use crate::output::{BlockOutput, OutputValue, TOTAL_ITEMS_SCRAPED};
use crate::provider::{ProviderConfig, social_scraper_provider};
use crate::schema::{ScraperInput, input_json_schema, output_json_schema};

/// Stable identifier the host registers this block under.
pub const BLOCK_ID: &str = "6f2a9c4e-1b7d-4e38-9a0f-3c5d8e21b7a4";

/// Host catalogue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockCategory {
    Search,
    Data,
}

/// Static description of the block for host registration.
#[derive(Debug, Clone)]
pub struct BlockInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub categories: Vec<BlockCategory>,
    pub input_schema: Value,
    pub output_schema: Value,
}

/// Scrapes social media targets and returns relational CSV datasets for
/// users, posts and comments.
#[derive(Debug, Clone)]
pub struct SocialMediaScraperBlock {
    provider: ProviderConfig,
    generator: GeneratorOptions,
}

impl Default for SocialMediaScraperBlock {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

impl SocialMediaScraperBlock {
    pub fn new(generator: GeneratorOptions) -> Self {
        Self {
            provider: social_scraper_provider(),
            generator,
        }
    }

    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    pub fn info(&self) -> BlockInfo {
        BlockInfo {
            id: BLOCK_ID,
            name: "SocialMediaScraperBlock",
            description: "Scrape social media and output relational CSV datasets",
            categories: vec![BlockCategory::Search, BlockCategory::Data],
            input_schema: serde_json::to_value(input_json_schema()).unwrap_or(Value::Null),
            output_schema: serde_json::to_value(output_json_schema()).unwrap_or(Value::Null),
        }
    }

    /// Input the block self-test runs with.
    pub fn test_input(&self) -> Value {
        json!({
            "credentials": self.provider.test_credentials_meta(),
            "target_urls": ["https://twitter.com/example"],
            "platforms": ["X"],
            "max_posts": 2,
            "include_comments": false,
        })
    }

    /// Outputs the self-test expects (one user and two posts; users are not counted).
    pub fn test_output(&self) -> Vec<(&'static str, OutputValue)> {
        vec![(TOTAL_ITEMS_SCRAPED, OutputValue::Count(2))]
    }

    /// Run the block against an already-authenticated client.
    ///
    /// A failure anywhere yields the `error` output alone; the tables are
    /// never emitted partially.
    pub async fn run(&self, input: &ScraperInput, client: &dyn ScrapeClient) -> BlockOutput {
        let start = Instant::now();
        info!(
            block_id = BLOCK_ID,
            urls = input.target_urls.len(),
            max_posts = input.max_posts,
            include_comments = input.include_comments,
            "block run started"
        );

        match self.produce(input, client).await {
            Ok(output) => {
                info!(
                    block_id = BLOCK_ID,
                    total_items = output.total_items().unwrap_or(0),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "block run completed"
                );
                output
            }
            Err(err) => {
                warn!(block_id = BLOCK_ID, error = %err, "block run failed");
                BlockOutput::error(err.to_string())
            }
        }
    }

    /// Validate raw input through the host, resolve credentials, run with
    /// the mock client, and report the run cost.
    pub async fn invoke(&self, host: &dyn Host, raw_input: &Value) -> Result<BlockOutput, HostError> {
        let options = self.generator.clone();
        self.invoke_with(host, raw_input, move |creds| {
            MockSocialClient::with_options(creds, options)
        })
        .await
    }

    /// Like [`invoke`](Self::invoke) with a caller-built client.
    pub async fn invoke_with<C, F>(
        &self,
        host: &dyn Host,
        raw_input: &Value,
        make_client: F,
    ) -> Result<BlockOutput, HostError>
    where
        C: ScrapeClient,
        F: FnOnce(ApiKeyCredentials) -> C,
    {
        let input = host.validate_input(raw_input)?;
        let credentials = host.credentials(&self.provider, &input.credentials).await?;
        let client = make_client(credentials);

        let output = self.run(&input, &client).await;
        host.report_cost(BLOCK_ID, &self.provider.base_cost).await?;
        Ok(output)
    }

    async fn produce(
        &self,
        input: &ScraperInput,
        client: &dyn ScrapeClient,
    ) -> Result<BlockOutput, BlockError> {
        debug!(platforms = ?input.platforms, "platform filter is advisory and not applied");

        let data = client
            .scrape_social_media(&input.target_urls, input.max_posts, input.include_comments)
            .await?;

        let users_csv = serialize_records(&data.users)?;
        let posts_csv = serialize_records(&data.posts)?;
        let comments_csv = serialize_records(&data.comments)?;

        Ok(BlockOutput::tables(
            users_csv,
            posts_csv,
            comments_csv,
            data.total_items(),
        ))
    }
}

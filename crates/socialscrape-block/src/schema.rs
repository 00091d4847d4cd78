use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};

/// Platforms offered by default. Advisory only; generation ignores it.
pub const DEFAULT_PLATFORMS: [&str; 5] = ["Facebook", "X", "Reddit", "Youtube", "Bluesky"];

/// Reference to a host-managed credential; never carries the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CredentialsMeta {
    /// Host-side credential id.
    pub id: String,
    /// Provider the credential belongs to (ex.: `social_scraper`).
    pub provider: String,
    /// Credential kind; always `api_key` for this block.
    #[serde(rename = "type")]
    pub credential_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Block input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScraperInput {
    /// API credentials for the Social Scraper.
    pub credentials: CredentialsMeta,
    /// List of social media URLs to visit.
    #[serde(default)]
    pub target_urls: Vec<String>,
    /// Platforms to target. Leave empty to auto-detect.
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
    /// Maximum number of posts to scrape per URL.
    #[serde(default = "default_max_posts")]
    #[schemars(range(min = 1, max = 100))]
    pub max_posts: u32,
    /// Whether to extract comments for found posts.
    #[serde(default = "default_include_comments")]
    pub include_comments: bool,
}

impl ScraperInput {
    /// Input with defaults for everything except the credential.
    pub fn new(credentials: CredentialsMeta) -> Self {
        Self {
            credentials,
            target_urls: Vec::new(),
            platforms: default_platforms(),
            max_posts: default_max_posts(),
            include_comments: default_include_comments(),
        }
    }
}

/// Block output on success. A failed run emits only `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScraperOutput {
    /// CSV string containing user details.
    pub users_csv: String,
    /// CSV string containing post details.
    pub posts_csv: String,
    /// CSV string containing comment details.
    pub comments_csv: String,
    /// Total count of posts and comments processed.
    pub total_items_scraped: u64,
    /// Error message if the run failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_platforms() -> Vec<String> {
    DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect()
}

fn default_max_posts() -> u32 {
    10
}

fn default_include_comments() -> bool {
    true
}

/// Emit the JSON Schema for block input.
pub fn input_json_schema() -> RootSchema {
    schema_for!(ScraperInput)
}

/// Emit the JSON Schema for block output.
pub fn output_json_schema() -> RootSchema {
    schema_for!(ScraperOutput)
}

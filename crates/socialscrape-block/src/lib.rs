//! The social media scraper block.
//!
//! Wires validated block input into a scraping client, serializes the
//! scraped users, posts and comments to CSV, and emits them as named outputs.
//! Everything the hosting platform provides (input validation, credential
//! injection, cost accounting) sits behind the [`Host`] trait.

pub mod block;
pub mod errors;
pub mod host;
pub mod output;
pub mod provider;
pub mod schema;
pub mod validate;

pub use block::{BLOCK_ID, BlockCategory, BlockInfo, SocialMediaScraperBlock};
pub use errors::{BlockError, HostError, IssueSeverity, ValidationIssue, ValidationReport};
pub use host::{EnvHost, Host};
pub use output::{BlockOutput, OutputValue};
pub use provider::{BlockCost, BlockCostType, ProviderConfig, social_scraper_provider};
pub use schema::{
    CredentialsMeta, DEFAULT_PLATFORMS, ScraperInput, ScraperOutput, input_json_schema,
    output_json_schema,
};
pub use validate::validate_input;

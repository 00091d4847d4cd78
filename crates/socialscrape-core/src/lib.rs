//! Core record contracts for socialscrape.
//!
//! Defines the three relational entities produced by a scrape (users, posts,
//! comments), the fixed column contract each one exposes for tabular output,
//! reference checks, and the credential type handed to scraping clients.

pub mod credentials;
pub mod error;
pub mod model;
pub mod record;
pub mod validation;

pub use credentials::{ApiKeyCredentials, SecretKey};
pub use error::{Error, Result};
pub use model::{Comment, Post, ScrapeData, User};
pub use record::{COMMENT_COLUMNS, POST_COLUMNS, Record, USER_COLUMNS};
pub use validation::validate_references;

/// Platform label stamped on records by the mock client.
pub const GENERIC_PLATFORM: &str = "Generic";

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Account discovered at a target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    /// Opaque generated identifier (ex.: `u_1a2b3c4d`).
    pub user_id: String,
    pub username: String,
    pub platform: String,
    /// Free-form profile text.
    pub profile_details: String,
}

/// Post authored by a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Post {
    pub post_id: String,
    /// Owner; always a `user_id` from the same scrape.
    pub user_id: String,
    pub platform: String,
    /// Creation time, ISO-8601 without offset.
    pub timestamp: String,
    pub content_text: String,
}

/// Comment left on a [`Post`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Comment {
    pub comment_id: String,
    /// Parent post; always a `post_id` from the same scrape.
    pub post_id: String,
    /// Commenter id. Commenters are not emitted as users.
    pub user_id: String,
    pub timestamp: String,
    pub content_text: String,
}

/// Everything one scrape produced, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScrapeData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl ScrapeData {
    /// Number of scraped items: posts plus comments. Users are not counted.
    pub fn total_items(&self) -> u64 {
        (self.posts.len() + self.comments.len()) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.posts.is_empty() && self.comments.is_empty()
    }
}

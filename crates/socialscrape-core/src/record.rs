use crate::model::{Comment, Post, User};

/// Column order for the users table.
pub const USER_COLUMNS: &[&str] = &["user_id", "username", "platform", "profile_details"];
/// Column order for the posts table.
pub const POST_COLUMNS: &[&str] = &["post_id", "user_id", "platform", "timestamp", "content_text"];
/// Column order for the comments table.
pub const COMMENT_COLUMNS: &[&str] = &[
    "comment_id",
    "post_id",
    "user_id",
    "timestamp",
    "content_text",
];

/// A flat mapping of named fields with a fixed tabular column order.
pub trait Record {
    /// Columns emitted for this record kind, in output order.
    const COLUMNS: &'static [&'static str];

    /// Value of the named field, or `None` when the record has no such field.
    fn field(&self, name: &str) -> Option<&str>;
}

impl Record for User {
    const COLUMNS: &'static [&'static str] = USER_COLUMNS;

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "user_id" => Some(&self.user_id),
            "username" => Some(&self.username),
            "platform" => Some(&self.platform),
            "profile_details" => Some(&self.profile_details),
            _ => None,
        }
    }
}

impl Record for Post {
    const COLUMNS: &'static [&'static str] = POST_COLUMNS;

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "post_id" => Some(&self.post_id),
            "user_id" => Some(&self.user_id),
            "platform" => Some(&self.platform),
            "timestamp" => Some(&self.timestamp),
            "content_text" => Some(&self.content_text),
            _ => None,
        }
    }
}

impl Record for Comment {
    const COLUMNS: &'static [&'static str] = COMMENT_COLUMNS;

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "comment_id" => Some(&self.comment_id),
            "post_id" => Some(&self.post_id),
            "user_id" => Some(&self.user_id),
            "timestamp" => Some(&self.timestamp),
            "content_text" => Some(&self.content_text),
            _ => None,
        }
    }
}

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::ScrapeData;

/// Check id uniqueness and that posts/comments only reference records from
/// the same scrape.
pub fn validate_references(data: &ScrapeData) -> Result<()> {
    let mut user_ids = HashSet::new();
    for user in &data.users {
        if !user_ids.insert(user.user_id.as_str()) {
            return Err(Error::DuplicateId {
                kind: "user",
                id: user.user_id.clone(),
            });
        }
    }

    let mut post_ids = HashSet::new();
    for post in &data.posts {
        if !post_ids.insert(post.post_id.as_str()) {
            return Err(Error::DuplicateId {
                kind: "post",
                id: post.post_id.clone(),
            });
        }
        if !user_ids.contains(post.user_id.as_str()) {
            return Err(Error::DanglingReference {
                kind: "post",
                id: post.post_id.clone(),
                target: "user",
                target_id: post.user_id.clone(),
            });
        }
    }

    let mut comment_ids = HashSet::new();
    for comment in &data.comments {
        if !comment_ids.insert(comment.comment_id.as_str()) {
            return Err(Error::DuplicateId {
                kind: "comment",
                id: comment.comment_id.clone(),
            });
        }
        if !post_ids.contains(comment.post_id.as_str()) {
            return Err(Error::DanglingReference {
                kind: "comment",
                id: comment.comment_id.clone(),
                target: "post",
                target_id: comment.post_id.clone(),
            });
        }
    }

    Ok(())
}

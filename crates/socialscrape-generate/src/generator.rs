use std::time::Instant;

use tracing::info;

use socialscrape_core::{Comment, GENERIC_PLATFORM, Post, ScrapeData, User};

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::ids::{IdGenerator, IdKind};

/// Options for the record generator.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Seed for reproducible ids and timestamps. `None` uses UUIDs and the wall clock.
    pub seed: Option<u64>,
    /// Comments fabricated per post when comments are requested.
    pub comments_per_post: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            seed: None,
            comments_per_post: 2,
        }
    }
}

/// Fabricates users, posts and comments for a list of target URLs.
#[derive(Debug, Clone, Default)]
pub struct RecordGenerator {
    options: GeneratorOptions,
}

impl RecordGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate one user per URL, `limit` posts per user and, when
    /// `include_comments` is set, `comments_per_post` comments per post.
    pub fn generate(&self, urls: &[String], limit: u32, include_comments: bool) -> ScrapeData {
        match self.options.seed {
            Some(seed) => {
                let mut ids = IdGenerator::seeded(seed);
                let mut clock = FixedClock::from_base_date();
                self.generate_with(&mut ids, &mut clock, urls, limit, include_comments)
            }
            None => {
                let mut ids = IdGenerator::random();
                let mut clock = SystemClock::new();
                self.generate_with(&mut ids, &mut clock, urls, limit, include_comments)
            }
        }
    }

    /// Generate using caller-supplied id and time sources.
    pub fn generate_with(
        &self,
        ids: &mut IdGenerator,
        clock: &mut dyn Clock,
        urls: &[String],
        limit: u32,
        include_comments: bool,
    ) -> ScrapeData {
        let start = Instant::now();
        info!(
            urls = urls.len(),
            limit,
            include_comments,
            seeded = self.options.seed.is_some(),
            "generation started"
        );

        let mut data = ScrapeData::default();

        for (user_index, url) in urls.iter().enumerate() {
            let user_id = ids.next_id(IdKind::User);
            data.users.push(User {
                user_id: user_id.clone(),
                username: format!("user_{user_index}"),
                platform: GENERIC_PLATFORM.to_string(),
                profile_details: "Bio info here".to_string(),
            });

            for post_index in 0..limit {
                let post_id = ids.next_id(IdKind::Post);
                data.posts.push(Post {
                    post_id: post_id.clone(),
                    user_id: user_id.clone(),
                    platform: GENERIC_PLATFORM.to_string(),
                    timestamp: clock.now_formatted(),
                    content_text: format!(
                        "This is the full text of post {post_index} found at {url}"
                    ),
                });

                if !include_comments {
                    continue;
                }

                for _ in 0..self.options.comments_per_post {
                    let commenter_id = ids.next_id(IdKind::Commenter);
                    data.comments.push(Comment {
                        comment_id: ids.next_id(IdKind::Comment),
                        post_id: post_id.clone(),
                        user_id: commenter_id,
                        timestamp: clock.now_formatted(),
                        content_text: format!("This is a comment on post {post_index}"),
                    });
                }
            }
        }

        info!(
            users = data.users.len(),
            posts = data.posts.len(),
            comments = data.comments.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "generation completed"
        );

        data
    }
}

/// Generate with default options (random ids, wall-clock timestamps).
pub fn generate(urls: &[String], limit: u32, include_comments: bool) -> ScrapeData {
    RecordGenerator::default().generate(urls, limit, include_comments)
}

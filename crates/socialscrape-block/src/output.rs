use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::ScraperOutput;

pub const USERS_CSV: &str = "users_csv";
pub const POSTS_CSV: &str = "posts_csv";
pub const COMMENTS_CSV: &str = "comments_csv";
pub const TOTAL_ITEMS_SCRAPED: &str = "total_items_scraped";
pub const ERROR: &str = "error";

/// Value of a single named block output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutputValue {
    Text(String),
    Count(u64),
}

impl OutputValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OutputValue::Text(value) => Some(value),
            OutputValue::Count(_) => None,
        }
    }

    pub fn as_count(&self) -> Option<u64> {
        match self {
            OutputValue::Count(value) => Some(*value),
            OutputValue::Text(_) => None,
        }
    }
}

/// Named outputs of one block run, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockOutput {
    entries: Vec<(&'static str, OutputValue)>,
}

impl BlockOutput {
    /// The four outputs of a successful run.
    pub fn tables(
        users_csv: String,
        posts_csv: String,
        comments_csv: String,
        total_items_scraped: u64,
    ) -> Self {
        Self {
            entries: vec![
                (USERS_CSV, OutputValue::Text(users_csv)),
                (POSTS_CSV, OutputValue::Text(posts_csv)),
                (COMMENTS_CSV, OutputValue::Text(comments_csv)),
                (TOTAL_ITEMS_SCRAPED, OutputValue::Count(total_items_scraped)),
            ],
        }
    }

    /// A failed run: the error output alone.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            entries: vec![(ERROR, OutputValue::Text(message.into()))],
        }
    }

    pub fn entries(&self) -> &[(&'static str, OutputValue)] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&OutputValue> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| value)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.get(ERROR).and_then(OutputValue::as_text)
    }

    pub fn is_error(&self) -> bool {
        self.get(ERROR).is_some()
    }

    pub fn total_items(&self) -> Option<u64> {
        self.get(TOTAL_ITEMS_SCRAPED).and_then(OutputValue::as_count)
    }

    /// Typed view of a successful run; `None` for an error run.
    pub fn to_scraper_output(&self) -> Option<ScraperOutput> {
        if self.is_error() {
            return None;
        }
        let text = |name: &str| self.get(name).and_then(OutputValue::as_text).map(str::to_string);
        Some(ScraperOutput {
            users_csv: text(USERS_CSV)?,
            posts_csv: text(POSTS_CSV)?,
            comments_csv: text(COMMENTS_CSV)?,
            total_items_scraped: self.total_items()?,
            error: None,
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.entries {
            let value = match value {
                OutputValue::Text(text) => Value::String(text.clone()),
                OutputValue::Count(count) => Value::from(*count),
            };
            map.insert((*name).to_string(), value);
        }
        Value::Object(map)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Lifestyle,
    Business,
    Sports,
}

impl Category {
    /// Wire names of every accepted category, in declaration order.
    pub const ALL: [&'static str; 4] = ["technology", "lifestyle", "business", "sports"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "technology" => Some(Self::Technology),
            "lifestyle" => Some(Self::Lifestyle),
            "business" => Some(Self::Business),
            "sports" => Some(Self::Sports),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Lifestyle => "lifestyle",
            Self::Business => "business",
            Self::Sports => "sports",
        }
    }
}

/// Post entity - a blog post or article.
///
/// Posts carry no secret fields and serialize directly onto the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Assigned by the store on append; empty until then.
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub is_published: bool,
    /// Set iff the post was created published; `null` on the wire otherwise.
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: u32,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post. The id is left empty for the store to fill;
    /// the read-time estimate is derived from the content.
    pub fn new(
        author_id: String,
        title: String,
        content: String,
        category: Category,
        tags: Vec<String>,
        is_published: bool,
    ) -> Self {
        let now = Utc::now();
        let read_time = reading_time_minutes(&content);
        Self {
            id: String::new(),
            title,
            content,
            author_id,
            category,
            tags,
            is_published,
            published_at: is_published.then_some(now),
            read_time,
            created_at: now,
        }
    }
}

/// Estimated minutes to read `content`, at 200 words per minute, rounded up.
pub fn reading_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(200) as u32
}

//! Collection store ports - insertion-ordered tables with pagination.

use async_trait::async_trait;

use crate::domain::{Post, StoredFile, User};
use crate::error::StoreError;

/// Pagination window. Defaults to the first page of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: usize,
    pub limit: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl Page {
    /// Build a window from raw query values. Absent, non-numeric, or zero
    /// values fall back to the defaults.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        fn parse_or(value: Option<&str>, fallback: usize) -> usize {
            value
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| *n >= 1)
                .unwrap_or(fallback)
        }

        let default = Self::default();
        Self {
            page: parse_or(page, default.page),
            limit: parse_or(limit, default.limit),
        }
    }

    /// Zero-based offset of the first item in this window.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.limit
    }
}

/// Optional exact-match filters for post listings, AND-combined.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Exact author id.
    pub author: Option<String>,
    /// Exact category wire name. An unknown name simply matches nothing.
    pub category: Option<String>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        if let Some(author) = &self.author {
            if post.author_id != *author {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if post.category.as_str() != category {
                return false;
            }
        }
        true
    }
}

/// User table. Doubles as the credential store: emails are unique and
/// lookups by email back the login flow.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Store a user, assigning its id. Fails with `Duplicate` when the
    /// email is already present; exactly one record per email is retained.
    async fn append(&self, user: User) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: &str) -> Option<User>;

    async fn find_by_email(&self, email: &str) -> Option<User>;

    /// Page of users in insertion order, plus the total count.
    async fn list(&self, page: Page) -> (Vec<User>, usize);
}

/// Post table.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Store a post, assigning its id.
    async fn append(&self, post: Post) -> Result<Post, StoreError>;

    async fn find_by_id(&self, id: &str) -> Option<Post>;

    /// Page of posts matching `filter`, in insertion order, plus the total
    /// filtered count before slicing.
    async fn list(&self, filter: &PostFilter, page: Page) -> (Vec<Post>, usize);
}

/// Uploaded-file metadata table.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store a file record. The time-based id is kept as constructed.
    async fn append(&self, file: StoredFile) -> Result<StoredFile, StoreError>;

    async fn find_by_id(&self, id: &str) -> Option<StoredFile>;

    async fn list(&self, page: Page) -> (Vec<StoredFile>, usize);
}

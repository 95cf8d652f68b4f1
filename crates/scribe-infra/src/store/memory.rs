//! In-memory collection stores.
//!
//! Each table is an insertion-ordered vector behind its own `RwLock`.
//! Id assignment (`len + 1`, stringified) happens while the write lock is
//! held, so concurrent appends can never observe the same length.
//! Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use scribe_core::StoreError;
use scribe_core::domain::{Post, StoredFile, User};
use scribe_core::ports::{FileStore, Page, PostFilter, PostStore, UserStore};

/// Insertion-ordered table shared by the three stores.
struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    async fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().await.iter().find(|row| pred(row)).cloned()
    }

    /// Page slice of the rows matching `pred`, plus the filtered total.
    async fn list(&self, pred: impl Fn(&T) -> bool, page: Page) -> (Vec<T>, usize) {
        let rows = self.rows.read().await;
        let filtered: Vec<&T> = rows.iter().filter(|row| pred(row)).collect();
        let total = filtered.len();
        let slice = filtered
            .into_iter()
            .skip(page.offset())
            .take(page.limit)
            .cloned()
            .collect();
        (slice, total)
    }
}

/// In-memory user table; doubles as the credential store.
pub struct InMemoryUsers {
    table: Table<User>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryUsers {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUsers {
    async fn append(&self, mut user: User) -> Result<User, StoreError> {
        let mut rows = self.table.rows.write().await;

        // Uniqueness check and append must share the lock, or two
        // registrations racing on the same email could both pass.
        if rows.iter().any(|existing| existing.email == user.email) {
            return Err(StoreError::Duplicate(
                "A user with this email address already exists".to_string(),
            ));
        }

        user.id = (rows.len() + 1).to_string();
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Option<User> {
        self.table.find(|user| user.id == id).await
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.table.find(|user| user.email == email).await
    }

    async fn list(&self, page: Page) -> (Vec<User>, usize) {
        self.table.list(|_| true, page).await
    }
}

/// In-memory post table.
pub struct InMemoryPosts {
    table: Table<Post>,
}

impl InMemoryPosts {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryPosts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPosts {
    async fn append(&self, mut post: Post) -> Result<Post, StoreError> {
        let mut rows = self.table.rows.write().await;
        post.id = (rows.len() + 1).to_string();
        rows.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &str) -> Option<Post> {
        self.table.find(|post| post.id == id).await
    }

    async fn list(&self, filter: &PostFilter, page: Page) -> (Vec<Post>, usize) {
        self.table.list(|post| filter.matches(post), page).await
    }
}

/// In-memory uploaded-file metadata table.
pub struct InMemoryFiles {
    table: Table<StoredFile>,
}

impl InMemoryFiles {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryFiles {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileStore for InMemoryFiles {
    async fn append(&self, file: StoredFile) -> Result<StoredFile, StoreError> {
        // File ids are time-based and assigned at construction.
        let mut rows = self.table.rows.write().await;
        rows.push(file.clone());
        Ok(file)
    }

    async fn find_by_id(&self, id: &str) -> Option<StoredFile> {
        self.table.find(|file| file.id == id).await
    }

    async fn list(&self, page: Page) -> (Vec<StoredFile>, usize) {
        self.table.list(|_| true, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::domain::Category;

    fn user(name: &str, email: &str) -> User {
        User::new(
            name.to_string(),
            email.to_string(),
            "hash".to_string(),
            "user".to_string(),
        )
    }

    fn post(author: &str, category: Category, n: usize) -> Post {
        Post::new(
            author.to_string(),
            format!("Post number {n}"),
            "Some content long enough to pass validation".to_string(),
            category,
            vec![],
            false,
        )
    }

    #[tokio::test]
    async fn appends_assign_sequential_string_ids() {
        let users = InMemoryUsers::new();
        let first = users.append(user("Jane", "jane@x.io")).await.unwrap();
        let second = users.append(user("John", "john@x.io")).await.unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(users.find_by_id("2").await.unwrap().email, "john@x.io");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_and_one_record_retained() {
        let users = InMemoryUsers::new();
        users.append(user("Jane", "jane@x.io")).await.unwrap();

        let err = users.append(user("Impostor", "jane@x.io")).await;
        assert!(matches!(err, Err(StoreError::Duplicate(_))));

        let (_, total) = users.list(Page::default()).await;
        assert_eq!(total, 1);
        assert_eq!(users.find_by_email("jane@x.io").await.unwrap().name, "Jane");
    }

    #[tokio::test]
    async fn pagination_slices_and_reports_full_total() {
        let posts = InMemoryPosts::new();
        for n in 1..=25 {
            posts
                .append(post("1", Category::Technology, n))
                .await
                .unwrap();
        }

        let filter = PostFilter::default();
        let (page2, total) = posts.list(&filter, Page { page: 2, limit: 10 }).await;
        assert_eq!(total, 25);
        assert_eq!(page2.len(), 10);
        assert_eq!(page2.first().unwrap().id, "11");
        assert_eq!(page2.last().unwrap().id, "20");

        let (page3, total) = posts.list(&filter, Page { page: 3, limit: 10 }).await;
        assert_eq!(total, 25);
        assert_eq!(page3.len(), 5);
        assert_eq!(page3.first().unwrap().id, "21");
        assert_eq!(page3.last().unwrap().id, "25");
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_with_unchanged_total() {
        let posts = InMemoryPosts::new();
        for n in 1..=3 {
            posts.append(post("1", Category::Sports, n)).await.unwrap();
        }

        let (slice, total) = posts
            .list(&PostFilter::default(), Page { page: 5, limit: 10 })
            .await;
        assert!(slice.is_empty());
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn post_filters_and_combine() {
        let posts = InMemoryPosts::new();
        posts.append(post("1", Category::Technology, 1)).await.unwrap();
        posts.append(post("1", Category::Sports, 2)).await.unwrap();
        posts.append(post("2", Category::Technology, 3)).await.unwrap();

        let filter = PostFilter {
            author: Some("1".to_string()),
            category: Some("technology".to_string()),
        };
        let (slice, total) = posts.list(&filter, Page::default()).await;
        assert_eq!(total, 1);
        assert_eq!(slice[0].id, "1");

        let author_only = PostFilter {
            author: Some("1".to_string()),
            category: None,
        };
        let (_, total) = posts.list(&author_only, Page::default()).await;
        assert_eq!(total, 2);

        let unknown_category = PostFilter {
            author: None,
            category: Some("politics".to_string()),
        };
        let (slice, total) = posts.list(&unknown_category, Page::default()).await;
        assert!(slice.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn file_ids_are_kept_as_constructed() {
        let files = InMemoryFiles::new();
        let record = StoredFile::new(
            "file-1-abc.png".to_string(),
            "http://localhost/uploads/file-1-abc.png".to_string(),
            42,
            "image/png".to_string(),
            None,
        );
        let id = record.id.clone();

        let stored = files.append(record).await.unwrap();
        assert_eq!(stored.id, id);
        assert!(stored.id.starts_with("file_"));
        assert!(files.find_by_id(&id).await.is_some());
    }
}

use async_trait::async_trait;

use crate::domain::{Post, PostDraft, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an already-persisted entity.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
///
/// Lookups return `Option<User>`: a missing row is an explicit absence,
/// never a stand-in object. Presentation decides what to show instead.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i64> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
///
/// `create` and `update` take a [`PostDraft`], so bulk input can only ever
/// touch allow-listed columns.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Insert a new post from a draft. Missing required columns surface as
    /// storage constraint errors.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Apply a draft's set fields to an existing post.
    async fn update(&self, id: i64, draft: PostDraft) -> Result<Post, RepoError>;

    /// All published posts, newest first, each with its author when the
    /// author row still exists.
    async fn find_published(&self) -> Result<Vec<(Post, Option<User>)>, RepoError>;

    /// All posts owned by one user, newest first.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Post>, RepoError>;
}

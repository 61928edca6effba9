//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use quill_core::domain::{Post, PostDraft, User};
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut model = <post::ActiveModel as ActiveModelTrait>::default();
        model.apply(&draft);

        // Columns the draft leaves unset stay out of the INSERT, so the
        // table defaults (is_published = false) take over; missing required
        // columns surface as constraint errors from the database.
        let model = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn update(&self, id: i64, draft: PostDraft) -> Result<Post, RepoError> {
        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut model = existing.into_active_model();
        model.apply(&draft);

        let model = model.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn find_published(&self) -> Result<Vec<(Post, Option<User>)>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::IsPublished.eq(true))
            .order_by_desc(post::Column::PublishedDate)
            .find_also_related(UserEntity)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|(post, author)| (post.into(), author.map(Into::into)))
            .collect())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

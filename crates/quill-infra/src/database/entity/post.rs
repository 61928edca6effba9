//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use quill_core::domain::{Post, PostDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub category: String,
    pub featured_image: String,
    pub published_date: DateTimeWithTimeZone,
    pub is_published: bool,
    pub user_id: i64,
    pub slug: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamp the storage-maintained timestamps on every write.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now().into();
        if insert && !matches!(self.created_at, ActiveValue::Set(_)) {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

impl ActiveModel {
    /// Copy every field the draft sets onto this model.
    ///
    /// The draft carries only allow-listed columns, so this is the single
    /// place where bulk input reaches the posts table: `id`, `created_at`
    /// and `updated_at` are unreachable from here.
    pub fn apply(&mut self, draft: &PostDraft) {
        if let Some(v) = &draft.title {
            self.title = Set(v.clone());
        }
        if let Some(v) = &draft.excerpt {
            self.excerpt = Set(v.clone());
        }
        if let Some(v) = &draft.body {
            self.body = Set(v.clone());
        }
        if let Some(v) = &draft.category {
            self.category = Set(v.clone());
        }
        if let Some(v) = &draft.featured_image {
            self.featured_image = Set(v.clone());
        }
        if let Some(v) = draft.published_date {
            self.published_date = Set(v.into());
        }
        if let Some(v) = draft.is_published {
            self.is_published = Set(v);
        }
        if let Some(v) = draft.user_id {
            self.user_id = Set(v);
        }
        if let Some(v) = &draft.slug {
            self.slug = Set(Some(v.clone()));
        }
    }
}

/// Conversion from SeaORM Model to the domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            excerpt: model.excerpt,
            body: model.body,
            category: model.category,
            featured_image: model.featured_image,
            published_date: model.published_date.into(),
            is_published: model.is_published,
            user_id: model.user_id,
            slug: model.slug,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from the domain Post to a fully-set ActiveModel, used when
/// saving an already-loaded entity.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            excerpt: Set(post.excerpt),
            body: Set(post.body),
            category: Set(post.category),
            featured_image: Set(post.featured_image),
            published_date: Set(post.published_date.into()),
            is_published: Set(post.is_published),
            user_id: Set(post.user_id),
            slug: Set(post.slug),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}

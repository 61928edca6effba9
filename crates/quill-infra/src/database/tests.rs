#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use quill_core::domain::{Post, PostDraft};
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, PostRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn post_model(id: i64, title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            title: title.to_owned(),
            excerpt: "An excerpt".to_owned(),
            body: "The body".to_owned(),
            category: "rust".to_owned(),
            featured_image: "post.png".to_owned(),
            published_date: now.into(),
            is_published: true,
            user_id: 1,
            slug: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn user_model(id: i64, name: &str) -> user::Model {
        let now = chrono::Utc::now();
        user::Model {
            id,
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            password_hash: "hash".to_owned(),
            email_verified_at: Some(now.into()),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(3, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(3).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 3);
    }

    #[tokio::test]
    async fn test_create_from_draft() {
        // Postgres inserts go through RETURNING, so the mock answers with the
        // stored row - is_published comes back false from the table default.
        let mut stored = post_model(1, "Hello World");
        stored.is_published = false;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let draft = PostDraft {
            title: Some("Hello World".to_owned()),
            excerpt: Some("An excerpt".to_owned()),
            body: Some("The body".to_owned()),
            category: Some("rust".to_owned()),
            featured_image: Some("post.png".to_owned()),
            published_date: Some(chrono::Utc::now()),
            user_id: Some(1),
            ..Default::default()
        };

        let post = repo.create(draft).await.unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Hello World");
        assert!(!post.is_published);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.update(404, PostDraft::default()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_published_resolves_authors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                (post_model(1, "First"), user_model(1, "Alice")),
                (post_model(2, "Second"), user_model(1, "Alice")),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let rows = repo.find_published().await.unwrap();

        assert_eq!(rows.len(), 2);
        let (post, author) = &rows[0];
        assert_eq!(post.title, "First");
        assert_eq!(author.as_ref().map(|a| a.name.as_str()), Some("Alice"));
    }

    #[tokio::test]
    async fn test_find_by_user_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(5, "Mine")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.find_by_user_id(1).await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_id, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Result<(), _> = BaseRepository::<Post, i64>::delete(&repo, 404).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(1, "Alice")]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let found = repo.find_by_email("alice@example.com").await.unwrap();

        assert_eq!(found.map(|u| u.id), Some(1));
    }

    #[tokio::test]
    async fn test_find_missing_user_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<user::Model>::new()])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let found: Option<quill_core::domain::User> = repo.find_by_id(99).await.unwrap();

        // Absence is explicit: no stand-in object at the data layer.
        assert!(found.is_none());
    }
}

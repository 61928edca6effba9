//! HTTP handlers and route configuration.

mod auth;
mod dashboard;
mod health;
mod pages;

use actix_web::web;

/// Configure all application routes.
///
/// Public pages sit at the top level; everything under `/dashboard` is
/// gated by the `VerifiedUser` extractor its handlers take (valid token
/// plus verified account).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/", web::get().to(pages::home))
        .route("/category/{category}", web::get().to(pages::category))
        .route("/health", web::get().to(health::health_check))
        // Auth routes
        .service(web::scope("/auth").route("/login", web::post().to(auth::login)))
        // Dashboard routes
        .service(
            web::scope("/dashboard")
                .service(
                    web::resource("")
                        .name("dashboard")
                        .route(web::get().to(dashboard::index)),
                )
                .route("/post/add", web::get().to(dashboard::index))
                .route("/category/add", web::get().to(dashboard::index)),
        );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::header;
    use actix_web::{App, test, web};
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

    use quill_core::ports::{PasswordService, TokenService};
    use quill_infra::auth::{JwtConfig, JwtTokenService};
    use quill_infra::database::entity::{post, user};
    use quill_infra::Argon2PasswordService;
    use quill_shared::dto::AuthResponse;

    use crate::state::AppState;

    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "quill-test".to_string(),
        }))
    }

    fn password_service() -> Arc<dyn PasswordService> {
        Arc::new(Argon2PasswordService::new())
    }

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

    fn user_model(id: i64, name: &str, password_hash: &str) -> user::Model {
        let now = chrono::Utc::now();
        user::Model {
            id,
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            password_hash: password_hash.to_owned(),
            email_verified_at: Some(now.into()),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    macro_rules! spawn_app {
        ($db:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::with_connection($db)))
                    .app_data(web::Data::new(token_service()))
                    .app_data(web::Data::new(password_service()))
                    .configure(super::configure_routes),
            )
            .await
        };
    }

    async fn read_html(resp: actix_web::dev::ServiceResponse) -> String {
        let body = test::read_body(resp).await;
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_home_renders_published_posts() {
        let db: DatabaseConnection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![(
                post_model(1, "Hello World"),
                user_model(1, "Alice", "hash"),
            )]])
            .into_connection();

        let app = spawn_app!(db);

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let html = read_html(resp).await;
        assert!(html.contains("Hello World"));
        assert!(html.contains("Alice"));
    }

    #[actix_web::test]
    async fn test_category_renders_landing_for_any_value() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![(
                post_model(1, "Hello World"),
                user_model(1, "Alice", "hash"),
            )]])
            .into_connection();

        let app = spawn_app!(db);

        let req = test::TestRequest::get().uri("/category/anything").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let html = read_html(resp).await;
        // No per-category filtering is wired: the landing page comes back.
        assert!(html.contains("Hello World"));
    }

    #[actix_web::test]
    async fn test_dashboard_requires_token() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let app = spawn_app!(db);

        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        let html = read_html(resp).await;
        assert!(!html.contains("Dashboard"));
    }

    #[actix_web::test]
    async fn test_dashboard_rejects_unverified_account() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let tokens = token_service();
        let token = tokens.generate_token(1, "alice@example.com", false).unwrap();

        let app = spawn_app!(db);

        let req = test::TestRequest::get()
            .uri("/dashboard")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_dashboard_renders_for_verified_account() {
        // One lookup for the account, one for its posts.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(1, "Alice", "hash")]])
            .append_query_results(vec![vec![post_model(1, "My Draft")]])
            .into_connection();

        let tokens = token_service();
        let token = tokens.generate_token(1, "alice@example.com", true).unwrap();

        let app = spawn_app!(db);

        let req = test::TestRequest::get()
            .uri("/dashboard")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let html = read_html(resp).await;
        assert!(html.contains("Alice"));
        assert!(html.contains("My Draft"));
    }

    #[actix_web::test]
    async fn test_add_routes_render_dashboard_view() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(1, "Alice", "hash")]])
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let tokens = token_service();
        let token = tokens.generate_token(1, "alice@example.com", true).unwrap();

        let app = spawn_app!(db);

        let req = test::TestRequest::get()
            .uri("/dashboard/post/add")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let html = read_html(resp).await;
        // No distinct add-post view exists; the dashboard page is served.
        assert!(html.contains("Dashboard"));
    }

    #[actix_web::test]
    async fn test_login_returns_token() {
        let passwords = password_service();
        let hash = passwords.hash("password123").unwrap();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(1, "Alice", &hash)]])
            .into_connection();

        let app = spawn_app!(db);

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({
                "email": "alice@example.com",
                "password": "password123",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let auth: AuthResponse = test::read_body_json(resp).await;
        assert!(!auth.access_token.is_empty());
        assert_eq!(auth.token_type, "Bearer");
    }

    #[actix_web::test]
    async fn test_login_rejects_wrong_password() {
        let passwords = password_service();
        let hash = passwords.hash("password123").unwrap();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(1, "Alice", &hash)]])
            .into_connection();

        let app = spawn_app!(db);

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({
                "email": "alice@example.com",
                "password": "not-the-password",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}

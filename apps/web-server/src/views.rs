//! Askama views for the public site and the dashboard.

use askama::Template;

use quill_core::domain::{Post, User};

/// Renders exactly one post.
///
/// The only state is the post itself plus the author resolved for display.
/// A missing author row falls back to the guest placeholder here, in the
/// view layer - repositories report absence as `None`.
#[derive(Template)]
#[template(path = "post_item.html")]
pub struct PostItem {
    pub post: Post,
    pub author: User,
}

impl PostItem {
    pub fn new(post: Post, author: Option<User>) -> Self {
        Self {
            post,
            author: author.unwrap_or_else(User::placeholder),
        }
    }
}

/// The public landing page.
#[derive(Template)]
#[template(path = "welcome.html")]
pub struct WelcomePage {
    /// Pre-rendered post fragments, newest first.
    pub items: Vec<String>,
}

/// The dashboard page, shown for every dashboard route.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub name: String,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: 1,
            title: "Hello World".to_string(),
            excerpt: "A short excerpt".to_string(),
            body: "The body".to_string(),
            category: "rust".to_string(),
            featured_image: "post.png".to_string(),
            published_date: now,
            is_published: true,
            user_id: 1,
            slug: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_post_item_renders_post_fields() {
        let mut author = User::placeholder();
        author.name = "Alice".to_string();

        let html = PostItem::new(sample_post(), Some(author)).render().unwrap();

        assert!(html.contains("Hello World"));
        assert!(html.contains("rust"));
        assert!(html.contains("Alice"));
    }

    #[test]
    fn test_post_item_falls_back_to_placeholder_author() {
        let html = PostItem::new(sample_post(), None).render().unwrap();

        assert!(html.contains("Guest"));
    }

    #[test]
    fn test_welcome_page_embeds_items() {
        let page = WelcomePage {
            items: vec!["<article>one</article>".to_string()],
        };

        let html = page.render().unwrap();

        assert!(html.contains("<article>one</article>"));
    }
}

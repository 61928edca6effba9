//! Post factory - randomized, schema-conformant records for seeding and tests.

use chrono::{NaiveDate, NaiveTime, Utc};
use fake::Fake;
use fake::faker::chrono::en::Date;
use fake::faker::lorem::en::{Paragraphs, Sentence, Sentences};

use crate::domain::PostDraft;

/// Every generated post points at the same placeholder image.
pub const FEATURED_IMAGE: &str = "post.png";

/// Generated posts are owned by the first seeded user.
pub const SEED_USER_ID: i64 = 1;

type State = Box<dyn Fn(&mut PostDraft) + Send + Sync>;

/// Builds [`PostDraft`]s with plausible random content.
///
/// [`definition`](Self::definition) is the base state; named states such as
/// [`published`](Self::published) are transforms applied on top of it, in
/// registration order, by [`make`](Self::make). Fields a state does not touch
/// keep their base values.
#[derive(Default)]
pub struct PostFactory {
    states: Vec<State>,
}

impl PostFactory {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// The factory's default state.
    pub fn definition() -> PostDraft {
        let mut category: String = Sentence(3..8).fake();
        category.truncate(100);

        let date: NaiveDate = Date().fake();

        PostDraft {
            title: Some(Sentence(15..16).fake()),
            excerpt: Some(Sentences(3..4).fake::<Vec<String>>().join(" ")),
            body: Some(Paragraphs(15..16).fake::<Vec<String>>().join("\n\n")),
            category: Some(category),
            featured_image: Some(FEATURED_IMAGE.to_string()),
            published_date: Some(date.and_time(NaiveTime::MIN).and_utc()),
            // is_published is left unset: the posts table defaults it to false.
            is_published: None,
            user_id: Some(SEED_USER_ID),
            slug: None,
        }
    }

    /// Register an arbitrary override applied after the base definition.
    pub fn state(mut self, f: impl Fn(&mut PostDraft) + Send + Sync + 'static) -> Self {
        self.states.push(Box::new(f));
        self
    }

    /// Marks the post as published right now.
    pub fn published(self) -> Self {
        self.state(|draft| {
            draft.is_published = Some(true);
            draft.published_date = Some(Utc::now());
        })
    }

    /// Produce a draft: base definition with all registered states folded in.
    pub fn make(&self) -> PostDraft {
        let mut draft = Self::definition();
        for state in &self.states {
            state(&mut draft);
        }
        draft
    }
}

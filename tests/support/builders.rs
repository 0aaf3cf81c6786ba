// tests/support/builders.rs
use coinpress_core::application::commands::articles::CreateArticleCommand;
use coinpress_core::domain::article::{Article, ArticleBody, ArticleId, ArticleTitle};
use coinpress_core::domain::slug::Slug;

use super::mocks::fixed_now;

pub fn create_article(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .body("Markets moved overnight.")
        .build()
        .unwrap()
}

pub fn create_article_with_slug(title: &str, slug: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .body("Markets moved overnight.")
        .slug(slug)
        .build()
        .unwrap()
}

/// Article entity for exercising the slug service without the command layer.
pub struct ArticleBuilder {
    title: String,
    body: String,
    id: Option<i64>,
    slug: Option<String>,
}

impl ArticleBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: "Markets moved overnight.".to_string(),
            id: None,
            slug: None,
        }
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    /// Stored under `id`; requires a slug.
    pub fn persisted(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn build(self) -> Article {
        let article = Article::draft(
            ArticleTitle::new(self.title).unwrap(),
            ArticleBody::new(self.body).unwrap(),
            fixed_now(),
        );
        match (self.id, self.slug) {
            (Some(id), Some(slug)) => {
                article.into_persisted(ArticleId::new(id).unwrap(), Slug::new(slug).unwrap())
            }
            (Some(_), None) => panic!("a persisted article needs a slug"),
            (None, Some(slug)) => {
                let mut article = article;
                article.set_slug(Slug::new(slug).unwrap(), fixed_now());
                article
            }
            (None, None) => article,
        }
    }
}

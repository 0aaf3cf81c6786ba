// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleBody, ArticleTitle},
        category::CategoryId,
        slug::Slug,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    /// Explicit slug; when absent one is derived from the title.
    pub slug: Option<String>,
    pub category_id: Option<i64>,
    pub publish: bool,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    slug: Option<String>,
    category_id: Option<i64>,
    publish: bool,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> ApplicationResult<CreateArticleCommand> {
        Ok(CreateArticleCommand {
            title: self
                .title
                .ok_or_else(|| ApplicationError::validation("title is required"))?,
            body: self
                .body
                .ok_or_else(|| ApplicationError::validation("body is required"))?,
            slug: self.slug,
            category_id: self.category_id,
            publish: self.publish,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let slug = command.slug.map(Slug::new).transpose()?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;
        let now = self.clock.now();

        let mut article = Article::draft(title, body, now);
        if let Some(slug) = slug {
            article.set_slug(slug, now);
        }
        article.set_category(category_id, now);
        if command.publish {
            article.publish(now);
        }

        self.hooks.on_before_create(&mut article).await?;

        let created = self.write_repo.insert(&article).await?;
        tracing::info!(
            id = ?created.id,
            slug = ?created.slug.as_ref().map(|s| s.as_str()),
            "article created"
        );
        created.try_into()
    }
}

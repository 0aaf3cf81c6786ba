use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleBody, ArticleId, ArticleTitle},
        category::CategoryId,
        slug::Slug,
    },
};

#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Explicit slug; wins over the one derived from a changed title.
    pub slug: Option<String>,
    pub category_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let title = command.title.map(ArticleTitle::new).transpose()?;
        let body = command.body.map(ArticleBody::new).transpose()?;
        let slug = command.slug.map(Slug::new).transpose()?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;

        let mut article = self.load(id).await?;
        let now = self.clock.now();

        if let Some(title) = title {
            article.set_title(title, now);
        }
        if let Some(body) = body {
            article.set_body(body, now);
        }
        if let Some(slug) = slug {
            article.set_slug(slug, now);
        }
        if category_id.is_some() {
            article.set_category(category_id, now);
        }

        self.save_changes(article).await
    }
}

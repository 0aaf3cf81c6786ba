use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

#[derive(Default)]
pub struct ListArticlesQuery {
    pub include_drafts: bool,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        self.read_repo
            .list(query.include_drafts)
            .await?
            .into_iter()
            .map(ArticleDto::try_from)
            .collect()
    }
}

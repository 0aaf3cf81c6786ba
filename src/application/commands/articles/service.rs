// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
        hooks::SaveHooks,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) hooks: Arc<SaveHooks<Article>>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        hooks: Arc<SaveHooks<Article>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            hooks,
            clock,
        }
    }

    pub(super) async fn load(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Run the update hooks and write the article's dirty fields. A clean
    /// article is returned as is without touching the store.
    pub(super) async fn save_changes(&self, mut article: Article) -> ApplicationResult<ArticleDto> {
        if !article.is_dirty() {
            return article.try_into();
        }

        self.hooks.on_before_update(&mut article).await?;
        let updated = self.write_repo.update(&article).await?;
        tracing::info!(
            id = ?updated.id,
            slug = ?updated.slug.as_ref().map(|s| s.as_str()),
            fields = ?article.dirty_fields().iter().collect::<Vec<_>>(),
            "article updated"
        );
        updated.try_into()
    }
}

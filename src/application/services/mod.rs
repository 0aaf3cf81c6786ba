// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, categories::CategoryCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, categories::CategoryQueryService},
    },
    domain::{
        article::{Article, ArticleReadRepository, ArticleWriteRepository},
        category::{Category, CategoryReadRepository, CategoryWriteRepository},
        hooks::SaveHooks,
        slug::{SlugPolicy, SlugRepository, SlugService},
    },
};

pub struct ArticleRepositories {
    pub write: Arc<dyn ArticleWriteRepository>,
    pub read: Arc<dyn ArticleReadRepository>,
    pub slugs: Arc<dyn SlugRepository<Article>>,
}

pub struct CategoryRepositories {
    pub write: Arc<dyn CategoryWriteRepository>,
    pub read: Arc<dyn CategoryReadRepository>,
    pub slugs: Arc<dyn SlugRepository<Category>>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    slugger: Arc<dyn SlugGenerator>,
}

impl ApplicationServices {
    pub fn new(
        articles: ArticleRepositories,
        categories: CategoryRepositories,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_policy: SlugPolicy,
    ) -> Self {
        let article_slugs = Arc::new(SlugService::new(
            articles.slugs,
            Arc::clone(&slugger),
            slug_policy,
        ));
        let article_hooks = Arc::new(SaveHooks::<Article>::new().with(article_slugs));

        let category_slugs = Arc::new(SlugService::new(
            categories.slugs,
            Arc::clone(&slugger),
            slug_policy,
        ));
        let category_hooks = Arc::new(SaveHooks::<Category>::new().with(category_slugs));

        let article_commands = Arc::new(ArticleCommandService::new(
            articles.write,
            Arc::clone(&articles.read),
            article_hooks,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(articles.read));

        let category_commands = Arc::new(CategoryCommandService::new(
            categories.write,
            Arc::clone(&categories.read),
            category_hooks,
            clock,
        ));
        let category_queries = Arc::new(CategoryQueryService::new(categories.read));

        Self {
            article_commands,
            article_queries,
            category_commands,
            category_queries,
            slugger,
        }
    }

    /// Normalized base a source text would produce, before any collision suffix.
    pub fn preview_slug(&self, text: &str) -> String {
        self.slugger.slugify(text)
    }
}

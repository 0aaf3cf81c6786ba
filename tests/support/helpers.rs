// tests/support/helpers.rs
use std::sync::Arc;

use coinpress_core::application::services::{
    ApplicationServices, ArticleRepositories, CategoryRepositories,
};
use coinpress_core::domain::article::Article;
use coinpress_core::domain::slug::{SlugPolicy, SlugRepository};

use super::mocks::{CountingSlugGenerator, DummyClock, InMemoryArticleStore, InMemoryCategoryStore};

/// Application services wired over in-memory stores, with handles kept for
/// inspecting what was written.
pub struct TestApp {
    pub services: ApplicationServices,
    pub articles: Arc<InMemoryArticleStore>,
    pub categories: Arc<InMemoryCategoryStore>,
    pub slugger: Arc<CountingSlugGenerator>,
}

pub fn test_app() -> TestApp {
    test_app_with_policy(SlugPolicy::default())
}

pub fn test_app_with_policy(policy: SlugPolicy) -> TestApp {
    let articles = Arc::new(InMemoryArticleStore::new());
    let slugs: Arc<dyn SlugRepository<Article>> = articles.clone();
    build(articles, slugs, policy)
}

/// Same wiring, but article slug lookups go to `slugs` instead of the store.
pub fn test_app_with_article_slugs(slugs: Arc<dyn SlugRepository<Article>>) -> TestApp {
    build(Arc::new(InMemoryArticleStore::new()), slugs, SlugPolicy::default())
}

fn build(
    articles: Arc<InMemoryArticleStore>,
    article_slugs: Arc<dyn SlugRepository<Article>>,
    policy: SlugPolicy,
) -> TestApp {
    let categories = Arc::new(InMemoryCategoryStore::new());
    let slugger = Arc::new(CountingSlugGenerator::default());

    let services = ApplicationServices::new(
        ArticleRepositories {
            write: articles.clone(),
            read: articles.clone(),
            slugs: article_slugs,
        },
        CategoryRepositories {
            write: categories.clone(),
            read: categories.clone(),
            slugs: categories.clone(),
        },
        Arc::new(DummyClock),
        slugger.clone(),
        policy,
    );

    TestApp {
        services,
        articles,
        categories,
        slugger,
    }
}

use coinpress_core::application::commands::articles::CreateArticleCommand;
use coinpress_core::application::error::ApplicationError;
use coinpress_core::application::queries::articles::{
    GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery,
};
use coinpress_core::domain::errors::DomainError;
mod support;
use support::{create_article, test_app};

#[tokio::test]
async fn created_article_is_reachable_by_slug_and_id() {
    let app = test_app();
    let created = app
        .services
        .article_commands
        .create_article(create_article("Spot ETF Approved"))
        .await
        .unwrap();

    let by_slug = app
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery {
            slug: "spot-etf-approved".into(),
        })
        .await
        .unwrap();
    let by_id = app
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap();

    assert_eq!(by_slug, created);
    assert_eq!(by_id, created);
}

#[tokio::test]
async fn malformed_slug_lookup_is_a_validation_error() {
    let app = test_app();
    let err = app
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery {
            slug: "Not Valid".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
}

#[tokio::test]
async fn drafts_are_hidden_unless_requested() {
    let app = test_app();
    app.services
        .article_commands
        .create_article(create_article("Draft Piece"))
        .await
        .unwrap();
    app.services
        .article_commands
        .create_article(
            CreateArticleCommand::builder()
                .title("Live Piece")
                .body("Out now.")
                .publish(true)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let public = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery::default())
        .await
        .unwrap();
    let all = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            include_drafts: true,
        })
        .await
        .unwrap();

    assert_eq!(public.len(), 1);
    assert_eq!(public[0].slug, "live-piece");
    assert!(public[0].published_at.is_some());
    assert_eq!(all.len(), 2);
}

#[test]
fn preview_slug_only_normalizes() {
    let app = test_app();
    assert_eq!(app.services.preview_slug("Ethereum Merge Recap"), "ethereum-merge-recap");
    assert_eq!(app.articles.slug_checks(), 0);
}

// src/presentation/cli.rs
use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use crate::application::{
    commands::{
        articles::{
            CreateArticleCommand, DeleteArticleCommand, SetPublishStateCommand,
            UpdateArticleCommand,
        },
        categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    },
    error::ApplicationError,
    queries::{
        articles::{GetArticleBySlugQuery, ListArticlesQuery},
        categories::GetCategoryBySlugQuery,
    },
    services::ApplicationServices,
};

#[derive(Debug, Parser)]
#[command(name = "coinpress")]
#[command(about = "Operator tooling for the coinpress article store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Article(ArticleCommand),
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Print the normalized slug base for some text without touching the store.
    SlugPreview {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum ArticleCommand {
    Create {
        title: String,
        #[arg(long)]
        body: String,
        /// Use this slug instead of deriving one from the title.
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        publish: bool,
    },
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        category: Option<i64>,
    },
    Publish {
        id: i64,
    },
    Unpublish {
        id: i64,
    },
    Delete {
        id: i64,
    },
    Show {
        slug: String,
    },
    List {
        #[arg(long)]
        drafts: bool,
    },
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum CategoryCommand {
    Create {
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Rename {
        id: i64,
        name: String,
        #[arg(long)]
        slug: Option<String>,
    },
    Delete {
        id: i64,
    },
    Show {
        slug: String,
    },
    List,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Application(#[from] ApplicationError),
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

fn render<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Execute a parsed command and return its JSON output.
pub async fn run(services: &ApplicationServices, command: Command) -> Result<String, CliError> {
    match command {
        Command::Article(command) => run_article(services, command).await,
        Command::Category(command) => run_category(services, command).await,
        Command::SlugPreview { text } => {
            let slug = services.preview_slug(&text.join(" "));
            render(&serde_json::json!({ "slug": slug }))
        }
    }
}

async fn run_article(
    services: &ApplicationServices,
    command: ArticleCommand,
) -> Result<String, CliError> {
    let commands = &services.article_commands;
    match command {
        ArticleCommand::Create {
            title,
            body,
            slug,
            category,
            publish,
        } => {
            let created = commands
                .create_article(CreateArticleCommand {
                    title,
                    body,
                    slug,
                    category_id: category,
                    publish,
                })
                .await?;
            render(&created)
        }
        ArticleCommand::Update {
            id,
            title,
            body,
            slug,
            category,
        } => {
            let updated = commands
                .update_article(UpdateArticleCommand {
                    id,
                    title,
                    body,
                    slug,
                    category_id: category,
                })
                .await?;
            render(&updated)
        }
        ArticleCommand::Publish { id } => {
            let article = commands
                .set_publish_state(SetPublishStateCommand { id, publish: true })
                .await?;
            render(&article)
        }
        ArticleCommand::Unpublish { id } => {
            let article = commands
                .set_publish_state(SetPublishStateCommand { id, publish: false })
                .await?;
            render(&article)
        }
        ArticleCommand::Delete { id } => {
            commands.delete_article(DeleteArticleCommand { id }).await?;
            render(&serde_json::json!({ "deleted": id }))
        }
        ArticleCommand::Show { slug } => {
            let article = services
                .article_queries
                .get_article_by_slug(GetArticleBySlugQuery { slug })
                .await?;
            render(&article)
        }
        ArticleCommand::List { drafts } => {
            let articles = services
                .article_queries
                .list_articles(ListArticlesQuery {
                    include_drafts: drafts,
                })
                .await?;
            render(&articles)
        }
    }
}

async fn run_category(
    services: &ApplicationServices,
    command: CategoryCommand,
) -> Result<String, CliError> {
    let commands = &services.category_commands;
    match command {
        CategoryCommand::Create {
            name,
            slug,
            description,
        } => {
            let created = commands
                .create_category(CreateCategoryCommand {
                    name,
                    slug,
                    description,
                })
                .await?;
            render(&created)
        }
        CategoryCommand::Rename { id, name, slug } => {
            let updated = commands
                .update_category(UpdateCategoryCommand {
                    slug,
                    ..UpdateCategoryCommand::rename(id, name)
                })
                .await?;
            render(&updated)
        }
        CategoryCommand::Delete { id } => {
            commands.delete_category(DeleteCategoryCommand { id }).await?;
            render(&serde_json::json!({ "deleted": id }))
        }
        CategoryCommand::Show { slug } => {
            let category = services
                .category_queries
                .get_category_by_slug(GetCategoryBySlugQuery { slug })
                .await?;
            render(&category)
        }
        CategoryCommand::List => {
            let categories = services.category_queries.list_categories().await?;
            render(&categories)
        }
    }
}

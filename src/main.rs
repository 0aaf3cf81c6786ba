use anyhow::Result;
use clap::Parser;
use coinpress_core::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ArticleRepositories, CategoryRepositories},
};
use coinpress_core::config::AppConfig;
use coinpress_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresCategoryReadRepository, PostgresCategoryWriteRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use coinpress_core::presentation::cli::{self, Cli, CliError};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        if let Some(CliError::Application(app_err)) = err.downcast_ref::<CliError>() {
            if app_err.is_conflict() {
                eprintln!("another write claimed the same slug first; re-run the command");
            }
        }
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let article_read = Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let category_read = Arc::new(PostgresCategoryReadRepository::new(pool.clone()));

    let articles = ArticleRepositories {
        write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        read: article_read.clone(),
        slugs: article_read,
    };
    let categories = CategoryRepositories {
        write: Arc::new(PostgresCategoryWriteRepository::new(pool.clone())),
        read: category_read.clone(),
        slugs: category_read,
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(
        articles,
        categories,
        clock,
        slugger,
        config.slug_policy(),
    );

    let output = cli::run(&services, cli.command).await?;
    println!("{output}");

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

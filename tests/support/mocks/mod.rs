// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod category_repos;
pub mod time;
pub mod util;

pub use article_repos::{FlakyArticleSlugs, InMemoryArticleStore};
pub use category_repos::InMemoryCategoryStore;
pub use time::fixed_now;
pub use util::{CountingSlugGenerator, DummyClock};

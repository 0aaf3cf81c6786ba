// src/domain/hooks.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Callback run by the command layer right before a record is written.
#[async_trait]
pub trait SaveHook<R: Send + Sync + 'static>: Send + Sync {
    async fn before_create(&self, _record: &mut R) -> DomainResult<()> {
        Ok(())
    }

    async fn before_update(&self, _record: &mut R) -> DomainResult<()> {
        Ok(())
    }
}

/// Ordered set of save hooks for one record type.
pub struct SaveHooks<R: Send + Sync + 'static> {
    hooks: Vec<Arc<dyn SaveHook<R>>>,
}

impl<R: Send + Sync + 'static> Default for SaveHooks<R> {
    fn default() -> Self {
        Self { hooks: Vec::new() }
    }
}

impl<R: Send + Sync + 'static> SaveHooks<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Arc<dyn SaveHook<R>>) -> &mut Self {
        self.hooks.push(hook);
        self
    }

    pub fn with(mut self, hook: Arc<dyn SaveHook<R>>) -> Self {
        self.register(hook);
        self
    }

    pub async fn on_before_create(&self, record: &mut R) -> DomainResult<()> {
        for hook in &self.hooks {
            hook.before_create(record).await?;
        }
        Ok(())
    }

    pub async fn on_before_update(&self, record: &mut R) -> DomainResult<()> {
        for hook in &self.hooks {
            hook.before_update(record).await?;
        }
        Ok(())
    }
}

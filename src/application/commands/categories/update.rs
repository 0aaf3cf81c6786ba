use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::{
        category::{CategoryId, CategoryName},
        slug::Slug,
    },
};

#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl UpdateCategoryCommand {
    pub fn rename(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let name = command.name.map(CategoryName::new).transpose()?;
        let slug = command.slug.map(Slug::new).transpose()?;

        let mut category = self.load(id).await?;
        let now = self.clock.now();

        if let Some(name) = name {
            category.rename(name, now);
        }
        if let Some(slug) = slug {
            category.set_slug(slug, now);
        }
        if command.description.is_some() {
            category.set_description(command.description, now);
        }

        if category.dirty_fields().is_empty() {
            return category.try_into();
        }

        self.hooks.on_before_update(&mut category).await?;
        let updated = self.write_repo.update(&category).await?;
        tracing::info!(id = %id, "category updated");
        updated.try_into()
    }

    pub async fn rename_category(
        &self,
        id: i64,
        name: impl Into<String>,
    ) -> ApplicationResult<CategoryDto> {
        self.update_category(UpdateCategoryCommand::rename(id, name))
            .await
    }
}

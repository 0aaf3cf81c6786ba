use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::{
        category::{Category, CategoryName},
        slug::Slug,
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = command.slug.map(Slug::new).transpose()?;
        let now = self.clock.now();

        let mut category = Category::draft(name, now);
        if let Some(slug) = slug {
            category.set_slug(slug, now);
        }
        category.set_description(command.description, now);

        self.hooks.on_before_create(&mut category).await?;

        let created = self.write_repo.insert(&category).await?;
        tracing::info!(id = ?created.id, "category created");
        created.try_into()
    }
}

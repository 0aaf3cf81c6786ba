use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::CategoryReadRepository, slug::Slug},
};

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

pub struct CategoryQueryService {
    read_repo: Arc<dyn CategoryReadRepository>,
}

impl CategoryQueryService {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_category_by_slug(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        let slug = Slug::new(query.slug)?;
        let category = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        category.try_into()
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        self.read_repo
            .list()
            .await?
            .into_iter()
            .map(CategoryDto::try_from)
            .collect()
    }
}

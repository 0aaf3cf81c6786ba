use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Category> for CategoryDto {
    type Error = ApplicationError;

    fn try_from(category: Category) -> ApplicationResult<Self> {
        let id = category
            .id
            .ok_or_else(|| ApplicationError::infrastructure("category has not been persisted"))?;
        let slug = category
            .slug
            .ok_or_else(|| ApplicationError::infrastructure("category has no slug"))?;

        Ok(Self {
            id: id.into(),
            name: category.name.into_inner(),
            slug: slug.into_inner(),
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}

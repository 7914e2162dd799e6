use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use engine::models::Category;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReloadCategoriesRequest {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

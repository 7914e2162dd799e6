use engine::models::Gender;

use crate::dto::category::{CategoryListResponse, ReloadCategoriesRequest};
use crate::state::Meet;

pub fn list_categories(meet: &Meet) -> CategoryListResponse {
    CategoryListResponse {
        categories: meet.catalog.categories().to_vec(),
    }
}

/// Swaps in a fresh category snapshot. Athlete categories are resolved on
/// read, so nothing else needs recomputing here.
pub fn reload_categories(meet: &mut Meet, request: ReloadCategoriesRequest) -> CategoryListResponse {
    meet.catalog.reload(request.categories);
    for gender in [Gender::M, Gender::F] {
        let faults = meet.catalog.partition_faults(gender);
        if !faults.is_empty() {
            tracing::warn!(
                gender = %gender,
                ?faults,
                "reloaded categories do not tile the bodyweight range"
            );
        }
    }
    list_categories(meet)
}

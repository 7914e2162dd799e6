use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::models::{Category, Gender};

/// Read-only index over the active bodyweight categories.
///
/// Two sorted views are kept: one by (gender, min_weight) for bodyweight
/// lookups, one by normalized name. `reload` rebuilds both from scratch so a
/// catalog is always a consistent snapshot; callers that share one across
/// tasks put it behind a lock and swap it whole.
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    by_weight: Vec<Category>,
    by_name: Vec<Category>,
}

impl CategoryCatalog {
    pub fn new(rows: Vec<Category>) -> Self {
        let mut catalog = Self::default();
        catalog.reload(rows);
        catalog
    }

    /// Replaces the snapshot. Only active rows participate in lookups.
    pub fn reload(&mut self, rows: Vec<Category>) {
        let mut by_weight: Vec<Category> = rows.into_iter().filter(|c| c.active).collect();
        by_weight.sort_by(|a, b| {
            a.gender
                .cmp(&b.gender)
                .then_with(|| a.min_weight.cmp(&b.min_weight))
        });

        let mut by_name = by_weight.clone();
        by_name.sort_by(|a, b| normalized(&a.name).cmp(&normalized(&b.name)));

        self.by_weight = by_weight;
        self.by_name = by_name;
    }

    pub fn categories(&self) -> &[Category] {
        &self.by_weight
    }

    pub fn lookup_by_weight(&self, gender: Gender, bodyweight: Decimal) -> Option<&Category> {
        if bodyweight <= Decimal::ZERO {
            return None;
        }
        match self
            .by_weight
            .binary_search_by(|c| weight_cmp(c, gender, bodyweight))
        {
            Ok(idx) => Some(&self.by_weight[idx]),
            Err(_) => {
                if self.by_weight.iter().any(|c| c.gender == gender) {
                    // The active categories of a gender are supposed to tile
                    // [0, +inf); a miss inside that range is bad seed data.
                    tracing::warn!(
                        gender = %gender,
                        bodyweight = %bodyweight,
                        "no active category covers this bodyweight"
                    );
                }
                None
            }
        }
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&Category> {
        let probe = normalized(name);
        let idx = self
            .by_name
            .binary_search_by(|c| normalized(&c.name).cmp(&probe))
            .ok()?;
        Some(&self.by_name[idx])
    }

    /// Boundaries where the active categories of `gender` fail to tile
    /// `[0, +inf)`. Each entry is (weight the next interval should start at,
    /// weight it actually starts at; `None` = nothing follows). Empty when
    /// the partition invariant holds.
    pub fn partition_faults(&self, gender: Gender) -> Vec<(Decimal, Option<Decimal>)> {
        let mut faults = Vec::new();
        let mut expected = Decimal::ZERO;
        let mut open_ended = false;

        for category in self.by_weight.iter().filter(|c| c.gender == gender) {
            if open_ended || category.min_weight != expected {
                faults.push((expected, Some(category.min_weight)));
            }
            match category.max_weight {
                Some(max) => expected = max,
                None => open_ended = true,
            }
        }
        if !open_ended {
            faults.push((expected, None));
        }
        faults
    }
}

fn weight_cmp(category: &Category, gender: Gender, bodyweight: Decimal) -> Ordering {
    category.gender.cmp(&gender).then_with(|| {
        if bodyweight < category.min_weight {
            Ordering::Greater
        } else if category
            .max_weight
            .is_some_and(|max| bodyweight >= max)
        {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}

fn normalized(name: &str) -> String {
    name.trim().to_lowercase()
}

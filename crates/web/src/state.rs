use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::{Decimal, dec};
use tokio::sync::RwLock;
use uuid::Uuid;

use engine::catalog::CategoryCatalog;
use engine::models::{
    Athlete, AttemptRecord, Category, Gender, MastersAgeTable, Rulebook, SinclairCoefficients,
};
use engine::services::scoring::{self, ScoreCard};

/// One athlete's registration plus their attempt card.
#[derive(Debug, Clone)]
pub struct Entry {
    pub athlete: Athlete,
    pub attempts: AttemptRecord,
}

/// The whole in-memory competition. One write lock per mutation keeps
/// attempt entries serialized; everything below it is synchronous.
#[derive(Debug)]
pub struct Meet {
    pub catalog: CategoryCatalog,
    pub rulebook: Rulebook,
    pub sinclair: SinclairCoefficients,
    pub masters: MastersAgeTable,
    pub athletes: HashMap<Uuid, Entry>,
}

impl Meet {
    pub fn new() -> Self {
        Self {
            catalog: CategoryCatalog::new(seed_categories()),
            rulebook: Rulebook::default(),
            sinclair: SinclairCoefficients::default(),
            masters: MastersAgeTable::default(),
            athletes: HashMap::new(),
        }
    }

    pub fn score_cards(&self, current_year: i32) -> Vec<ScoreCard> {
        self.athletes
            .values()
            .map(|entry| {
                scoring::score_card(
                    &entry.athlete,
                    &entry.attempts,
                    &self.catalog,
                    &self.sinclair,
                    &self.masters,
                    &self.rulebook,
                    current_year,
                )
            })
            .collect()
    }
}

impl Default for Meet {
    fn default() -> Self {
        Self::new()
    }
}

pub type AppState = Arc<RwLock<Meet>>;

/// Current senior bodyweight categories; organizers replace them through the
/// reload endpoint when running under a different rulebook.
pub fn seed_categories() -> Vec<Category> {
    fn partition(gender: Gender, prefix: &str, bounds: &[Decimal], first_id: i32) -> Vec<Category> {
        let mut categories = Vec::with_capacity(bounds.len() + 1);
        let mut min = Decimal::ZERO;
        for (i, &max) in bounds.iter().enumerate() {
            categories.push(Category {
                category_id: first_id + i as i32,
                name: format!("{prefix} {max}"),
                gender,
                min_weight: min,
                max_weight: Some(max),
                active: true,
            });
            min = max;
        }
        categories.push(Category {
            category_id: first_id + bounds.len() as i32,
            name: format!("{prefix} +{min}"),
            gender,
            min_weight: min,
            max_weight: None,
            active: true,
        });
        categories
    }

    let men = [
        dec!(60),
        dec!(65),
        dec!(71),
        dec!(79),
        dec!(88),
        dec!(94),
        dec!(110),
    ];
    let women = [
        dec!(48),
        dec!(53),
        dec!(58),
        dec!(63),
        dec!(69),
        dec!(77),
        dec!(86),
    ];

    let mut categories = partition(Gender::M, "M", &men, 1);
    categories.extend(partition(Gender::F, "F", &women, 101));
    categories
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "M" | "MALE" | "MEN" => Some(Self::M),
            "F" | "FEMALE" | "WOMEN" => Some(Self::F),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bodyweight category. `min_weight` is inclusive, `max_weight` exclusive;
/// `None` marks the unbounded top class of a gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub gender: Gender,
    pub min_weight: Decimal,
    pub max_weight: Option<Decimal>,
    pub active: bool,
}

impl Category {
    pub fn contains(&self, gender: Gender, bodyweight: Decimal) -> bool {
        self.gender == gender
            && bodyweight >= self.min_weight
            && self.max_weight.is_none_or(|max| bodyweight < max)
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Gender;

/// Sinclair formula parameters for one Olympic cycle.
///
/// Score = total × 10^(A · log10(bw / b)²) for bw < b, else total × 1.0,
/// where A is the gender coefficient and b the heaviest recorded bodyweight
/// of the cycle. `category_floor` is the smallest bodyweight admitted when
/// a category bound, rather than the lifter's own bodyweight, is fed through
/// the formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SinclairCoefficients {
    pub men_coefficient: f64,
    pub men_max_weight: f64,
    pub men_category_floor: f64,
    pub women_coefficient: f64,
    pub women_max_weight: f64,
    pub women_category_floor: f64,
}

impl SinclairCoefficients {
    pub fn constants_for_gender(&self, gender: Gender) -> FormulaConstants {
        match gender {
            Gender::M => FormulaConstants {
                coefficient: self.men_coefficient,
                max_weight: self.men_max_weight,
                category_floor: self.men_category_floor,
            },
            Gender::F => FormulaConstants {
                coefficient: self.women_coefficient,
                max_weight: self.women_max_weight,
                category_floor: self.women_category_floor,
            },
        }
    }
}

impl Default for SinclairCoefficients {
    fn default() -> Self {
        // 2021-2024 cycle values.
        Self {
            men_coefficient: 0.722762521,
            men_max_weight: 193.609,
            men_category_floor: 56.0,
            women_coefficient: 0.787004341,
            women_max_weight: 153.757,
            women_category_floor: 48.0,
        }
    }
}

/// Formula constants for a specific gender.
#[derive(Debug, Clone, Copy)]
pub struct FormulaConstants {
    pub coefficient: f64,
    pub max_weight: f64,
    pub category_floor: f64,
}

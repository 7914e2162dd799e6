use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Age-adjustment coefficients for masters scoring, keyed by the youngest
/// age of each band. Lookup takes the greatest band not above the lifter's
/// age; ages below the table have no coefficient and the caller falls back
/// to the plain Sinclair value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MastersAgeTable {
    coefficients: BTreeMap<u32, f64>,
}

impl MastersAgeTable {
    pub fn new(coefficients: BTreeMap<u32, f64>) -> Self {
        Self { coefficients }
    }

    pub fn coefficient_for_age(&self, age: i32) -> Option<f64> {
        let age = u32::try_from(age).ok()?;
        self.coefficients
            .range(..=age)
            .next_back()
            .map(|(_, &coefficient)| coefficient)
    }
}

impl Default for MastersAgeTable {
    fn default() -> Self {
        Self::new(BTreeMap::from([
            (30, 1.000),
            (35, 1.023),
            (40, 1.067),
            (45, 1.133),
            (50, 1.225),
            (55, 1.351),
            (60, 1.524),
            (65, 1.763),
            (70, 2.105),
            (75, 2.620),
            (80, 3.454),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_uses_band_floor() {
        let table = MastersAgeTable::default();
        assert_eq!(table.coefficient_for_age(40), Some(1.067));
        assert_eq!(table.coefficient_for_age(44), Some(1.067));
        assert_eq!(table.coefficient_for_age(45), Some(1.133));
    }

    #[test]
    fn test_ages_below_table_have_no_coefficient() {
        let table = MastersAgeTable::default();
        assert_eq!(table.coefficient_for_age(29), None);
        assert_eq!(table.coefficient_for_age(-3), None);
    }
}

//! Derived metrics: bests, totals and the bodyweight- and age-adjusted
//! scores computed from them. Everything here is a pure function of an
//! athlete, their attempt record and externally supplied constants.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::CategoryCatalog;
use crate::models::{
    Athlete, AttemptRecord, Category, FormulaConstants, Gender, LiftSlot, MastersAgeTable,
    Rulebook, SinclairCoefficients,
};

/// Best good lift across a movement's slots, 0 when none.
pub fn best_of(slots: &[LiftSlot]) -> i32 {
    slots.iter().map(LiftSlot::good_weight).max().unwrap_or(0)
}

/// Competition total. Bombing out of either movement zeroes the whole total.
pub fn grand_total(record: &AttemptRecord) -> i32 {
    let snatch = best_of(&record.snatch);
    let clean_jerk = best_of(&record.clean_jerk);
    if snatch == 0 || clean_jerk == 0 {
        0
    } else {
        snatch + clean_jerk
    }
}

/// Bodyweight-adjusted score. At or above the formula's maximum bodyweight
/// the factor is exactly 1.0; below it the factor grows as bodyweight
/// shrinks.
pub fn sinclair(
    total: i32,
    bodyweight: Decimal,
    gender: Gender,
    coefficients: &SinclairCoefficients,
) -> f64 {
    let bodyweight = decimal_to_f64(bodyweight);
    if total <= 0 || bodyweight <= 0.0 {
        return 0.0;
    }
    let constants = coefficients.constants_for_gender(gender);
    f64::from(total) * sinclair_factor(bodyweight, constants)
}

fn sinclair_factor(bodyweight: f64, constants: FormulaConstants) -> f64 {
    if bodyweight >= constants.max_weight {
        return 1.0;
    }
    let x = (bodyweight / constants.max_weight).log10();
    10f64.powf(constants.coefficient * x * x)
}

/// Sinclair computed on the category's upper bound instead of the lifter's
/// own bodyweight, comparing athletes across categories on potential. The
/// bound is clamped to the gender floor and the formula's maximum.
pub fn category_sinclair(
    total: i32,
    category: &Category,
    coefficients: &SinclairCoefficients,
) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let constants = coefficients.constants_for_gender(category.gender);
    let bound = category
        .max_weight
        .map(decimal_to_f64)
        .unwrap_or(constants.max_weight)
        .clamp(constants.category_floor, constants.max_weight);
    f64::from(total) * sinclair_factor(bound, constants)
}

/// Age-adjusted masters score; plain Sinclair when the lifter's age falls
/// outside the coefficient table.
pub fn masters_score(
    total: i32,
    bodyweight: Decimal,
    athlete: &Athlete,
    current_year: i32,
    coefficients: &SinclairCoefficients,
    age_table: &MastersAgeTable,
) -> f64 {
    let base = sinclair(total, bodyweight, athlete.gender, coefficients);
    match age_table.coefficient_for_age(athlete.age_in(current_year)) {
        Some(coefficient) => base * coefficient,
        None => base,
    }
}

/// Organizer-supplied override when one is set, the total otherwise.
pub fn custom_score(athlete: &Athlete, total: i32) -> f64 {
    match athlete.custom_score {
        Some(value) if value > 0.01 => value,
        _ => f64::from(total),
    }
}

/// All derived metrics for one athlete, computed once per cohort pass so the
/// ranker never reaches back into the attempt record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreCard {
    pub athlete_id: Uuid,
    pub name: String,
    pub club: String,
    pub gender: Gender,
    pub lot_number: i32,
    pub invited: bool,
    pub team_member: bool,
    pub category_id: Option<i32>,
    pub best_snatch: i32,
    pub best_clean_jerk: i32,
    pub total: i32,
    pub sinclair: f64,
    pub category_sinclair: f64,
    pub masters_score: f64,
    pub custom_score: f64,
    /// When the best snatch / clean & jerk was made; ranking tie-breaks on
    /// the earlier lift.
    pub snatch_time: Option<NaiveDateTime>,
    pub clean_jerk_time: Option<NaiveDateTime>,
}

pub fn score_card(
    athlete: &Athlete,
    record: &AttemptRecord,
    catalog: &CategoryCatalog,
    coefficients: &SinclairCoefficients,
    age_table: &MastersAgeTable,
    rulebook: &Rulebook,
    current_year: i32,
) -> ScoreCard {
    let best_snatch = best_of(&record.snatch);
    let best_clean_jerk = best_of(&record.clean_jerk);
    let total = grand_total(record);

    let category = athlete
        .bodyweight
        .and_then(|bw| catalog.lookup_by_weight(athlete.gender, bw));

    let sinclair_score = athlete
        .bodyweight
        .map(|bw| sinclair(total, bw, athlete.gender, coefficients))
        .unwrap_or(0.0);

    ScoreCard {
        athlete_id: athlete.athlete_id,
        name: athlete.full_name(),
        club: athlete.club.clone(),
        gender: athlete.gender,
        lot_number: athlete.lot_number,
        invited: athlete.is_invited(rulebook),
        team_member: athlete.team_member,
        category_id: category.map(|c| c.category_id),
        best_snatch,
        best_clean_jerk,
        total,
        sinclair: sinclair_score,
        category_sinclair: category
            .map(|c| category_sinclair(total, c, coefficients))
            .unwrap_or(0.0),
        masters_score: athlete
            .bodyweight
            .map(|bw| masters_score(total, bw, athlete, current_year, coefficients, age_table))
            .unwrap_or(0.0),
        custom_score: custom_score(athlete, total),
        snatch_time: best_lift_time(&record.snatch, best_snatch),
        clean_jerk_time: best_lift_time(&record.clean_jerk, best_clean_jerk),
    }
}

fn best_lift_time(slots: &[LiftSlot], best: i32) -> Option<NaiveDateTime> {
    if best == 0 {
        return None;
    }
    slots
        .iter()
        .find(|s| s.good_weight() == best)
        .and_then(|s| s.lift_time)
}

fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_string().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn record(snatch: [i32; 3], clean_jerk: [i32; 3]) -> AttemptRecord {
        let slot = |v: i32| LiftSlot {
            actual_lift: (v != 0).then_some(v),
            ..Default::default()
        };
        AttemptRecord {
            snatch: snatch.map(slot),
            clean_jerk: clean_jerk.map(slot),
        }
    }

    #[test]
    fn test_best_of_takes_heaviest_good_lift() {
        let r = record([100, -105, 105], [130, 135, -140]);
        assert_eq!(best_of(&r.snatch), 105);
        assert_eq!(best_of(&r.clean_jerk), 135);
        assert_eq!(grand_total(&r), 240);
    }

    #[test]
    fn test_bombing_out_one_movement_zeroes_the_total() {
        let r = record([100, -105, 105], [-120, -120, -120]);
        assert_eq!(best_of(&r.snatch), 105);
        assert_eq!(grand_total(&r), 0);

        let untaken = record([100, 0, 0], [0, 0, 0]);
        assert_eq!(grand_total(&untaken), 0);
    }

    #[test]
    fn test_sinclair_is_exactly_total_at_max_bodyweight() {
        let coefficients = SinclairCoefficients::default();
        let score = sinclair(300, dec!(193.609), Gender::M, &coefficients);
        assert_eq!(score, 300.0);
        // Heavier than the formula maximum changes nothing.
        assert_eq!(sinclair(300, dec!(210), Gender::M, &coefficients), 300.0);
    }

    #[test]
    fn test_sinclair_factor_grows_as_bodyweight_shrinks() {
        let coefficients = SinclairCoefficients::default();
        let at_89 = sinclair(300, dec!(89), Gender::M, &coefficients);
        let at_73 = sinclair(300, dec!(73), Gender::M, &coefficients);
        assert!(at_89 > 300.0);
        assert!(at_73 > at_89);
    }

    #[test]
    fn test_sinclair_zero_total_scores_zero() {
        let coefficients = SinclairCoefficients::default();
        assert_eq!(sinclair(0, dec!(80), Gender::M, &coefficients), 0.0);
    }

    fn category(gender: Gender, max: Option<Decimal>) -> Category {
        Category {
            category_id: 1,
            name: "test".to_string(),
            gender,
            min_weight: Decimal::ZERO,
            max_weight: max,
            active: true,
        }
    }

    #[test]
    fn test_category_sinclair_clamps_to_gender_floor() {
        let coefficients = SinclairCoefficients::default();
        // A 49 kg men's bound is below the 56 kg floor: both score as 56.
        let tiny = category_sinclair(200, &category(Gender::M, Some(dec!(49))), &coefficients);
        let floor = category_sinclair(200, &category(Gender::M, Some(dec!(56))), &coefficients);
        assert_eq!(tiny, floor);
    }

    #[test]
    fn test_category_sinclair_open_class_scores_as_total() {
        let coefficients = SinclairCoefficients::default();
        // No upper bound clamps to the formula maximum, factor 1.0.
        let score = category_sinclair(400, &category(Gender::M, None), &coefficients);
        assert_eq!(score, 400.0);
    }

    fn masters_athlete(birth_year: i32) -> Athlete {
        Athlete {
            athlete_id: Uuid::new_v4(),
            first_name: "Karl".to_string(),
            last_name: "Berg".to_string(),
            gender: Gender::M,
            birth_year,
            club: "Veterans".to_string(),
            lot_number: 1,
            bodyweight: Some(dec!(89)),
            qualifying_total: 0,
            team_member: false,
            invited: false,
            custom_score: None,
        }
    }

    #[test]
    fn test_masters_score_applies_age_coefficient() {
        let coefficients = SinclairCoefficients::default();
        let table = MastersAgeTable::default();
        let athlete = masters_athlete(1976); // 50 in 2026
        let base = sinclair(250, dec!(89), Gender::M, &coefficients);
        let adjusted = masters_score(250, dec!(89), &athlete, 2026, &coefficients, &table);
        assert_eq!(adjusted, base * 1.225);
    }

    #[test]
    fn test_masters_score_falls_back_below_the_table() {
        let coefficients = SinclairCoefficients::default();
        let table = MastersAgeTable::default();
        let athlete = masters_athlete(2001); // 25 in 2026
        let base = sinclair(250, dec!(89), Gender::M, &coefficients);
        assert_eq!(
            masters_score(250, dec!(89), &athlete, 2026, &coefficients, &table),
            base
        );
    }

    #[test]
    fn test_custom_score_override_threshold() {
        let mut athlete = masters_athlete(1990);
        assert_eq!(custom_score(&athlete, 250), 250.0);
        athlete.custom_score = Some(0.005);
        assert_eq!(custom_score(&athlete, 250), 250.0);
        athlete.custom_score = Some(312.5);
        assert_eq!(custom_score(&athlete, 250), 312.5);
    }
}

//! End-to-end pass: attempts entered through the validators, metrics derived,
//! ranks assigned, the way the surrounding service drives the engine.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, dec};
use uuid::Uuid;

use engine::catalog::CategoryCatalog;
use engine::models::{
    Athlete, AttemptRecord, Category, Gender, MastersAgeTable, Movement, Rulebook,
    SinclairCoefficients,
};
use engine::services::ranking::{self, RankingCriterion};
use engine::services::rules;
use engine::services::scoring;

fn catalog() -> CategoryCatalog {
    let category = |id, name: &str, min, max| Category {
        category_id: id,
        name: name.to_string(),
        gender: Gender::M,
        min_weight: min,
        max_weight: max,
        active: true,
    };
    CategoryCatalog::new(vec![
        category(1, "M 73", Decimal::ZERO, Some(dec!(73))),
        category(2, "M 89", dec!(73), Some(dec!(89))),
        category(3, "M +89", dec!(89), None),
    ])
}

fn athlete(lot: i32, last_name: &str, bodyweight: Decimal) -> Athlete {
    Athlete {
        athlete_id: Uuid::new_v4(),
        first_name: "Test".to_string(),
        last_name: last_name.to_string(),
        gender: Gender::M,
        birth_year: 1998,
        club: "Ironworks".to_string(),
        lot_number: lot,
        bodyweight: Some(bodyweight),
        qualifying_total: 0,
        team_member: true,
        invited: false,
        custom_score: None,
    }
}

fn at(minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 5, 16)
        .unwrap()
        .and_hms_opt(18, minute, 0)
        .unwrap()
}

/// Runs a declared-then-lifted sequence for one movement; weights are signed
/// results, one per attempt.
fn lift_sequence(
    record: &mut AttemptRecord,
    movement: Movement,
    results: [i32; 3],
    start_minute: u32,
) {
    for (i, result) in results.into_iter().enumerate() {
        let attempt = i as u8 + 1;
        rules::set_declaration(record, movement, attempt, Some(result.abs())).unwrap();
        rules::set_actual_lift(record, movement, attempt, Some(result), at(start_minute + i as u32))
            .unwrap();
    }
}

#[test]
fn full_session_produces_consistent_ranks() {
    let catalog = catalog();
    let rulebook = Rulebook::default();
    let coefficients = SinclairCoefficients::default();
    let age_table = MastersAgeTable::default();

    let a = athlete(1, "Almeida", dec!(72.40));
    let b = athlete(2, "Baptiste", dec!(88.15));
    let c = athlete(3, "Cho", dec!(88.90));

    let mut record_a = AttemptRecord::default();
    lift_sequence(&mut record_a, Movement::Snatch, [95, 100, -103], 0);
    lift_sequence(&mut record_a, Movement::CleanJerk, [120, 125, 128], 10);

    let mut record_b = AttemptRecord::default();
    lift_sequence(&mut record_b, Movement::Snatch, [110, -114, 114], 1);
    lift_sequence(&mut record_b, Movement::CleanJerk, [135, -140, 140], 11);

    // C bombs out of the clean & jerk.
    let mut record_c = AttemptRecord::default();
    lift_sequence(&mut record_c, Movement::Snatch, [112, 116, -119], 2);
    lift_sequence(&mut record_c, Movement::CleanJerk, [-138, -138, -138], 12);

    let cards: Vec<_> = [(&a, &record_a), (&b, &record_b), (&c, &record_c)]
        .into_iter()
        .map(|(athlete, record)| {
            scoring::score_card(athlete, record, &catalog, &coefficients, &age_table, &rulebook, 2026)
        })
        .collect();

    // Category resolution from bodyweight.
    assert_eq!(cards[0].category_id, Some(1));
    assert_eq!(cards[1].category_id, Some(2));
    assert_eq!(cards[2].category_id, Some(2));

    // Bomb-out zeroes the total but not the snatch metric.
    assert_eq!(cards[2].best_snatch, 116);
    assert_eq!(cards[2].total, 0);

    let by_total = ranking::assign_ranks(&cards, RankingCriterion::Total, &rulebook);
    assert_eq!(by_total[0].name, "Test Baptiste"); // 254
    assert_eq!(by_total[1].name, "Test Almeida"); // 228
    assert_eq!(by_total[2].name, "Test Cho"); // 0
    assert_eq!(by_total[0].rank, Some(1));

    // Bodyweight adjustment flips the order: the lighter lifter overtakes.
    let by_sinclair = ranking::assign_ranks(&cards, RankingCriterion::Sinclair, &rulebook);
    assert_eq!(by_sinclair[0].name, "Test Almeida");
    assert!(cards[0].sinclair / f64::from(cards[0].total) > cards[1].sinclair / f64::from(cards[1].total));

    // Snatch ranking ignores the bomb-out.
    let by_snatch = ranking::assign_ranks(&cards, RankingCriterion::Snatch, &rulebook);
    assert_eq!(by_snatch[0].name, "Test Cho");

    // Per-category: B and C share a category, A stands alone in theirs.
    let per_category =
        ranking::assign_category_ranks_and_points(&cards, RankingCriterion::Total, &rulebook);
    let almeida = per_category.iter().find(|e| e.name == "Test Almeida").unwrap();
    assert_eq!((almeida.rank, almeida.points), (Some(1), 12));
    let cho = per_category.iter().find(|e| e.name == "Test Cho").unwrap();
    assert_eq!((cho.rank, cho.points), (Some(2), 9));
}

#[test]
fn rejected_mutation_leaves_state_unchanged_for_later_entries() {
    let mut record = AttemptRecord::default();
    rules::set_declaration(&mut record, Movement::Snatch, 1, Some(100)).unwrap();
    rules::set_actual_lift(&mut record, Movement::Snatch, 1, Some(100), at(0)).unwrap();

    let before = record.clone();
    assert!(rules::set_declaration(&mut record, Movement::Snatch, 2, Some(100)).is_err());
    assert_eq!(record, before);

    rules::set_declaration(&mut record, Movement::Snatch, 2, Some(101)).unwrap();
    rules::set_actual_lift(&mut record, Movement::Snatch, 2, Some(101), at(1)).unwrap();
    assert_eq!(scoring::best_of(&record.snatch), 101);
}

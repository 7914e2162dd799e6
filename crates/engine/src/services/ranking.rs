//! Rank and point assignment over a cohort of score cards.
//!
//! The cohort is borrowed, never mutated; callers decide what goes into it
//! (a session, a category, a gender) and what to do with the ordered result.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Gender, Rulebook};

use super::scoring::ScoreCard;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RankingCriterion {
    Snatch,
    CleanJerk,
    #[default]
    Total,
    Sinclair,
    Custom,
    /// Sum of the points earned under snatch, clean & jerk and total.
    Combined,
}

impl RankingCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snatch => "snatch",
            Self::CleanJerk => "clean_jerk",
            Self::Total => "total",
            Self::Sinclair => "sinclair",
            Self::Custom => "custom",
            Self::Combined => "combined",
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RankedEntry {
    pub athlete_id: Uuid,
    pub name: String,
    pub club: String,
    pub gender: Gender,
    pub category_id: Option<i32>,
    pub team_member: bool,
    /// Metric value the ordering was computed on.
    pub value: f64,
    /// `None` for invited lifters, who compete outside the numeric ranking.
    pub rank: Option<u32>,
    pub points: u32,
}

/// Ranks the whole cohort as one group.
pub fn assign_ranks(
    cards: &[ScoreCard],
    criterion: RankingCriterion,
    rulebook: &Rulebook,
) -> Vec<RankedEntry> {
    rank_cohort(cards.iter().collect(), criterion, rulebook)
}

/// Ranks each category independently and maps ranks to team points.
/// Athletes without a resolved category form their own group.
pub fn assign_category_ranks_and_points(
    cards: &[ScoreCard],
    criterion: RankingCriterion,
    rulebook: &Rulebook,
) -> Vec<RankedEntry> {
    let mut groups: BTreeMap<Option<i32>, Vec<&ScoreCard>> = BTreeMap::new();
    for card in cards {
        groups.entry(card.category_id).or_default().push(card);
    }
    groups
        .into_values()
        .flat_map(|group| rank_cohort(group, criterion, rulebook))
        .collect()
}

fn rank_cohort(
    cohort: Vec<&ScoreCard>,
    criterion: RankingCriterion,
    rulebook: &Rulebook,
) -> Vec<RankedEntry> {
    if criterion == RankingCriterion::Combined {
        return rank_combined(cohort, rulebook);
    }

    let mut order = cohort;
    order.sort_by(|a, b| compare(a, b, criterion));

    let mut entries = Vec::with_capacity(order.len());
    let mut next_rank = 1u32;
    for card in order {
        let rank = if card.invited {
            None
        } else {
            let rank = next_rank;
            next_rank += 1;
            Some(rank)
        };
        entries.push(entry(card, metric(card, criterion), rank, rulebook));
    }
    entries
}

/// Combined standing: each lifter's snatch, clean & jerk and total points
/// within this same cohort, summed. Ties order by competition total, then
/// lot number.
fn rank_combined(cohort: Vec<&ScoreCard>, rulebook: &Rulebook) -> Vec<RankedEntry> {
    let mut points: HashMap<Uuid, u32> = HashMap::new();
    for criterion in [
        RankingCriterion::Snatch,
        RankingCriterion::CleanJerk,
        RankingCriterion::Total,
    ] {
        for entry in rank_cohort(cohort.clone(), criterion, rulebook) {
            *points.entry(entry.athlete_id).or_default() += entry.points;
        }
    }

    let mut order = cohort;
    order.sort_by(|a, b| {
        let pa = points.get(&a.athlete_id).copied().unwrap_or(0);
        let pb = points.get(&b.athlete_id).copied().unwrap_or(0);
        pb.cmp(&pa)
            .then_with(|| b.total.cmp(&a.total))
            .then_with(|| a.lot_number.cmp(&b.lot_number))
    });

    let mut entries = Vec::with_capacity(order.len());
    let mut next_rank = 1u32;
    for card in order {
        let summed = points.get(&card.athlete_id).copied().unwrap_or(0);
        let rank = if card.invited {
            None
        } else {
            let rank = next_rank;
            next_rank += 1;
            Some(rank)
        };
        entries.push(RankedEntry {
            athlete_id: card.athlete_id,
            name: card.name.clone(),
            club: card.club.clone(),
            gender: card.gender,
            category_id: card.category_id,
            team_member: card.team_member,
            value: f64::from(summed),
            rank,
            points: summed,
        });
    }
    entries
}

fn entry(card: &ScoreCard, value: f64, rank: Option<u32>, rulebook: &Rulebook) -> RankedEntry {
    RankedEntry {
        athlete_id: card.athlete_id,
        name: card.name.clone(),
        club: card.club.clone(),
        gender: card.gender,
        category_id: card.category_id,
        team_member: card.team_member,
        value,
        rank,
        points: rank.map(|r| rulebook.points_for_rank(r)).unwrap_or(0),
    }
}

fn metric(card: &ScoreCard, criterion: RankingCriterion) -> f64 {
    match criterion {
        RankingCriterion::Snatch => f64::from(card.best_snatch),
        RankingCriterion::CleanJerk => f64::from(card.best_clean_jerk),
        RankingCriterion::Total => f64::from(card.total),
        RankingCriterion::Sinclair => card.sinclair,
        RankingCriterion::Custom => card.custom_score,
        RankingCriterion::Combined => 0.0,
    }
}

fn tiebreak_time(card: &ScoreCard, criterion: RankingCriterion) -> Option<NaiveDateTime> {
    match criterion {
        RankingCriterion::Snatch => card.snatch_time,
        // Every other metric is only final once the clean & jerks are in.
        _ => card.clean_jerk_time,
    }
}

/// Descending by value, then by the earlier achieving lift, then by lot
/// number; fully deterministic for any input order.
fn compare(a: &ScoreCard, b: &ScoreCard, criterion: RankingCriterion) -> Ordering {
    metric(b, criterion)
        .total_cmp(&metric(a, criterion))
        .then_with(|| earlier_first(tiebreak_time(a, criterion), tiebreak_time(b, criterion)))
        .then_with(|| a.lot_number.cmp(&b.lot_number))
}

fn earlier_first(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Reorders an already-ranked list so that each team's lifters sit together,
/// ranks preserved, for team-total presentation.
pub fn team_order(entries: &[RankedEntry]) -> Vec<RankedEntry> {
    let mut ordered = entries.to_vec();
    ordered.sort_by(|a, b| {
        a.club
            .cmp(&b.club)
            .then_with(|| a.gender.cmp(&b.gender))
            .then_with(|| ranked_first(a.rank, b.rank))
    });
    ordered
}

fn ranked_first(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamScore {
    pub club: String,
    pub gender: Gender,
    /// Points of the best `Rulebook::team_size` scoring team members.
    pub points: u32,
    pub counted_athletes: usize,
}

/// Team totals over a ranked list: per (club, gender), the summed points of
/// the top scoring team members, best teams first.
pub fn team_totals(entries: &[RankedEntry], rulebook: &Rulebook) -> Vec<TeamScore> {
    let mut teams: BTreeMap<(String, Gender), Vec<u32>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.team_member) {
        teams
            .entry((entry.club.clone(), entry.gender))
            .or_default()
            .push(entry.points);
    }

    let mut scores: Vec<TeamScore> = teams
        .into_iter()
        .map(|((club, gender), mut points)| {
            points.sort_unstable_by(|a, b| b.cmp(a));
            points.truncate(rulebook.team_size);
            TeamScore {
                club,
                gender,
                points: points.iter().sum(),
                counted_athletes: points.len(),
            }
        })
        .collect();
    scores.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.club.cmp(&b.club)));
    scores
}

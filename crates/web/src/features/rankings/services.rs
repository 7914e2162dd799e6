use chrono::{Datelike, Utc};

use engine::services::ranking::{self, RankingCriterion};
use engine::services::scoring::ScoreCard;

use crate::dto::ranking::{RankingFilter, RankingResponse, TeamRankingResponse};
use crate::state::Meet;

/// Session-wide ranking over the whole (optionally gender-filtered) cohort.
pub fn session_ranking(meet: &Meet, filter: &RankingFilter) -> RankingResponse {
    let cards = cohort(meet, filter);
    RankingResponse {
        criterion: filter.criterion,
        entries: ranking::assign_ranks(&cards, filter.criterion, &meet.rulebook),
    }
}

/// Per-category ranking with team points.
pub fn category_ranking(meet: &Meet, filter: &RankingFilter) -> RankingResponse {
    let cards = cohort(meet, filter);
    RankingResponse {
        criterion: filter.criterion,
        entries: ranking::assign_category_ranks_and_points(&cards, filter.criterion, &meet.rulebook),
    }
}

/// Category points grouped by team, with the team totals appended.
pub fn team_ranking(meet: &Meet, filter: &RankingFilter) -> TeamRankingResponse {
    let cards = cohort(meet, filter);
    let ranked = ranking::assign_category_ranks_and_points(&cards, filter.criterion, &meet.rulebook);
    let teams = ranking::team_totals(&ranked, &meet.rulebook);
    TeamRankingResponse {
        criterion: filter.criterion,
        entries: ranking::team_order(&ranked),
        teams,
    }
}

fn cohort(meet: &Meet, filter: &RankingFilter) -> Vec<ScoreCard> {
    let mut cards = meet.score_cards(Utc::now().year());
    if let Some(gender) = filter.gender {
        cards.retain(|card| card.gender == gender);
    }
    cards
}

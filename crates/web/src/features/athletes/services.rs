use chrono::Utc;
use uuid::Uuid;

use engine::models::{Athlete, AttemptRecord, Movement};
use engine::services::rules;

use crate::dto::athlete::{AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest};
use crate::dto::attempt::{AttemptEntryRequest, AttemptEntryResponse, AttemptField};
use crate::error::{WebError, WebResult};
use crate::state::{Entry, Meet};

pub fn create_athlete(meet: &mut Meet, request: CreateAthleteRequest) -> AthleteResponse {
    let athlete = Athlete {
        athlete_id: Uuid::new_v4(),
        first_name: request.first_name,
        last_name: request.last_name,
        gender: request.gender,
        birth_year: request.birth_year,
        club: request.club,
        lot_number: request.lot_number,
        bodyweight: request.bodyweight,
        qualifying_total: request.qualifying_total,
        team_member: request.team_member,
        invited: request.invited,
        custom_score: request.custom_score,
    };
    let entry = Entry {
        athlete,
        attempts: AttemptRecord::default(),
    };
    let response = athlete_response(meet, &entry);
    meet.athletes.insert(entry.athlete.athlete_id, entry);
    response
}

pub fn list_athletes(meet: &Meet) -> Vec<AthleteResponse> {
    let mut entries: Vec<&Entry> = meet.athletes.values().collect();
    entries.sort_by_key(|e| e.athlete.lot_number);
    entries
        .into_iter()
        .map(|entry| athlete_response(meet, entry))
        .collect()
}

pub fn get_athlete(meet: &Meet, athlete_id: Uuid) -> WebResult<AthleteResponse> {
    let entry = meet.athletes.get(&athlete_id).ok_or(WebError::NotFound)?;
    Ok(athlete_response(meet, entry))
}

pub fn update_athlete(
    meet: &mut Meet,
    athlete_id: Uuid,
    request: UpdateAthleteRequest,
) -> WebResult<AthleteResponse> {
    let entry = meet
        .athletes
        .get_mut(&athlete_id)
        .ok_or(WebError::NotFound)?;
    let athlete = &mut entry.athlete;

    if let Some(first_name) = request.first_name {
        athlete.first_name = first_name;
    }
    if let Some(last_name) = request.last_name {
        athlete.last_name = last_name;
    }
    if let Some(club) = request.club {
        athlete.club = club;
    }
    if let Some(lot_number) = request.lot_number {
        athlete.lot_number = lot_number;
    }
    if let Some(bodyweight) = request.bodyweight {
        athlete.bodyweight = bodyweight;
    }
    if let Some(qualifying_total) = request.qualifying_total {
        athlete.qualifying_total = qualifying_total;
    }
    if let Some(team_member) = request.team_member {
        athlete.team_member = team_member;
    }
    if let Some(invited) = request.invited {
        athlete.invited = invited;
    }
    if let Some(custom_score) = request.custom_score {
        athlete.custom_score = custom_score;
    }

    let entry = &meet.athletes[&athlete_id];
    Ok(athlete_response(meet, entry))
}

/// Applies one validated attempt-field entry. Rule violations come back as
/// errors with the state untouched; a qualifying-gap overrun is reported in
/// the response but never blocks the entry.
pub fn enter_attempt(
    meet: &mut Meet,
    athlete_id: Uuid,
    movement: Movement,
    attempt: u8,
    request: AttemptEntryRequest,
) -> WebResult<AttemptEntryResponse> {
    let value = parse_weight(&request.value)?;
    let entry = meet
        .athletes
        .get_mut(&athlete_id)
        .ok_or(WebError::NotFound)?;

    match request.field {
        AttemptField::Declaration => {
            rules::set_declaration(&mut entry.attempts, movement, attempt, value)?
        }
        AttemptField::Change1 => rules::set_change1(&mut entry.attempts, movement, attempt, value)?,
        AttemptField::Change2 => rules::set_change2(&mut entry.attempts, movement, attempt, value)?,
        AttemptField::ActualLift => rules::set_actual_lift(
            &mut entry.attempts,
            movement,
            attempt,
            value,
            Utc::now().naive_utc(),
        )?,
    }

    let warning = rules::qualifying_gap_warning(&entry.athlete, &entry.attempts, &meet.rulebook);

    Ok(AttemptEntryResponse {
        athlete_id,
        attempts: entry.attempts.clone(),
        warning,
    })
}

fn athlete_response(meet: &Meet, entry: &Entry) -> AthleteResponse {
    let category = entry
        .athlete
        .bodyweight
        .and_then(|bw| meet.catalog.lookup_by_weight(entry.athlete.gender, bw))
        .cloned();
    AthleteResponse {
        athlete: entry.athlete.clone(),
        category,
        attempts: entry.attempts.clone(),
    }
}

fn parse_weight(value: &str) -> WebResult<Option<i32>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| WebError::BadRequest(format!("'{trimmed}' is not a weight")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    use engine::models::Gender;

    fn create_request(lot: i32) -> CreateAthleteRequest {
        CreateAthleteRequest {
            first_name: "Ana".to_string(),
            last_name: format!("Lifter{lot}"),
            gender: Gender::F,
            birth_year: 2000,
            club: "South Side".to_string(),
            lot_number: lot,
            bodyweight: Some(dec!(62.3)),
            qualifying_total: 0,
            team_member: true,
            invited: false,
            custom_score: None,
        }
    }

    #[test]
    fn test_create_resolves_category_from_seed_catalog() {
        let mut meet = Meet::new();
        let response = create_athlete(&mut meet, create_request(1));
        assert_eq!(response.category.unwrap().name, "F 63");
    }

    fn patch_bodyweight(bodyweight: Option<Option<rust_decimal::Decimal>>) -> UpdateAthleteRequest {
        UpdateAthleteRequest {
            first_name: None,
            last_name: None,
            club: None,
            lot_number: None,
            bodyweight,
            qualifying_total: None,
            team_member: None,
            invited: None,
            custom_score: None,
        }
    }

    #[test]
    fn test_bodyweight_update_moves_the_category() {
        let mut meet = Meet::new();
        let created = create_athlete(&mut meet, create_request(1));
        let id = created.athlete.athlete_id;
        let updated = update_athlete(&mut meet, id, patch_bodyweight(Some(Some(dec!(63.0)))))
            .unwrap();
        assert_eq!(updated.category.unwrap().name, "F 69");
    }

    #[test]
    fn test_bodyweight_can_be_cleared_and_left_alone() {
        let mut meet = Meet::new();
        let id = create_athlete(&mut meet, create_request(1)).athlete.athlete_id;

        // Absent field leaves the weigh-in entry untouched.
        let untouched = update_athlete(&mut meet, id, patch_bodyweight(None)).unwrap();
        assert_eq!(untouched.athlete.bodyweight, Some(dec!(62.3)));

        // Explicit null clears it, and the category with it.
        let cleared = update_athlete(&mut meet, id, patch_bodyweight(Some(None))).unwrap();
        assert_eq!(cleared.athlete.bodyweight, None);
        assert!(cleared.category.is_none());
    }

    #[test]
    fn test_enter_attempt_round_trip_and_rejection() {
        let mut meet = Meet::new();
        let id = create_athlete(&mut meet, create_request(1)).athlete.athlete_id;

        let declare = |value: &str| AttemptEntryRequest {
            field: AttemptField::Declaration,
            value: value.to_string(),
        };
        let lift = |value: &str| AttemptEntryRequest {
            field: AttemptField::ActualLift,
            value: value.to_string(),
        };

        enter_attempt(&mut meet, id, Movement::Snatch, 1, declare("80")).unwrap();
        enter_attempt(&mut meet, id, Movement::Snatch, 1, lift("80")).unwrap();
        // 80 was made, so 80 again is below the progression.
        let rejected = enter_attempt(&mut meet, id, Movement::Snatch, 2, declare("80"));
        assert!(matches!(rejected, Err(WebError::Rule(_))));
        // Blank clears the result.
        enter_attempt(&mut meet, id, Movement::Snatch, 1, lift("")).unwrap();

        let missing = enter_attempt(&mut meet, Uuid::new_v4(), Movement::Snatch, 1, declare("80"));
        assert!(matches!(missing, Err(WebError::NotFound)));

        let garbage = enter_attempt(&mut meet, id, Movement::Snatch, 1, declare("eighty"));
        assert!(matches!(garbage, Err(WebError::BadRequest(_))));
    }
}

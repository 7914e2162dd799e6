use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Gender;

/// Competition-level rule settings supplied by the organizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rulebook {
    /// Enables the qualifying-gap ("15/20 kg") check on opening declarations.
    pub qualifying_gap_enabled: bool,
    pub qualifying_gap_men: i32,
    pub qualifying_gap_women: i32,
    /// Lifters born before this year compete as invited guests, outside the
    /// numeric ranking. `None` disables the cutoff.
    pub invitation_birth_year: Option<i32>,
    /// Points awarded per final rank for team scoring, 1st place first.
    /// Ranks past the end of the scale earn no points.
    pub team_point_scale: Vec<u32>,
    /// How many members of a team count towards its total.
    pub team_size: usize,
}

impl Rulebook {
    pub fn gap_for(&self, gender: Gender) -> i32 {
        match gender {
            Gender::M => self.qualifying_gap_men,
            Gender::F => self.qualifying_gap_women,
        }
    }

    pub fn points_for_rank(&self, rank: u32) -> u32 {
        if rank == 0 {
            return 0;
        }
        self.team_point_scale
            .get(rank as usize - 1)
            .copied()
            .unwrap_or(0)
    }
}

impl Default for Rulebook {
    fn default() -> Self {
        Self {
            qualifying_gap_enabled: true,
            qualifying_gap_men: 20,
            qualifying_gap_women: 15,
            invitation_birth_year: None,
            team_point_scale: vec![12, 9, 8, 7, 6, 5, 4, 3, 2, 1],
            team_size: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_follow_the_scale() {
        let rulebook = Rulebook::default();
        assert_eq!(rulebook.points_for_rank(1), 12);
        assert_eq!(rulebook.points_for_rank(2), 9);
        assert_eq!(rulebook.points_for_rank(10), 1);
        assert_eq!(rulebook.points_for_rank(11), 0);
    }

    #[test]
    fn test_gap_is_gender_specific() {
        let rulebook = Rulebook::default();
        assert_eq!(rulebook.gap_for(Gender::M), 20);
        assert_eq!(rulebook.gap_for(Gender::F), 15);
    }
}

//! Invitee candidate filtering.
//!
//! Narrows the athlete pool for event invitation by team, age bracket
//! and gender. The three predicates AND together; filtering never
//! reorders, and an empty result is a valid outcome ("no candidates"),
//! not an error.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;
use crate::types::{AthleteRef, DbId};

// ---------------------------------------------------------------------------
// Team filter
// ---------------------------------------------------------------------------

/// Team narrowing for the candidate list.
///
/// Three explicit variants instead of a `number | "unassigned" | null`
/// union: `Any` disables the predicate, `Unassigned` matches athletes
/// with no team, `Team` matches one team's athletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamFilter {
    #[default]
    Any,
    Unassigned,
    Team(DbId),
}

impl TeamFilter {
    /// Parse the query-string form: absent/empty means no filter,
    /// `"unassigned"` selects team-less athletes, anything else must be
    /// a numeric team id.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw {
            None | Some("") => Ok(Self::Any),
            Some("unassigned") => Ok(Self::Unassigned),
            Some(value) => value.parse::<DbId>().map(Self::Team).map_err(|_| {
                CoreError::Validation(format!(
                    "team must be a team id or \"unassigned\", got \"{value}\""
                ))
            }),
        }
    }

    fn matches(self, athlete: &AthleteRef) -> bool {
        match self {
            Self::Any => true,
            Self::Unassigned => athlete.team_id.is_none(),
            Self::Team(id) => athlete.team_id == Some(id),
        }
    }
}

// ---------------------------------------------------------------------------
// Age brackets
// ---------------------------------------------------------------------------

/// Named youth category mapped to a half-open year-of-age range.
///
/// `U14` covers ages `[13, 14)`: the final year before ageing out of
/// the category. `Senior` is open-ended from 18 up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    U8,
    U10,
    U12,
    U14,
    U16,
    U18,
    Senior,
}

impl AgeBracket {
    /// Parse a bracket label such as `"U14"`. Unknown labels are an error.
    pub fn parse(label: &str) -> Result<Self, CoreError> {
        match label {
            "U8" => Ok(Self::U8),
            "U10" => Ok(Self::U10),
            "U12" => Ok(Self::U12),
            "U14" => Ok(Self::U14),
            "U16" => Ok(Self::U16),
            "U18" => Ok(Self::U18),
            "Senior" => Ok(Self::Senior),
            _ => Err(CoreError::Validation(format!(
                "unknown age bracket \"{label}\""
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::U8 => "U8",
            Self::U10 => "U10",
            Self::U12 => "U12",
            Self::U14 => "U14",
            Self::U16 => "U16",
            Self::U18 => "U18",
            Self::Senior => "Senior",
        }
    }

    /// Inclusive lower and exclusive upper bound in years of age.
    /// `None` means open-ended.
    fn range(self) -> (i32, Option<i32>) {
        match self {
            Self::U8 => (7, Some(8)),
            Self::U10 => (9, Some(10)),
            Self::U12 => (11, Some(12)),
            Self::U14 => (13, Some(14)),
            Self::U16 => (15, Some(16)),
            Self::U18 => (17, Some(18)),
            Self::Senior => (18, None),
        }
    }

    /// Whether an age in whole years falls inside the bracket.
    pub fn contains(self, age: i32) -> bool {
        let (min, max) = self.range();
        age >= min && max.is_none_or(|m| age < m)
    }
}

/// Age in whole years at `today`, using the has-the-birthday-occurred
/// rule on (month, day). Not a days/365.25 approximation.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

// ---------------------------------------------------------------------------
// Combined filter
// ---------------------------------------------------------------------------

/// Candidate filter as selected by the caller. All fields default to
/// "no filter".
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    pub team: TeamFilter,
    pub age_bracket: Option<AgeBracket>,
    pub gender: Option<String>,
}

impl CandidateFilter {
    fn matches(&self, athlete: &AthleteRef, today: NaiveDate) -> bool {
        if !self.team.matches(athlete) {
            return false;
        }

        if let Some(bracket) = self.age_bracket {
            // No birth date on file: the athlete never matches a bracket.
            match athlete.birth_date {
                Some(birth) => {
                    if !bracket.contains(age_on(birth, today)) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        if let Some(gender) = self.gender.as_deref() {
            if !gender.is_empty() && athlete.gender.as_deref() != Some(gender) {
                return false;
            }
        }

        true
    }
}

/// Apply `filter` to `athletes`, preserving input order.
pub fn filter_candidates(
    mut athletes: Vec<AthleteRef>,
    filter: &CandidateFilter,
    today: NaiveDate,
) -> Vec<AthleteRef> {
    athletes.retain(|athlete| filter.matches(athlete, today));
    athletes
}

/// Sort athletes alphabetically by surname, then first name. Callers
/// that want alphabetical display order apply this explicitly;
/// [`filter_candidates`] itself never reorders.
pub fn sort_by_surname(athletes: &mut [AthleteRef]) {
    athletes.sort_by(|a, b| {
        (a.last_name.to_lowercase(), a.first_name.to_lowercase())
            .cmp(&(b.last_name.to_lowercase(), b.first_name.to_lowercase()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsvp::AthleteStatus;

    fn athlete(
        id: DbId,
        team_id: Option<DbId>,
        birth_date: Option<NaiveDate>,
        gender: Option<&str>,
    ) -> AthleteRef {
        AthleteRef {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            birth_date,
            gender: gender.map(str::to_string),
            team_id,
            status: AthleteStatus::Active,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: fn() -> NaiveDate = || date(2024, 6, 15);

    // -----------------------------------------------------------------------
    // Age computation
    // -----------------------------------------------------------------------

    #[test]
    fn age_after_birthday_this_year() {
        assert_eq!(age_on(date(2010, 3, 1), TODAY()), 14);
    }

    #[test]
    fn age_before_birthday_this_year() {
        assert_eq!(age_on(date(2010, 9, 1), TODAY()), 13);
    }

    #[test]
    fn age_on_birthday_counts_new_year() {
        assert_eq!(age_on(date(2010, 6, 15), TODAY()), 14);
    }

    // -----------------------------------------------------------------------
    // Team filter parsing
    // -----------------------------------------------------------------------

    #[test]
    fn team_filter_parse_absent_is_any() {
        assert_eq!(TeamFilter::parse(None).unwrap(), TeamFilter::Any);
        assert_eq!(TeamFilter::parse(Some("")).unwrap(), TeamFilter::Any);
    }

    #[test]
    fn team_filter_parse_unassigned() {
        assert_eq!(
            TeamFilter::parse(Some("unassigned")).unwrap(),
            TeamFilter::Unassigned
        );
    }

    #[test]
    fn team_filter_parse_id() {
        assert_eq!(TeamFilter::parse(Some("42")).unwrap(), TeamFilter::Team(42));
    }

    #[test]
    fn team_filter_parse_garbage_is_validation_error() {
        assert!(TeamFilter::parse(Some("varsity")).is_err());
    }

    // -----------------------------------------------------------------------
    // Brackets
    // -----------------------------------------------------------------------

    #[test]
    fn u14_is_half_open() {
        let bracket = AgeBracket::U14;
        assert!(!bracket.contains(12));
        assert!(bracket.contains(13));
        assert!(!bracket.contains(14));
    }

    #[test]
    fn senior_is_open_ended() {
        assert!(!AgeBracket::Senior.contains(17));
        assert!(AgeBracket::Senior.contains(18));
        assert!(AgeBracket::Senior.contains(43));
    }

    #[test]
    fn bracket_label_round_trips() {
        for bracket in [
            AgeBracket::U8,
            AgeBracket::U10,
            AgeBracket::U12,
            AgeBracket::U14,
            AgeBracket::U16,
            AgeBracket::U18,
            AgeBracket::Senior,
        ] {
            assert_eq!(AgeBracket::parse(bracket.label()).unwrap(), bracket);
        }
    }

    #[test]
    fn unknown_bracket_is_validation_error() {
        assert!(AgeBracket::parse("U15").is_err());
    }

    // -----------------------------------------------------------------------
    // Filtering
    // -----------------------------------------------------------------------

    #[test]
    fn cleared_filter_returns_input_unchanged() {
        let athletes = vec![
            athlete(1, Some(1), Some(date(2010, 1, 1)), Some("f")),
            athlete(2, None, None, None),
            athlete(3, Some(2), Some(date(2005, 5, 5)), Some("m")),
        ];

        let out = filter_candidates(athletes.clone(), &CandidateFilter::default(), TODAY());
        assert_eq!(out, athletes);
    }

    #[test]
    fn team_filter_narrows_to_one_team() {
        let athletes = vec![
            athlete(1, Some(1), None, None),
            athlete(2, Some(2), None, None),
            athlete(3, Some(1), None, None),
        ];
        let filter = CandidateFilter {
            team: TeamFilter::Team(1),
            ..Default::default()
        };

        let out = filter_candidates(athletes, &filter, TODAY());
        assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn unassigned_filter_selects_teamless() {
        let athletes = vec![athlete(1, Some(1), None, None), athlete(2, None, None, None)];
        let filter = CandidateFilter {
            team: TeamFilter::Unassigned,
            ..Default::default()
        };

        let out = filter_candidates(athletes, &filter, TODAY());
        assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn bracket_filter_excludes_athletes_without_birth_date() {
        let athletes = vec![
            athlete(1, None, Some(date(2011, 1, 1)), None), // 13 -> U14
            athlete(2, None, None, None),                   // no birth date
        ];
        let filter = CandidateFilter {
            age_bracket: Some(AgeBracket::U14),
            ..Default::default()
        };

        let out = filter_candidates(athletes, &filter, TODAY());
        assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn gender_filter_is_exact_match() {
        let athletes = vec![
            athlete(1, None, None, Some("f")),
            athlete(2, None, None, Some("m")),
            athlete(3, None, None, None),
        ];
        let filter = CandidateFilter {
            gender: Some("f".to_string()),
            ..Default::default()
        };

        let out = filter_candidates(athletes, &filter, TODAY());
        assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn empty_gender_disables_the_predicate() {
        let athletes = vec![athlete(1, None, None, Some("f")), athlete(2, None, None, None)];
        let filter = CandidateFilter {
            gender: Some(String::new()),
            ..Default::default()
        };

        let out = filter_candidates(athletes, &filter, TODAY());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn predicates_and_together() {
        let athletes = vec![
            athlete(1, Some(1), Some(date(2011, 1, 1)), Some("f")),
            athlete(2, Some(1), Some(date(2011, 1, 1)), Some("m")),
            athlete(3, Some(2), Some(date(2011, 1, 1)), Some("f")),
            athlete(4, Some(1), Some(date(2000, 1, 1)), Some("f")),
        ];
        let filter = CandidateFilter {
            team: TeamFilter::Team(1),
            age_bracket: Some(AgeBracket::U14),
            gender: Some("f".to_string()),
        };

        let out = filter_candidates(athletes, &filter, TODAY());
        assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn empty_result_is_valid() {
        let athletes = vec![athlete(1, Some(1), None, None)];
        let filter = CandidateFilter {
            team: TeamFilter::Team(99),
            ..Default::default()
        };

        assert!(filter_candidates(athletes, &filter, TODAY()).is_empty());
    }

    // -----------------------------------------------------------------------
    // Explicit sort
    // -----------------------------------------------------------------------

    #[test]
    fn sort_by_surname_then_first_name() {
        let mut athletes = vec![
            AthleteRef {
                first_name: "Zoe".into(),
                last_name: "Adams".into(),
                ..athlete(1, None, None, None)
            },
            AthleteRef {
                first_name: "Amy".into(),
                last_name: "Baker".into(),
                ..athlete(2, None, None, None)
            },
            AthleteRef {
                first_name: "Amy".into(),
                last_name: "Adams".into(),
                ..athlete(3, None, None, None)
            },
        ];

        sort_by_surname(&mut athletes);
        assert_eq!(athletes.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}

//! Event-to-team resolution.
//!
//! An event is associated with the union of its explicit team links and
//! the teams of every invited athlete. The result is derived per
//! request and never persisted: it must be recomputed whenever
//! participants or team links change.

use std::collections::{BTreeSet, HashMap};

use crate::types::{AthleteRef, DbId, ParticipantRef};

/// Resolve the set of teams associated with an event.
///
/// Starts from the explicit `team_ids` (de-duplicated by the set), then
/// adds the team of every invited athlete that has one. Participants
/// whose athlete is missing from `athletes` are skipped -- an event
/// referencing a deleted athlete still resolves from whatever remains.
///
/// `BTreeSet` keeps the ids in ascending order, which is also the
/// stable display order consumers are expected to use.
pub fn resolve_event_teams(
    team_ids: &[DbId],
    participants: &[ParticipantRef],
    athletes: &HashMap<DbId, AthleteRef>,
) -> BTreeSet<DbId> {
    let mut set: BTreeSet<DbId> = team_ids.iter().copied().collect();

    for participant in participants {
        let Some(athlete_id) = participant.athlete_id else {
            continue;
        };
        let Some(athlete) = athletes.get(&athlete_id) else {
            continue;
        };
        if let Some(team_id) = athlete.team_id {
            set.insert(team_id);
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsvp::{AthleteStatus, ParticipantStatus};

    fn athlete(id: DbId, team_id: Option<DbId>) -> AthleteRef {
        AthleteRef {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            birth_date: None,
            gender: None,
            team_id,
            status: AthleteStatus::Active,
        }
    }

    fn invited(id: DbId, athlete_id: DbId) -> ParticipantRef {
        ParticipantRef {
            id,
            athlete_id: Some(athlete_id),
            user_id: None,
            status: ParticipantStatus::Invited,
        }
    }

    fn lookup(athletes: Vec<AthleteRef>) -> HashMap<DbId, AthleteRef> {
        athletes.into_iter().map(|a| (a.id, a)).collect()
    }

    #[test]
    fn explicit_links_only() {
        let set = resolve_event_teams(&[3, 1, 3], &[], &HashMap::new());
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn inferred_from_invited_athletes() {
        let athletes = lookup(vec![athlete(10, Some(1)), athlete(11, Some(2))]);
        let participants = vec![invited(100, 10), invited(101, 11)];

        let set = resolve_event_teams(&[], &participants, &athletes);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn union_of_explicit_and_inferred() {
        // Event linked to team A with athletes from A, plus one explicit
        // invite from team B.
        let athletes = lookup(vec![
            athlete(10, Some(1)),
            athlete(11, Some(1)),
            athlete(12, Some(2)),
        ]);
        let participants = vec![invited(100, 10), invited(101, 11), invited(102, 12)];

        let set = resolve_event_teams(&[1], &participants, &athletes);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn missing_athlete_is_skipped() {
        let athletes = lookup(vec![athlete(10, Some(1))]);
        // Participant 999 references an athlete that no longer exists.
        let participants = vec![invited(100, 10), invited(101, 999)];

        let set = resolve_event_teams(&[], &participants, &athletes);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn unassigned_athlete_contributes_nothing() {
        let athletes = lookup(vec![athlete(10, None)]);
        let participants = vec![invited(100, 10)];

        let set = resolve_event_teams(&[], &participants, &athletes);
        assert!(set.is_empty());
    }

    #[test]
    fn user_participants_are_ignored() {
        let participants = vec![ParticipantRef {
            id: 100,
            athlete_id: None,
            user_id: Some(7),
            status: ParticipantStatus::Invited,
        }];

        let set = resolve_event_teams(&[], &participants, &HashMap::new());
        assert!(set.is_empty());
    }

    #[test]
    fn order_independent() {
        let athletes = lookup(vec![
            athlete(10, Some(3)),
            athlete(11, Some(1)),
            athlete(12, Some(2)),
        ]);
        let mut participants = vec![invited(100, 10), invited(101, 11), invited(102, 12)];

        let forward = resolve_event_teams(&[5], &participants, &athletes);
        participants.reverse();
        let reversed = resolve_event_teams(&[5], &participants, &athletes);

        assert_eq!(forward, reversed);
        assert_eq!(forward.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 5]);
    }

    #[test]
    fn idempotent() {
        let athletes = lookup(vec![athlete(10, Some(1))]);
        let participants = vec![invited(100, 10)];

        let once = resolve_event_teams(&[2], &participants, &athletes);
        let twice = resolve_event_teams(&[2], &participants, &athletes);
        assert_eq!(once, twice);
    }
}

//! Per-date availability breakdown.
//!
//! Cross-references the events of one day with teams, athletes and
//! participant rows into team blocks plus a guest list, and paginates
//! the team blocks for display. Recomputed from a fresh snapshot on
//! every request; holds no state of its own.

use std::collections::HashMap;

use crate::rsvp::{ParticipantStatus, ResolvedStatus};
use crate::teams::resolve_event_teams;
use crate::types::{AthleteRef, DbId, EventRef, TeamRef};

/// Default number of team blocks per availability page.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// One athlete's line in a team block or guest list.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AthleteAvailability {
    pub athlete_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub status: ResolvedStatus,
    /// Display label derived from `status` ("Confirmed", "Pending",
    /// "Active", ...).
    pub label: &'static str,
}

/// One team's block under an event: the team's athletes with resolved
/// statuses, plus the coach's own RSVP if the coach was invited as a
/// user participant.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TeamAvailability {
    pub team_id: DbId,
    pub team_name: String,
    pub coach_name: Option<String>,
    pub coach_status: Option<ParticipantStatus>,
    pub athletes: Vec<AthleteAvailability>,
}

/// The full breakdown for one event on the selected date.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EventAvailability {
    pub event_id: DbId,
    pub event_name: String,
    pub teams: Vec<TeamAvailability>,
    /// Invited athletes whose team is not among the event's team blocks
    /// (team-less athletes, or members of a since-deleted team), in
    /// original participant order.
    pub guests: Vec<AthleteAvailability>,
}

/// Build the availability breakdown for the given events (one selected
/// date's worth).
///
/// `athletes` is the roster in display order (the order teams want
/// their members listed, e.g. by surname); rosters and the id lookup
/// are derived from it. Per event:
///
/// - team blocks appear in ascending team-id order, one per resolved
///   team that still exists in `teams`;
/// - within a block, invited athletes come first in original
///   participant order, then the rest of the roster with their
///   active/inactive status as a fallback signal;
/// - invited athletes that map to no block are collected as guests.
pub fn build_availability(
    events: &[EventRef],
    teams: &HashMap<DbId, TeamRef>,
    athletes: &[AthleteRef],
) -> Vec<EventAvailability> {
    let athlete_lookup: HashMap<DbId, AthleteRef> =
        athletes.iter().map(|a| (a.id, a.clone())).collect();

    events
        .iter()
        .map(|event| build_for_event(event, teams, athletes, &athlete_lookup))
        .collect()
}

fn build_for_event(
    event: &EventRef,
    teams: &HashMap<DbId, TeamRef>,
    roster: &[AthleteRef],
    athlete_lookup: &HashMap<DbId, AthleteRef>,
) -> EventAvailability {
    let team_set = resolve_event_teams(&event.team_ids, &event.participants, athlete_lookup);

    // Blocks only exist for teams that still resolve; ids pointing at
    // deleted teams fall through to the guest list below.
    let block_ids: Vec<DbId> = team_set
        .iter()
        .copied()
        .filter(|id| teams.contains_key(id))
        .collect();

    let team_blocks: Vec<TeamAvailability> = block_ids
        .iter()
        .map(|&team_id| {
            let team = &teams[&team_id];
            let mut lines: Vec<AthleteAvailability> = Vec::new();

            // Invited athletes of this team, in participant order.
            for participant in &event.participants {
                let Some(athlete) = participant
                    .athlete_id
                    .and_then(|id| athlete_lookup.get(&id))
                else {
                    continue;
                };
                if athlete.team_id == Some(team_id) {
                    lines.push(athlete_line(athlete, ResolvedStatus::Rsvp(participant.status)));
                }
            }

            // Roster members without a participant row: fall back to
            // their active/inactive status.
            for athlete in roster {
                if athlete.team_id == Some(team_id)
                    && !lines.iter().any(|l| l.athlete_id == athlete.id)
                {
                    lines.push(athlete_line(athlete, ResolvedStatus::Fallback(athlete.status)));
                }
            }

            TeamAvailability {
                team_id,
                team_name: team.name.clone(),
                coach_name: team.coach_name.clone(),
                coach_status: coach_status(event, team),
                athletes: lines,
            }
        })
        .collect();

    let guests: Vec<AthleteAvailability> = event
        .participants
        .iter()
        .filter_map(|participant| {
            let athlete = participant
                .athlete_id
                .and_then(|id| athlete_lookup.get(&id))?;
            let has_block = athlete
                .team_id
                .is_some_and(|team_id| block_ids.contains(&team_id));
            if has_block {
                None
            } else {
                Some(athlete_line(athlete, ResolvedStatus::Rsvp(participant.status)))
            }
        })
        .collect();

    EventAvailability {
        event_id: event.id,
        event_name: event.name.clone(),
        teams: team_blocks,
        guests,
    }
}

fn athlete_line(athlete: &AthleteRef, status: ResolvedStatus) -> AthleteAvailability {
    AthleteAvailability {
        athlete_id: athlete.id,
        first_name: athlete.first_name.clone(),
        last_name: athlete.last_name.clone(),
        status,
        label: status.label(),
    }
}

/// The coach's own RSVP on this event, if the coach was separately
/// invited as a user participant.
fn coach_status(event: &EventRef, team: &TeamRef) -> Option<ParticipantStatus> {
    let coach_user_id = team.coach_user_id?;
    event
        .participants
        .iter()
        .find(|p| p.user_id == Some(coach_user_id))
        .map(|p| p.status)
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// One display page of the availability breakdown: up to `page_size`
/// consecutive team blocks of a single event. Pages never span events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AvailabilityPage {
    /// Index into the event list.
    pub event_index: usize,
    /// Index of the first team block on this page.
    pub team_index: usize,
    /// Number of team blocks on this page.
    pub team_count: usize,
    /// Guests are attached to the final team page of their event, never
    /// duplicated across pages.
    pub include_guests: bool,
}

/// Split the breakdown into display pages of `page_size` team blocks.
///
/// The last page of each event carries `include_guests = true` when the
/// event has guests. An event with guests but no team blocks still gets
/// one (otherwise empty) page so its guests are reachable.
pub fn paginate_availability(
    events: &[EventAvailability],
    page_size: usize,
) -> Vec<AvailabilityPage> {
    let page_size = page_size.max(1);
    let mut pages = Vec::new();

    for (event_index, event) in events.iter().enumerate() {
        let team_total = event.teams.len();
        let has_guests = !event.guests.is_empty();

        if team_total == 0 {
            if has_guests {
                pages.push(AvailabilityPage {
                    event_index,
                    team_index: 0,
                    team_count: 0,
                    include_guests: true,
                });
            }
            continue;
        }

        let mut team_index = 0;
        while team_index < team_total {
            let team_count = page_size.min(team_total - team_index);
            let is_last = team_index + team_count == team_total;
            pages.push(AvailabilityPage {
                event_index,
                team_index,
                team_count,
                include_guests: is_last && has_guests,
            });
            team_index += team_count;
        }
    }

    pages
}

/// Clamp the caller's current page index into `[0, total_pages - 1]`.
///
/// Whenever the underlying team list shrinks (a filter change, a
/// deleted event) a stale out-of-range selection must snap back to the
/// last valid page instead of pointing at nothing.
pub fn clamp_page(current: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        0
    } else {
        current.min(total_pages - 1)
    }
}

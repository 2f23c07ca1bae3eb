//! RSVP statuses and the participant state machine.
//!
//! A participant row is created at `invited` and moves to one of the
//! three response states. Responses may be revised freely between
//! `confirmed`, `declined` and `maybe`, but a row never returns to
//! `invited` -- that state only exists at creation time.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Participant status
// ---------------------------------------------------------------------------

/// RSVP status of a participant row, stored as snake_case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    Invited,
    Confirmed,
    Declined,
    Maybe,
}

impl ParticipantStatus {
    /// Database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invited => "invited",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
            Self::Maybe => "maybe",
        }
    }

    /// Parse the database representation. Unknown values are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "invited" => Some(Self::Invited),
            "confirmed" => Some(Self::Confirmed),
            "declined" => Some(Self::Declined),
            "maybe" => Some(Self::Maybe),
            _ => None,
        }
    }

    /// Human-readable label for display. An un-responded invitation
    /// reads "Pending" rather than "Invited".
    pub fn label(self) -> &'static str {
        match self {
            Self::Invited => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Declined => "Declined",
            Self::Maybe => "Maybe",
        }
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Returns the set of statuses reachable from `from`.
///
/// `Invited` may move to any response state. The three response states
/// may move between each other (including re-asserting the current
/// status, which is an idempotent no-op at the operation level), but
/// never back to `Invited`.
pub fn valid_transitions(from: ParticipantStatus) -> &'static [ParticipantStatus] {
    use ParticipantStatus::*;
    match from {
        Invited => &[Confirmed, Declined, Maybe],
        Confirmed => &[Confirmed, Declined, Maybe],
        Declined => &[Confirmed, Declined, Maybe],
        Maybe => &[Confirmed, Declined, Maybe],
    }
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: ParticipantStatus, to: ParticipantStatus) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate a state transition, returning an error message for invalid ones.
pub fn validate_transition(
    from: ParticipantStatus,
    to: ParticipantStatus,
) -> Result<(), String> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(format!(
            "Invalid transition: {} -> {}",
            from.as_str(),
            to.as_str()
        ))
    }
}

// ---------------------------------------------------------------------------
// Athlete status and display fallback
// ---------------------------------------------------------------------------

/// Roster status of an athlete, independent of any event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AthleteStatus {
    Active,
    Inactive,
}

impl AthleteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Attendance status as shown in the availability breakdown.
///
/// `Rsvp` is the normal case. `Fallback` covers roster members with no
/// participant row on the event (added to the team after invitations
/// went out): their roster status stands in as an availability signal
/// until an explicit invitation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "status")]
pub enum ResolvedStatus {
    Rsvp(ParticipantStatus),
    Fallback(AthleteStatus),
}

impl ResolvedStatus {
    /// Display label: RSVP label, or "Active"/"Inactive" for the
    /// roster-status fallback.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rsvp(status) => status.label(),
            Self::Fallback(AthleteStatus::Active) => "Active",
            Self::Fallback(AthleteStatus::Inactive) => "Inactive",
        }
    }

    /// Whether the athlete counts toward expected attendance.
    pub fn is_available(self) -> bool {
        matches!(
            self,
            Self::Rsvp(ParticipantStatus::Confirmed) | Self::Fallback(AthleteStatus::Active)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ParticipantStatus::*;

    // -----------------------------------------------------------------------
    // Valid transitions
    // -----------------------------------------------------------------------

    #[test]
    fn invited_to_confirmed() {
        assert!(can_transition(Invited, Confirmed));
    }

    #[test]
    fn invited_to_declined() {
        assert!(can_transition(Invited, Declined));
    }

    #[test]
    fn invited_to_maybe() {
        assert!(can_transition(Invited, Maybe));
    }

    #[test]
    fn confirmed_to_declined() {
        assert!(can_transition(Confirmed, Declined));
    }

    #[test]
    fn declined_to_maybe() {
        assert!(can_transition(Declined, Maybe));
    }

    #[test]
    fn maybe_to_confirmed() {
        assert!(can_transition(Maybe, Confirmed));
    }

    #[test]
    fn resubmitting_same_status_is_valid() {
        assert!(can_transition(Confirmed, Confirmed));
        assert!(can_transition(Declined, Declined));
        assert!(can_transition(Maybe, Maybe));
    }

    // -----------------------------------------------------------------------
    // Invited is never re-entered
    // -----------------------------------------------------------------------

    #[test]
    fn confirmed_to_invited_invalid() {
        assert!(!can_transition(Confirmed, Invited));
    }

    #[test]
    fn declined_to_invited_invalid() {
        assert!(!can_transition(Declined, Invited));
    }

    #[test]
    fn maybe_to_invited_invalid() {
        assert!(!can_transition(Maybe, Invited));
    }

    #[test]
    fn invited_to_invited_invalid() {
        assert!(!can_transition(Invited, Invited));
    }

    // -----------------------------------------------------------------------
    // validate_transition returns descriptive error
    // -----------------------------------------------------------------------

    #[test]
    fn validate_transition_ok() {
        assert!(validate_transition(Invited, Maybe).is_ok());
    }

    #[test]
    fn validate_transition_err() {
        let err = validate_transition(Confirmed, Invited).unwrap_err();
        assert!(err.contains("confirmed"));
        assert!(err.contains("invited"));
    }

    // -----------------------------------------------------------------------
    // Round-trip and labels
    // -----------------------------------------------------------------------

    #[test]
    fn status_round_trips_through_str() {
        for status in [Invited, Confirmed, Declined, Maybe] {
            assert_eq!(ParticipantStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_does_not_parse() {
        assert_eq!(ParticipantStatus::parse("attending"), None);
    }

    #[test]
    fn invited_displays_as_pending() {
        assert_eq!(Invited.label(), "Pending");
    }

    #[test]
    fn response_labels() {
        assert_eq!(Confirmed.label(), "Confirmed");
        assert_eq!(Declined.label(), "Declined");
        assert_eq!(Maybe.label(), "Maybe");
    }

    // -----------------------------------------------------------------------
    // Fallback display for athletes without a participant row
    // -----------------------------------------------------------------------

    #[test]
    fn active_athlete_falls_back_to_active_label() {
        let resolved = ResolvedStatus::Fallback(AthleteStatus::Active);
        assert_eq!(resolved.label(), "Active");
        assert!(resolved.is_available());
    }

    #[test]
    fn inactive_athlete_falls_back_to_inactive_label() {
        let resolved = ResolvedStatus::Fallback(AthleteStatus::Inactive);
        assert_eq!(resolved.label(), "Inactive");
        assert!(!resolved.is_available());
    }

    #[test]
    fn pending_invitation_is_not_available() {
        assert!(!ResolvedStatus::Rsvp(Invited).is_available());
        assert!(ResolvedStatus::Rsvp(Confirmed).is_available());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::id::{ClubId, MembershipId, PersonId};
use super::role::ClubRole;

/// Membership status.
///
/// A join request starts Pending and is decided into Active or Rejected.
/// Inactive marks a membership that ended after being Active; it is never a
/// target of the approval flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MembershipStatus {
    #[default]
    Pending,
    Active,
    Rejected,
    Inactive,
}

impl MembershipStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Rejected => "Rejected",
            Self::Inactive => "Inactive",
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl FromStr for MembershipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "rejected" => Ok(Self::Rejected),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("Unknown membership status: {s}")),
        }
    }
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A (person, club) membership record with its club-scoped role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubMembership {
    pub id: MembershipId,
    pub person_id: PersonId,
    pub club_id: ClubId,
    pub role: ClubRole,
    pub joined: NaiveDate,
    pub status: MembershipStatus,
}

impl ClubMembership {
    /// Copy of this membership with a different status.
    #[must_use]
    pub fn with_status(&self, status: MembershipStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// A live membership: counted for club-scoped roles and duplicate checks.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.status, MembershipStatus::Pending | MembershipStatus::Active)
    }
}

/// A membership record awaiting persistence.
///
/// Carries no id or join date; the backing store assigns both when the
/// record is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipDraft {
    pub person_id: PersonId,
    pub club_id: ClubId,
    pub role: ClubRole,
    pub status: MembershipStatus,
}

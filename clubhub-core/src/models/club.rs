use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::id::{ClubId, PersonId};

/// Club lifecycle status.
///
/// A proposed club starts Pending. Approval moves it to Active, rejection to
/// Inactive; both are terminal for the approval flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClubStatus {
    #[default]
    Pending,
    Active,
    Inactive,
}

impl ClubStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
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

    #[must_use]
    pub const fn is_inactive(&self) -> bool {
        matches!(self, Self::Inactive)
    }
}

impl FromStr for ClubStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("Unknown club status: {s}")),
        }
    }
}

impl std::fmt::Display for ClubStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub description: Option<String>,
    pub established: NaiveDate,
    pub created_by: PersonId,
    pub status: ClubStatus,
}

impl Club {
    /// Copy of this club with a different status.
    #[must_use]
    pub fn with_status(&self, status: ClubStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Input for proposing a new club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub description: Option<String>,
    pub established: NaiveDate,
}

/// A validated club proposal awaiting persistence.
///
/// Carries no id; the backing store assigns one when the record is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubDraft {
    pub name: String,
    pub description: Option<String>,
    pub established: NaiveDate,
    pub created_by: PersonId,
    pub status: ClubStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("Pending".parse::<ClubStatus>(), Ok(ClubStatus::Pending));
        assert_eq!("active".parse::<ClubStatus>(), Ok(ClubStatus::Active));
        assert!("Closed".parse::<ClubStatus>().is_err());
    }

    #[test]
    fn test_with_status_keeps_identity() {
        let club = Club {
            id: ClubId::new(12),
            name: "Robotics Club".to_string(),
            description: None,
            established: NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date"),
            created_by: PersonId::new(2001),
            status: ClubStatus::Pending,
        };
        let active = club.with_status(ClubStatus::Active);
        assert_eq!(active.id, club.id);
        assert_eq!(active.created_by, club.created_by);
        assert!(active.status.is_active());
    }
}

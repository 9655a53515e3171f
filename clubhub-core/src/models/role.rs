//! Role definitions and the role inheritance hierarchy.
//!
//! Roles come in two closed categories: system roles are assigned once per
//! account, club roles are held per (person, club) membership. Both kinds
//! are unified under [`Role`] for the permission catalog, the hierarchy
//! walk, and role-identity checks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// System-wide role. One per user account, mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemRole {
    Admin,
    Faculty,
    Student,
}

impl SystemRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Faculty => "Faculty",
            Self::Student => "Student",
        }
    }
}

impl FromStr for SystemRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "faculty" => Ok(Self::Faculty),
            "student" => Ok(Self::Student),
            _ => Err(format!("Unknown system role: {s}")),
        }
    }
}

impl std::fmt::Display for SystemRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Club-scoped role. Applies only within one specific club; a person may
/// hold different club roles in different clubs at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubRole {
    #[serde(rename = "Club Leader")]
    Leader,
    #[serde(rename = "Club Member")]
    Member,
}

impl ClubRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Leader => "Club Leader",
            Self::Member => "Club Member",
        }
    }
}

impl FromStr for ClubRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "club leader" => Ok(Self::Leader),
            "club member" => Ok(Self::Member),
            _ => Err(format!("Unknown club role: {s}")),
        }
    }
}

impl std::fmt::Display for ClubRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A role of either category, as consumed by the permission catalog and
/// role-identity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Role {
    System(SystemRole),
    Club(ClubRole),
}

impl Role {
    /// The full closed role set, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::System(SystemRole::Admin),
        Self::System(SystemRole::Faculty),
        Self::System(SystemRole::Student),
        Self::Club(ClubRole::Leader),
        Self::Club(ClubRole::Member),
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System(role) => role.as_str(),
            Self::Club(role) => role.as_str(),
        }
    }

    /// Roles whose permissions this role inherits (direct edges only).
    ///
    /// The graph is acyclic: every edge points strictly "down" the
    /// privilege order Admin > Faculty > Student > Club Leader > Club Member.
    #[must_use]
    pub const fn inherits(&self) -> &'static [Self] {
        match self {
            Self::System(SystemRole::Admin) => &[
                Self::System(SystemRole::Faculty),
                Self::System(SystemRole::Student),
                Self::Club(ClubRole::Leader),
                Self::Club(ClubRole::Member),
            ],
            Self::System(SystemRole::Faculty) => &[
                Self::System(SystemRole::Student),
                Self::Club(ClubRole::Leader),
                Self::Club(ClubRole::Member),
            ],
            Self::System(SystemRole::Student) => &[Self::Club(ClubRole::Member)],
            Self::Club(ClubRole::Leader) => &[Self::Club(ClubRole::Member)],
            Self::Club(ClubRole::Member) => &[],
        }
    }
}

impl From<SystemRole> for Role {
    fn from(role: SystemRole) -> Self {
        Self::System(role)
    }
}

impl From<ClubRole> for Role {
    fn from(role: ClubRole) -> Self {
        Self::Club(role)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(role) = s.parse::<SystemRole>() {
            return Ok(Self::System(role));
        }
        if let Ok(role) = s.parse::<ClubRole>() {
            return Ok(Self::Club(role));
        }
        Err(format!("Unknown role: {s}"))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Permission catalog.
//!
//! Atomic permissions are bits in a 64-bit mask, grouped by subject area.
//! The per-role sets are a fixed catalog covering the closed role set; the
//! catalog is matched exhaustively so a newly introduced role cannot resolve
//! to the empty set without an explicit decision here.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::role::{ClubRole, Role, SystemRole};

/// 64-bit permission bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionBits(pub u64);

impl PermissionBits {
    // ===== Club permissions (0-9) =====

    pub const CREATE_CLUB: u64 = 1 << 0;
    pub const VIEW_CLUB: u64 = 1 << 1;
    pub const UPDATE_CLUB: u64 = 1 << 2;
    pub const DELETE_CLUB: u64 = 1 << 3;
    pub const APPROVE_CLUB: u64 = 1 << 4;

    // ===== Member permissions (10-19) =====

    pub const MANAGE_MEMBERS: u64 = 1 << 10;
    pub const VIEW_MEMBERS: u64 = 1 << 11;
    pub const ADD_MEMBER: u64 = 1 << 12;
    pub const REMOVE_MEMBER: u64 = 1 << 13;
    pub const UPDATE_MEMBER_ROLE: u64 = 1 << 14;

    // ===== Event permissions (20-29) =====

    pub const CREATE_EVENT: u64 = 1 << 20;
    pub const VIEW_EVENT: u64 = 1 << 21;
    pub const UPDATE_EVENT: u64 = 1 << 22;
    pub const DELETE_EVENT: u64 = 1 << 23;
    pub const MANAGE_ATTENDANCE: u64 = 1 << 24;

    // ===== Budget permissions (30-39) =====

    pub const VIEW_BUDGET: u64 = 1 << 30;
    pub const MANAGE_BUDGET: u64 = 1 << 31;
    pub const APPROVE_BUDGET: u64 = 1 << 32;
    pub const CREATE_EXPENDITURE: u64 = 1 << 33;
    pub const APPROVE_EXPENDITURE: u64 = 1 << 34;

    // ===== User permissions (40-49) =====

    pub const VIEW_USERS: u64 = 1 << 40;
    pub const MANAGE_USERS: u64 = 1 << 41;
    pub const ASSIGN_ROLES: u64 = 1 << 42;

    // ===== System permissions (50-59) =====

    pub const VIEW_DASHBOARD: u64 = 1 << 50;
    pub const MANAGE_SYSTEM: u64 = 1 << 51;

    // ===== Per-role catalog entries =====

    /// Club Member: read-only visibility into the member's own clubs
    pub const CLUB_MEMBER_SET: u64 = Self::VIEW_CLUB
        | Self::VIEW_MEMBERS
        | Self::VIEW_EVENT
        | Self::VIEW_BUDGET
        | Self::VIEW_DASHBOARD;

    /// Club Leader: full management of the leader's own clubs
    pub const CLUB_LEADER_SET: u64 = Self::VIEW_CLUB
        | Self::UPDATE_CLUB
        | Self::VIEW_MEMBERS
        | Self::MANAGE_MEMBERS
        | Self::ADD_MEMBER
        | Self::REMOVE_MEMBER
        | Self::CREATE_EVENT
        | Self::VIEW_EVENT
        | Self::UPDATE_EVENT
        | Self::DELETE_EVENT
        | Self::MANAGE_ATTENDANCE
        | Self::VIEW_BUDGET
        | Self::CREATE_EXPENDITURE
        | Self::VIEW_DASHBOARD;

    /// Student: browse everything visible, propose clubs and events
    pub const STUDENT_SET: u64 = Self::VIEW_CLUB
        | Self::CREATE_CLUB
        | Self::VIEW_MEMBERS
        | Self::VIEW_EVENT
        | Self::CREATE_EVENT
        | Self::VIEW_BUDGET
        | Self::CREATE_EXPENDITURE
        | Self::VIEW_DASHBOARD;

    /// Faculty: oversight and budget/club sign-off
    pub const FACULTY_SET: u64 = Self::VIEW_CLUB
        | Self::APPROVE_CLUB
        | Self::VIEW_MEMBERS
        | Self::MANAGE_MEMBERS
        | Self::VIEW_EVENT
        | Self::VIEW_BUDGET
        | Self::APPROVE_BUDGET
        | Self::APPROVE_EXPENDITURE
        | Self::VIEW_USERS
        | Self::VIEW_DASHBOARD;

    /// Admin: every permission in the catalog
    pub const ADMIN_SET: u64 = Self::CREATE_CLUB
        | Self::VIEW_CLUB
        | Self::UPDATE_CLUB
        | Self::DELETE_CLUB
        | Self::APPROVE_CLUB
        | Self::MANAGE_MEMBERS
        | Self::VIEW_MEMBERS
        | Self::ADD_MEMBER
        | Self::REMOVE_MEMBER
        | Self::UPDATE_MEMBER_ROLE
        | Self::CREATE_EVENT
        | Self::VIEW_EVENT
        | Self::UPDATE_EVENT
        | Self::DELETE_EVENT
        | Self::MANAGE_ATTENDANCE
        | Self::VIEW_BUDGET
        | Self::MANAGE_BUDGET
        | Self::APPROVE_BUDGET
        | Self::CREATE_EXPENDITURE
        | Self::APPROVE_EXPENDITURE
        | Self::VIEW_USERS
        | Self::MANAGE_USERS
        | Self::ASSIGN_ROLES
        | Self::VIEW_DASHBOARD
        | Self::MANAGE_SYSTEM;

    pub const NONE: u64 = 0;

    #[must_use]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(Self::NONE)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == Self::NONE
    }

    /// Check if has specific permission
    #[must_use]
    pub const fn has(&self, permission: u64) -> bool {
        (self.0 & permission) != 0
    }

    /// Check if has all specified permissions
    #[must_use]
    pub const fn has_all(&self, permissions: u64) -> bool {
        (self.0 & permissions) == permissions
    }

    /// Check if has any of the specified permissions
    #[must_use]
    pub const fn has_any(&self, permissions: u64) -> bool {
        (self.0 & permissions) != 0
    }

    /// Set union
    #[must_use]
    pub const fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Add permission
    pub const fn grant(&mut self, permission: u64) {
        self.0 |= permission;
    }

    /// Remove permission
    pub const fn revoke(&mut self, permission: u64) {
        self.0 &= !permission;
    }
}

impl Default for PermissionBits {
    fn default() -> Self {
        Self::empty()
    }
}

impl Role {
    /// Direct permissions of this role, before hierarchy inheritance.
    #[must_use]
    pub const fn permissions(&self) -> PermissionBits {
        match self {
            Self::System(SystemRole::Admin) => PermissionBits(PermissionBits::ADMIN_SET),
            Self::System(SystemRole::Faculty) => PermissionBits(PermissionBits::FACULTY_SET),
            Self::System(SystemRole::Student) => PermissionBits(PermissionBits::STUDENT_SET),
            Self::Club(ClubRole::Leader) => PermissionBits(PermissionBits::CLUB_LEADER_SET),
            Self::Club(ClubRole::Member) => PermissionBits(PermissionBits::CLUB_MEMBER_SET),
        }
    }
}

/// Look up a role's direct permissions by name.
///
/// Unknown role names resolve to the empty set rather than failing; callers
/// sitting at the string boundary treat "no such role" as "no permissions".
#[must_use]
pub fn permissions_for_name(name: &str) -> PermissionBits {
    Role::from_str(name).map_or_else(|_| PermissionBits::empty(), |role| role.permissions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_has() {
        let perms = PermissionBits(PermissionBits::CREATE_CLUB);
        assert!(perms.has(PermissionBits::CREATE_CLUB));
        assert!(!perms.has(PermissionBits::APPROVE_CLUB));
    }

    #[test]
    fn test_permission_grant_revoke() {
        let mut perms = PermissionBits::empty();
        perms.grant(PermissionBits::VIEW_CLUB);
        perms.grant(PermissionBits::VIEW_EVENT);

        assert!(perms.has(PermissionBits::VIEW_CLUB));
        assert!(perms.has(PermissionBits::VIEW_EVENT));

        perms.revoke(PermissionBits::VIEW_CLUB);
        assert!(!perms.has(PermissionBits::VIEW_CLUB));
        assert!(perms.has(PermissionBits::VIEW_EVENT));
    }

    #[test]
    fn test_admin_set_covers_catalog() {
        let admin = PermissionBits(PermissionBits::ADMIN_SET);
        assert!(admin.has_all(PermissionBits::FACULTY_SET));
        assert!(admin.has_all(PermissionBits::STUDENT_SET));
        assert!(admin.has_all(PermissionBits::CLUB_LEADER_SET));
        assert!(admin.has_all(PermissionBits::CLUB_MEMBER_SET));
    }

    #[test]
    fn test_every_role_has_direct_permissions() {
        // No role in the fixed catalog is accidentally powerless.
        for role in Role::ALL {
            assert!(!role.permissions().is_empty(), "{role} has no permissions");
        }
    }

    #[test]
    fn test_catalog_is_stable() {
        for role in Role::ALL {
            assert_eq!(role.permissions(), role.permissions());
        }
    }

    #[test]
    fn test_faculty_lacks_student_creation_rights_directly() {
        let faculty = Role::System(SystemRole::Faculty).permissions();
        assert!(!faculty.has(PermissionBits::CREATE_CLUB));
        assert!(faculty.has(PermissionBits::APPROVE_CLUB));
    }

    #[test]
    fn test_unknown_role_name_resolves_to_empty() {
        assert!(permissions_for_name("Janitor").is_empty());
        assert!(permissions_for_name("").is_empty());
        assert!(!permissions_for_name("Club Leader").is_empty());
    }
}

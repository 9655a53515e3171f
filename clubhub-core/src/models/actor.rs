//! Actor snapshot for authorization decisions.
//!
//! Every decision function takes the actor as an explicit argument instead
//! of reading ambient session state. An actor is built fresh from the
//! current membership snapshot; the library never caches one across
//! decisions, so staleness is entirely the caller's concern.

use serde::{Deserialize, Serialize};

use super::id::{ClubId, PersonId};
use super::membership::ClubMembership;
use super::permission::PermissionBits;
use super::role::{ClubRole, Role, SystemRole};
use crate::service::access;

/// One active club membership as seen by the authorization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubAffiliation {
    pub club_id: ClubId,
    pub role: ClubRole,
}

/// The identity on whose behalf an authorization decision is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub person_id: PersonId,
    /// `None` for unauthenticated callers.
    pub system_role: Option<SystemRole>,
    /// Club-scoped roles, derived from Active memberships only.
    #[serde(default)]
    pub affiliations: Vec<ClubAffiliation>,
}

impl Actor {
    #[must_use]
    pub fn new(person_id: PersonId, system_role: Option<SystemRole>) -> Self {
        Self {
            person_id,
            system_role,
            affiliations: Vec::new(),
        }
    }

    /// Build an actor from a membership snapshot, keeping only this
    /// person's Active memberships.
    #[must_use]
    pub fn from_memberships(
        person_id: PersonId,
        system_role: Option<SystemRole>,
        memberships: &[ClubMembership],
    ) -> Self {
        let affiliations = memberships
            .iter()
            .filter(|m| m.person_id == person_id && m.status.is_active())
            .map(|m| ClubAffiliation {
                club_id: m.club_id,
                role: m.role,
            })
            .collect();
        Self {
            person_id,
            system_role,
            affiliations,
        }
    }

    #[must_use]
    pub fn with_affiliation(mut self, club_id: ClubId, role: ClubRole) -> Self {
        self.affiliations.push(ClubAffiliation { club_id, role });
        self
    }

    /// Club roles this actor holds anywhere, deduplicated.
    #[must_use]
    pub fn club_roles(&self) -> Vec<ClubRole> {
        let mut roles: Vec<ClubRole> = self.affiliations.iter().map(|a| a.role).collect();
        roles.sort_by_key(|r| r.as_str());
        roles.dedup();
        roles
    }

    /// This actor's role within a specific club, if any.
    ///
    /// A leader affiliation wins over a member affiliation in the same club.
    #[must_use]
    pub fn role_in(&self, club_id: ClubId) -> Option<ClubRole> {
        let mut found = None;
        for affiliation in &self.affiliations {
            if affiliation.club_id != club_id {
                continue;
            }
            if affiliation.role == ClubRole::Leader {
                return Some(ClubRole::Leader);
            }
            found = Some(affiliation.role);
        }
        found
    }

    #[must_use]
    pub fn is_leader_of(&self, club_id: ClubId) -> bool {
        self.role_in(club_id) == Some(ClubRole::Leader)
    }

    /// Effective permission set after hierarchy inheritance.
    #[must_use]
    pub fn effective_permissions(&self) -> PermissionBits {
        access::effective_permissions(self.system_role, &self.club_roles())
    }

    #[must_use]
    pub fn has_permission(&self, permission: u64) -> bool {
        access::has_permission(permission, self.system_role, &self.club_roles())
    }

    #[must_use]
    pub fn has_any_permission(&self, permissions: &[u64]) -> bool {
        access::has_any_permission(permissions, self.system_role, &self.club_roles())
    }

    #[must_use]
    pub fn has_all_permissions(&self, permissions: &[u64]) -> bool {
        access::has_all_permissions(permissions, self.system_role, &self.club_roles())
    }

    /// Exact role-identity check; does not walk the hierarchy.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        access::has_role(role, self.system_role, &self.club_roles())
    }

    #[must_use]
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        access::has_any_role(roles, self.system_role, &self.club_roles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::membership::MembershipStatus;
    use crate::models::MembershipId;
    use chrono::NaiveDate;

    fn membership(
        person: i64,
        club: i64,
        role: ClubRole,
        status: MembershipStatus,
    ) -> ClubMembership {
        ClubMembership {
            id: MembershipId::new(1),
            person_id: PersonId::new(person),
            club_id: ClubId::new(club),
            role,
            joined: NaiveDate::from_ymd_opt(2024, 9, 15).expect("valid date"),
            status,
        }
    }

    #[test]
    fn test_from_memberships_keeps_active_rows_for_person() {
        let memberships = vec![
            membership(2001, 3001, ClubRole::Leader, MembershipStatus::Active),
            membership(2001, 3002, ClubRole::Member, MembershipStatus::Pending),
            membership(2001, 3003, ClubRole::Leader, MembershipStatus::Inactive),
            membership(2002, 3004, ClubRole::Leader, MembershipStatus::Active),
        ];
        let actor = Actor::from_memberships(PersonId::new(2001), None, &memberships);

        assert_eq!(actor.affiliations.len(), 1);
        assert!(actor.is_leader_of(ClubId::new(3001)));
        assert!(!actor.is_leader_of(ClubId::new(3003)));
        assert!(!actor.is_leader_of(ClubId::new(3004)));
    }

    #[test]
    fn test_role_in_prefers_leader() {
        let actor = Actor::new(PersonId::new(2001), None)
            .with_affiliation(ClubId::new(3001), ClubRole::Member)
            .with_affiliation(ClubId::new(3001), ClubRole::Leader);
        assert_eq!(actor.role_in(ClubId::new(3001)), Some(ClubRole::Leader));
        assert_eq!(actor.role_in(ClubId::new(3002)), None);
    }

    #[test]
    fn test_actor_snapshot_deserializes_from_backend_shape() {
        let json = r#"{
            "person_id": 2001,
            "system_role": "Student",
            "affiliations": [
                { "club_id": 3001, "role": "Club Leader" }
            ]
        }"#;
        let actor: Actor = serde_json::from_str(json).expect("valid snapshot");
        assert_eq!(actor.system_role, Some(SystemRole::Student));
        assert!(actor.is_leader_of(ClubId::new(3001)));
    }
}

//! Access decisions.
//!
//! Pure predicates over a caller-supplied role snapshot. Every function here
//! is total: unknown or absent roles degrade to the empty permission set,
//! and a `false` answer is the expected steady-state outcome for a caller
//! probing what to render, never an error.

use std::collections::{HashSet, VecDeque};

use crate::models::{ClubRole, PermissionBits, Role, SystemRole};

/// Permissions of a role plus everything it transitively inherits.
///
/// Breadth-first over the declared hierarchy. The visited set guards
/// against revisits even though the hierarchy is acyclic.
#[must_use]
pub fn effective_role_permissions(role: Role) -> PermissionBits {
    let mut effective = role.permissions();
    let mut visited: HashSet<Role> = HashSet::from([role]);
    let mut queue: VecDeque<Role> = role.inherits().iter().copied().collect();

    while let Some(inherited) = queue.pop_front() {
        if !visited.insert(inherited) {
            continue;
        }
        effective = effective.union(inherited.permissions());
        queue.extend(inherited.inherits().iter().copied());
    }

    effective
}

/// Effective permission set of an actor snapshot: the union of the system
/// role's closure and each club role's closure. Empty inputs yield the
/// empty set.
#[must_use]
pub fn effective_permissions(
    system_role: Option<SystemRole>,
    club_roles: &[ClubRole],
) -> PermissionBits {
    let mut effective = PermissionBits::empty();

    if let Some(role) = system_role {
        effective = effective.union(effective_role_permissions(role.into()));
    }
    for &role in club_roles {
        effective = effective.union(effective_role_permissions(role.into()));
    }

    effective
}

/// Check whether the snapshot holds a specific permission.
#[must_use]
pub fn has_permission(
    permission: u64,
    system_role: Option<SystemRole>,
    club_roles: &[ClubRole],
) -> bool {
    effective_permissions(system_role, club_roles).has(permission)
}

/// Check whether the snapshot holds at least one of the listed permissions.
#[must_use]
pub fn has_any_permission(
    permissions: &[u64],
    system_role: Option<SystemRole>,
    club_roles: &[ClubRole],
) -> bool {
    let effective = effective_permissions(system_role, club_roles);
    permissions.iter().any(|&p| effective.has(p))
}

/// Check whether the snapshot holds every listed permission.
#[must_use]
pub fn has_all_permissions(
    permissions: &[u64],
    system_role: Option<SystemRole>,
    club_roles: &[ClubRole],
) -> bool {
    let effective = effective_permissions(system_role, club_roles);
    permissions.iter().all(|&p| effective.has(p))
}

/// Exact role-identity check.
///
/// Deliberately does NOT walk the hierarchy: an Admin inherits every Club
/// Member permission but does not "have" the Club Member role. Role
/// membership and permission inheritance are different questions.
#[must_use]
pub fn has_role(role: Role, system_role: Option<SystemRole>, club_roles: &[ClubRole]) -> bool {
    match role {
        Role::System(wanted) => system_role == Some(wanted),
        Role::Club(wanted) => club_roles.contains(&wanted),
    }
}

/// Exact role-identity check over a list.
#[must_use]
pub fn has_any_role(
    roles: &[Role],
    system_role: Option<SystemRole>,
    club_roles: &[ClubRole],
) -> bool {
    roles
        .iter()
        .any(|&role| has_role(role, system_role, club_roles))
}

//! Request approval lifecycle.
//!
//! One engine for the three approvable request kinds: club proposals,
//! membership requests, and expenditure requests. All three share the same
//! shape: a request starts Pending, an authorized actor decides it exactly
//! once, and every post-Pending status is terminal. Reopening means
//! creating a new request, never reverting a status.
//!
//! The engine validates; it does not persist. Transition results are
//! returned to the caller for the backing store to apply.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PolicyConfig;
use crate::models::{
    Actor, Budget, BudgetDraft, Club, ClubDraft, ClubMembership, ClubRole, ClubStatus,
    CreateBudgetRequest, CreateClubRequest, CreateEventRequest, CreateExpenditureRequest,
    EventDraft, Expenditure, ExpenditureDraft, ExpenditureStatus, MembershipDraft,
    MembershipStatus, PermissionBits, Role, SystemRole,
};
use crate::validation;
use crate::{Error, Result};

/// Outcome of deciding a club proposal.
///
/// Approval activates the club AND grants its creator a Club Leader
/// membership. The backing store must apply both records or neither; an
/// Active club with no leader is an invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubTransition {
    pub club: Club,
    pub leader_grant: Option<MembershipDraft>,
}

/// Stateless engine for request authorization and status transitions.
#[derive(Debug, Clone, Default)]
pub struct ApprovalEngine {
    policy: PolicyConfig,
}

impl ApprovalEngine {
    #[must_use]
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    // ===== Club proposals =====

    /// Whether `actor` may move this club proposal to `target`.
    #[must_use]
    pub fn can_transition_club(&self, club: &Club, actor: &Actor, target: ClubStatus) -> bool {
        self.check_club_transition(club, actor, target).is_ok()
    }

    /// Decide a club proposal.
    ///
    /// Approval (target Active) also yields the creator's Club Leader
    /// membership in the returned [`ClubTransition`].
    pub fn transition_club(
        &self,
        club: &Club,
        actor: &Actor,
        target: ClubStatus,
    ) -> Result<ClubTransition> {
        self.check_club_transition(club, actor, target)?;

        let leader_grant = target.is_active().then(|| MembershipDraft {
            person_id: club.created_by,
            club_id: club.id,
            role: ClubRole::Leader,
            status: MembershipStatus::Active,
        });

        debug!(club = %club.id, from = %club.status, to = %target, "club request decided");

        Ok(ClubTransition {
            club: club.with_status(target),
            leader_grant,
        })
    }

    fn check_club_transition(&self, club: &Club, actor: &Actor, target: ClubStatus) -> Result<()> {
        ensure_decidable(club.status.is_pending(), target.is_pending(), || {
            (club.status.to_string(), target.to_string())
        })?;
        if !actor.has_role(Role::System(SystemRole::Admin)) {
            return Err(Error::Authorization(
                "only administrators may decide club requests".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate a new club proposal. The draft enters Pending.
    pub fn propose_club(&self, actor: &Actor, request: &CreateClubRequest) -> Result<ClubDraft> {
        if !actor.has_permission(PermissionBits::CREATE_CLUB) {
            return Err(Error::Authorization(
                "actor may not propose clubs".to_string(),
            ));
        }
        validation::validate_club_name(&request.name)?;
        if let Some(description) = &request.description {
            validation::validate_description(description)?;
        }

        Ok(ClubDraft {
            name: request.name.trim().to_string(),
            description: request.description.clone(),
            established: request.established,
            created_by: actor.person_id,
            status: ClubStatus::Pending,
        })
    }

    // ===== Membership requests =====

    /// Whether `actor` may move this membership request to `target`.
    #[must_use]
    pub fn can_transition_membership(
        &self,
        membership: &ClubMembership,
        actor: &Actor,
        target: MembershipStatus,
    ) -> bool {
        self.check_membership_transition(membership, actor, target)
            .is_ok()
    }

    /// Decide a membership request.
    pub fn transition_membership(
        &self,
        membership: &ClubMembership,
        actor: &Actor,
        target: MembershipStatus,
    ) -> Result<ClubMembership> {
        self.check_membership_transition(membership, actor, target)?;

        debug!(
            membership = %membership.id,
            club = %membership.club_id,
            from = %membership.status,
            to = %target,
            "membership request decided"
        );

        Ok(membership.with_status(target))
    }

    fn check_membership_transition(
        &self,
        membership: &ClubMembership,
        actor: &Actor,
        target: MembershipStatus,
    ) -> Result<()> {
        ensure_decidable(membership.status.is_pending(), target.is_pending(), || {
            (membership.status.to_string(), target.to_string())
        })?;
        let authorized = actor.has_role(Role::System(SystemRole::Admin))
            || actor.is_leader_of(membership.club_id);
        if !authorized {
            return Err(Error::Authorization(
                "membership requests are decided by administrators or leaders of that club"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Validate a request to join `club`. The draft enters Pending.
    ///
    /// `existing` is the requester's current membership snapshot; a live
    /// (Pending or Active) row for the same club blocks a duplicate request.
    pub fn request_membership(
        &self,
        actor: &Actor,
        club: &Club,
        existing: &[ClubMembership],
    ) -> Result<MembershipDraft> {
        if !club.status.is_active() {
            return Err(Error::InvalidInput(
                "club is not open for membership".to_string(),
            ));
        }
        let duplicate = existing
            .iter()
            .any(|m| m.person_id == actor.person_id && m.club_id == club.id && m.is_live());
        if duplicate {
            return Err(Error::AlreadyExists(
                "a membership request for this club already exists".to_string(),
            ));
        }

        Ok(MembershipDraft {
            person_id: actor.person_id,
            club_id: club.id,
            role: ClubRole::Member,
            status: MembershipStatus::Pending,
        })
    }

    // ===== Expenditure requests =====

    /// Whether `actor` may move this expenditure request to `target`.
    #[must_use]
    pub fn can_transition_expenditure(
        &self,
        expenditure: &Expenditure,
        actor: &Actor,
        target: ExpenditureStatus,
    ) -> bool {
        self.check_expenditure_transition(expenditure, actor, target)
            .is_ok()
    }

    /// Decide an expenditure request.
    pub fn transition_expenditure(
        &self,
        expenditure: &Expenditure,
        actor: &Actor,
        target: ExpenditureStatus,
    ) -> Result<Expenditure> {
        self.check_expenditure_transition(expenditure, actor, target)?;

        debug!(
            expenditure = %expenditure.id,
            budget = %expenditure.budget_id,
            from = %expenditure.status,
            to = %target,
            "expenditure request decided"
        );

        Ok(expenditure.with_status(target))
    }

    fn check_expenditure_transition(
        &self,
        expenditure: &Expenditure,
        actor: &Actor,
        target: ExpenditureStatus,
    ) -> Result<()> {
        ensure_decidable(expenditure.status.is_pending(), target.is_pending(), || {
            (expenditure.status.to_string(), target.to_string())
        })?;
        let authorized = actor.has_role(Role::System(SystemRole::Admin))
            || (self.policy.faculty_may_approve_expenditures
                && actor.has_role(Role::System(SystemRole::Faculty)));
        if !authorized {
            return Err(Error::Authorization(
                "only administrators may decide expenditure requests".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate a new expenditure request against `budget`.
    ///
    /// The amount is checked against the remaining balance at submission
    /// time; exceeding it fails with [`Error::BudgetExceeded`] and no record
    /// is created. The draft enters Pending.
    pub fn submit_expenditure(
        &self,
        actor: &Actor,
        club: &Club,
        budget: &Budget,
        request: &CreateExpenditureRequest,
    ) -> Result<ExpenditureDraft> {
        if budget.club_id != club.id {
            return Err(Error::InvalidInput(
                "budget does not belong to this club".to_string(),
            ));
        }
        if club.status.is_inactive() {
            return Err(Error::InvalidInput(
                "cannot submit expenditures for an inactive club".to_string(),
            ));
        }
        let authorized = actor.has_role(Role::System(SystemRole::Admin))
            || actor.is_leader_of(budget.club_id);
        if !authorized {
            return Err(Error::Authorization(
                "expenditures are submitted by administrators or leaders of that club".to_string(),
            ));
        }
        if !actor.has_permission(PermissionBits::CREATE_EXPENDITURE) {
            return Err(Error::Authorization(
                "actor may not submit expenditures".to_string(),
            ));
        }
        validation::validate_amount(request.amount)?;
        if let Some(description) = &request.description {
            validation::validate_description(description)?;
        }

        let remaining = budget.remaining();
        if request.amount > remaining {
            return Err(Error::BudgetExceeded {
                requested: request.amount,
                remaining,
            });
        }

        Ok(ExpenditureDraft {
            budget_id: budget.id,
            description: request.description.clone(),
            amount: request.amount,
            status: ExpenditureStatus::Pending,
        })
    }

    // ===== Event scheduling =====

    /// Validate a new event for `club`.
    pub fn schedule_event(
        &self,
        actor: &Actor,
        club: &Club,
        request: &CreateEventRequest,
    ) -> Result<EventDraft> {
        if !club.status.is_active() {
            return Err(Error::InvalidInput(
                "events require an active club".to_string(),
            ));
        }
        let authorized =
            actor.has_role(Role::System(SystemRole::Admin)) || actor.is_leader_of(club.id);
        if !authorized {
            return Err(Error::Authorization(
                "events are scheduled by administrators or leaders of that club".to_string(),
            ));
        }
        if !actor.has_permission(PermissionBits::CREATE_EVENT) {
            return Err(Error::Authorization(
                "actor may not schedule events".to_string(),
            ));
        }
        validation::validate_event_name(&request.name)?;
        if let Some(description) = &request.description {
            validation::validate_description(description)?;
        }

        Ok(EventDraft {
            club_id: club.id,
            name: request.name.trim().to_string(),
            description: request.description.clone(),
            date: request.date,
            venue: request.venue.clone(),
        })
    }

    // ===== Budget allocation =====

    /// Validate a new budget allocation for `club`.
    pub fn allocate_budget(
        &self,
        actor: &Actor,
        club: &Club,
        request: &CreateBudgetRequest,
    ) -> Result<BudgetDraft> {
        if !club.status.is_active() {
            return Err(Error::InvalidInput(
                "budgets are allocated to active clubs".to_string(),
            ));
        }
        if !actor.has_permission(PermissionBits::MANAGE_BUDGET) {
            return Err(Error::Authorization(
                "actor may not allocate budgets".to_string(),
            ));
        }
        validation::validate_academic_year(&request.academic_year)?;
        validation::validate_amount(request.total_allocated)?;

        Ok(BudgetDraft {
            club_id: club.id,
            academic_year: request.academic_year.clone(),
            total_allocated: request.total_allocated,
            total_spent: Decimal::ZERO,
        })
    }
}

/// The state rule shared by all three request kinds: the only legal move is
/// Pending → non-Pending. Checked before authorization, so a finished
/// request answers InvalidState regardless of who asks.
fn ensure_decidable(
    current_is_pending: bool,
    target_is_pending: bool,
    describe: impl FnOnce() -> (String, String),
) -> Result<()> {
    if !current_is_pending || target_is_pending {
        let (current, requested) = describe();
        return Err(Error::InvalidState { current, requested });
    }
    Ok(())
}

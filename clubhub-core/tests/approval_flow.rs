//! End-to-end approval scenarios through the public API.
//!
//! Each scenario plays the part of the surrounding application: build an
//! actor snapshot, ask the engine for a decision, and apply the returned
//! records the way the backing store would.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use clubhub_core::models::{
    Actor, Budget, BudgetId, Club, ClubId, ClubMembership, ClubRole, ClubStatus,
    CreateClubRequest, CreateExpenditureRequest, ExpenditureStatus, MembershipId,
    MembershipStatus, PersonId, SystemRole,
};
use clubhub_core::{ApprovalEngine, Error};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn club_proposal_through_approval_makes_creator_a_leader() {
    let engine = ApprovalEngine::default();
    let creator = Actor::new(PersonId::new(2001), Some(SystemRole::Student));
    let admin = Actor::new(PersonId::new(1), Some(SystemRole::Admin));

    // Student proposes; the draft enters Pending.
    let draft = engine
        .propose_club(
            &creator,
            &CreateClubRequest {
                name: "Astronomy Society".to_string(),
                description: Some("Telescopes on the quad".to_string()),
                established: date(2025, 2, 1),
            },
        )
        .expect("student may propose");
    assert!(draft.status.is_pending());

    // The store assigns an id.
    let club = Club {
        id: ClubId::new(12),
        name: draft.name,
        description: draft.description,
        established: draft.established,
        created_by: draft.created_by,
        status: draft.status,
    };

    // The creator cannot approve their own proposal.
    assert!(!engine.can_transition_club(&club, &creator, ClubStatus::Active));

    // Admin approves: both postconditions arrive together.
    let transition = engine
        .transition_club(&club, &admin, ClubStatus::Active)
        .expect("admin approves");
    assert!(transition.club.status.is_active());
    let grant = transition.leader_grant.expect("leader grant accompanies approval");
    assert_eq!(grant.person_id, PersonId::new(2001));
    assert_eq!(grant.club_id, club.id);
    assert_eq!(grant.role, ClubRole::Leader);

    // Applying the grant makes the creator a leader for later decisions.
    let membership = ClubMembership {
        id: MembershipId::new(500),
        person_id: grant.person_id,
        club_id: grant.club_id,
        role: grant.role,
        joined: date(2025, 2, 2),
        status: grant.status,
    };
    let leader = Actor::from_memberships(
        PersonId::new(2001),
        Some(SystemRole::Student),
        &[membership],
    );
    assert!(leader.is_leader_of(club.id));
}

#[test]
fn membership_approval_is_scoped_to_the_leaders_club() {
    let engine = ApprovalEngine::default();
    let leader = Actor::new(PersonId::new(9), Some(SystemRole::Student))
        .with_affiliation(ClubId::new(3001), ClubRole::Leader);

    let request = ClubMembership {
        id: MembershipId::new(77),
        person_id: PersonId::new(2002),
        club_id: ClubId::new(3001),
        role: ClubRole::Member,
        joined: date(2025, 1, 10),
        status: MembershipStatus::Pending,
    };

    assert!(engine.can_transition_membership(&request, &leader, MembershipStatus::Active));

    let elsewhere = ClubMembership {
        club_id: ClubId::new(3002),
        ..request.clone()
    };
    assert!(!engine.can_transition_membership(&elsewhere, &leader, MembershipStatus::Active));
}

#[test]
fn rejecting_twice_fails_the_second_time() {
    let engine = ApprovalEngine::default();
    let admin = Actor::new(PersonId::new(1), Some(SystemRole::Admin));

    let request = ClubMembership {
        id: MembershipId::new(81),
        person_id: PersonId::new(2003),
        club_id: ClubId::new(3001),
        role: ClubRole::Member,
        joined: date(2025, 1, 12),
        status: MembershipStatus::Pending,
    };

    let rejected = engine
        .transition_membership(&request, &admin, MembershipStatus::Rejected)
        .expect("first rejection succeeds");
    assert_eq!(rejected.status, MembershipStatus::Rejected);

    match engine.transition_membership(&rejected, &admin, MembershipStatus::Rejected) {
        Err(Error::InvalidState { current, requested }) => {
            assert_eq!(current, "Rejected");
            assert_eq!(requested, "Rejected");
        }
        other => panic!("expected InvalidState, got {other:?}"),
    }
}

#[test]
fn expenditure_submission_respects_the_remaining_balance() {
    let engine = ApprovalEngine::default();
    let leader = Actor::new(PersonId::new(9), Some(SystemRole::Student))
        .with_affiliation(ClubId::new(3001), ClubRole::Leader);
    let club = Club {
        id: ClubId::new(3001),
        name: "Robotics Club".to_string(),
        description: None,
        established: date(2024, 9, 1),
        created_by: PersonId::new(9),
        status: ClubStatus::Active,
    };
    let budget = Budget {
        id: BudgetId::new(5),
        club_id: club.id,
        academic_year: "2024-2025".to_string(),
        total_allocated: Decimal::new(50_000, 2),
        total_spent: Decimal::new(30_000, 2),
    };

    // 250.00 against 200.00 remaining: refused before any record exists.
    let over = engine.submit_expenditure(
        &leader,
        &club,
        &budget,
        &CreateExpenditureRequest {
            description: Some("Competition travel".to_string()),
            amount: Decimal::new(25_000, 2),
        },
    );
    assert!(matches!(over, Err(Error::BudgetExceeded { .. })));

    // 150.00 fits and enters Pending.
    let draft = engine
        .submit_expenditure(
            &leader,
            &club,
            &budget,
            &CreateExpenditureRequest {
                description: Some("Competition travel".to_string()),
                amount: Decimal::new(15_000, 2),
            },
        )
        .expect("within balance");
    assert_eq!(draft.status, ExpenditureStatus::Pending);
    assert_eq!(draft.amount, Decimal::new(15_000, 2));
}

//! Dashboard statistics.
//!
//! Pure aggregation over snapshot slices; the caller supplies the data and
//! the reference date, the result is plain numbers for the dashboard tiles.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Budget, Club, ClubMembership, Event, Person, PersonKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_clubs: usize,
    pub active_clubs: usize,
    pub pending_clubs: usize,
    pub total_events: usize,
    pub upcoming_events: usize,
    pub total_members: usize,
    pub active_members: usize,
    pub total_budget_allocated: Decimal,
    pub total_budget_spent: Decimal,
}

impl DashboardStats {
    /// Aggregate a full snapshot. Events without a date never count as
    /// upcoming.
    #[must_use]
    pub fn compute(
        persons: &[Person],
        clubs: &[Club],
        memberships: &[ClubMembership],
        events: &[Event],
        budgets: &[Budget],
        today: NaiveDate,
    ) -> Self {
        Self {
            total_users: persons
                .iter()
                .filter(|p| p.kind == PersonKind::User)
                .count(),
            total_clubs: clubs.len(),
            active_clubs: clubs.iter().filter(|c| c.status.is_active()).count(),
            pending_clubs: clubs.iter().filter(|c| c.status.is_pending()).count(),
            total_events: events.len(),
            upcoming_events: events
                .iter()
                .filter(|e| e.date.is_some_and(|d| d >= today))
                .count(),
            total_members: memberships.len(),
            active_members: memberships
                .iter()
                .filter(|m| m.status.is_active())
                .count(),
            total_budget_allocated: budgets.iter().map(|b| b.total_allocated).sum(),
            total_budget_spent: budgets.iter().map(|b| b.total_spent).sum(),
        }
    }
}

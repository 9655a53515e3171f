use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::id::{BudgetId, ClubId, ExpenditureId};

/// A club's budget for one academic year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub club_id: ClubId,
    pub academic_year: String,
    pub total_allocated: Decimal,
    pub total_spent: Decimal,
}

impl Budget {
    /// Remaining balance: the ceiling for new expenditure requests.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.total_allocated - self.total_spent
    }
}

/// Input for allocating a new budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBudgetRequest {
    pub academic_year: String,
    pub total_allocated: Decimal,
}

/// A budget awaiting persistence. Nothing is spent at allocation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetDraft {
    pub club_id: ClubId,
    pub academic_year: String,
    pub total_allocated: Decimal,
    pub total_spent: Decimal,
}

/// Expenditure request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExpenditureStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ExpenditureStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl FromStr for ExpenditureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("Unknown expenditure status: {s}")),
        }
    }
}

impl std::fmt::Display for ExpenditureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expenditure request against a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expenditure {
    pub id: ExpenditureId,
    pub budget_id: BudgetId,
    pub description: Option<String>,
    pub amount: Decimal,
    pub requested: NaiveDate,
    pub status: ExpenditureStatus,
}

impl Expenditure {
    /// Copy of this expenditure with a different status.
    #[must_use]
    pub fn with_status(&self, status: ExpenditureStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Input for submitting an expenditure request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpenditureRequest {
    pub description: Option<String>,
    pub amount: Decimal,
}

/// An expenditure request awaiting persistence.
///
/// Carries no id or request date; the backing store assigns both when the
/// record is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenditureDraft {
    pub budget_id: BudgetId,
    pub description: Option<String>,
    pub amount: Decimal,
    pub status: ExpenditureStatus,
}

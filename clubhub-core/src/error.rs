use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Invalid state: {current} request cannot move to {requested}")]
    InvalidState { current: String, requested: String },

    #[error("Budget exceeded: requested {requested}, remaining {remaining}")]
    BudgetExceeded {
        requested: Decimal,
        remaining: Decimal,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Validation(#[from] crate::validation::ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;

//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when an item type, a stock item, a transaction or
//!   a party is not found.
//! - [`ExistingKey`] thrown when a natural key (item type name, party
//!   name/type pair) is already taken.
//! - [`InvalidAmount`], [`InvalidName`] and [`InvalidKind`] thrown on input
//!   the engine refuses to store.
//! - [`MaxBalanceReached`] thrown when a channel balance or the total no
//!   longer fits in `i64` cents.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidName`]: EngineError::InvalidName
//!  [`InvalidKind`]: EngineError::InvalidKind
//!  [`MaxBalanceReached`]: EngineError::MaxBalanceReached
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("{0} already exists")]
    ExistingKey(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid kind: {0}")]
    InvalidKind(String),
    #[error("Max balance reached: {0}")]
    MaxBalanceReached(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// Turns a unique-constraint violation into [`EngineError::ExistingKey`],
    /// any other database error is kept as is.
    pub(crate) fn from_insert(err: DbErr, key: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::ExistingKey(key.into()),
            _ => Self::Database(err),
        }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidKind(a), Self::InvalidKind(b)) => a == b,
            (Self::MaxBalanceReached(a), Self::MaxBalanceReached(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

//! Transaction primitives.
//!
//! A `Transaction` is an immutable money movement on one payment channel.
//! The amount is stored exactly as supplied; its effect on a channel is
//! decided by the kind when the ledger is replayed.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::{EngineError, MoneyCents};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    Sell,
    Purchase,
    Spending,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sell => "sell",
            Self::Purchase => "purchase",
            Self::Spending => "spending",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sell" => Ok(Self::Sell),
            "purchase" => Ok(Self::Purchase),
            "spending" => Ok(Self::Spending),
            other => Err(EngineError::InvalidKind(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

/// Caller-supplied fields of a transaction.
///
/// `payment_method` is free text: anything other than `cash`, `bank1` or
/// `bank2` is stored but contributes to no channel balance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: String,
    pub kind: TransactionKind,
    pub name: String,
    pub amount: MoneyCents,
    pub payment_method: String,
    pub stock_code: Option<String>,
}

impl NewTransaction {
    /// Stock item this transaction sells, if any.
    ///
    /// Only `sell` transactions act on stock; a code attached to a purchase
    /// or a spending is kept as a plain reference.
    pub fn sold_stock_code(&self) -> Option<&str> {
        match self.kind {
            TransactionKind::Sell => self.stock_code.as_deref().filter(|code| !code.is_empty()),
            TransactionKind::Purchase | TransactionKind::Spending => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: String,
    pub kind: TransactionKind,
    pub name: String,
    pub amount: MoneyCents,
    pub payment_method: String,
    pub stock_code: Option<String>,
    /// Recording order, strictly increasing.
    pub seq: i64,
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(fields: NewTransaction, seq: i64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: fields.date,
            kind: fields.kind,
            name: fields.name,
            amount: fields.amount,
            payment_method: fields.payment_method,
            stock_code: fields.stock_code,
            seq,
            recorded_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: String,
    pub transaction_type: String,
    pub name: String,
    pub amount_minor: i64,
    pub payment_method: String,
    pub stock_code: Option<String>,
    pub seq: i64,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id),
            date: ActiveValue::Set(tx.date.clone()),
            transaction_type: ActiveValue::Set(tx.kind.as_str().to_string()),
            name: ActiveValue::Set(tx.name.clone()),
            amount_minor: ActiveValue::Set(tx.amount.cents()),
            payment_method: ActiveValue::Set(tx.payment_method.clone()),
            stock_code: ActiveValue::Set(tx.stock_code.clone()),
            seq: ActiveValue::Set(tx.seq),
            recorded_at: ActiveValue::Set(tx.recorded_at),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            kind: TransactionKind::try_from(model.transaction_type.as_str())?,
            date: model.date,
            name: model.name,
            amount: MoneyCents::new(model.amount_minor),
            payment_method: model.payment_method,
            stock_code: model.stock_code,
            seq: model.seq,
            recorded_at: model.recorded_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_tx(kind: TransactionKind, stock_code: Option<&str>) -> NewTransaction {
        NewTransaction {
            date: "2024-01-15".to_string(),
            kind,
            name: "John".to_string(),
            amount: MoneyCents::new(100),
            payment_method: "cash".to_string(),
            stock_code: stock_code.map(ToString::to_string),
        }
    }

    #[test]
    fn only_sell_touches_stock() {
        assert_eq!(
            new_tx(TransactionKind::Sell, Some("1000")).sold_stock_code(),
            Some("1000")
        );
        assert_eq!(
            new_tx(TransactionKind::Purchase, Some("1000")).sold_stock_code(),
            None
        );
        assert_eq!(
            new_tx(TransactionKind::Spending, Some("1000")).sold_stock_code(),
            None
        );
        assert_eq!(new_tx(TransactionKind::Sell, None).sold_stock_code(), None);
        assert_eq!(new_tx(TransactionKind::Sell, Some("")).sold_stock_code(), None);
    }

    #[test]
    fn kind_round_trips_through_storage_string() {
        for kind in [
            TransactionKind::Sell,
            TransactionKind::Purchase,
            TransactionKind::Spending,
        ] {
            assert_eq!(TransactionKind::try_from(kind.as_str()).unwrap(), kind);
        }
        assert!(TransactionKind::try_from("refund").is_err());
    }
}

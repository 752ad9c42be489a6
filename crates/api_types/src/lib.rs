use serde::{Deserialize, Serialize};

/// Money as sent by clients.
///
/// Forms post amounts as strings ("75000", "12,50") while scripted clients
/// send JSON numbers, so both are accepted. Responses always carry plain
/// numbers in major units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

/// Body of every successful delete/sell call.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub mod item_type {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemType {
        pub name: String,
    }
}

pub mod stock {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum StockStatus {
        #[default]
        Current,
        Sold,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct StockItemNew {
        pub date_of_purchase: String,
        #[serde(rename = "type")]
        pub item_type: String,
        pub description: String,
        pub supplier_name: String,
        pub phone: String,
        pub price: Amount,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct StockItemView {
        pub item_number: String,
        pub date_of_purchase: String,
        #[serde(rename = "type")]
        pub item_type: String,
        pub description: String,
        pub supplier_name: String,
        pub phone: String,
        pub price: f64,
        pub status: StockStatus,
    }

    /// `GET /stock` query. A missing status lists current items.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct StockQuery {
        pub status: Option<StockStatus>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionType {
        Sell,
        Purchase,
        Spending,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub date: String,
        pub transaction_type: TransactionType,
        /// Customer or supplier name, free text.
        pub name: String,
        pub amount: Amount,
        /// `cash`, `bank1` or `bank2`. Other values are stored but do not
        /// count toward the balance.
        pub payment_method: String,
        /// Item number sold by a `sell` transaction.
        #[serde(default)]
        pub stock_code: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub date: String,
        pub transaction_type: TransactionType,
        pub name: String,
        pub amount: f64,
        pub payment_method: String,
        pub stock_code: Option<String>,
    }
}

pub mod party {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PartyType {
        Customer,
        Supplier,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Party {
        pub name: String,
        #[serde(rename = "type")]
        pub kind: PartyType,
    }

    /// `GET /customers-suppliers` query. Without a type every party is listed.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PartyQuery {
        #[serde(rename = "type")]
        pub kind: Option<PartyType>,
    }
}

pub mod balance {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Balance {
        pub cash: f64,
        pub bank1: f64,
        pub bank2: f64,
        pub total: f64,
    }
}

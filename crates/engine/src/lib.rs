//! Bookkeeping engine of a single-location shop.
//!
//! The engine owns the database connection and exposes the shop operations:
//! item types, stock items (numbered from a persistent counter and moved
//! from `current` to `sold`), customers/suppliers, transactions and the
//! per-channel balance replayed from the transaction log.

pub use error::EngineError;
pub use item_types::ItemType;
pub use ledger::{Balance, Channel};
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder};
pub use parties::{Party, PartyKind};
pub use stock_items::{NewStockItem, StockItem, StockStatus};
pub use transactions::{NewTransaction, Transaction, TransactionKind};

mod counters;
mod error;
mod item_types;
mod ledger;
mod money;
mod ops;
mod parties;
mod stock_items;
mod transactions;

type ResultEngine<T> = Result<T, EngineError>;

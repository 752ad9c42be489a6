//! Named monotonic counters.

use sea_orm::entity::prelude::*;

/// Counter feeding stock item numbers.
pub const STOCK_COUNTER: &str = "stock_counter";

/// First value handed out by a fresh stock counter.
pub const FIRST_STOCK_NUMBER: i64 = 1000;

/// Counter ordering transactions by recording.
pub const TRANSACTION_COUNTER: &str = "transaction_seq";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "counters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::{ConnectionTrait, EntityTrait, Statement};

use super::Engine;
use crate::{
    EngineError, ResultEngine,
    counters::{self, FIRST_STOCK_NUMBER, STOCK_COUNTER, TRANSACTION_COUNTER},
};

/// Bumps the named counter and returns its new value.
///
/// The first call creates the counter at `first`; every later call bumps it
/// by one. Read and increment happen in a single upsert statement, so two
/// concurrent callers can never observe the same value.
async fn next_value<C>(db: &C, name: &str, first: i64) -> ResultEngine<i64>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        "INSERT INTO counters (name, value) VALUES (?, ?) \
         ON CONFLICT (name) DO UPDATE SET value = counters.value + 1 \
         RETURNING name, value",
        [name.into(), first.into()],
    );

    let counter = counters::Entity::find()
        .from_raw_sql(stmt)
        .one(db)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("counter {name}")))?;

    Ok(counter.value)
}

/// Hands out the next stock item number, starting at 1000.
pub(super) async fn next_number<C>(db: &C) -> ResultEngine<String>
where
    C: ConnectionTrait,
{
    Ok(next_value(db, STOCK_COUNTER, FIRST_STOCK_NUMBER)
        .await?
        .to_string())
}

pub(super) async fn next_transaction_seq<C>(db: &C) -> ResultEngine<i64>
where
    C: ConnectionTrait,
{
    next_value(db, TRANSACTION_COUNTER, 1).await
}

impl Engine {
    /// Consumes the next stock item number outside of item creation.
    pub async fn next_stock_number(&self) -> ResultEngine<String> {
        next_number(&self.database).await
    }
}

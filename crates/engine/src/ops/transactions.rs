use chrono::Utc;
use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{EngineError, NewTransaction, ResultEngine, Transaction, transactions};

use super::{Engine, balance::replay_log, sequence::next_transaction_seq, stock::set_sold, with_tx};

impl Engine {
    /// Records a transaction.
    ///
    /// A `sell` carrying a stock code first marks that stock item as sold.
    /// Both writes share one DB transaction: an unknown stock code fails the
    /// call with `KeyNotFound` and nothing is stored, and a failed insert
    /// leaves the stock item untouched.
    ///
    /// A transaction that would push a channel or the total past the `i64`
    /// cents range is refused with `MaxBalanceReached`, so the balance stays
    /// computable.
    pub async fn record_transaction(&self, fields: NewTransaction) -> ResultEngine<Transaction> {
        with_tx!(self, |db_tx| {
            if let Some(stock_code) = fields.sold_stock_code() {
                set_sold(&db_tx, stock_code).await?;
                tracing::info!(stock_code, "stock item sold by transaction");
            }

            let seq = next_transaction_seq(&db_tx).await?;
            let tx = Transaction::new(fields, seq, Utc::now());
            transactions::ActiveModel::from(&tx).insert(&db_tx).await?;
            replay_log(&db_tx).await?.total()?;
            Ok(tx)
        })
    }

    /// Every recorded transaction, oldest first.
    pub async fn list_transactions(&self) -> ResultEngine<Vec<Transaction>> {
        transactions::Entity::find()
            .order_by_asc(transactions::Column::Seq)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    /// Deletes one transaction matching `(date, name)`.
    ///
    /// The pair is not unique: when several transactions match, the one
    /// recorded first (lowest sequence number) goes.
    pub async fn delete_transaction(&self, date: &str, name: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let target = transactions::Entity::find()
                .filter(transactions::Column::Date.eq(date))
                .filter(transactions::Column::Name.eq(name))
                .order_by_asc(transactions::Column::Seq)
                .one(&db_tx)
                .await?
                .ok_or_else(|| {
                    EngineError::KeyNotFound(format!("transaction {date}/{name}"))
                })?;

            transactions::Entity::delete_by_id(target.id)
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }
}

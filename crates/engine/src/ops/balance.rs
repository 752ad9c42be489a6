use sea_orm::{ConnectionTrait, prelude::*};

use crate::{Balance, MoneyCents, ResultEngine, TransactionKind, transactions};

use super::Engine;

/// Loads every transaction through `db` and folds it into a balance.
///
/// Rows with a kind the engine does not know are skipped with a warning.
pub(super) async fn replay_log<C>(db: &C) -> ResultEngine<Balance>
where
    C: ConnectionTrait,
{
    let models: Vec<transactions::Model> = transactions::Entity::find().all(db).await?;

    let rows = models.iter().filter_map(|model| {
        match TransactionKind::try_from(model.transaction_type.as_str()) {
            Ok(kind) => Some((
                kind,
                model.payment_method.as_str(),
                MoneyCents::new(model.amount_minor),
            )),
            Err(err) => {
                tracing::warn!(id = %model.id, "transaction left out of balance: {err}");
                None
            }
        }
    });

    Balance::replay(rows)
}

impl Engine {
    /// Replays the whole transaction log into per-channel balances.
    ///
    /// Every call scans all transactions; nothing is cached between calls.
    pub async fn compute_balance(&self) -> ResultEngine<Balance> {
        replay_log(&self.database).await
    }
}

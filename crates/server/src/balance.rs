use api_types::balance::Balance;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Per-channel balance, recomputed from every stored transaction.
pub async fn get(State(state): State<ServerState>) -> Result<Json<Balance>, ServerError> {
    let balance = state.engine.compute_balance().await?;
    Ok(Json(Balance {
        cash: balance.cash.to_major(),
        bank1: balance.bank1.to_major(),
        bank2: balance.bank2.to_major(),
        total: balance.total()?.to_major(),
    }))
}

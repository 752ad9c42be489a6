use api_types::{
    Message,
    transaction::{TransactionNew, TransactionType, TransactionView},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use engine::{NewTransaction, TransactionKind};

use crate::{ServerError, money_from, server::ServerState};

fn engine_kind(kind: TransactionType) -> TransactionKind {
    match kind {
        TransactionType::Sell => TransactionKind::Sell,
        TransactionType::Purchase => TransactionKind::Purchase,
        TransactionType::Spending => TransactionKind::Spending,
    }
}

fn api_kind(kind: TransactionKind) -> TransactionType {
    match kind {
        TransactionKind::Sell => TransactionType::Sell,
        TransactionKind::Purchase => TransactionType::Purchase,
        TransactionKind::Spending => TransactionType::Spending,
    }
}

fn map_transaction(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        date: tx.date,
        transaction_type: api_kind(tx.kind),
        name: tx.name,
        amount: tx.amount.to_major(),
        payment_method: tx.payment_method,
        stock_code: tx.stock_code,
    }
}

/// Records a transaction. A `sell` naming a stock code marks that item sold
/// in the same database transaction, so an unknown code stores nothing.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TransactionNew>, JsonRejection>,
) -> Result<Json<TransactionView>, ServerError> {
    let Json(payload) = payload?;
    let fields = NewTransaction {
        date: payload.date,
        kind: engine_kind(payload.transaction_type),
        name: payload.name,
        amount: money_from(payload.amount)?,
        payment_method: payload.payment_method,
        stock_code: payload.stock_code,
    };
    let tx = state.engine.record_transaction(fields).await?;
    Ok(Json(map_transaction(tx)))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let transactions = state
        .engine
        .list_transactions()
        .await?
        .into_iter()
        .map(map_transaction)
        .collect();
    Ok(Json(transactions))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path((date, name)): Path<(String, String)>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_transaction(&date, &name).await?;
    Ok(Json(Message::new("Transaction deleted successfully")))
}

//! Stock endpoints: numbered items moving from `current` to `sold`.

use api_types::{
    Message,
    stock::{StockItemNew, StockItemView, StockQuery, StockStatus},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use engine::NewStockItem;

use crate::{ServerError, money_from, server::ServerState};

fn engine_status(status: StockStatus) -> engine::StockStatus {
    match status {
        StockStatus::Current => engine::StockStatus::Current,
        StockStatus::Sold => engine::StockStatus::Sold,
    }
}

fn map_item(item: engine::StockItem) -> StockItemView {
    StockItemView {
        item_number: item.item_number,
        date_of_purchase: item.date_of_purchase,
        item_type: item.item_type,
        description: item.description,
        supplier_name: item.supplier_name,
        phone: item.phone,
        price: item.price.to_major(),
        status: match item.status {
            engine::StockStatus::Current => StockStatus::Current,
            engine::StockStatus::Sold => StockStatus::Sold,
        },
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<StockItemNew>, JsonRejection>,
) -> Result<Json<StockItemView>, ServerError> {
    let Json(payload) = payload?;
    let fields = NewStockItem {
        date_of_purchase: payload.date_of_purchase,
        item_type: payload.item_type,
        description: payload.description,
        supplier_name: payload.supplier_name,
        phone: payload.phone,
        price: money_from(payload.price)?,
    };
    let item = state.engine.create_stock_item(fields).await?;
    Ok(Json(map_item(item)))
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<StockQuery>, QueryRejection>,
) -> Result<Json<Vec<StockItemView>>, ServerError> {
    let Query(query) = query?;
    let status = engine_status(query.status.unwrap_or_default());
    let items = state
        .engine
        .list_stock_items(status)
        .await?
        .into_iter()
        .map(map_item)
        .collect();
    Ok(Json(items))
}

pub async fn sell(
    State(state): State<ServerState>,
    Path(item_number): Path<String>,
) -> Result<Json<Message>, ServerError> {
    state.engine.mark_sold(&item_number).await?;
    Ok(Json(Message::new("Item marked as sold")))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(item_number): Path<String>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_stock_item(&item_number).await?;
    Ok(Json(Message::new("Stock item deleted successfully")))
}

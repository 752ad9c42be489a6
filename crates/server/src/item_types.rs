use api_types::{Message, item_type::ItemType};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{ServerError, server::ServerState};

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ItemType>, JsonRejection>,
) -> Result<Json<ItemType>, ServerError> {
    let Json(payload) = payload?;
    let item_type = state.engine.create_item_type(&payload.name).await?;
    Ok(Json(ItemType {
        name: item_type.name,
    }))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ItemType>>, ServerError> {
    let types = state
        .engine
        .list_item_types()
        .await?
        .into_iter()
        .map(|t| ItemType { name: t.name })
        .collect();
    Ok(Json(types))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_item_type(&name).await?;
    Ok(Json(Message::new("Item type deleted successfully")))
}

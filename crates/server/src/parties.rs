use api_types::{
    Message,
    party::{Party, PartyQuery, PartyType},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use engine::PartyKind;

use crate::{ServerError, server::ServerState};

fn engine_kind(kind: PartyType) -> PartyKind {
    match kind {
        PartyType::Customer => PartyKind::Customer,
        PartyType::Supplier => PartyKind::Supplier,
    }
}

fn map_party(party: engine::Party) -> Party {
    Party {
        name: party.name,
        kind: match party.kind {
            PartyKind::Customer => PartyType::Customer,
            PartyKind::Supplier => PartyType::Supplier,
        },
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Party>, JsonRejection>,
) -> Result<Json<Party>, ServerError> {
    let Json(payload) = payload?;
    let party = state
        .engine
        .create_party(&payload.name, engine_kind(payload.kind))
        .await?;
    Ok(Json(map_party(party)))
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<PartyQuery>, QueryRejection>,
) -> Result<Json<Vec<Party>>, ServerError> {
    let Query(query) = query?;
    let parties = state
        .engine
        .list_parties(query.kind.map(engine_kind))
        .await?
        .into_iter()
        .map(map_party)
        .collect();
    Ok(Json(parties))
}

/// The type segment is matched as text so an unknown type reads as a
/// missing party rather than a malformed path.
pub async fn remove(
    State(state): State<ServerState>,
    Path((name, kind)): Path<(String, String)>,
) -> Result<Json<Message>, ServerError> {
    let kind = PartyKind::try_from(kind.as_str()).map_err(|_| {
        ServerError::Engine(engine::EngineError::KeyNotFound(format!(
            "{kind} {name}"
        )))
    })?;
    state.engine.delete_party(&name, kind).await?;
    Ok(Json(Message::new("Customer/Supplier deleted successfully")))
}

use api_types::Amount;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::{EngineError, MoneyCents};

use serde::Serialize;
pub use server::{ServerOptions, router, run_with_listener};

mod balance;
mod item_types;
mod parties;
mod server;
mod stock;
mod transactions;

pub enum ServerError {
    Engine(EngineError),
    /// A body or query string axum could not extract.
    Rejected(StatusCode, String),
}

/// Error body, `{"detail": "..."}`.
#[derive(Serialize)]
struct Detail {
    detail: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::BAD_REQUEST,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidAmount(_)
        | EngineError::InvalidName(_)
        | EngineError::InvalidKind(_)
        | EngineError::MaxBalanceReached(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Rejected(status, detail) => (status, detail),
        };

        (status, Json(Detail { detail })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Rejected(value.status(), value.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(value: QueryRejection) -> Self {
        Self::Rejected(value.status(), value.body_text())
    }
}

/// Converts a client amount (number or decimal string) into cents.
fn money_from(amount: Amount) -> Result<MoneyCents, EngineError> {
    match amount {
        Amount::Number(value) => MoneyCents::from_major(value),
        Amount::Text(text) => text.trim().parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_conflict_maps_to_400() {
        let res = ServerError::from(EngineError::ExistingKey("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        for err in [
            EngineError::InvalidAmount("x".to_string()),
            EngineError::InvalidName("x".to_string()),
            EngineError::InvalidKind("x".to_string()),
            EngineError::MaxBalanceReached("cash".to_string()),
        ] {
            let res = ServerError::from(err).into_response();
            assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn rejection_keeps_its_status() {
        let res = ServerError::Rejected(StatusCode::UNSUPPORTED_MEDIA_TYPE, "json".to_string())
            .into_response();
        assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn database_errors_are_hidden() {
        let err = EngineError::Database(sea_orm::DbErr::Custom("disk on fire".to_string()));
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"detail": "internal server error"}));
    }

    #[test]
    fn amounts_from_numbers_and_strings() {
        assert_eq!(
            money_from(Amount::Number(750.5)).unwrap(),
            MoneyCents::new(75_050)
        );
        assert_eq!(
            money_from(Amount::Text(" 12,50 ".to_string())).unwrap(),
            MoneyCents::new(1_250)
        );
        assert!(money_from(Amount::Text("abc".to_string())).is_err());
    }
}

//! API request handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::binding::{ChromaBinding, InvokeRequest, OperationKind};
use crate::error::BindingError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub binding: ChromaBinding,
}

/// Body of `POST /v1/invoke`
#[derive(Debug, Deserialize)]
pub struct InvokeBody {
    pub operation: String,

    /// Payload; strings are passed through verbatim, anything else as JSON
    #[serde(default)]
    pub data: Option<serde_json::Value>,

    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Successful invoke response
#[derive(Debug, Serialize)]
pub struct InvokeResult {
    pub data: serde_json::Value,
    pub metadata: IndexMap<String, String>,
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

/// Binding error mapped onto an HTTP status
pub struct ApiError(BindingError);

impl From<BindingError> for ApiError {
    fn from(err: BindingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BindingError::Validation(_)
            | BindingError::Credential(_)
            | BindingError::UnsupportedOperation { .. } => StatusCode::BAD_REQUEST,
            BindingError::Unimplemented(_) => StatusCode::NOT_IMPLEMENTED,
            BindingError::Upstream(_) => StatusCode::BAD_GATEWAY,
            BindingError::Config(_) | BindingError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
                kind: self.0.kind(),
            }),
        )
            .into_response()
    }
}

/// Invoke a binding operation
pub async fn invoke(
    State(state): State<AppState>,
    Json(body): Json<InvokeBody>,
) -> Result<Json<InvokeResult>, ApiError> {
    let data = match body.data {
        None | Some(serde_json::Value::Null) => Bytes::new(),
        Some(serde_json::Value::String(s)) => Bytes::from(s),
        Some(value) => Bytes::from(serde_json::to_vec(&value)?),
    };

    let request = InvokeRequest {
        operation: body.operation,
        data,
        metadata: body.metadata,
    };

    let response = state.binding.invoke(&request).await?;

    // Payloads that are not JSON (version strings) come back as JSON strings
    let data = serde_json::from_slice(&response.data)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&response.data).into_owned()));

    Ok(Json(InvokeResult {
        data,
        metadata: response.metadata,
    }))
}

/// List supported operations
pub async fn list_operations(State(state): State<AppState>) -> impl IntoResponse {
    let operations: &[OperationKind] = state.binding.operations();
    Json(operations.to_vec())
}

/// Non-secret component metadata
pub async fn component_metadata(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.binding.component_metadata())
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self(BindingError::from(err))
    }
}

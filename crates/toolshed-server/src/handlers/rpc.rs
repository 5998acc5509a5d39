use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use toolshed_core::InvocationRequest;
use toolshed_rpc::jsonrpc::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};
use toolshed_rpc::wire::{self, CallParams, CallResult, ListResult, ToolDescriptor};
use toolshed_rpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

use crate::app_state::AppState;

/// Handle a JSON-RPC request against the tool service.
///
/// Requests get their response returned in the HTTP body; notifications
/// (null or absent id) are acknowledged with 202 and no body.
pub async fn rpc_request(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    if request.is_notification() {
        tracing::debug!(method = %request.method, "notification acknowledged");
        return StatusCode::ACCEPTED.into_response();
    }

    let response = match request.method.as_str() {
        wire::METHOD_INITIALIZE => handle_initialize(&request),
        wire::METHOD_TOOLS_LIST => handle_tools_list(&state, &request),
        wire::METHOD_TOOLS_CALL => handle_tools_call(&state, &request).await,
        other => {
            tracing::warn!(method = %other, "unknown method");
            JsonRpcResponse::failure(
                request.id.clone(),
                JsonRpcError::new(METHOD_NOT_FOUND, format!("method not found: {other}")),
            )
        }
    };

    Json(response).into_response()
}

fn success(id: Value, payload: &impl Serialize) -> JsonRpcResponse {
    match serde_json::to_value(payload) {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(error) => {
            JsonRpcResponse::failure(id, JsonRpcError::new(INTERNAL_ERROR, error.to_string()))
        }
    }
}

fn handle_initialize(request: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(
        request.id.clone(),
        serde_json::json!({
            "protocolVersion": wire::PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": "toolshed",
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(state: &AppState, request: &JsonRpcRequest) -> JsonRpcResponse {
    let mut tools = Vec::new();

    for definition in state.registry.definitions() {
        match ToolDescriptor::from_definition(&definition) {
            Ok(descriptor) => tools.push(descriptor),
            Err(error) => {
                tracing::error!(tool = %definition.name, %error, "schema failed to serialize");
                return JsonRpcResponse::failure(
                    request.id.clone(),
                    JsonRpcError::new(INTERNAL_ERROR, error.to_string()),
                );
            }
        }
    }

    success(request.id.clone(), &ListResult { tools })
}

async fn handle_tools_call(state: &AppState, request: &JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = request.params.clone() else {
        return JsonRpcResponse::failure(
            request.id.clone(),
            JsonRpcError::new(INVALID_PARAMS, "missing params"),
        );
    };

    let call: CallParams = match serde_json::from_value(params) {
        Ok(call) => call,
        Err(error) => {
            return JsonRpcResponse::failure(
                request.id.clone(),
                JsonRpcError::new(INVALID_PARAMS, error.to_string()),
            );
        }
    };

    let invocation = InvocationRequest::from(call);

    match state.registry.execute(&invocation).await {
        Ok(result) => {
            tracing::info!(tool = %invocation.name, "invocation succeeded");
            success(request.id.clone(), &CallResult { data: result.data })
        }
        Err(error) => {
            tracing::warn!(tool = %invocation.name, %error, "invocation failed");
            JsonRpcResponse::failure(
                request.id.clone(),
                wire::error_object(&error)
                    .with_data(serde_json::json!({ "tool": invocation.name })),
            )
        }
    }
}

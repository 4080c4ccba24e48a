//! # Swap Request Endpoints
//!
//! Create, accept, reject and list swap requests.

use serde::Serialize;
use shared::{NewSwapRequest, RequestId, Session, SwapRequest};

use super::client::{ApiClient, FetchConfig};
use crate::core::{AppError, Result};

/// Body sent to `/create/`.
///
/// The caller's payload with both swap flags forced on: the API is always
/// asked for a full room and time swap.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSwapRequestBody {
    pub from_session: i64,
    pub to_session: i64,
    pub swap_room: bool,
    pub swap_time: bool,
}

impl From<&NewSwapRequest> for CreateSwapRequestBody {
    fn from(data: &NewSwapRequest) -> Self {
        Self {
            from_session: data.from_session,
            to_session: data.to_session,
            swap_room: true,
            swap_time: true,
        }
    }
}

pub fn create_path() -> &'static str {
    "/create/"
}

pub fn accept_path(id: &RequestId) -> String {
    format!("/accept/{}/", id)
}

pub fn reject_path(id: &RequestId) -> String {
    format!("/reject/{}/", id)
}

pub fn requests_path() -> &'static str {
    "/requests/"
}

pub fn sessions_path() -> &'static str {
    "/sessions/"
}

/// Request config for `/create/`, with both swap flags forced on.
pub fn create_config(data: &NewSwapRequest) -> Result<FetchConfig> {
    FetchConfig::post().json(&CreateSwapRequestBody::from(data))
}

/// Propose a swap between two sessions.
#[tracing::instrument(skip(client, data), fields(
    from_session = data.from_session,
    to_session = data.to_session,
))]
pub async fn create_swap_request(client: &ApiClient, data: &NewSwapRequest) -> Result<reqwest::Response> {
    if !data.swap_room || !data.swap_time {
        tracing::debug!(
            swap_room = data.swap_room,
            swap_time = data.swap_time,
            "Overriding swap flags, full swap requested"
        );
    }

    let config = create_config(data)?;

    match client.fetch_with_auth(create_path(), config).await {
        Ok(response) => {
            tracing::info!("Swap request created");
            Ok(response)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error creating swap request");
            Err(e)
        }
    }
}

/// Accept a pending swap request.
#[tracing::instrument(skip(client, id), fields(id = %id))]
pub async fn accept_swap_request(client: &ApiClient, id: &RequestId) -> Result<()> {
    let start = std::time::Instant::now();
    client
        .fetch_with_auth(&accept_path(id), FetchConfig::post())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Accept swap request failed");
            e
        })?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Swap request accepted");
    Ok(())
}

/// Reject a pending swap request.
#[tracing::instrument(skip(client, id), fields(id = %id))]
pub async fn reject_swap_request(client: &ApiClient, id: &RequestId) -> Result<()> {
    let start = std::time::Instant::now();
    client
        .fetch_with_auth(&reject_path(id), FetchConfig::post())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Reject swap request failed");
            e
        })?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Swap request rejected");
    Ok(())
}

/// Fetch every swap request visible to the current user.
pub async fn list_swap_requests(client: &ApiClient) -> Result<Vec<SwapRequest>> {
    let response = client
        .fetch_with_auth(requests_path(), FetchConfig::get())
        .await?;

    response
        .json::<Vec<SwapRequest>>()
        .await
        .map_err(|e| AppError::Parse(e.to_string()))
}

/// Fetch the sessions offered in the create form.
pub async fn list_sessions(client: &ApiClient) -> Result<Vec<Session>> {
    let response = client
        .fetch_with_auth(sessions_path(), FetchConfig::get())
        .await?;

    response
        .json::<Vec<Session>>()
        .await
        .map_err(|e| AppError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token::StaticToken;
    use reqwest::Method;
    use std::sync::Arc;

    #[test]
    fn test_create_body_forces_both_flags() {
        let data = NewSwapRequest {
            from_session: 12,
            to_session: 31,
            swap_room: false,
            swap_time: false,
        };

        let body = serde_json::to_value(CreateSwapRequestBody::from(&data)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "from_session": 12,
                "to_session": 31,
                "swap_room": true,
                "swap_time": true
            })
        );
    }

    #[test]
    fn test_create_request_shape() {
        let client = ApiClient::new("http://api.test/swap", Arc::new(StaticToken::new("tok")));
        let data = NewSwapRequest {
            from_session: 1,
            to_session: 2,
            swap_room: true,
            swap_time: false,
        };
        let config = create_config(&data).unwrap();
        let request = client.build_request(create_path(), &config).build().unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://api.test/swap/create/");

        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        let sent: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "from_session": 1,
                "to_session": 2,
                "swap_room": true,
                "swap_time": true
            })
        );
    }

    #[test]
    fn test_action_paths_are_keyed_by_id() {
        let id = RequestId::from("42");
        assert_eq!(accept_path(&id), "/accept/42/");
        assert_eq!(reject_path(&id), "/reject/42/");
    }
}

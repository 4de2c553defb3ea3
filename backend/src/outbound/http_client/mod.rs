//! Reqwest-backed client for the practice session REST API.
//!
//! The adapter implements [`PracticeSessionCommand`] so the timer can persist
//! sessions in a server running in another process. Each call sends the
//! current trace id, or a fresh one, in the `trace-id` header so both sides
//! log the same correlation id.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::domain::ports::{
    CreatePracticeSessionRequest, CreatePracticeSessionResponse, DeletePracticeSessionRequest,
    PracticeSessionCommand, PracticeSessionPayload, UpdatePracticeSessionRequest,
    UpdatePracticeSessionResponse,
};
use crate::domain::{Error, TRACE_ID_HEADER, TraceId};

const SESSIONS_PATH: &str = "/api/sessions";

/// Session command adapter talking to a remote practice tracker API.
#[derive(Debug, Clone)]
pub struct PracticeApiClient {
    client: Client,
    base_url: Url,
}

impl PracticeApiClient {
    /// Build a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|err| Error::internal(format!("invalid practice API url: {err}")))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Vec<u8>, Error> {
        let url = self.endpoint(path)?;
        let trace_id = TraceId::current_or_generate();
        debug!(%method, %url, %trace_id, "calling practice API");
        let mut request = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(TRACE_ID_HEADER, trace_id.to_string());
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl PracticeSessionCommand for PracticeApiClient {
    async fn create_session(
        &self,
        request: CreatePracticeSessionRequest,
    ) -> Result<CreatePracticeSessionResponse, Error> {
        let body = encode(&request.session)?;
        let bytes = self.send(Method::POST, SESSIONS_PATH, Some(body)).await?;
        Ok(CreatePracticeSessionResponse {
            session: decode::<PracticeSessionPayload>(&bytes)?,
        })
    }

    async fn update_session(
        &self,
        request: UpdatePracticeSessionRequest,
    ) -> Result<UpdatePracticeSessionResponse, Error> {
        let body = encode(&request.changes)?;
        let bytes = self
            .send(
                Method::PATCH,
                &session_path(request.session_id),
                Some(body),
            )
            .await?;
        Ok(UpdatePracticeSessionResponse {
            session: decode::<PracticeSessionPayload>(&bytes)?,
        })
    }

    async fn delete_session(&self, request: DeletePracticeSessionRequest) -> Result<(), Error> {
        self.send(Method::DELETE, &session_path(request.session_id), None)
            .await
            .map(drop)
    }
}

fn session_path(session_id: Uuid) -> String {
    format!("{SESSIONS_PATH}/{session_id}")
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body)
        .map_err(|err| Error::internal(format!("invalid practice API response: {err}")))
}

fn encode<T: Serialize>(body: &T) -> Result<Value, Error> {
    serde_json::to_value(body)
        .map_err(|err| Error::internal(format!("failed to encode practice API request: {err}")))
}

fn map_transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::service_unavailable(format!("practice API timed out: {error}"))
    } else {
        Error::service_unavailable(format!("practice API unreachable: {error}"))
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> Error {
    if let Ok(remote) = serde_json::from_slice::<Error>(body) {
        return remote;
    }

    let message = format!("practice API returned status {}", status.as_u16());
    match status {
        StatusCode::NOT_FOUND => Error::not_found(message),
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            Error::service_unavailable(message)
        }
        _ if status.is_client_error() => Error::invalid_request(message),
        _ => Error::internal(message),
    }
}

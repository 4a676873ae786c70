// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the spreadsheet web app.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests for production
//! - Mock transports with deterministic failures for unit testing

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use cram_core::protocol::{
    ClientRequest, ProgressResponse, UpdateAck, UpdateRequest, WrongAnswersResponse,
};

/// Error type for transport operations.
///
/// Callers above the synchronizer never see these; the synchronizer
/// converts every variant into fallback or queueing behavior.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Request could not be sent or the connection dropped.
    #[error("request failed: {0}")]
    Request(String),

    /// Non-success HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// Body did not decode as the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport trait for the action-dispatched web app protocol.
///
/// This trait abstracts over the HTTP layer, allowing tests to inject
/// deterministic success/failure behavior per request.
pub trait Transport {
    /// `GET ?action=getProgress`
    fn get_progress(&self) -> TransportResult<ProgressResponse>;

    /// `POST {action: "updateProgress", ...}`
    fn post_update(&self, req: &UpdateRequest) -> TransportResult<UpdateAck>;

    /// `POST {action: "getWrongAnswers"}`
    fn get_wrong_answers(&self) -> TransportResult<WrongAnswersResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_progress(&self) -> TransportResult<ProgressResponse> {
        (**self).get_progress()
    }

    fn post_update(&self, req: &UpdateRequest) -> TransportResult<UpdateAck> {
        (**self).post_update(req)
    }

    fn get_wrong_answers(&self) -> TransportResult<WrongAnswersResponse> {
        (**self).get_wrong_answers()
    }
}

/// Blocking HTTP transport over reqwest.
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport for the given endpoint.
    pub fn new(endpoint: &str, timeout: Duration) -> TransportResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(HttpTransport {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    fn post_action<B: Serialize, R: DeserializeOwned>(&self, body: &B) -> TransportResult<R> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(body)
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json()
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
}

impl Transport for HttpTransport {
    fn get_progress(&self) -> TransportResult<ProgressResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("action", "getProgress")])
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json()
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }

    fn post_update(&self, req: &UpdateRequest) -> TransportResult<UpdateAck> {
        self.post_action(&ClientRequest::UpdateProgress(req.clone()))
    }

    fn get_wrong_answers(&self) -> TransportResult<WrongAnswersResponse> {
        self.post_action(&ClientRequest::GetWrongAnswers)
    }
}

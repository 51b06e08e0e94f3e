//! Error types for the task API client.
//!
//! # Design
//! `NotFound` and `InvalidInput` get dedicated variants because they are the
//! two failure outcomes the API contract models: a toggle/delete against an
//! absent id, and a create with a rejected title. Every other non-2xx status
//! lands in `HttpError` with the raw status code and body for debugging.

use std::fmt;

/// Errors returned by `TaskClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — no task has the requested id.
    NotFound,

    /// The server returned 422 — the request was rejected as invalid
    /// (e.g. an empty title). Carries the response body as detail.
    InvalidInput(String),

    /// The server returned a non-2xx status other than 404 or 422.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "task not found"),
            ApiError::InvalidInput(detail) => write!(f, "invalid input: {detail}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

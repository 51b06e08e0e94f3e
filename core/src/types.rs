//! Domain DTOs for the task API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client crate never links against server internals. Integration tests
//! catch any schema drift between the two crates. The wire format uses
//! camelCase for the completion flag (`isCompleted`).

use serde::{Deserialize, Serialize};

/// A single task returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

/// Request payload for creating a new task. New tasks always start
/// incomplete, so there is no completion field to send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

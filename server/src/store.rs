//! In-memory task store: the single owner of the task collection and the
//! identifier counter.
//!
//! # Design
//! `TaskStore` is plain sequential code with no interior locking; the API
//! layer wraps the whole store in one `RwLock` so every operation (including
//! id assignment + append) runs as an atomic unit. Ids come from a monotonic
//! counter that is never decremented, so deleting a task can never cause an
//! id to be reused. The backing `Vec` makes insertion order structural —
//! `list` is just a clone of it.

use serde::{Deserialize, Serialize};

/// A single task owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

/// Failures a store operation can report.
///
/// These are local, typed outcomes — the HTTP layer translates them into
/// status codes and nothing else crosses the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No task in the collection has the requested id.
    NotFound,

    /// Create was called with an empty or whitespace-only title.
    EmptyTitle,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "task not found"),
            StoreError::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Owns the task collection and the id sequence.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Snapshot of the collection in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Create a task with the next id and `is_completed = false`.
    ///
    /// Titles are required to be non-empty after trimming; duplicates are
    /// allowed. The counter advances even though deletes never roll it back,
    /// so returned ids are strictly increasing for the store's lifetime.
    pub fn create(&mut self, title: String, description: String) -> Result<Task, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = Task {
            id: self.next_id,
            title,
            description,
            is_completed: false,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flip `is_completed` on the task with this id.
    pub fn toggle(&mut self, id: u64) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        task.is_completed = !task.is_completed;
        Ok(task.clone())
    }

    /// Remove the task with this id. The id counter is untouched.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        self.tasks.remove(pos);
        Ok(())
    }
}

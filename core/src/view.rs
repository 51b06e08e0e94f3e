//! Client-local filter view over a fetched task list.
//!
//! The filter is presentation state: it is computed purely from
//! `is_completed`, is never persisted, and never appears in any request.

use crate::types::Task;

/// Which subset of the fetched collection to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether a task belongs to this view.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.is_completed,
            Filter::Completed => task.is_completed,
        }
    }

    /// Tasks visible under this filter, in their original order.
    pub fn apply<'a>(self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }

    /// Badge count for this filter.
    pub fn count(self, tasks: &[Task]) -> usize {
        tasks.iter().filter(|t| self.matches(t)).count()
    }
}

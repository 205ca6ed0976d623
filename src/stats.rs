//! Task Statistics
//!
//! Aggregates derived from the current task snapshot.

use crate::models::{Task, TaskState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.state {
                TaskState::NotStarted => stats.not_started += 1,
                TaskState::InProgress => stats.in_progress += 1,
                TaskState::Completed => stats.completed += 1,
            }
            stats
        })
    }

    /// Completed share in whole percent, halves rounded up; 0 with no tasks
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 200 + self.total) / (self.total * 2)) as u32
    }
}

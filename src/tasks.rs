//! # In-Memory Task Manager
//!
//! Tasks live in an ordered map keyed by id. Ids start at 1 and are handed
//! out strictly increasing; a deleted id is never handed out again.

use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{Error, Result};

/// Identifier of a task record.
pub type TaskId = u32;

/// Task priority, ordered from least to most urgent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task workflow state. New tasks always start as `Pending`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    #[value(name = "in_progress")]
    InProgress,
    Review,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl Task {
    /// Add a tag. Adding a tag twice has no effect.
    pub fn add_tag(&mut self, tag: &str) {
        self.tags.insert(tag.to_string());
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task#{}: {} [{}]", self.id, self.title, self.status)
    }
}

/// Task counts, total first, then one entry per status in workflow order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatistics {
    pub total: usize,
    pub by_status: BTreeMap<TaskStatus, usize>,
}

#[derive(Debug)]
pub struct TaskManager {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a pending, untagged task with the next id.
    pub fn create(&mut self, title: &str, description: &str, priority: Priority) -> &Task {
        let id = self.next_id;
        self.next_id += 1;
        debug!("Creating task {} '{}' ({})", id, title, priority);
        self.tasks.entry(id).or_insert(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            priority,
            status: TaskStatus::Pending,
            assignee: None,
            tags: BTreeSet::new(),
        })
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Iterate in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Apply `updater` to the task with `id`.
    pub fn update<F>(&mut self, id: TaskId, updater: F) -> Result<&Task>
    where
        F: FnOnce(&mut Task),
    {
        let task = self.tasks.get_mut(&id).ok_or(Error::TaskNotFound { id })?;
        updater(task);
        // The id is the map key; an updater may not change it.
        task.id = id;
        Ok(task)
    }

    /// Tasks carrying `tag`, in id order.
    pub fn tagged(&self, tag: &str) -> Vec<&Task> {
        self.tasks.values().filter(|t| t.has_tag(tag)).collect()
    }

    /// Remove a task. Returns whether it existed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some()
    }

    /// Tasks matching every given criterion; `None` matches anything.
    pub fn filter(&self, priority: Option<Priority>, status: Option<TaskStatus>) -> Vec<&Task> {
        self.tasks
            .values()
            .filter(|t| priority.is_none_or(|p| t.priority == p))
            .filter(|t| status.is_none_or(|s| t.status == s))
            .collect()
    }

    pub fn statistics(&self) -> TaskStatistics {
        let mut by_status: BTreeMap<TaskStatus, usize> =
            TaskStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for task in self.tasks.values() {
            *by_status.entry(task.status).or_default() += 1;
        }
        TaskStatistics {
            total: self.tasks.len(),
            by_status,
        }
    }
}

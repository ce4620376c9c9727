//! # Tasks Command Implementation
//!
//! Creates tasks in a fresh in-memory [`TaskManager`] and reports the count.
//! Nothing is persisted between runs, so every invocation starts at id 1.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use gitcode_viewer::suggestions;
use gitcode_viewer::tasks::{Priority, TaskManager, TaskStatus};

const DEFAULT_TASK_TITLE: &str = "Implement auth";

/// Create tasks in the in-memory task manager and count them
#[derive(Args, Debug)]
pub struct TasksArgs {
    /// Title of a task to create (repeatable; defaults to a single demo task)
    #[arg(short = 't', long = "task", value_name = "TITLE")]
    pub titles: Vec<String>,

    /// Description given to every created task
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Tag added to every created task (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Priority given to every created task
    #[arg(short, long, value_enum, default_value = "high")]
    pub priority: Priority,

    /// Move the task with this id to in_progress
    #[arg(long, value_name = "ID")]
    pub start: Option<u32>,

    /// Assign the started task to this person
    #[arg(long, value_name = "NAME", requires = "start")]
    pub assignee: Option<String>,

    /// Only list tasks with this status
    #[arg(long, value_enum)]
    pub status: Option<TaskStatus>,

    /// Only list tasks carrying this tag
    #[arg(long, value_name = "TAG")]
    pub tagged: Option<String>,

    /// Print per-status counts
    #[arg(long)]
    pub stats: bool,

    /// Print the tasks as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the `tasks` command.
pub fn execute(args: TasksArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, &mut out)
}

pub fn run(args: TasksArgs, out: &mut dyn Write) -> Result<()> {
    let mut manager = TaskManager::new();

    let titles = if args.titles.is_empty() {
        vec![DEFAULT_TASK_TITLE.to_string()]
    } else {
        args.titles.clone()
    };
    for title in &titles {
        let id = manager.create(title, &args.description, args.priority).id;
        for tag in &args.tags {
            manager.update(id, |t| t.add_tag(tag))?;
        }
    }

    if let Some(id) = args.start {
        let assignee = args.assignee.clone();
        let created = manager.count();
        let task = manager
            .update(id, |t| {
                t.status = TaskStatus::InProgress;
                if assignee.is_some() {
                    t.assignee = assignee;
                }
            })
            .map_err(|_| suggestions::task_not_found(id, created))?;
        match &task.assignee {
            Some(name) => writeln!(out, "Started {} (assigned to {})", task, name)?,
            None => writeln!(out, "Started {}", task)?,
        }
    }

    let mut listed = manager.filter(None, args.status);
    if let Some(tag) = &args.tagged {
        listed.retain(|t| t.has_tag(tag));
    }
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&listed)?)?;
    } else if args.status.is_some() || args.tagged.is_some() {
        for task in &listed {
            writeln!(out, "{}", task)?;
        }
    }

    writeln!(out, "Tasks: {}", manager.count())?;

    if args.stats {
        let stats = manager.statistics();
        writeln!(out, "total: {}", stats.total)?;
        for (status, count) in &stats.by_status {
            writeln!(out, "  {}: {}", status, count)?;
        }
    }

    Ok(())
}

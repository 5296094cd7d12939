use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Result};

use crate::cli::{AddArgs, CliCommand, ClearArgs, DeleteArgs, ListArgs};
use crate::config::AppConfig;
use crate::core::commands as core_commands;
use crate::model::{DeleteResult, TaskFilter};
use crate::store::TaskStore;

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    match command {
        CliCommand::Add(args) => handle_add(config, &args, &mut writer),
        CliCommand::List(args) => handle_list(config, &args, &mut writer),
        CliCommand::Delete(args) => handle_delete(config, &args, &mut writer),
        CliCommand::Clear(args) => handle_clear(config, &args, &mut writer),
        CliCommand::Tui => Err(anyhow!("launch interactive surfaces directly")),
    }
}

fn handle_add<W: Write>(config: &AppConfig, args: &AddArgs, mut writer: W) -> Result<()> {
    let mut store = TaskStore::open(config.open_storage())?;
    match store.add(&args.text.join(" "))? {
        Some(outcome) => writeln!(writer, "Added task {}: {}", outcome.id, outcome.text)?,
        None => writeln!(writer, "Nothing added (task text was empty)")?,
    }
    Ok(())
}

fn handle_list<W: Write>(config: &AppConfig, args: &ListArgs, mut writer: W) -> Result<()> {
    let store = TaskStore::open(config.open_storage())?;
    let filter = TaskFilter {
        mode: args.filter,
        search: args.search.clone().unwrap_or_default(),
    };

    for task in store.filtered(&filter) {
        let mark = if task.completed { 'x' } else { ' ' };
        writeln!(writer, "{:>4} [{}] {}", task.id, mark, task.text)?;
    }

    let counts = store.counts();
    writeln!(
        writer,
        "Total: {} | Done: {} | Pending: {}",
        counts.total, counts.done, counts.pending
    )?;
    Ok(())
}

fn handle_delete<W: Write>(config: &AppConfig, args: &DeleteArgs, mut writer: W) -> Result<()> {
    let results = core_commands::delete_tasks(config, &args.ids)?;
    let summary = DeleteSummary::from_results(&results);
    summary.write_to(&mut writer)?;
    Ok(())
}

fn handle_clear<W: Write>(config: &AppConfig, args: &ClearArgs, mut writer: W) -> Result<()> {
    if !args.yes {
        writeln!(writer, "Pass --yes to remove all tasks")?;
        return Ok(());
    }
    let dropped = core_commands::clear_tasks(config)?;
    writeln!(
        writer,
        "Cleared {} task{}",
        dropped,
        if dropped == 1 { "" } else { "s" }
    )?;
    Ok(())
}

struct DeleteSummary {
    deleted: usize,
    missing: Vec<String>,
}

impl DeleteSummary {
    fn from_results(results: &[DeleteResult]) -> Self {
        let mut deleted = 0usize;
        let mut missing = Vec::new();
        for result in results {
            if result.deleted {
                deleted += 1;
            } else {
                missing.push(result.id.to_string());
            }
        }
        Self { deleted, missing }
    }

    fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", SummaryLine::deleted(self.deleted))?;
        if !self.missing.is_empty() {
            writeln!(writer, "Not found: {}", self.missing.join(", "))?;
        }
        Ok(())
    }
}

enum SummaryLine {
    Deleted(usize),
    NoneDeleted,
}

impl SummaryLine {
    fn deleted(count: usize) -> Self {
        if count > 0 {
            SummaryLine::Deleted(count)
        } else {
            SummaryLine::NoneDeleted
        }
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryLine::Deleted(count) => {
                write!(
                    f,
                    "Deleted {} task{}",
                    count,
                    if *count == 1 { "" } else { "s" }
                )
            }
            SummaryLine::NoneDeleted => write!(f, "No tasks deleted"),
        }
    }
}

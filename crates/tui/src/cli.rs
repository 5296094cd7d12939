use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::{FilterMode, TaskId};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "taskpad",
    version,
    about = "A keyboard-first daily task list for the terminal.",
    after_help = "Examples:\n  taskpad                 Launch the TUI (same as `taskpad tui`)\n  taskpad add Buy milk\n  taskpad list --filter pending --search milk\n  taskpad delete 3 7\n  taskpad clear --yes"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the keyboard-first terminal UI (default command)
    Tui,
    /// Add a task to the end of the list
    Add(AddArgs),
    /// Print tasks, optionally filtered and searched
    List(ListArgs),
    /// Delete one or more tasks by id
    Delete(DeleteArgs),
    /// Remove every task from the list
    Clear(ClearArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Task text (words are joined with single spaces)
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Show only tasks in this state
    #[arg(long, value_enum, default_value_t = FilterMode::All)]
    pub filter: FilterMode,

    /// Show only tasks whose text contains this string (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// One or more task ids to delete (shown in the TUI and `list` output)
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<TaskId>,
}

#[derive(Args, Debug, Clone)]
pub struct ClearArgs {
    /// Confirm removing every task without prompting
    #[arg(long)]
    pub yes: bool,
}

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::filter::FilterMode;
use crate::model::task::{Priority, TaskId};

#[derive(Parser)]
#[command(name = "jot", about = concat!("[x] jot v", env!("CARGO_PKG_VERSION"), " - a small to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the end of the list
    Add(AddArgs),
    /// List tasks
    List(ListArgs),
    /// Toggle a task between pending and completed
    Done(IdArgs),
    /// Change a task's text
    Edit(EditArgs),
    /// Delete a task
    Rm(IdArgs),
    /// Move a task before another one
    Mv(MvArgs),
    /// Remove all completed tasks
    ClearCompleted(ConfirmArgs),
    /// Remove every task
    ClearAll(ConfirmArgs),
    /// Show or toggle preferences
    Prefs(PrefsArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Priority (default from config, usually medium)
    #[arg(short, long)]
    pub priority: Option<Priority>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Which tasks to show
    #[arg(short, long, default_value = "all")]
    pub filter: FilterMode,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task ID
    pub id: TaskId,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: TaskId,
    /// New text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct MvArgs {
    /// Task to move
    pub id: TaskId,
    /// Task it should come before
    #[arg(long)]
    pub before: TaskId,
}

#[derive(Args)]
pub struct ConfirmArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct PrefsArgs {
    /// Preference to toggle (omit to show current values)
    pub toggle: Option<PrefName>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PrefName {
    DarkMode,
    Sound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_priority() {
        let cli = Cli::try_parse_from(["jot", "add", "buy", "milk", "-p", "high"]).unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.text, vec!["buy", "milk"]);
                assert_eq!(args.priority, Some(Priority::High));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["jot", "add", "x", "-p", "urgent"]).is_err());
        assert!(Cli::try_parse_from(["jot", "done", "abc"]).is_err());
        assert!(Cli::try_parse_from(["jot", "list", "--filter", "later"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["jot", "list", "--json", "-C", "/tmp/x"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/x"));
    }
}

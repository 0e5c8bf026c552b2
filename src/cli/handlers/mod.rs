mod prompt;

use std::io::IsTerminal;
use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::bell::{BellTarget, TerminalBell};
use crate::io::config_io::{read_config, resolve_data_dir};
use crate::io::kv::FileStore;
use crate::io::persistence::Persistence;
use crate::model::config::Config;
use crate::model::task::TaskId;
use crate::ops::store::{BulkAction, TaskStore};
use crate::ops::view::ViewCounts;

/// Errors reported by CLI commands (beyond store/io errors)
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("refusing to clear without confirmation (pass --yes)")]
    NeedsConfirmation,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let config = read_config(&data_dir)?;
    let mut store = open_store(&data_dir)?;

    match cli.command {
        None => {
            // main.rs launches the TUI when there is no subcommand
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(&mut store, &config, args, json),
            Commands::List(args) => cmd_list(&store, args, json),
            Commands::Done(args) => cmd_done(&mut store, args, json),
            Commands::Edit(args) => cmd_edit(&mut store, args, json),
            Commands::Rm(args) => cmd_rm(&mut store, args, json),
            Commands::Mv(args) => cmd_mv(&mut store, args, json),
            Commands::ClearCompleted(args) => {
                cmd_clear(&mut store, BulkAction::ClearCompleted, args, json)
            }
            Commands::ClearAll(args) => cmd_clear(&mut store, BulkAction::ClearAll, args, json),
            Commands::Prefs(args) => cmd_prefs(&mut store, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Open the file-backed store, ringing the bell on stderr when it is a terminal
fn open_store(data_dir: &Path) -> Result<TaskStore, Box<dyn std::error::Error>> {
    let kv = FileStore::open(data_dir)?;
    let store = TaskStore::open(Persistence::new(Box::new(kv)));
    if std::io::stderr().is_terminal() {
        Ok(store.with_notifier(Box::new(TerminalBell::new(BellTarget::Stderr))))
    } else {
        Ok(store)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_add(
    store: &mut TaskStore,
    config: &Config,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    let priority = args.priority.unwrap_or(config.tasks.default_priority);
    let task = store.create(&text, priority)?;
    if json {
        print_json(&task)?;
    } else {
        println!("{}", task.id);
    }
    Ok(())
}

fn cmd_list(
    store: &TaskStore,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = store.projected_view(args.filter);
    let counts = ViewCounts::of(store.tasks());
    if json {
        return print_json(&TaskListJson {
            filter: args.filter,
            counts,
            tasks: view,
        });
    }
    println!("{}", format_task_list(&view, args.filter));
    if !view.is_empty() {
        println!();
        println!("{}", format_counts(&counts));
    }
    Ok(())
}

fn cmd_done(
    store: &mut TaskStore,
    args: IdArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let completed = store
        .toggle_complete(args.id)?
        .ok_or(CliError::NotFound(args.id))?;
    if json {
        if let Some(task) = store.get(args.id) {
            print_json(task)?;
        }
    } else if completed {
        println!("completed {}", args.id);
    } else {
        println!("reopened {}", args.id);
    }
    Ok(())
}

fn cmd_edit(
    store: &mut TaskStore,
    args: EditArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    if !store.edit_text(args.id, &text)? {
        return Err(CliError::NotFound(args.id).into());
    }
    if json {
        if let Some(task) = store.get(args.id) {
            print_json(task)?;
        }
    } else {
        println!("edited {}", args.id);
    }
    Ok(())
}

fn cmd_rm(
    store: &mut TaskStore,
    args: IdArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let removed = store.delete(args.id)?.ok_or(CliError::NotFound(args.id))?;
    if json {
        print_json(&removed)?;
    } else {
        println!("deleted {}", removed.id);
    }
    Ok(())
}

fn cmd_mv(
    store: &mut TaskStore,
    args: MvArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for id in [args.id, args.before] {
        if store.get(id).is_none() {
            return Err(CliError::NotFound(id).into());
        }
    }
    let moved = store.reorder(args.id, args.before)?;
    if json {
        print_json(&MovedJson { moved })?;
    } else if moved {
        println!("moved {} before {}", args.id, args.before);
    } else {
        println!("order unchanged");
    }
    Ok(())
}

fn cmd_clear(
    store: &mut TaskStore,
    action: BulkAction,
    args: ConfirmArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(pending) = store.prepare(action) else {
        if json {
            return print_json(&ClearedJson { removed: 0 });
        }
        println!("{}", action.nothing_message());
        return Ok(());
    };

    if !args.yes && !prompt::confirm_on_terminal(&pending.prompt())? {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = store.confirm(pending)?;
    if json {
        print_json(&ClearedJson { removed })?;
    } else {
        println!(
            "removed {} task{}",
            removed,
            if removed == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

fn cmd_prefs(
    store: &mut TaskStore,
    args: PrefsArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.toggle {
        Some(PrefName::DarkMode) => {
            store.toggle_dark_mode()?;
        }
        Some(PrefName::Sound) => {
            store.toggle_sound()?;
        }
        None => {}
    }
    let prefs = store.preferences();
    if json {
        print_json(&prefs)?;
    } else {
        println!("{}", format_prefs(&prefs));
    }
    Ok(())
}

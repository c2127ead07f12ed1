//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::print::{print_messages, render_scope, render_scope_list};
use super::setup::{Cli, Commands, FormatArg};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tscat::api::{CatalogApi, ConfigAction};
use tscat::compose::ExportFormat;
use tscat::error::Result;
use tscat::init::initialize;
use tscat::store::fs_backend::FsBackend;

const LOG_ENV: &str = "TSCAT_LOG";

struct AppContext {
    api: CatalogApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add { name }) => handle_add(&mut ctx, &name),
        Some(Commands::Delete { name, yes }) => handle_delete(&mut ctx, &name, yes),
        Some(Commands::Scope {
            name,
            full_scope_string,
        }) => handle_scope(&mut ctx, &name, &full_scope_string),
        Some(Commands::View { name }) => handle_view(&ctx, &name),
        Some(Commands::Entry { name, id, value }) => {
            handle_entry(&mut ctx, &name, &id, &value.join(" "))
        }
        Some(Commands::Remove { name, id }) => handle_remove(&mut ctx, &name, &id),
        Some(Commands::Show { name, format }) => handle_show(&ctx, &name, format),
        Some(Commands::Copy { name, format }) => handle_copy(&ctx, &name, format),
        Some(Commands::Download { name, format, dir }) => {
            handle_download(&ctx, &name, format, dir)
        }
        Some(Commands::Backup { path }) => handle_backup(&ctx, path),
        Some(Commands::Restore { path }) => handle_restore(&mut ctx, path),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("tscat={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd)?;
    Ok(AppContext { api: ctx.api })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_scopes()?;
    print!("{}", render_scope_list(&result.listed_scopes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.add_scope(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str, yes: bool) -> Result<()> {
    if !yes {
        // Missing scopes fall through to the delete, which reports them.
        if let Ok(scope) = ctx.api.scope(name) {
            let question = format!(
                "Delete scope '{}' and its {} strings?",
                scope.scope_name,
                scope.entry_count()
            );
            if !confirm(&question)? {
                println!("Aborted.");
                return Ok(());
            }
        }
    }

    let result = ctx.api.delete_scope(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [Y] To delete: ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "Y" | "y"))
}

fn handle_scope(ctx: &mut AppContext, name: &str, full_scope_string: &str) -> Result<()> {
    let result = ctx.api.set_full_scope_string(name, full_scope_string)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.view_scope(name)?;
    if let Some(scope) = &result.viewed_scope {
        print!("{}", render_scope(scope));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_entry(ctx: &mut AppContext, name: &str, id: &str, value: &str) -> Result<()> {
    let result = ctx.api.add_entry(name, id, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, name: &str, id: &str) -> Result<()> {
    let result = ctx.api.delete_entry(name, id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str, format: FormatArg) -> Result<()> {
    let result = ctx.api.compose(name, ExportFormat::from(format))?;
    if let Some(composed) = &result.composed {
        print!("{}", composed.text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &AppContext, name: &str, format: FormatArg) -> Result<()> {
    let result = ctx.api.copy_export(name, ExportFormat::from(format))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_download(
    ctx: &AppContext,
    name: &str,
    format: FormatArg,
    dir: Option<PathBuf>,
) -> Result<()> {
    let result = ctx
        .api
        .download_export(name, ExportFormat::from(format), dir.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.backup(path.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restore(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.restore(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                println!("{} = {}", k, v);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

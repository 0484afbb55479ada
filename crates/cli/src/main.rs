// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dyninv - dynamic inventory from an INI host file

mod env;
mod exit_error;
mod help;

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use dyninv_core::Inventory;
use dyninv_inventory::{load_inventory, render_host, render_list, LoadOptions};
use std::path::PathBuf;

use crate::exit_error::ExitError;

#[derive(Parser, Debug)]
#[command(
    name = "dyninv",
    version,
    about = "Dynamic inventory from an INI host file",
    help_template = help::template(),
    after_help = help::after_help(),
    styles = help::styles()
)]
struct Cli {
    /// Print every group and host as JSON
    #[arg(short = 'l', long = "list", conflicts_with = "host")]
    list: bool,

    /// Print the merged variables of one host as JSON
    #[arg(short = 'H', long = "host", value_name = "NAME")]
    host: Option<String>,

    /// Inventory file [default: hosts.ini]
    #[arg(short = 'i', long = "inventory", value_name = "PATH")]
    inventory: Option<PathBuf>,

    /// Do not read group_vars/ and host_vars/
    #[arg(long)]
    no_vars_dirs: bool,

    /// Treat [a:b] patterns as literal host names
    #[arg(long)]
    no_ranges: bool,
}

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Usage,
    List,
    Host(String),
}

impl Cli {
    fn request(&self) -> Request {
        match (&self.host, self.list) {
            (Some(name), _) => Request::Host(name.clone()),
            (None, true) => Request::List,
            (None, false) => Request::Usage,
        }
    }

    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            expand_ranges: !self.no_ranges,
            vars_dirs: !self.no_vars_dirs,
        }
    }
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn usage() -> String {
    help::format_help(cli_command())
}

fn main() {
    if let Err(e) = run() {
        let code = e.downcast_ref::<ExitError>().map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped; otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

/// Stdout text and exit code for arguments clap refused.
///
/// Usage problems are reported on stdout, ahead of the usage text, so an
/// orchestration tool capturing stdout sees why nothing was produced.
fn parse_failure(err: &clap::Error) -> (String, i32) {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            (usage(), 0)
        }
        ErrorKind::DisplayVersion => (err.to_string(), 0),
        ErrorKind::UnknownArgument => {
            let arg = match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => arg.clone(),
                _ => String::new(),
            };
            (format!("Error: unknown option '{}'\n{}", arg, usage()), 1)
        }
        _ => (format!("Error: {}\n{}", clap_message(err), usage()), 1),
    }
}

/// First line of a clap error without its `error: ` prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let (text, code) = parse_failure(&err);
            print!("{}", text);
            if code == 0 {
                return Ok(());
            }
            return Err(ExitError::new(code, String::new()).into());
        }
    };

    setup_logging();

    match respond(&cli)? {
        Some(json) => println!("{}", json),
        None => print!("{}", usage()),
    }
    Ok(())
}

/// The JSON document for the request, or `None` when only usage applies.
fn respond(cli: &Cli) -> Result<Option<String>> {
    let request = cli.request();
    if request == Request::Usage {
        return Ok(None);
    }

    let path = env::inventory_path(cli.inventory.clone());
    tracing::debug!(path = %path.display(), ?request, "loading inventory");
    let parsed = load_inventory(&path, &cli.load_options())?;
    Ok(Some(render(&request, &parsed.inventory)?))
}

fn render(request: &Request, inventory: &Inventory) -> Result<String> {
    let json = match request {
        Request::Host(name) => render_host(inventory, name)?,
        Request::List | Request::Usage => render_list(inventory)?,
    };
    Ok(json)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

//! mkapplnk - create shortcuts to any app in the apps folder.
//!
//! Finds an installed application by a substring of its display name and
//! saves a shell link to it, including UWP / MSIX apps that have no
//! executable path.

mod console;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use console::TerminalConsole;
use mkapplnk_core::{
    exit_status, platform, write_usage, AppConfig, EmptyOutputPolicy, ExitStatus, RunConfig,
    ShortcutCreator,
};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = AppConfig::APP_NAME)]
#[command(about = AppConfig::ABOUT)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Substring of the app's display name; prompted for when omitted
    #[arg(allow_hyphen_values = true)]
    search_term: Option<String>,

    /// File to save the shortcut as; prompted for when omitted
    #[arg(allow_hyphen_values = true)]
    output_file: Option<String>,

    /// What an empty output file name does: "abort" or "derive" (<app name>.lnk)
    #[arg(long, default_value = "abort", value_parser = parse_empty_output_policy)]
    on_empty_output: EmptyOutputPolicy,
}

fn parse_empty_output_policy(value: &str) -> std::result::Result<EmptyOutputPolicy, String> {
    EmptyOutputPolicy::from_str(value)
        .ok_or_else(|| format!("expected \"abort\" or \"derive\", got \"{}\"", value))
}

fn init_logging() -> Result<()> {
    // Diagnostics only; the operator-facing text goes to stdout untouched.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("set up logging: {}", e))
}

fn run() -> Result<i32> {
    init_logging()?;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print().context("print argument error")?;
            write_usage(&mut TerminalConsole::new())?;
            return Ok(ExitStatus::USAGE);
        }
    };
    debug!("Empty output policy: {}", args.on_empty_output);

    let creator = ShortcutCreator::new(RunConfig::new(args.on_empty_output));
    let mut console = TerminalConsole::new();
    let result = creator.run(
        args.search_term,
        args.output_file,
        &mut console,
        platform::open_shell,
    );

    if let Err(err) = &result {
        if err.is_failure() {
            debug!("Run failed: {:?}", err);
            eprintln!("{}", err);
        }
    }

    Ok(exit_status(&result))
}

fn main() -> ExitCode {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitStatus::RUNTIME_ERROR
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}

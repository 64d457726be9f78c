//! Terminal front end for the task list.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tasklist::terminal::HELP;
use tasklist::{Command, Locale, Messages, Outcome, TaskListEnvironment, Terminal};
use tasklist_core::environment::{RandomIdGenerator, SystemClock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(about = "A to-do list in your terminal")]
#[command(version)]
struct Cli {
    /// Interface language (pt or en)
    #[arg(long, default_value = "pt")]
    locale: Locale,

    /// Log reducer decisions at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "tasklist=debug,tasklist_runtime=debug"
    } else {
        "tasklist=info,tasklist_runtime=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tasklist_runtime::metrics::register_metrics();

    let env = TaskListEnvironment::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator));
    let mut terminal = Terminal::new(env, Messages::new(cli.locale));
    tracing::info!(locale = ?cli.locale, "Task list ready");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}\n", terminal.render())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = line
            .parse::<Command>()
            .and_then(|command| terminal.execute(command));

        match outcome {
            Ok(Outcome::Render) => writeln!(stdout, "{}\n", terminal.render())?,
            Ok(Outcome::Help) => writeln!(stdout, "{HELP}\n")?,
            Ok(Outcome::Quit) => break,
            Err(error) => {
                tracing::debug!(%error, %line, "Command failed");
                writeln!(stdout, "{error}\n")?;
            },
        }
    }

    Ok(())
}

//! Command-line front end for the integer calculator.
//!
//! Evaluates one `<operation> <lhs> <rhs>` triple from the arguments, or
//! reads one triple per line from stdin when no arguments are given.

use anyhow::{Context, Result};
use clap::Parser;
use int_calculator::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE_HINT: &str = "usage: <operation> <lhs> <rhs>  (e.g. `add 5 3`, `/ 20 4`)";

#[derive(Parser)]
#[command(name = "int-calculator")]
#[command(about = "Add, subtract, multiply or divide two integers")]
#[command(version)]
struct Cli {
    /// Operation: add, subtract, multiply, divide (or + - * /)
    #[arg(requires_all = ["lhs", "rhs"])]
    operation: Option<String>,

    /// First operand
    #[arg(allow_hyphen_values = true)]
    lhs: Option<String>,

    /// Second operand
    #[arg(allow_hyphen_values = true)]
    rhs: Option<String>,

    /// Config file path (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Ignore whitespace around operands
    #[arg(long)]
    trim: bool,

    /// Log filter, e.g. `debug` or `int_calculator=trace`
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if cli.trim {
        config = config.with_trim_input(true);
    }

    let evaluator = Evaluator::new(Arc::new(LoggingEventHandler));
    let mut screen = CalculatorScreen::new(config, evaluator).map_err(anyhow::Error::msg)?;

    match (cli.operation, cli.lhs, cli.rhs) {
        (Some(operation), Some(lhs), Some(rhs)) => run_once(&mut screen, &operation, lhs, rhs),
        _ => run_interactive(&mut screen),
    }
}

fn init_tracing(filter: &str) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(io::stderr);

    let filter_layer = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}

fn run_once(
    screen: &mut CalculatorScreen,
    operation: &str,
    lhs: String,
    rhs: String,
) -> Result<ExitCode> {
    let operation: Operation = operation.parse()?;
    let update = screen.calculate(operation, lhs, rhs);

    match &update {
        ScreenUpdate::ResultText(text) => println!("{text}"),
        ScreenUpdate::Toast(message) => eprintln!("{message}"),
    }

    Ok(ExitCode::from(exit_status(&update)))
}

/// Process status for a one-shot run: 0 on a result line, 1 on a toast
fn exit_status(update: &ScreenUpdate) -> u8 {
    if update.is_toast() {
        1
    } else {
        0
    }
}

fn run_interactive(screen: &mut CalculatorScreen) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if let Some(reply) = reply(screen, &line) {
            writeln!(stdout, "{reply}").context("writing stdout")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Answer one interactive line; blank lines get no reply
fn reply(screen: &mut CalculatorScreen, line: &str) -> Option<String> {
    if line.trim().is_empty() {
        return None;
    }

    let reply = match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [operation, lhs, rhs] => match operation.parse::<Operation>() {
            Ok(operation) => screen.calculate(operation, *lhs, *rhs).to_string(),
            Err(err) => err.to_string(),
        },
        _ => USAGE_HINT.to_string(),
    };

    Some(reply)
}

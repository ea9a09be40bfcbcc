use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use envelope_tracker::cli::{
    handle_budget_command, handle_envelope_command, handle_expense_command, BudgetCommands,
    EnvelopeCommands, ExpenseCommands, Session,
};
use envelope_tracker::config::{EnvelopePaths, Settings};
use envelope_tracker::storage::SnapshotStore;

#[derive(Parser)]
#[command(
    name = "envelope",
    version,
    about = "Personal envelope budgeting tracker",
    long_about = "Set a monthly budget, split it into envelopes, record expenses \
                  against them and see what is left in each one."
)]
struct Cli {
    /// Budget snapshot file to use instead of the configured one
    #[arg(long, global = true, env = "ENVELOPE_BUDGET_FILE")]
    file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Envelope management commands
    #[command(subcommand, alias = "env")]
    Envelope(EnvelopeCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = EnvelopePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = match &cli.file {
        Some(file) => SnapshotStore::new(file.clone()),
        None => SnapshotStore::from_settings(&paths, &settings),
    };
    debug!(base_dir = %paths.base_dir().display(), snapshot = %store.path().display(), "Resolved paths");

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            let mut session = Session::open(settings, store)?;
            handle_budget_command(&mut session, cmd)?;
        }
        Some(Commands::Envelope(cmd)) => {
            let mut session = Session::open(settings, store)?;
            handle_envelope_command(&mut session, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let mut session = Session::open(settings, store)?;
            handle_expense_command(&mut session, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing envelope tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!("Budget snapshot:   {}", store.path().display());
            println!();
            println!("Next: 'envelope budget set <AMOUNT>' then 'envelope envelope add <NAME> <AMOUNT>'.");
        }
        Some(Commands::Config) => {
            println!("Envelope Tracker Configuration");
            println!("==============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Budget snapshot:  {}", store.path().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Strict envelopes: {}", settings.strict_envelopes);
        }
        None => {
            println!("Envelope tracker - personal envelope budgeting");
            println!();
            println!("Run 'envelope --help' for usage information.");
            println!("Run 'envelope budget show' to see where your money went.");
        }
    }

    Ok(())
}

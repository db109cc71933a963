use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use fintrack::cli::Shell;
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::display::DisplayOptions;
use fintrack::models::Money;
use fintrack::{Ledger, LedgerError};

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack records incomes and expenses, keeps a monthly budget \
                  and shows how much of it is left for any calendar month. \
                  Records are kept in memory for the current session only."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Monthly budget to start the session with (e.g., "500" or "500.00")
    #[arg(long, global = true, value_name = "AMOUNT")]
    budget: Option<String>,

    /// Currency symbol used when printing amounts
    #[arg(long, global = true, value_name = "SYMBOL", env = "FINTRACK_CURRENCY")]
    currency: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "run")]
    Shell,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fintrack::logging::init_tracing(cli.verbose);

    let paths = FintrackPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(symbol) = cli.currency {
        settings.currency_symbol = symbol;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&settings, cli.budget.as_deref())?,
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                info!(path = %paths.settings_file().display(), "settings written");
                println!("Settings written to: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            match settings.default_budget {
                Some(budget) => println!(
                    "  Default budget:  {}",
                    budget.format_with_symbol(&settings.currency_symbol)
                ),
                None => println!("  Default budget:  (not set)"),
            }
        }
    }

    Ok(())
}

fn run_shell(settings: &Settings, budget: Option<&str>) -> Result<()> {
    let mut ledger = Ledger::new();

    if let Some(amount) = settings.default_budget {
        ledger.set_budget(amount)?;
    }
    if let Some(text) = budget {
        let amount = Money::parse(text)
            .map_err(|e| LedgerError::Validation(format!("Invalid budget: {}", e)))?;
        ledger.set_budget(amount)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        &mut ledger,
        DisplayOptions::from(settings),
        stdin.lock(),
        stdout.lock(),
    );
    shell.run()?;

    Ok(())
}

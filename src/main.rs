use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budgetpro::cli::{
    handle_categories_command, handle_expense_command, handle_export_command,
    handle_income_command, handle_recent_command, handle_replay_command, handle_summary_command,
    print_dashboard,
};
use budgetpro::config::{BudgetPaths, DashboardConfig, Settings};
use budgetpro::export::ExportFormat;
use budgetpro::logging;
use budgetpro::LedgerEngine;

#[derive(Parser)]
#[command(
    name = "budgetpro",
    version,
    about = "Personal budget dashboard for the terminal",
    long_about = "BudgetPro tracks income and spending against per-category budgets. \
                  It starts from a configured dashboard, records expenses and income, \
                  and shows the summary, category progress and recent history."
)]
struct Cli {
    /// Dashboard configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long, global = true, env = "BUDGETPRO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show income, total expenses, remaining balance and savings rate
    Summary,

    /// Show budget progress for every category
    #[command(alias = "cat")]
    Categories,

    /// Show the most recent transactions
    Recent {
        /// Number of transactions to show (defaults to the configured limit)
        #[arg(short, long, allow_hyphen_values = true)]
        limit: Option<i64>,
    },

    /// Record an expense against a category
    #[command(alias = "spend")]
    Expense {
        /// Category key (e.g. food)
        category: String,
        /// Amount (e.g. 24.50 or $1,200)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Record income
    Income {
        /// Where the money came from
        source: String,
        /// Amount (e.g. 5250)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Replay a CSV file of transactions on top of the dashboard
    Replay {
        /// Path to CSV file (columns: kind, category, amount, description)
        file: PathBuf,
    },

    /// Export a dashboard snapshot to stdout
    Export {
        /// Output format: json or yaml
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },

    /// Write default settings and dashboard files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Some(Commands::Init) = cli.command {
        return init(&paths, &settings);
    }

    let dashboard_file = paths.dashboard_file();
    let config = DashboardConfig::load_or_default(cli.config.as_deref(), &dashboard_file)?;
    let mut ledger =
        LedgerEngine::from_config(&config).context("Dashboard configuration is invalid")?;

    match cli.command {
        Some(Commands::Summary) => handle_summary_command(&ledger, &settings),
        Some(Commands::Categories) => handle_categories_command(&ledger, &settings),
        Some(Commands::Recent { limit }) => handle_recent_command(&ledger, &settings, limit),
        Some(Commands::Expense {
            category,
            amount,
            description,
        }) => {
            handle_expense_command(
                &mut ledger,
                &settings,
                &category,
                &amount,
                &description.join(" "),
            )?;
        }
        Some(Commands::Income { source, amount }) => {
            handle_income_command(&mut ledger, &settings, &source, &amount)?;
        }
        Some(Commands::Replay { file }) => {
            handle_replay_command(&mut ledger, &settings, &file)?;
        }
        Some(Commands::Export { format }) => {
            handle_export_command(&ledger, &settings, format)?;
        }
        Some(Commands::Config) => {
            println!("BudgetPro Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            match &cli.config {
                Some(path) => println!("Dashboard file:   {}", path.display()),
                None if dashboard_file.exists() => {
                    println!("Dashboard file:   {}", dashboard_file.display())
                }
                None => println!("Dashboard file:   (built-in demo data)"),
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Date format:     {}", settings.date_format);
            println!();
            println!("Dashboard:");
            println!("  Categories: {}", ledger.categories().len());
            println!("  History:    {} transactions", ledger.transaction_count());
        }
        // Handled before the dashboard is loaded
        Some(Commands::Init) => {}
        None => print_dashboard(&ledger, &settings),
    }

    Ok(())
}

fn init(paths: &BudgetPaths, settings: &Settings) -> Result<()> {
    println!("Initializing BudgetPro at: {}", paths.base_dir().display());
    settings.save(paths)?;

    let dashboard_file = paths.dashboard_file();
    if dashboard_file.exists() {
        println!("Keeping existing {}", dashboard_file.display());
    } else {
        DashboardConfig::default().save(&dashboard_file)?;
        println!("Wrote demo dashboard to {}", dashboard_file.display());
    }

    println!();
    println!("Edit the dashboard file to set your income and categories, then run");
    println!("'budgetpro' to see the overview.");
    Ok(())
}

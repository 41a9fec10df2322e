use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use time::Date;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use budget_ledger::{
    BudgetApi, DEFAULT_TIMEZONE, ExpenseId, Ledger, LedgerConfig, LedgerSeed, NewExpense,
    parse_date,
};

/// Query and record budget data in an in-memory ledger, printing the results as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    #[arg(long, env = "LEDGER_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// File path to a JSON file with the categories and expenses to start with.
    ///
    /// The built-in sample data is used if this is not given.
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Pretty print the JSON output.
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all categories.
    Categories,

    /// List expenses, optionally only those in a month.
    Expenses {
        /// The month in the format YYYY-MM.
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Summarise spending against limits for a month.
    Summary {
        /// The month in the format YYYY-MM. Defaults to the current month.
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Record a new expense and print it.
    Add {
        /// How much was spent.
        #[arg(long)]
        amount: f64,

        /// What the money was spent on.
        #[arg(long)]
        description: String,

        /// When the money was spent, in the format YYYY-MM-DD.
        #[arg(long, value_parser = parse_date)]
        date: Date,

        /// The ID of the category the expense belongs to.
        #[arg(long)]
        category_id: i64,
    },

    /// Delete an expense and print the remaining expenses.
    Delete {
        /// The ID of the expense to delete.
        #[arg(long)]
        id: ExpenseId,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let config = LedgerConfig::new(&args.timezone);
    let seed = match &args.seed_file {
        Some(path) => LedgerSeed::from_file(path)?,
        None => LedgerSeed::builtin()?,
    };
    let mut ledger = Ledger::new(config, seed)?;

    match args.command {
        Command::Categories => print_json(&ledger.fetch_categories().await, args.pretty),
        Command::Expenses { month } => {
            print_json(&ledger.fetch_expenses(month.as_deref()).await, args.pretty)
        }
        Command::Summary { month } => {
            let summary = ledger.fetch_summary(month.as_deref()).await?;
            print_json(&summary, args.pretty)
        }
        Command::Add {
            amount,
            description,
            date,
            category_id,
        } => {
            let new_expense = NewExpense {
                amount,
                description,
                date,
                category_id,
            };
            let expense = BudgetApi::create_expense(&mut ledger, new_expense).await?;
            print_json(&expense, args.pretty)
        }
        Command::Delete { id } => {
            BudgetApi::delete_expense(&mut ledger, id).await;
            print_json(&ledger.fetch_expenses(None).await, args.pretty)
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so that stdout only contains the JSON output.
    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_log)
        .init();
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    println!("{json}");

    Ok(())
}

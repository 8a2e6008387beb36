use chrono::Local;
use clap::{Parser, ValueEnum};
use itau_statements::{AccountData, CardData, Currency, ParseError, Transaction, export};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "cli_export",
    version,
    about = "Converts downloaded Itaú statement payloads into ledger or budgeting CSV.",
    long_about = None,
)]
struct Args {
    /// Raw payload saved by the retrieval step
    #[arg(long)]
    input: PathBuf,

    /// Format of the raw payload
    #[arg(long, value_enum)]
    source: Source,

    /// Card currency to keep (card payloads mix both)
    #[arg(long, default_value = "Pesos")]
    currency: String,

    /// Output CSV dialect
    #[arg(long, value_enum, default_value_t = Output::Csv)]
    output: Output,
}

/// Supported raw payload formats for the CLI
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Source {
    /// Fixed-width deposit-account report
    Account,
    /// Credit-card movement JSON
    Card,
}

/// Supported output dialects for the CLI
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Output {
    Csv,
    Ynab,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), ParseError> {
    let args = Args::parse();

    if !args.input.exists() {
        eprintln!("input file does not exist: {}", args.input.display());
        process::exit(1)
    }

    let file = File::open(&args.input).unwrap_or_else(|err| {
        eprintln!("failed to open input file {}: {err}", args.input.display());
        process::exit(1);
    });

    let reader = io::BufReader::new(file);
    let today = Local::now().date_naive();

    let transactions: Vec<Transaction> = match args.source {
        Source::Account => {
            let data = AccountData::parse(reader)?;
            data.transactions(today)?
        }
        Source::Card => {
            let data = CardData::parse(reader)?;
            let currency = Currency::from(args.currency.as_str());
            data.transactions(&currency, today)?
        }
    };

    if transactions.is_empty() {
        eprintln!("no exportable transactions in {}", args.input.display());
    }

    let stdout = io::stdout();
    let handle = stdout.lock();

    match args.output {
        Output::Csv => {
            export::write_csv(&transactions, handle)?;
        }
        Output::Ynab => {
            export::write_ynab_csv(&transactions, handle)?;
        }
    }

    Ok(())
}

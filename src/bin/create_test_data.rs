use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use time::{Duration, OffsetDateTime};

use finance_tracker::{
    Transaction,
    stores::{JsonFileStore, TransactionStore},
};

/// A utility for creating a transaction document for manual testing of the finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the JSON document to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a transaction document for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path.extension().is_none_or(|extension| extension.is_empty()) {
        eprintln!("Output path must include a file extension (e.g., 'transactions.json').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating transaction document at {output_path:#?}");
    let store = JsonFileStore::open(output_path)?;

    println!("Creating test transactions...");

    let today = OffsetDateTime::now_utc().date();
    let samples = [
        (3200.0, 95, "Salary"),
        (-1450.0, 90, "Rent"),
        (-86.45, 84, "Groceries"),
        (3200.0, 65, "Salary"),
        (-1450.0, 60, "Rent"),
        (-230.1, 48, "Car repairs"),
        (-42.0, 41, "Dinner with friends"),
        (3200.0, 35, "Salary"),
        (-1450.0, 30, "Rent"),
        (-3999.99, 21, "New laptop"),
        (120.0, 12, "Sold old bike"),
        (-64.3, 3, "Groceries"),
    ];

    for (amount, days_ago, description) in samples {
        store.create(Transaction::build(
            amount,
            today - Duration::days(days_ago),
            description,
        ))?;
    }

    println!("Created {} transactions.", samples.len());
    println!("Success!");

    Ok(())
}

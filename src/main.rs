use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use calorie_counter_rs::cli::{Cli, Command};
use calorie_counter_rs::error::Result;
use calorie_counter_rs::interface::{display_diagnostics, render_removal, run_report};
use calorie_counter_rs::state::{load_foods, save_records_json, write_text, FoodCollection};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    let outcome = load_foods(&cli.input);
    display_diagnostics(&outcome.diagnostics);
    let mut collection = FoodCollection::from(outcome.records);

    match command {
        Command::Report { output, json } => {
            cmd_report(&mut collection, output.as_deref(), json.as_deref())
        }
        Command::Total => {
            println!("Calories in all food: {}", collection.aggregate_calories());
            Ok(())
        }
        Command::Remove { index } => cmd_remove(&mut collection, index),
    }
}

/// Walk-through on stdout, then the optional report and JSON files.
fn cmd_report(
    collection: &mut FoodCollection,
    output: Option<&str>,
    json: Option<&str>,
) -> Result<()> {
    if let Some(path) = json {
        save_records_json(path, collection.records())?;
        println!("Foods exported to {}", path);
    }

    let rendered = run_report(collection, output.is_some());
    print!("{}", rendered.walkthrough);

    if let (Some(path), Some(report)) = (output, rendered.report) {
        write_text(path, &report)?;
        println!("Report written to {}", path);
    }

    Ok(())
}

fn cmd_remove(collection: &mut FoodCollection, index: usize) -> Result<()> {
    let rendered = render_removal(collection, index)?;
    info!(index, remaining = collection.len(), "Removed food");
    print!("{}", rendered);
    Ok(())
}

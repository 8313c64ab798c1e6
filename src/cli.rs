use clap::{Parser, Subcommand};

/// Calorie counter: scores a food list file and prints sorted reports.
#[derive(Parser, Debug)]
#[command(name = "calorie-counter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food list text file.
    #[arg(short, long, default_value = "input.txt")]
    pub input: String,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the food list walk-through and optionally write report files.
    Report {
        /// Write the full text report to this path.
        #[arg(short, long)]
        output: Option<String>,

        /// Export the foods as JSON to this path.
        #[arg(long)]
        json: Option<String>,
    },

    /// Print the total calories of all foods.
    Total,

    /// Remove the food at an index and print the remaining list.
    Remove {
        /// Zero-based index as shown in the food list.
        index: usize,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Report {
            output: None,
            json: None,
        }
    }
}

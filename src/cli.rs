use clap::{Parser, Subcommand};

/// WeightCutPlanner — plans weight-cut and refuelling nutrition for athletes.
#[derive(Parser, Debug)]
#[command(name = "weight_cut_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a saved athlete profile JSON file (skips the prompts).
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Path to a custom food catalog JSON file.
    #[arg(long)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute macro targets and generate the meal plans.
    Plan {
        /// Write the per-meal food breakdown to a CSV file.
        #[arg(long)]
        export_csv: Option<String>,
    },

    /// List the food catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { export_csv: None }
    }
}

mod commands;
mod config;
mod server;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{cmd_health, cmd_meal, cmd_options, cmd_workout};
use crate::config::Config;
use fitrec_core::registry::ArtifactRegistry;

#[derive(Parser)]
#[command(
    name = "fitrec",
    version,
    about = "Workout, meal, and lifestyle recommendations from precomputed catalogs"
)]
struct Cli {
    /// Directory holding exercises.csv, meals.csv, and meal_similarity.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a stratified sample of exercises for a difficulty level
    Workout {
        /// Difficulty level (e.g. Beginner, Intermediate, Advanced)
        difficulty: String,
        /// Preferred muscle group (fuzzy-matched, best effort)
        #[arg(short, long)]
        muscle: Option<String>,
        /// Requested count (the 1+2+2 tier quota caps the result at 5)
        #[arg(short, long, default_value = "5")]
        n: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a health questionnaire and print lifestyle advice
    Health {
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        bmi: f64,
        /// Body fat percentage
        #[arg(long)]
        fat: f64,
        /// Workout days per week
        #[arg(long)]
        frequency: f64,
        /// Usual exercise type (e.g. "cardio", "strength training")
        #[arg(long)]
        exercise: String,
        /// Water intake in liters per day
        #[arg(long)]
        water: f64,
        /// Meals per day
        #[arg(long)]
        meals: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find the meals most similar to a named one
    Meal {
        /// Meal name, exactly as it appears in the catalog
        name: String,
        /// Number of similar meals to return
        #[arg(short, long, default_value = "5")]
        top: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the catalog values available to queries
    Options {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the recommendation API over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,
        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.data_dir)?;
    let registry = Arc::new(ArtifactRegistry::new(config.artifact_paths()));

    match cli.command {
        Commands::Workout {
            difficulty,
            muscle,
            n,
            json,
        } => cmd_workout(&registry, &difficulty, muscle.as_deref(), n, json),
        Commands::Health {
            age,
            gender,
            bmi,
            fat,
            frequency,
            exercise,
            water,
            meals,
            json,
        } => cmd_health(age, gender, bmi, fat, frequency, exercise, water, meals, json),
        Commands::Meal { name, top, json } => cmd_meal(&registry, &name, top, json),
        Commands::Options { json } => cmd_options(&registry, json),
        Commands::Serve { port, bind } => server::start_server(registry, port, &bind).await,
    }
}

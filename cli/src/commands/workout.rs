use std::process;

use anyhow::Result;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use fitrec_core::models::normalize_difficulty;
use fitrec_core::registry::ArtifactRegistry;

pub(crate) fn cmd_workout(
    registry: &ArtifactRegistry,
    difficulty: &str,
    muscle: Option<&str>,
    n: usize,
    json: bool,
) -> Result<()> {
    let recommender = registry.workout()?;
    let difficulty = normalize_difficulty(difficulty);
    let picks = recommender.recommend(&difficulty, muscle, n);

    if json {
        println!("{}", serde_json::to_string_pretty(&picks)?);
        return Ok(());
    }

    if picks.is_empty() {
        eprintln!("No exercises found for difficulty '{difficulty}'");
        process::exit(2);
    }

    #[derive(Tabled)]
    struct WorkoutRow {
        #[tabled(rename = "Exercise")]
        name: String,
        #[tabled(rename = "Muscle Group")]
        muscle_group: String,
        #[tabled(rename = "Difficulty")]
        difficulty: String,
        #[tabled(rename = "Calories")]
        calories: String,
    }

    let rows: Vec<WorkoutRow> = picks
        .iter()
        .map(|p| WorkoutRow {
            name: p.name.clone(),
            muscle_group: p.muscle_group.clone(),
            difficulty: p.difficulty.clone(),
            calories: format!("{:.0}", p.calories_burned),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}

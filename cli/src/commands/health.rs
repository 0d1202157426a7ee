use anyhow::Result;

use fitrec_core::health::health_report;
use fitrec_core::models::HealthInput;

#[allow(clippy::too_many_arguments)]
pub(crate) fn cmd_health(
    age: u32,
    gender: String,
    bmi: f64,
    fat: f64,
    frequency: f64,
    exercise: String,
    water: f64,
    meals: f64,
    json: bool,
) -> Result<()> {
    let input = HealthInput {
        age,
        gender,
        bmi,
        fat_percentage: fat,
        workout_frequency: frequency,
        physical_exercise: exercise,
        water_intake: water,
        daily_meals: meals,
    };
    let report = health_report(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let score = report.lifestyle_score;
    println!("Lifestyle score: {score}/10\n");
    for line in &report.advice {
        println!("  - {line}");
    }

    Ok(())
}

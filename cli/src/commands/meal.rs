use std::process;

use anyhow::Result;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use fitrec_core::registry::ArtifactRegistry;

pub(crate) fn cmd_meal(
    registry: &ArtifactRegistry,
    name: &str,
    top: usize,
    json: bool,
) -> Result<()> {
    let recommender = registry.meal()?;

    let neighbors = match recommender.recommend(name, top) {
        Ok(neighbors) => neighbors,
        Err(not_found) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "error": not_found.to_string()
                    }))?
                );
            } else {
                eprintln!("{not_found}");
            }
            process::exit(2);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&neighbors)?);
        return Ok(());
    }

    #[derive(Tabled)]
    struct MealRow {
        #[tabled(rename = "Meal")]
        meal_name: String,
        #[tabled(rename = "Type")]
        meal_type: String,
        #[tabled(rename = "Diet")]
        diet_type: String,
        #[tabled(rename = "Method")]
        cooking_method: String,
        #[tabled(rename = "Calories")]
        calories: String,
        #[tabled(rename = "P")]
        proteins: String,
        #[tabled(rename = "C")]
        carbs: String,
        #[tabled(rename = "F")]
        fats: String,
        #[tabled(rename = "Score")]
        similarity: String,
    }

    let rows: Vec<MealRow> = neighbors
        .iter()
        .map(|m| MealRow {
            meal_name: m.meal_name.clone(),
            meal_type: m.meal_type.clone(),
            diet_type: m.diet_type.clone(),
            cooking_method: m.cooking_method.clone(),
            calories: format!("{:.0}", m.calories),
            proteins: format!("{:.0}g", m.proteins),
            carbs: format!("{:.0}g", m.carbs),
            fats: format!("{:.0}g", m.fats),
            similarity: format!("{:.3}", m.similarity),
        })
        .collect();

    println!("Meals similar to '{name}':\n");
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(4..)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}

use anyhow::Result;
use serde::Serialize;

use fitrec_core::registry::ArtifactRegistry;

#[derive(Serialize)]
struct CatalogOptions {
    difficulty_levels: Vec<String>,
    target_muscle_groups: Vec<String>,
    meal_names: Vec<String>,
    meal_types: Vec<String>,
    diet_types: Vec<String>,
    cooking_methods: Vec<String>,
}

/// List the catalog values a caller can query with. Either catalog may be
/// absent; its lists are then empty rather than an error.
pub(crate) fn cmd_options(registry: &ArtifactRegistry, json: bool) -> Result<()> {
    let mut options = CatalogOptions {
        difficulty_levels: Vec::new(),
        target_muscle_groups: Vec::new(),
        meal_names: Vec::new(),
        meal_types: Vec::new(),
        diet_types: Vec::new(),
        cooking_methods: Vec::new(),
    };

    match registry.workout() {
        Ok(rec) => {
            options.difficulty_levels = rec.catalog().difficulties();
            options.target_muscle_groups = rec.catalog().muscle_groups();
        }
        Err(err) => eprintln!("Warning: exercise catalog unavailable: {err:#}"),
    }

    match registry.meal() {
        Ok(rec) => {
            options.meal_names = rec.catalog().meal_names();
            options.meal_types = rec.catalog().meal_types();
            options.diet_types = rec.catalog().diet_types();
            options.cooking_methods = rec.catalog().cooking_methods();
        }
        Err(err) => eprintln!("Warning: meal catalog unavailable: {err:#}"),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    let print_list = |label: &str, values: &[String]| {
        println!("{label}:");
        if values.is_empty() {
            println!("  (none)");
        }
        for v in values {
            println!("  - {v}");
        }
        println!();
    };

    print_list("Difficulty levels", &options.difficulty_levels);
    print_list("Muscle groups", &options.target_muscle_groups);
    print_list("Meal names", &options.meal_names);
    print_list("Meal types", &options.meal_types);
    print_list("Diet types", &options.diet_types);
    print_list("Cooking methods", &options.cooking_methods);

    Ok(())
}

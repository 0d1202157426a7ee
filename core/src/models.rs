use serde::{Deserialize, Serialize};

/// One row of the exercise catalog, normalized at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub muscle_group: String,
    pub difficulty: String,
    pub calories_burned: f64,
}

/// One row of the meal catalog. `meal_name` is the unique lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    pub meal_name: String,
    pub meal_type: String,
    pub diet_type: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
    pub cooking_method: String,
}

/// Per-request health questionnaire. Constructed and consumed within one
/// request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthInput {
    pub age: u32,
    pub gender: String,
    pub bmi: f64,
    pub fat_percentage: f64,
    /// Days per week.
    pub workout_frequency: f64,
    /// Free text, e.g. "Strength training".
    pub physical_exercise: String,
    /// Liters per day.
    pub water_intake: f64,
    pub daily_meals: f64,
}

/// Projection of an exercise row returned by the workout recommender.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutPick {
    pub name: String,
    pub muscle_group: String,
    pub difficulty: String,
    pub calories_burned: f64,
}

impl From<&ExerciseEntry> for WorkoutPick {
    fn from(e: &ExerciseEntry) -> Self {
        Self {
            name: e.name.clone(),
            muscle_group: e.muscle_group.clone(),
            difficulty: e.difficulty.clone(),
            calories_burned: e.calories_burned,
        }
    }
}

/// A meal similar to the queried one, with its precomputed similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct MealNeighbor {
    pub meal_name: String,
    pub meal_type: String,
    pub diet_type: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
    pub cooking_method: String,
    pub similarity: f64,
}

impl MealNeighbor {
    #[must_use]
    pub fn from_entry(e: &MealEntry, similarity: f64) -> Self {
        Self {
            meal_name: e.meal_name.clone(),
            meal_type: e.meal_type.clone(),
            diet_type: e.diet_type.clone(),
            calories: e.calories,
            proteins: e.proteins,
            carbs: e.carbs,
            fats: e.fats,
            cooking_method: e.cooking_method.clone(),
            similarity,
        }
    }
}

/// Output of the health scorer: ordered advice lines plus the 0-10 score.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub advice: Vec<String>,
    pub lifestyle_score: f64,
}

/// Trim and capitalize a difficulty label: first letter uppercased, the
/// rest lowered ("INTERMEDIATE" -> "Intermediate").
#[must_use]
pub fn normalize_difficulty(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Trim and title-case a muscle-group label: every letter that follows a
/// non-letter is uppercased ("upper-body" -> "Upper-Body").
#[must_use]
pub fn normalize_muscle_group(raw: &str) -> String {
    let mut out = String::with_capacity(raw.trim().len());
    let mut prev_alpha = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_difficulty() {
        assert_eq!(normalize_difficulty("beginner"), "Beginner");
        assert_eq!(normalize_difficulty("  INTERMEDIATE "), "Intermediate");
        assert_eq!(normalize_difficulty("Advanced"), "Advanced");
        assert_eq!(normalize_difficulty(""), "");
        assert_eq!(normalize_difficulty("   "), "");
    }

    #[test]
    fn test_normalize_muscle_group() {
        assert_eq!(normalize_muscle_group("chest"), "Chest");
        assert_eq!(normalize_muscle_group("  lower back "), "Lower Back");
        assert_eq!(normalize_muscle_group("upper-body"), "Upper-Body");
        assert_eq!(normalize_muscle_group("LEGS"), "Legs");
        assert_eq!(normalize_muscle_group(""), "");
    }

    #[test]
    fn test_workout_pick_projection() {
        let entry = ExerciseEntry {
            name: "Push Up".to_string(),
            muscle_group: "Chest".to_string(),
            difficulty: "Beginner".to_string(),
            calories_burned: 120.0,
        };
        let pick = WorkoutPick::from(&entry);
        assert_eq!(pick.name, "Push Up");
        assert_eq!(pick.muscle_group, "Chest");
        assert_eq!(pick.difficulty, "Beginner");
        assert!((pick.calories_burned - 120.0).abs() < f64::EPSILON);
    }
}

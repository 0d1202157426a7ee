use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::{ExerciseEntry, MealEntry, normalize_difficulty, normalize_muscle_group};

/// Immutable exercise catalog, normalized exactly once at load.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    entries: Vec<ExerciseEntry>,
}

impl ExerciseCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open exercise catalog: {}", path.display()))?;
        Self::from_csv(file)
            .with_context(|| format!("Failed to parse exercise catalog: {}", path.display()))
    }

    /// Parse the exercise catalog from any reader.
    ///
    /// Expected header (case-insensitive):
    /// `name,muscle_group,difficulty,calories_burned`
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().context("Failed to read CSV headers")?.clone();
        let col = |name: &str| -> Option<usize> {
            headers.iter().position(|h| h.eq_ignore_ascii_case(name))
        };

        let idx_name = col("name").context("Missing 'name' column")?;
        let idx_muscle = col("muscle_group").context("Missing 'muscle_group' column")?;
        let idx_difficulty = col("difficulty").context("Missing 'difficulty' column")?;
        let idx_calories = col("calories_burned").context("Missing 'calories_burned' column")?;

        let mut entries = Vec::new();

        for (line_num, result) in rdr.records().enumerate() {
            let record =
                result.with_context(|| format!("Failed to parse CSV row {}", line_num + 2))?;

            let name = record.get(idx_name).unwrap_or("").trim().to_string();
            if name.is_empty() {
                continue; // skip blank rows
            }

            let difficulty = normalize_difficulty(record.get(idx_difficulty).unwrap_or(""));
            if difficulty.is_empty() {
                bail!("Row {} ('{name}') has no difficulty level", line_num + 2);
            }

            let muscle_group = normalize_muscle_group(record.get(idx_muscle).unwrap_or(""));

            let calories_burned = record
                .get(idx_calories)
                .unwrap_or("")
                .trim()
                .parse::<f64>()
                .with_context(|| {
                    format!("Row {} ('{name}') has invalid calories_burned", line_num + 2)
                })?;

            entries.push(ExerciseEntry {
                name,
                muscle_group,
                difficulty,
                calories_burned,
            });
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct difficulty levels, sorted.
    #[must_use]
    pub fn difficulties(&self) -> Vec<String> {
        distinct_sorted(self.entries.iter().map(|e| e.difficulty.as_str()))
    }

    /// Distinct muscle groups, sorted. Empty labels are omitted.
    #[must_use]
    pub fn muscle_groups(&self) -> Vec<String> {
        distinct_sorted(
            self.entries
                .iter()
                .map(|e| e.muscle_group.as_str())
                .filter(|m| !m.is_empty()),
        )
    }
}

/// Immutable meal catalog. Row order is significant: it matches the
/// similarity matrix positionally.
#[derive(Debug, Clone)]
pub struct MealCatalog {
    entries: Vec<MealEntry>,
}

impl MealCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open meal catalog: {}", path.display()))?;
        Self::from_csv(file)
            .with_context(|| format!("Failed to parse meal catalog: {}", path.display()))
    }

    /// Parse the meal catalog from any reader.
    ///
    /// Expected header (case-insensitive):
    /// `meal_name,meal_type,diet_type,calories,proteins,carbs,fats,cooking_method`
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().context("Failed to read CSV headers")?.clone();
        let col = |name: &str| -> Option<usize> {
            headers.iter().position(|h| h.eq_ignore_ascii_case(name))
        };

        let idx_name = col("meal_name").context("Missing 'meal_name' column")?;
        let idx_type = col("meal_type").context("Missing 'meal_type' column")?;
        let idx_diet = col("diet_type").context("Missing 'diet_type' column")?;
        let idx_calories = col("calories").context("Missing 'calories' column")?;
        let idx_proteins = col("proteins").context("Missing 'proteins' column")?;
        let idx_carbs = col("carbs").context("Missing 'carbs' column")?;
        let idx_fats = col("fats").context("Missing 'fats' column")?;
        let idx_cooking = col("cooking_method").context("Missing 'cooking_method' column")?;

        let mut entries = Vec::new();

        for (line_num, result) in rdr.records().enumerate() {
            let record =
                result.with_context(|| format!("Failed to parse CSV row {}", line_num + 2))?;

            let meal_name = record.get(idx_name).unwrap_or("").trim().to_string();
            if meal_name.is_empty() {
                continue;
            }

            let parse_f64 = |idx: usize, field: &str| -> Result<f64> {
                record
                    .get(idx)
                    .unwrap_or("")
                    .trim()
                    .parse::<f64>()
                    .with_context(|| {
                        format!("Row {} ('{meal_name}') has invalid {field}", line_num + 2)
                    })
            };

            let calories = parse_f64(idx_calories, "calories")?;
            let proteins = parse_f64(idx_proteins, "proteins")?;
            let carbs = parse_f64(idx_carbs, "carbs")?;
            let fats = parse_f64(idx_fats, "fats")?;

            entries.push(MealEntry {
                meal_type: record.get(idx_type).unwrap_or("").trim().to_string(),
                diet_type: record.get(idx_diet).unwrap_or("").trim().to_string(),
                calories,
                proteins,
                carbs,
                fats,
                cooking_method: record.get(idx_cooking).unwrap_or("").trim().to_string(),
                meal_name,
            });
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row index of a meal by exact name (first match).
    #[must_use]
    pub fn index_of(&self, meal_name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.meal_name == meal_name)
    }

    #[must_use]
    pub fn meal_names(&self) -> Vec<String> {
        distinct_sorted(self.entries.iter().map(|e| e.meal_name.as_str()))
    }

    #[must_use]
    pub fn meal_types(&self) -> Vec<String> {
        distinct_sorted(self.entries.iter().map(|e| e.meal_type.as_str()))
    }

    #[must_use]
    pub fn diet_types(&self) -> Vec<String> {
        distinct_sorted(self.entries.iter().map(|e| e.diet_type.as_str()))
    }

    #[must_use]
    pub fn cooking_methods(&self) -> Vec<String> {
        distinct_sorted(self.entries.iter().map(|e| e.cooking_method.as_str()))
    }
}

/// Precomputed pairwise meal similarity scores, positionally indexed by
/// meal-catalog row order.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open similarity matrix: {}", path.display()))?;
        Self::from_json(file)
            .with_context(|| format!("Failed to parse similarity matrix: {}", path.display()))
    }

    /// Parse a JSON array-of-arrays and verify it is square.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let rows: Vec<Vec<f64>> =
            serde_json::from_reader(reader).context("Similarity matrix is not a numeric matrix")?;

        let dim = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                bail!("Similarity matrix is not square: row {i} has {} columns, expected {dim}", row.len());
            }
        }

        Ok(Self { rows })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Similarity scores of meal `idx` against every catalog row.
    #[must_use]
    pub fn row(&self, idx: usize) -> &[f64] {
        &self.rows[idx]
    }

    /// Verify the positional coupling to a meal catalog of `meal_count` rows.
    pub fn check_dimension(&self, meal_count: usize) -> Result<()> {
        if self.rows.len() != meal_count {
            bail!(
                "Similarity matrix has {} rows but the meal catalog has {meal_count}",
                self.rows.len()
            );
        }
        Ok(())
    }
}

fn distinct_sorted<'a, I: Iterator<Item = &'a str>>(values: I) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out: Vec<String> = values
        .filter(|v| seen.insert(*v))
        .map(ToString::to_string)
        .collect();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXERCISES_CSV: &str = "\
name,muscle_group,difficulty,calories_burned
Push Up,chest,beginner,120.5
Squat, legs ,BEGINNER,200
Deadlift,lower back,advanced,310.2
";

    const MEALS_CSV: &str = "\
meal_name,meal_type,diet_type,calories,proteins,carbs,fats,cooking_method
Grilled Chicken Salad,Lunch,High Protein,350,40,12,15,Grilled
Veggie Stir Fry,Dinner,Vegan,280,10,35,9,Stir Fried
Oatmeal Bowl,Breakfast,Vegetarian,300,11,50,6,Boiled
";

    #[test]
    fn test_exercise_catalog_normalizes_on_load() {
        let catalog = ExerciseCatalog::from_csv(EXERCISES_CSV.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.entries()[0].muscle_group, "Chest");
        assert_eq!(catalog.entries()[0].difficulty, "Beginner");
        assert_eq!(catalog.entries()[1].muscle_group, "Legs");
        assert_eq!(catalog.entries()[1].difficulty, "Beginner");
        assert_eq!(catalog.entries()[2].muscle_group, "Lower Back");
        assert_eq!(catalog.entries()[2].difficulty, "Advanced");
    }

    #[test]
    fn test_exercise_catalog_distinct_lists() {
        let catalog = ExerciseCatalog::from_csv(EXERCISES_CSV.as_bytes()).unwrap();
        assert_eq!(catalog.difficulties(), vec!["Advanced", "Beginner"]);
        assert_eq!(catalog.muscle_groups(), vec!["Chest", "Legs", "Lower Back"]);
    }

    #[test]
    fn test_exercise_catalog_missing_column() {
        let csv = "name,muscle_group,calories_burned\nPush Up,chest,120\n";
        let err = ExerciseCatalog::from_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("difficulty"));
    }

    #[test]
    fn test_exercise_catalog_rejects_empty_difficulty() {
        let csv = "name,muscle_group,difficulty,calories_burned\nPush Up,chest, ,120\n";
        let err = ExerciseCatalog::from_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("no difficulty"));
    }

    #[test]
    fn test_exercise_catalog_skips_blank_rows() {
        let csv = "name,muscle_group,difficulty,calories_burned\n,chest,beginner,120\nSquat,legs,beginner,200\n";
        let catalog = ExerciseCatalog::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].name, "Squat");
    }

    #[test]
    fn test_exercise_catalog_invalid_calories() {
        let csv = "name,muscle_group,difficulty,calories_burned\nPush Up,chest,beginner,lots\n";
        assert!(ExerciseCatalog::from_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_meal_catalog_parse_and_lookup() {
        let catalog = MealCatalog::from_csv(MEALS_CSV.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.index_of("Veggie Stir Fry"), Some(1));
        assert_eq!(catalog.index_of("Nonexistent Meal"), None);
        assert!((catalog.entries()[0].proteins - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_meal_catalog_distinct_lists() {
        let catalog = MealCatalog::from_csv(MEALS_CSV.as_bytes()).unwrap();
        assert_eq!(
            catalog.meal_names(),
            vec!["Grilled Chicken Salad", "Oatmeal Bowl", "Veggie Stir Fry"]
        );
        assert_eq!(catalog.meal_types(), vec!["Breakfast", "Dinner", "Lunch"]);
        assert_eq!(catalog.diet_types(), vec!["High Protein", "Vegan", "Vegetarian"]);
        assert_eq!(catalog.cooking_methods(), vec!["Boiled", "Grilled", "Stir Fried"]);
    }

    #[test]
    fn test_similarity_matrix_square() {
        let matrix = SimilarityMatrix::from_json("[[1.0,0.5],[0.5,1.0]]".as_bytes()).unwrap();
        assert_eq!(matrix.len(), 2);
        assert!((matrix.row(0)[1] - 0.5).abs() < f64::EPSILON);
        assert!(matrix.check_dimension(2).is_ok());
        assert!(matrix.check_dimension(3).is_err());
    }

    #[test]
    fn test_similarity_matrix_not_square() {
        let err = SimilarityMatrix::from_json("[[1.0,0.5],[0.5]]".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("not square"));
    }

    #[test]
    fn test_similarity_matrix_not_numeric() {
        assert!(SimilarityMatrix::from_json("{\"a\":1}".as_bytes()).is_err());
    }
}

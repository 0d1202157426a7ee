use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;

use crate::catalog::{ExerciseCatalog, MealCatalog, SimilarityMatrix};
use crate::meal::MealRecommender;
use crate::workout::WorkoutRecommender;

/// Locations of the three precomputed artifact files.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub exercises_csv: PathBuf,
    pub meals_csv: PathBuf,
    pub similarity_json: PathBuf,
}

/// Process-wide registry of loaded artifacts.
///
/// Each recommender is loaded lazily on first use behind a mutex, so
/// concurrent first callers never duplicate a load, and cached for the
/// process lifetime (artifact files are static; there is no invalidation).
/// A failed load is not cached: the error is returned and the next call
/// retries.
pub struct ArtifactRegistry {
    paths: ArtifactPaths,
    workout: Mutex<Option<Arc<WorkoutRecommender>>>,
    meal: Mutex<Option<Arc<MealRecommender>>>,
}

impl ArtifactRegistry {
    #[must_use]
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            paths,
            workout: Mutex::new(None),
            meal: Mutex::new(None),
        }
    }

    /// The workout recommender, loading the exercise catalog on first call.
    pub fn workout(&self) -> Result<Arc<WorkoutRecommender>> {
        let mut slot = self
            .workout
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(rec) = slot.as_ref() {
            return Ok(Arc::clone(rec));
        }
        let catalog = ExerciseCatalog::load(&self.paths.exercises_csv)?;
        let rec = Arc::new(WorkoutRecommender::new(catalog));
        *slot = Some(Arc::clone(&rec));
        Ok(rec)
    }

    /// The meal recommender, loading the meal catalog and similarity matrix
    /// on first call.
    pub fn meal(&self) -> Result<Arc<MealRecommender>> {
        let mut slot = self.meal.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(rec) = slot.as_ref() {
            return Ok(Arc::clone(rec));
        }
        let catalog = MealCatalog::load(&self.paths.meals_csv)?;
        let matrix = SimilarityMatrix::load(&self.paths.similarity_json)?;
        let rec = Arc::new(MealRecommender::new(catalog, matrix)?);
        *slot = Some(Arc::clone(&rec));
        Ok(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_artifacts(dir: &std::path::Path) -> ArtifactPaths {
        let paths = ArtifactPaths {
            exercises_csv: dir.join("exercises.csv"),
            meals_csv: dir.join("meals.csv"),
            similarity_json: dir.join("meal_similarity.json"),
        };
        fs::write(
            &paths.exercises_csv,
            "name,muscle_group,difficulty,calories_burned\nPush Up,chest,beginner,120\n",
        )
        .unwrap();
        fs::write(
            &paths.meals_csv,
            "meal_name,meal_type,diet_type,calories,proteins,carbs,fats,cooking_method\n\
             Grilled Chicken Salad,Lunch,High Protein,350,40,12,15,Grilled\n\
             Veggie Stir Fry,Dinner,Vegan,280,10,35,9,Stir Fried\n",
        )
        .unwrap();
        fs::write(&paths.similarity_json, "[[1.0,0.4],[0.4,1.0]]").unwrap();
        paths
    }

    #[test]
    fn test_lazy_load_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ArtifactRegistry::new(write_artifacts(dir.path()));

        let first = registry.workout().unwrap();
        let second = registry.workout().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let meals = registry.meal().unwrap();
        assert_eq!(meals.catalog().len(), 2);
    }

    #[test]
    fn test_cached_after_artifact_removal() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(dir.path());
        let registry = ArtifactRegistry::new(paths.clone());

        registry.workout().unwrap();
        fs::remove_file(&paths.exercises_csv).unwrap();
        // Already loaded; the missing file is irrelevant.
        assert!(registry.workout().is_ok());
    }

    #[test]
    fn test_missing_artifact_surfaces_error_and_retries() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths {
            exercises_csv: dir.path().join("missing.csv"),
            meals_csv: dir.path().join("missing_meals.csv"),
            similarity_json: dir.path().join("missing.json"),
        };
        let registry = ArtifactRegistry::new(paths.clone());
        assert!(registry.workout().is_err());
        assert!(registry.meal().is_err());

        // A failed load is not cached; creating the files makes it succeed.
        let good = write_artifacts(dir.path());
        fs::rename(&good.exercises_csv, &paths.exercises_csv).unwrap();
        fs::rename(&good.meals_csv, &paths.meals_csv).unwrap();
        fs::rename(&good.similarity_json, &paths.similarity_json).unwrap();
        assert!(registry.workout().is_ok());
        assert!(registry.meal().is_ok());
    }

    #[test]
    fn test_dimension_mismatch_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(dir.path());
        fs::write(&paths.similarity_json, "[[1.0]]").unwrap();
        let registry = ArtifactRegistry::new(paths);
        assert!(registry.meal().is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(ArtifactRegistry::new(write_artifacts(dir.path())));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.workout().unwrap().catalog().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}

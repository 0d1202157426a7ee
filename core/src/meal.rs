use anyhow::Result;
use thiserror::Error;

use crate::catalog::{MealCatalog, SimilarityMatrix};
use crate::models::MealNeighbor;

/// The queried meal name is absent from the catalog. Recoverable: callers
/// surface it as a not-found result, not a crash.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Meal '{name}' not found. Try another one.")]
pub struct MealNotFound {
    pub name: String,
}

/// Nearest-neighbor meal lookup over a precomputed similarity matrix.
#[derive(Debug, Clone)]
pub struct MealRecommender {
    catalog: MealCatalog,
    matrix: SimilarityMatrix,
}

impl MealRecommender {
    /// Pair a meal catalog with its similarity matrix. The matrix dimension
    /// must equal the catalog row count; the coupling is positional.
    pub fn new(catalog: MealCatalog, matrix: SimilarityMatrix) -> Result<Self> {
        matrix.check_dimension(catalog.len())?;
        Ok(Self { catalog, matrix })
    }

    #[must_use]
    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    /// The `top_n` meals most similar to `meal_name`, highest score first.
    ///
    /// The top-ranked entry of the similarity row is the meal itself (the
    /// diagonal is maximal) and is dropped; ties rank by catalog order.
    /// Returns fewer than `top_n` entries when the catalog is smaller.
    pub fn recommend(&self, meal_name: &str, top_n: usize) -> Result<Vec<MealNeighbor>, MealNotFound> {
        let idx = self.catalog.index_of(meal_name).ok_or_else(|| MealNotFound {
            name: meal_name.to_string(),
        })?;

        let mut scored: Vec<(usize, f64)> =
            self.matrix.row(idx).iter().copied().enumerate().collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(scored
            .into_iter()
            .skip(1)
            .take(top_n)
            .map(|(i, score)| MealNeighbor::from_entry(&self.catalog.entries()[i], score))
            .collect())
    }
}

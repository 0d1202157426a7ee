use std::collections::HashSet;

use rand::seq::{IndexedRandom, SliceRandom};

use crate::catalog::ExerciseCatalog;
use crate::fuzzy;
use crate::models::{ExerciseEntry, WorkoutPick};

/// Per-tier sample quotas: 1 light, 2 medium, 2 intense.
const LIGHT_QUOTA: usize = 1;
const MEDIUM_QUOTA: usize = 2;
const INTENSE_QUOTA: usize = 2;

/// Stratified-sampling workout recommender over an immutable exercise
/// catalog.
#[derive(Debug, Clone)]
pub struct WorkoutRecommender {
    catalog: ExerciseCatalog,
}

impl WorkoutRecommender {
    #[must_use]
    pub fn new(catalog: ExerciseCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// Recommend a diversified sample of exercises for a difficulty level.
    ///
    /// Rows are filtered to the exact difficulty, optionally narrowed to
    /// fuzzy matches of `muscle_group` (best effort: an empty narrowing
    /// falls back to the difficulty-only set), deduplicated by name, split
    /// into calorie-burn tiers at the 33rd and 66th percentiles, sampled
    /// 1/2/2 per tier, and returned shuffled.
    ///
    /// `_n` is accepted for caller compatibility but the tier quotas are
    /// fixed, so the result never exceeds five rows.
    #[must_use]
    pub fn recommend(
        &self,
        difficulty: &str,
        muscle_group: Option<&str>,
        _n: usize,
    ) -> Vec<WorkoutPick> {
        let base: Vec<&ExerciseEntry> = self
            .catalog
            .entries()
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .collect();

        let mut rows = base.clone();
        if let Some(target) = muscle_group.map(str::trim).filter(|m| !m.is_empty()) {
            let matched: HashSet<String> =
                fuzzy::best_matches(target, &distinct_muscle_groups(&base))
                    .into_iter()
                    .collect();
            rows.retain(|e| matched.contains(&e.muscle_group));
        }

        // Muscle-group preference is best effort, never fails the request.
        if rows.is_empty() {
            rows = base;
        }

        // Dedup by exercise name, first occurrence wins.
        let mut seen = HashSet::new();
        rows.retain(|e| seen.insert(e.name.as_str()));

        if rows.is_empty() {
            return Vec::new();
        }

        let mut calories: Vec<f64> = rows.iter().map(|e| e.calories_burned).collect();
        calories.sort_by(f64::total_cmp);
        let p33 = percentile(&calories, 0.33);
        let p66 = percentile(&calories, 0.66);

        let mut light = Vec::new();
        let mut medium = Vec::new();
        let mut intense = Vec::new();
        for e in rows {
            if e.calories_burned <= p33 {
                light.push(e);
            } else if e.calories_burned <= p66 {
                medium.push(e);
            } else {
                intense.push(e);
            }
        }

        let mut rng = rand::rng();
        let mut picked: Vec<&ExerciseEntry> = Vec::new();
        picked.extend(light.choose_multiple(&mut rng, LIGHT_QUOTA).copied());
        picked.extend(medium.choose_multiple(&mut rng, MEDIUM_QUOTA).copied());
        picked.extend(intense.choose_multiple(&mut rng, INTENSE_QUOTA).copied());
        picked.shuffle(&mut rng);

        picked.into_iter().map(WorkoutPick::from).collect()
    }
}

/// Distinct muscle groups in first-appearance order; empty labels omitted.
fn distinct_muscle_groups(rows: &[&ExerciseEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|e| e.muscle_group.as_str())
        .filter(|m| !m.is_empty() && seen.insert(*m))
        .map(ToString::to_string)
        .collect()
}

/// Percentile with linear interpolation between closest ranks, over a
/// sorted, non-empty slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let rank = q * (sorted.len() - 1) as f64;
    #[allow(clippy::cast_sign_loss)]
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    #[allow(clippy::cast_precision_loss)]
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

//! Approximate matching of a free-text label against a set of canonical
//! labels, on a 0-100 normalized edit-distance scale.

/// Candidates scoring at or below this are never returned.
const MIN_SCORE: f64 = 70.0;

/// At most this many candidates survive the top-slice.
const MATCH_LIMIT: usize = 3;

/// Case-insensitive similarity ratio between two labels, 0-100.
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) * 100.0
}

/// The candidates most similar to `target`: top 3 by ratio, restricted to
/// those scoring above 70, highest first. Ties keep the candidates'
/// original relative order. May be empty.
#[must_use]
pub fn best_matches(target: &str, candidates: &[String]) -> Vec<String> {
    let mut scored: Vec<(&String, f64)> = candidates
        .iter()
        .map(|c| (c, similarity_ratio(target, c)))
        .collect();
    // Stable sort: equal scores stay in candidate order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(MATCH_LIMIT)
        .filter(|(_, score)| *score > MIN_SCORE)
        .map(|(c, _)| c.clone())
        .collect()
}

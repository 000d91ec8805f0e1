//! Brute-force nearest neighbour search.

/// Squared Euclidean distance.
pub(crate) fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// The `k` candidates closest to `points[query]`, nearest first.
///
/// The query row itself is never returned, though exact duplicates of it
/// are. Equal distances are ordered by row index.
pub(crate) fn nearest(points: &[Vec<f64>], query: usize, candidates: &[usize], k: usize) -> Vec<usize> {
    let origin = &points[query];
    let mut scored: Vec<(f64, usize)> = candidates
        .iter()
        .copied()
        .filter(|&c| c != query)
        .map(|c| (squared_distance(origin, &points[c]), c))
        .collect();
    scored.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    scored.truncate(k);
    scored.into_iter().map(|(_, c)| c).collect()
}

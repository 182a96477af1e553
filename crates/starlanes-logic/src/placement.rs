//! Body placement: spawn distance bands and candidate acceptance.
//!
//! New bodies are placed by rejection sampling around a random anchor. Both
//! bands widen with the body count so the cluster keeps spreading instead of
//! packing.

/// Closest any existing body may sit to an accepted candidate.
pub fn min_spawn_distance(body_count: usize) -> f32 {
    340.0 + body_count as f32 * 10.0
}

/// Outer edge of the sampling band around the anchor body.
pub fn max_spawn_distance(body_count: usize) -> f32 {
    400.0 + body_count as f32 * 50.0
}

/// Acceptance test for a spawn candidate against every existing body.
///
/// A candidate is taken when nothing sits inside the minimum band AND at
/// least one existing body lies beyond the maximum band. The second clause
/// keeps candidates on the rim of the cluster rather than filling its
/// middle.
pub fn candidate_ok(
    candidate: (f32, f32),
    existing: &[(f32, f32)],
    min_distance: f32,
    max_distance: f32,
) -> bool {
    let clear = existing
        .iter()
        .all(|p| distance(candidate, *p) >= min_distance);
    let on_rim = existing.iter().any(|p| distance(candidate, *p) > max_distance);
    clear && on_rim
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

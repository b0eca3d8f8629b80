//! Zone resolution: matching free text against the zone gazetteer.
//!
//! A precision-over-recall cascade: exact substring containment is trusted
//! completely before any approximate method runs, and approximate matching
//! is tried at increasing granularity (per token, then the whole query) so
//! a single stray word cannot suppress a clean token match.

/// Minimum normalized edit similarity for an approximate match.
pub const SIMILARITY_CUTOFF: f64 = 0.6;

/// Resolve the zone a query refers to, if any.
///
/// Priority order, first success wins:
/// 1. case-insensitive substring containment, scanning `zones` in catalog
///    order;
/// 2. closest fuzzy match per whitespace token, left to right;
/// 3. closest fuzzy match of the entire query.
///
/// Returns the zone name exactly as it appears in the catalog.
pub fn resolve_zone(query: &str, zones: &[String]) -> Option<String> {
    let query = query.to_lowercase();

    for zone in zones {
        if query.contains(&zone.to_lowercase()) {
            return Some(zone.clone());
        }
    }

    for token in query.split_whitespace() {
        if let Some(zone) = closest_match(token, zones) {
            return Some(zone);
        }
    }

    closest_match(&query, zones)
}

/// The zone most similar to `candidate`, if it clears the cutoff.
///
/// Ties resolve to the earlier catalog entry.
fn closest_match(candidate: &str, zones: &[String]) -> Option<String> {
    let mut best: Option<(&String, f64)> = None;
    for zone in zones {
        let score = strsim::normalized_levenshtein(candidate, &zone.to_lowercase());
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((zone, score));
        }
    }
    best.filter(|(_, score)| *score >= SIMILARITY_CUTOFF)
        .map(|(zone, _)| zone.clone())
}

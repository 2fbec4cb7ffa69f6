//! "Did you mean" suggestions for rejected input.

use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Pick the candidate most similar to `input`, if any is close enough.
///
/// Only used to phrase error messages; command matching itself stays exact.
pub fn suggest<'a>(candidates: impl IntoIterator<Item = &'a str>, input: &str) -> Option<&'a str> {
    let input_lower = input.trim().to_lowercase();
    if input_lower.is_empty() {
        return None;
    }

    candidates
        .into_iter()
        .map(|c| (c, jaro_winkler(&input_lower, c)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

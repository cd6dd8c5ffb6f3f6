//! Static document ranking: how much a document matters before anyone
//! searches for anything.
//!
//! The ranking score is query-independent. It is computed once at build time
//! over the full indexable text of a document (title, tags, language, body,
//! excerpt) and persisted into the index, where it serves two jobs: the index
//! is pre-sorted by it, and equal-relevance search results inherit its order
//! through the stable sort.
//!
//! The formula is weighted keyword presence: a fixed table of domain terms,
//! each worth a weight, summed over the terms present in the text and
//! normalized against a cap. Presence, not frequency — mentioning "array"
//! fifty times buys nothing extra. The score is monotonic in matched signal
//! (more matched terms never lower it), clamped to `[0, 1]` and rounded to
//! two decimals so persisted values stay stable across platforms.

/// Domain keywords and their ranking weights.
///
/// Languages and core data structures weigh the most; broad filler terms
/// trail off. Matching is substring-based over lowercased text, so "arrays"
/// matches "array".
const KEYWORD_WEIGHTS: &[(&str, f64)] = &[
    ("javascript", 2.0),
    ("python", 2.0),
    ("react", 1.5),
    ("css", 1.5),
    ("html", 1.5),
    ("array", 1.25),
    ("string", 1.25),
    ("algorithm", 1.25),
    ("object", 1.0),
    ("function", 1.0),
    ("list", 1.0),
    ("node", 1.0),
    ("promise", 1.0),
    ("async", 1.0),
    ("git", 1.0),
    ("component", 0.75),
    ("hook", 0.75),
    ("date", 0.75),
    ("number", 0.75),
    ("regex", 0.75),
    ("sort", 0.75),
    ("browser", 0.5),
    ("performance", 0.5),
    ("testing", 0.5),
    ("snippet", 0.25),
];

/// Normalization cap: a document matching this much keyword weight ranks 1.0.
const RANKING_CAP: f64 = 12.0;

/// Compute the static ranking score for a document's indexable text.
///
/// Deterministic and monotonic: adding matched keywords to the text never
/// lowers the score. Returns a value in `[0, 1]`, rounded to two decimals.
pub fn rank_indexable_content(text: &str) -> f64 {
    let text = text.to_lowercase();
    let matched: f64 = KEYWORD_WEIGHTS
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, weight)| weight)
        .sum();
    let normalized = (matched / RANKING_CAP).min(1.0);
    (normalized * 100.0).round() / 100.0
}

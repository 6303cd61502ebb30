//! Range and membership predicates
//!
//! One pure predicate per filter dimension. All of them are independent and
//! the pipeline combines them with logical AND.

use ahash::AHashSet;

/// Inclusive numeric range membership: lo <= value <= hi.
pub fn in_range(value: f64, range: [f64; 2]) -> bool {
    range[0] <= value && value <= range[1]
}

/// Any-of tag membership. An empty selection is no constraint; otherwise the
/// record passes when its tag set intersects the selection.
pub fn matches_any_tag(tags: &[String], selected: &AHashSet<String>) -> bool {
    selected.is_empty() || tags.iter().any(|tag| selected.contains(tag))
}

/// Exact player-count membership against the recommended set. None = any.
pub fn matches_player_count(recommended: &[u32], wanted: Option<u32>) -> bool {
    match wanted {
        None => true,
        Some(count) => recommended.contains(&count),
    }
}

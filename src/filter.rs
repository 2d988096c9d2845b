use crate::models::{FilterCriteria, SelectionSet};

/// Compute the visible subset of the source tags.
///
/// Keeps exactly the tags that match the query (case-insensitive
/// substring, empty query matches everything), meet the min-length
/// threshold, and pass the only-selected switch. Source order is
/// preserved; the inputs are never mutated.
pub fn filter_tags<'a>(
    source: &'a [String],
    criteria: &FilterCriteria,
    selection: &SelectionSet,
) -> Vec<&'a str> {
    let query = criteria.query.to_lowercase();

    source
        .iter()
        .map(String::as_str)
        .filter(|tag| query.is_empty() || tag.to_lowercase().contains(&query))
        .filter(|tag| tag.chars().count() >= criteria.min_length)
        .filter(|tag| !criteria.only_selected || selection.contains(tag))
        .collect()
}

//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Errors should tell users what went
//! wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orgunit_tree::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Tree payload not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::tree_file_not_found(path));
//! ```

use std::path::Path;

/// Generate an error for when a tree payload file is not found.
pub fn tree_file_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Tree payload not found: {path}\n\n\
         hint: Save the JSON returned by the org-unit tree or org-unit-type \
         hierarchy endpoint to a file\n\
         hint: Use --tree to point at that file",
        path = path.display()
    )
}

/// Generate an error for when a resolve input file is not found.
pub fn resolve_input_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Resolve input not found: {path}\n\n\
         hint: The input is a YAML or JSON document with optional keys \
         version_id, source_id, version, source, account_default, label_format\n\
         hint: Use --input to point at that file",
        path = path.display()
    )
}

/// Generate an error for an id list that does not parse.
pub fn invalid_id_list(value: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid id list: {value}\n\n\
         hint: Use comma-separated integers, e.g. --excluded 12,15,40"
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
pub fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Single rolling row instead of the full matrix.
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, a_char) in a_chars.iter().enumerate() {
        let mut current = vec![i + 1; b_chars.len() + 1];
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }
    previous[b_chars.len()]
}

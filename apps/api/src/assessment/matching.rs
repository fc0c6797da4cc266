//! Text Matching — naive lexical overlap between a reference text and
//! groups of job-posting snippets.
//!
//! The tokenizer splits on whitespace only, with no punctuation
//! stripping and no stemming. That is a deliberately weak heuristic kept
//! for compatibility with the scores users already have; do not tighten
//! it here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A named bundle of posting snippets for one job title. Produced by the
/// job board collaborator, consumed only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobGroup {
    pub title: String,
    pub documents: Vec<String>,
}

/// Overlap percentage for one group, in `[0, 100]` with two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub title: String,
    pub percentage: f64,
}

/// Scores every group against the reference text, preserving input
/// order.
///
/// For each group, the score is the share of the group's unique tokens
/// that also appear in the reference: `|D ∩ C| / |D| * 100`. A group
/// with no tokens scores 0.0 rather than erroring. Both sides are
/// lowercased first; matching is case-insensitive by policy.
pub fn match_groups(reference_text: &str, groups: &[JobGroup]) -> Vec<MatchScore> {
    let reference = reference_text.to_lowercase();
    let reference_tokens: HashSet<&str> = reference.split_whitespace().collect();

    groups
        .iter()
        .map(|group| MatchScore {
            title: group.title.clone(),
            percentage: overlap_percentage(&reference_tokens, &group.documents),
        })
        .collect()
}

fn overlap_percentage(reference_tokens: &HashSet<&str>, documents: &[String]) -> f64 {
    // Snippets are joined with a space so tokens never merge across
    // snippet boundaries.
    let corpus = documents.join(" ").to_lowercase();
    let corpus_tokens: HashSet<&str> = corpus.split_whitespace().collect();

    if corpus_tokens.is_empty() {
        return 0.0;
    }

    let shared = corpus_tokens
        .iter()
        .filter(|token| reference_tokens.contains(**token))
        .count();

    round2(shared as f64 / corpus_tokens.len() as f64 * 100.0)
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

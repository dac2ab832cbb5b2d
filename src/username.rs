// 🔤 Username Normalizer - Canonical, collision-free usernames
//
// "Jastine "      → "jastine"
// "Jane  O'Neil"  → "jane-o-neil"
// "!!!"           → "1" (no word characters, numeral only)
//
// Pure functions: nothing here mutates the set of existing usernames.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Hyphen used as the only separator in canonical usernames
pub const SEPARATOR: char = '-';

/// Number of suggestions shown in a username conflict advisory
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

// ============================================================================
// CANONICAL FORM
// ============================================================================

/// One non-word character (word = letter, mark, decimal digit, connector)
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").unwrap());

/// A run of non-word characters, collapsed to one separator
static NON_WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Word runs joined by single hyphens
static CANONICAL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+(?:-\w+)*$").unwrap());

/// Steps 1-4 of normalization, without collision handling
///
/// Lowercases, maps every run of non-word characters to one hyphen and
/// trims hyphens from both ends.
pub fn canonicalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    NON_WORD_RUN
        .replace_all(&lowered, "-")
        .trim_matches(SEPARATOR)
        .to_string()
}

/// Check whether a string is already in canonical form
///
/// Canonical: non-empty, lowercase word characters separated by single
/// hyphens, no hyphen at either end.
pub fn is_canonical(s: &str) -> bool {
    CANONICAL_SHAPE.is_match(s) && s.to_lowercase() == s
}

/// Base string used by the conflict advisory
///
/// Lowercase, non-word characters replaced with hyphens and trimmed, but
/// hyphen runs are left alone.
pub fn advisory_base(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    NON_WORD
        .replace_all(&lowered, "-")
        .trim_matches(SEPARATOR)
        .to_string()
}

// ============================================================================
// COLLISION RESOLUTION
// ============================================================================

/// Candidates "base1", "base2", ... in ascending suffix order
fn numbered_candidates(base: &str) -> impl Iterator<Item = String> + '_ {
    (1u64..).map(move |suffix| format!("{}{}", base, suffix))
}

/// Normalize a raw username into one that is not in `existing`
///
/// If the canonical form is free it is returned as is, otherwise the first
/// free "base<N>" for N = 1, 2, 3, ... is returned. An empty base is never
/// free, so input with no word characters becomes "1", "2", ...
pub fn normalize(raw: &str, existing: &HashSet<String>) -> String {
    let base = canonicalize(raw);

    let taken = existing.contains(&base);
    if !base.is_empty() && !taken {
        return base;
    }

    let resolved = numbered_candidates(&base)
        .find(|candidate| !existing.contains(candidate))
        .unwrap_or_default();

    if taken {
        tracing::debug!(base = %base, resolved = %resolved, "username collision resolved");
    }

    resolved
}

/// Up to `max_suggestions` free usernames derived from `base`
///
/// Same suffix scheme as collision resolution, skipping taken names.
/// Advisory only: nothing is reserved.
pub fn suggest_alternatives(
    base: &str,
    existing: &HashSet<String>,
    max_suggestions: usize,
) -> Vec<String> {
    numbered_candidates(base)
        .filter(|candidate| !existing.contains(candidate))
        .take(max_suggestions)
        .collect()
}

// ============================================================================
// NORMALIZER FACADE
// ============================================================================

/// Stateless facade over the normalization functions
#[derive(Debug, Clone, Copy, Default)]
pub struct UsernameNormalizer;

impl UsernameNormalizer {
    pub fn new() -> Self {
        UsernameNormalizer
    }

    pub fn normalize(&self, raw: &str, existing: &HashSet<String>) -> String {
        normalize(raw, existing)
    }

    pub fn suggest_alternatives(
        &self,
        base: &str,
        existing: &HashSet<String>,
        max_suggestions: usize,
    ) -> Vec<String> {
        suggest_alternatives(base, existing, max_suggestions)
    }
}

// ============================================================================
// TESTS
// ============================================================================

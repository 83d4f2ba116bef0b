//! Character-level edit distance scoring.
//!
//! Measures how many single-character insertions, deletions and
//! substitutions separate two documents, then normalizes the count by the
//! longer document's length to land on the shared 0-100 scale. Operates on
//! Unicode scalar values, so multi-byte characters count as one edit each.

/// Levenshtein distance between two strings, counted in characters.
///
/// Uses the two-row dynamic programming formulation: O(a*b) time,
/// O(min(a, b)) additional space.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Keep the shorter string on the row axis to minimize the buffers.
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            let insertion = curr[j] + 1;
            let deletion = prev[j + 1] + 1;
            curr[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Normalized edit similarity on the 0-100 scale.
///
/// Identical strings score 100, entirely different strings approach 0.
/// Two empty documents are indistinguishable and score exactly 100; when
/// only one side is empty there is nothing to compare against and the
/// score is 0.
///
/// # Arguments
/// * `a` - First document text
/// * `b` - Second document text
#[must_use]
pub fn edit_similarity(a: &str, b: &str) -> f32 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = edit_distance(a, b);
    let similarity = (1.0 - distance as f32 / max_len as f32) * 100.0;
    similarity.max(0.0)
}

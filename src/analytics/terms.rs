// src/analytics/terms.rs

//! Search-term normalization and near-duplicate merging for the
//! `most_searched_words` leaderboard.

use std::collections::HashMap;

use crate::{
    config::{TERM_CANDIDATE_LIMIT, TERM_SIMILARITY_THRESHOLD, TOP_TERMS_LIMIT},
    models::report::TermCount,
};

/// Canonical form used for grouping: trimmed and lower-cased.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Ratcliff/Obershelp similarity: `2 * M / T`, where `M` is the number of
/// characters in matching blocks and `T` the combined length.
///
/// Two empty strings are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Sums the sizes of the matching blocks: take the longest common run, then
/// recurse on the pieces to its left and right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
/// Ties go to the earliest start in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run[j] = length of the common run ending at a[i - 1], b[j - 1]
    let mut run = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        let mut next = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] != b[j] {
                continue;
            }
            let k = run[j - blo] + 1;
            next[j - blo + 1] = k;
            if k > best_size {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_size = k;
            }
        }
        run = next;
    }

    (best_i, best_j, best_size)
}

/// Running list of accepted terms for one merge pass.
#[derive(Debug, Default)]
struct MergedTerms {
    terms: Vec<TermCount>,
}

impl MergedTerms {
    /// First-match policy: the candidate folds into the first accepted term
    /// whose similarity exceeds the threshold, not the closest one. The
    /// accepted label never changes.
    ///
    /// The comparison is always `similarity(accepted, candidate)`, accepted
    /// term first. Longest-match ties resolve toward the earlier position in
    /// the first argument, so the ratio is not symmetric and swapping the
    /// arguments can change which candidates merge.
    fn absorb(&mut self, word: String, count: u64) {
        match self
            .terms
            .iter_mut()
            .find(|term| similarity(&term.word, &word) > TERM_SIMILARITY_THRESHOLD)
        {
            Some(term) => term.count += count,
            None => self.terms.push(TermCount { word, count }),
        }
    }

    fn into_ranked(mut self, limit: usize) -> Vec<TermCount> {
        // Stable: equal counts keep acceptance order.
        self.terms.sort_by(|a, b| b.count.cmp(&a.count));
        self.terms.truncate(limit);
        self.terms
    }
}

/// Groups queries by normalized form, sorted by count descending and then
/// by the normalized string, capped at [`TERM_CANDIDATE_LIMIT`].
pub fn candidate_terms<'q>(queries: impl IntoIterator<Item = &'q str>) -> Vec<TermCount> {
    let mut groups: HashMap<String, u64> = HashMap::new();
    for query in queries {
        let word = normalize(query);
        if word.is_empty() {
            continue;
        }
        *groups.entry(word).or_insert(0) += 1;
    }

    let mut candidates: Vec<TermCount> = groups
        .into_iter()
        .map(|(word, count)| TermCount { word, count })
        .collect();
    candidates.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    candidates.truncate(TERM_CANDIDATE_LIMIT);
    candidates
}

/// Greedily merges already-ranked candidates and returns the top terms.
pub fn merge_terms(candidates: Vec<TermCount>) -> Vec<TermCount> {
    let mut merged = MergedTerms::default();
    for candidate in candidates {
        merged.absorb(candidate.word, candidate.count);
    }
    merged.into_ranked(TOP_TERMS_LIMIT)
}

/// `most_searched_words` for a set of raw queries.
pub fn most_searched<'q>(queries: impl IntoIterator<Item = &'q str>) -> Vec<TermCount> {
    merge_terms(candidate_terms(queries))
}

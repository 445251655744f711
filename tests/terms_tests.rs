// tests/terms_tests.rs

use analytics_backend::{
    analytics::terms::{candidate_terms, merge_terms, most_searched, normalize, similarity},
    models::report::TermCount,
};

fn term(word: &str, count: u64) -> TermCount {
    TermCount {
        word: word.to_string(),
        count,
    }
}

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Photo Synthesis \n"), "photo synthesis");
    assert_eq!(normalize("   "), "");
}

#[test]
fn similarity_matches_gestalt_ratio() {
    assert_eq!(similarity("dna", "dna"), 1.0);
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("abc", ""), 0.0);
    assert_eq!(similarity("abc", "xyz"), 0.0);

    // 2 * 4 / 9
    let cell = similarity("cell", "cells");
    assert!((cell - 8.0 / 9.0).abs() < 1e-9);
    assert!(cell > 0.85);

    assert!(similarity("cell", "mitochondria") < 0.85);
}

#[test]
fn similarity_counts_blocks_on_both_sides() {
    // "ab" + "de" match around the differing middle character: 2 * 4 / 10
    let ratio = similarity("abXde", "abYde");
    assert!((ratio - 0.8).abs() < 1e-9);
}

#[test]
fn cell_variants_merge_and_mitochondria_stays_alone() {
    let words = most_searched(["cell", "Cell ", "cells", "mitochondria"]);

    assert_eq!(words, vec![term("cell", 3), term("mitochondria", 1)]);
}

#[test]
fn empty_input_yields_empty_list() {
    assert!(most_searched(Vec::<&str>::new()).is_empty());
    assert!(most_searched(["", "   "]).is_empty());
}

#[test]
fn candidates_sort_by_count_then_word() {
    let candidates = candidate_terms(["zeta", "alpha", "beta", "beta", "Alpha "]);

    assert_eq!(
        candidates,
        vec![term("alpha", 2), term("beta", 2), term("zeta", 1)]
    );
}

#[test]
fn candidates_are_capped_at_fifty() {
    let queries: Vec<String> = (0..80).map(|i| format!("term-{:03}", i)).collect();
    let candidates = candidate_terms(queries.iter().map(String::as_str));

    assert_eq!(candidates.len(), 50);
    assert_eq!(candidates[0].word, "term-000");
    assert_eq!(candidates[49].word, "term-049");
}

#[test]
fn merge_uses_first_accepted_match_not_the_closest() {
    // "bcdefghij" is closer to "bcdefghijk" (0.947) than to "abcdefghi" (0.889),
    // but "abcdefghi" was accepted first and already clears the threshold.
    assert!(similarity("abcdefghi", "bcdefghijk") <= 0.85);

    let merged = merge_terms(vec![
        term("abcdefghi", 3),
        term("bcdefghijk", 2),
        term("bcdefghij", 1),
    ]);

    assert_eq!(merged, vec![term("abcdefghi", 4), term("bcdefghijk", 2)]);
}

#[test]
fn merge_compares_accepted_term_against_candidate() {
    let (first, second) = ("caccbabacbaa", "cacbabcacbbaa");
    assert!((similarity(first, second) - 0.88).abs() < 1e-9);
    assert!((similarity(second, first) - 0.48).abs() < 1e-9);

    let merged = merge_terms(vec![term(first, 5), term(second, 3)]);
    assert_eq!(merged, vec![term(first, 8)]);

    let merged = merge_terms(vec![term(second, 5), term(first, 3)]);
    assert_eq!(merged, vec![term(second, 5), term(first, 3)]);
}

#[test]
fn merged_label_is_the_first_accepted_spelling() {
    let merged = merge_terms(vec![term("cells", 5), term("cell", 9)]);

    assert_eq!(merged, vec![term("cells", 14)]);
}

#[test]
fn only_top_five_are_returned() {
    let queries = [
        "dna", "dna", "dna", "dna", "dna", "dna", "rna", "rna", "rna", "rna", "rna", "protein",
        "protein", "protein", "protein", "enzyme", "enzyme", "enzyme", "osmosis", "osmosis",
        "mitosis",
    ];
    let words = most_searched(queries);

    assert_eq!(words.len(), 5);
    assert_eq!(words[0], term("dna", 6));
    assert_eq!(words[1], term("rna", 5));
    assert!(words.iter().all(|w| w.word != "mitosis"));
}

#[test]
fn remerging_the_output_is_stable() {
    let queries = [
        "Photosynthesis", "photosynthesis ", "photosynthesis", "mitochondria", "Mitochondria",
        "cell", "cells", "Cell", "osmosis", "enzymes", "enzyme",
    ];
    let first = most_searched(queries);

    let again = most_searched(first.iter().map(|t| t.word.as_str()));

    let mut first_words: Vec<&str> = first.iter().map(|t| t.word.as_str()).collect();
    let mut again_words: Vec<&str> = again.iter().map(|t| t.word.as_str()).collect();
    first_words.sort();
    again_words.sort();
    assert_eq!(first_words, again_words);
}

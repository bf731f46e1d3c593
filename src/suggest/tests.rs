#![allow(clippy::unwrap_used)]

use super::*;

fn store(entries: &[&str]) -> SuggestionStore {
    SuggestionStore::new(entries.iter().map(|s| s.to_string()).collect())
}

// ── matching ──────────────────────────────────────────────────

#[test]
fn test_matching_case_insensitive_substring() {
    let s = store(&["Coffee at Blue Bottle", "Groceries", "coffee beans"]);
    assert_eq!(
        s.matching("COFFEE"),
        vec!["Coffee at Blue Bottle", "coffee beans"]
    );
}

#[test]
fn test_matching_short_input_returns_nothing() {
    let s = store(&["Coffee", "Groceries"]);
    assert!(s.matching("c").is_empty());
    assert!(s.matching("").is_empty());
}

#[test]
fn test_matching_capped_at_five() {
    let entries: Vec<String> = (0..10).map(|i| format!("lunch spot {i}")).collect();
    let s = SuggestionStore::new(entries);
    assert_eq!(s.matching("lunch").len(), 5);
}

// ── record ────────────────────────────────────────────────────

#[test]
fn test_record_skips_blank_and_duplicates() {
    let mut s = SuggestionStore::default();
    s.record("Lunch");
    s.record("   ");
    s.record("Lunch");
    s.record("Dinner");
    assert_eq!(s.entries(), ["Lunch", "Dinner"]);
}

#[test]
fn test_record_drops_oldest_past_cap() {
    let mut s = SuggestionStore::default();
    for i in 0..55 {
        s.record(&format!("entry {i}"));
    }
    assert_eq!(s.entries().len(), 50);
    assert_eq!(s.entries()[0], "entry 5");
    assert_eq!(s.entries()[49], "entry 54");
}

// ── keyword_hint ──────────────────────────────────────────────

#[test]
fn test_keyword_hint_strips_noise() {
    assert_eq!(keyword_hint("STARBUCKS #1234"), "starbucks");
    assert_eq!(keyword_hint("AMZN*Marketplace 8821"), "amzn marketplace");
}

#[test]
fn test_keyword_hint_takes_first_two_words() {
    assert_eq!(keyword_hint("Whole Foods Market Denver"), "whole foods");
}

#[test]
fn test_keyword_hint_empty_passthrough() {
    assert_eq!(keyword_hint(""), "");
}

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn make_txn(amount: Decimal, date: &str) -> Transaction {
    Transaction {
        id: "t1".into(),
        amount,
        description: "Test".into(),
        category: "other".into(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: None,
        created_at: None,
    }
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_abs_amount() {
    assert_eq!(make_txn(dec!(42.99), "2025-03-01").abs_amount(), dec!(42.99));
    assert_eq!(make_txn(Decimal::ZERO, "2025-03-01").abs_amount(), Decimal::ZERO);
}

#[test]
fn test_grouping_keys() {
    let txn = make_txn(dec!(5), "2025-03-09");
    assert_eq!(txn.month_key(), "2025-03");
    assert_eq!(txn.year_key(), "2025");
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_defaults_have_unique_slugs() {
    let cats = Category::defaults();
    assert_eq!(cats.len(), 9);
    let mut slugs: Vec<_> = cats.iter().map(|c| c.value.as_str()).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), 9);
    assert!(slugs.contains(&DEFAULT_CATEGORY));
}

#[test]
fn test_find_by_value_case_insensitive() {
    let cats = Category::defaults();
    assert_eq!(Category::find_by_value(&cats, "FOOD").unwrap().value, "food");
    assert!(Category::find_by_value(&cats, "missing").is_none());
}

#[test]
fn test_find_by_label() {
    let cats = Category::defaults();
    let found = Category::find_by_label(&cats, "food & dining").unwrap();
    assert_eq!(found.value, "food");
}

// ── Period ────────────────────────────────────────────────────

#[test]
fn test_period_key_roundtrip() {
    for key in ["01_2025", "12_1999", "2025"] {
        let period = Period::from_key(key).unwrap();
        assert_eq!(period.key(), key, "Roundtrip failed for {key}");
    }
}

#[test]
fn test_period_from_key_rejects_malformed() {
    for key in ["", "13_2025", "0_2025", "xx_2025", "01_25", "202", "20255", "abcd"] {
        assert!(Period::from_key(key).is_none(), "Accepted bad key {key}");
    }
}

#[test]
fn test_period_unpadded_month_normalizes() {
    assert_eq!(Period::from_key("7_2025").unwrap().key(), "07_2025");
}

#[test]
fn test_period_contains_boundaries() {
    let march = Period::from_key("03_2025").unwrap();
    let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    assert!(march.contains(d("2025-03-01")));
    assert!(march.contains(d("2025-03-31")));
    assert!(!march.contains(d("2025-04-01")));
    assert!(!march.contains(d("2025-02-28")));
    assert!(!march.contains(d("2024-03-15")));

    let yr = Period::from_key("2025").unwrap();
    assert!(yr.contains(d("2025-01-01")));
    assert!(yr.contains(d("2025-12-31")));
    assert!(!yr.contains(d("2026-01-01")));
}

#[test]
fn test_period_previous() {
    assert_eq!(
        Period::from_key("03_2025").unwrap().previous().key(),
        "02_2025"
    );
    assert_eq!(
        Period::from_key("01_2025").unwrap().previous().key(),
        "12_2024"
    );
    assert_eq!(Period::from_key("2025").unwrap().previous().key(), "2024");
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_total() {
    let mut budget = Budget::new(Period::from_key("03_2025").unwrap());
    budget.category_budgets.insert("food".into(), dec!(300));
    budget.category_budgets.insert("travel".into(), dec!(120.50));
    assert_eq!(budget.total(), dec!(420.50));
}

// ── ParsedInput ───────────────────────────────────────────────

#[test]
fn test_parsed_input_is_empty() {
    assert!(ParsedInput::default().is_empty());
    let parsed = ParsedInput {
        category: Some("other".into()),
        ..Default::default()
    };
    assert!(!parsed.is_empty());
}

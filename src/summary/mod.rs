use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Period, Transaction};

/// Budget-vs-actual rollup for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    /// `total_budget - total_spent`, exact.
    pub balance: Decimal,
    pub category_breakdown: BTreeMap<String, CategorySpend>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Rounded share of budget spent. Deliberately uncapped: 100+ means
    /// over budget. 0 when no budget is set for the category.
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Approaching,
    OverBudget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub percent: u32,
    pub severity: AlertSeverity,
}

/// Headline numbers for one period, fed to the summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthStats {
    pub total_spent: Decimal,
    pub transaction_count: usize,
    pub average: Decimal,
    /// Highest-spend category and its total, if any spend exists.
    pub top_category: Option<(String, Decimal)>,
}

/// Compute spend against budget for the given period. The breakdown covers
/// the union of budgeted categories and categories with spend in the
/// period, so every filtered transaction is accounted for.
pub fn summarize(
    transactions: &[Transaction],
    category_budgets: &BTreeMap<String, Decimal>,
    period: Period,
) -> BudgetSummary {
    let total_budget: Decimal = category_budgets.values().copied().sum();

    let mut breakdown: BTreeMap<String, CategorySpend> = category_budgets
        .iter()
        .map(|(cat, &budget)| {
            (
                cat.clone(),
                CategorySpend {
                    budget,
                    spent: Decimal::ZERO,
                    remaining: budget,
                    percentage: 0,
                },
            )
        })
        .collect();

    let mut total_spent = Decimal::ZERO;
    for t in transactions.iter().filter(|t| period.contains(t.date)) {
        total_spent += t.abs_amount();
        let entry = breakdown
            .entry(t.category.clone())
            .or_insert_with(|| CategorySpend {
                budget: Decimal::ZERO,
                spent: Decimal::ZERO,
                remaining: Decimal::ZERO,
                percentage: 0,
            });
        entry.spent += t.abs_amount();
    }

    for spend in breakdown.values_mut() {
        spend.remaining = spend.budget - spend.spent;
        spend.percentage = percentage_of(spend.spent, spend.budget);
    }

    BudgetSummary {
        total_budget,
        total_spent,
        balance: total_budget - total_spent,
        category_breakdown: breakdown,
    }
}

/// Overall budget health for the period: the rounded share of budget still
/// unspent, clamped to `0..=100`. Distinct from [`CategorySpend::percentage`],
/// which measures spend and is uncapped. 0 when no budget is set.
pub fn health_percent(
    transactions: &[Transaction],
    category_budgets: &BTreeMap<String, Decimal>,
    period: Period,
) -> u8 {
    let total_budget: Decimal = category_budgets.values().copied().sum();
    if total_budget <= Decimal::ZERO {
        return 0;
    }
    let total_spent: Decimal = transactions
        .iter()
        .filter(|t| period.contains(t.date))
        .map(Transaction::abs_amount)
        .sum();
    let percent = ((Decimal::ONE - total_spent / total_budget) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    percent
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .to_u8()
        .unwrap_or(0)
}

/// Categories at or past the alert threshold for the period. A category
/// alerts at 80% of its budget and escalates to over-budget at 100%.
pub fn alerts(
    transactions: &[Transaction],
    category_budgets: &BTreeMap<String, Decimal>,
    period: Period,
) -> Vec<BudgetAlert> {
    summarize(transactions, category_budgets, period)
        .category_breakdown
        .into_iter()
        .filter(|(_, s)| s.budget > Decimal::ZERO && s.percentage >= 80)
        .map(|(category, s)| BudgetAlert {
            category,
            budget: s.budget,
            spent: s.spent,
            percent: s.percentage,
            severity: if s.percentage >= 100 {
                AlertSeverity::OverBudget
            } else {
                AlertSeverity::Approaching
            },
        })
        .collect()
}

/// Spend statistics for the period: total, count, per-transaction average
/// and top category. Average is 0 when there are no transactions.
pub fn month_stats(transactions: &[Transaction], period: Period) -> MonthStats {
    let mut total_spent = Decimal::ZERO;
    let mut count = 0usize;
    let mut per_category: BTreeMap<&str, Decimal> = BTreeMap::new();

    for t in transactions.iter().filter(|t| period.contains(t.date)) {
        total_spent += t.abs_amount();
        count += 1;
        *per_category.entry(t.category.as_str()).or_default() += t.abs_amount();
    }

    let average = if count > 0 {
        total_spent / Decimal::from(count as u64)
    } else {
        Decimal::ZERO
    };

    let mut top_category: Option<(String, Decimal)> = None;
    for (cat, amount) in per_category {
        let beats = top_category
            .as_ref()
            .map(|(_, best)| amount > *best)
            .unwrap_or(true);
        if beats {
            top_category = Some((cat.to_string(), amount));
        }
    }

    MonthStats {
        total_spent,
        transaction_count: count,
        average,
        top_category,
    }
}

fn percentage_of(spent: Decimal, budget: Decimal) -> u32 {
    if budget <= Decimal::ZERO {
        return 0;
    }
    (spent / budget * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(u32::MAX)
}

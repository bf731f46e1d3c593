use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Budget bucket identifier: `"MM_YYYY"` for monthly, `"YYYY"` for yearly.
/// The two namespaces never overlap, so monthly and yearly budgets stay
/// independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Monthly { month: u32, year: i32 },
    Yearly { year: i32 },
}

impl Period {
    /// Parse a period key. Malformed keys are `None`, never an error.
    pub fn from_key(key: &str) -> Option<Period> {
        let key = key.trim();
        if let Some((m, y)) = key.split_once('_') {
            if y.len() != 4 {
                return None;
            }
            let month: u32 = m.parse().ok()?;
            let year: i32 = y.parse().ok()?;
            if !(1..=12).contains(&month) {
                return None;
            }
            Some(Period::Monthly { month, year })
        } else {
            if key.len() != 4 {
                return None;
            }
            let year: i32 = key.parse().ok()?;
            Some(Period::Yearly { year })
        }
    }

    pub fn monthly(month: u32, year: i32) -> Option<Period> {
        (1..=12).contains(&month).then_some(Period::Monthly { month, year })
    }

    pub fn key(&self) -> String {
        match self {
            Period::Monthly { month, year } => format!("{month:02}_{year}"),
            Period::Yearly { year } => format!("{year}"),
        }
    }

    /// Whether a calendar date falls inside this period. Month-end dates are
    /// included; the next period's first day is not.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Period::Monthly { month, year } => date.month() == month && date.year() == year,
            Period::Yearly { year } => date.year() == year,
        }
    }

    /// The immediately preceding period of the same kind.
    pub fn previous(&self) -> Period {
        match *self {
            Period::Monthly { month: 1, year } => Period::Monthly {
                month: 12,
                year: year - 1,
            },
            Period::Monthly { month, year } => Period::Monthly {
                month: month - 1,
                year,
            },
            Period::Yearly { year } => Period::Yearly { year: year - 1 },
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub period: Period,
    /// Category slug -> budgeted amount (non-negative).
    pub category_budgets: BTreeMap<String, Decimal>,
    pub income: Option<Decimal>,
    /// Free-text goals, in user order.
    pub goals: Vec<String>,
}

impl Budget {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            category_budgets: BTreeMap::new(),
            income: None,
            goals: Vec::new(),
        }
    }

    pub fn total(&self) -> Decimal {
        self.category_budgets.values().copied().sum()
    }
}

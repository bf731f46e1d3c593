use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Opaque unique id, assigned by the caller (or the CSV importer).
    pub id: String,
    /// Signed amount; refunds are negative. Budget math uses
    /// [`abs_amount`](Self::abs_amount).
    pub amount: Decimal,
    pub description: String,
    /// Slug into the active category set.
    pub category: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub created_at: Option<String>,
}

impl Transaction {
    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// `"YYYY-MM"` grouping key.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// `"YYYY"` grouping key.
    pub fn year_key(&self) -> String {
        self.date.format("%Y").to_string()
    }
}

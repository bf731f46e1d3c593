use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

/// Structured result of parsing free-text input. An absent field means the
/// parser found no evidence for it, not zero; callers merge with existing
/// form state and never overwrite a field with an absence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInput {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// Unlike the other fields, this is always `Some` in a successful parse:
    /// unmatched input falls back to the `"other"` category.
    pub category: Option<String>,
}

impl ParsedInput {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.category.is_none()
    }
}

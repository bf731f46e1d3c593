use anyhow::{Context, Result};
use chrono::{Days, Local, NaiveDate, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::categorize;
use crate::models::{Category, ParsedInput, DEFAULT_CATEGORY};

/// Natural-language transaction parser. Patterns are compiled once; `parse`
/// itself is a pure function of its inputs and the reference date.
pub struct InputParser {
    amount_re: Regex,
    numeric_date_re: Regex,
    day_month_re: Regex,
    month_day_re: Regex,
    at_time_re: Regex,
    bare_time_re: Regex,
    filler_re: Regex,
}

impl InputParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // First decimal number anywhere, up to 2 fraction digits
            amount_re: compile(r"\d+(?:\.\d{1,2})?")?,
            // D-M-Y / Y-M-D with "-" or "/" separators
            numeric_date_re: compile(r"(\d{1,4})[/-](\d{1,2})[/-](\d{1,4})")?,
            // "3rd of July 2025", "3 July 2025"
            day_month_re: compile(r"(\d{1,2})(?:st|nd|rd|th)?\s*(?:of)?\s*([a-zA-Z]+)\s*(\d{4})")?,
            // "July 3, 2025", "July 3rd 2025"
            month_day_re: compile(r"([a-zA-Z]+)\s*(\d{1,2})(?:st|nd|rd|th)?,?\s*(\d{4})")?,
            at_time_re: compile(r"at\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)?")?,
            bare_time_re: compile(r"\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b")?,
            filler_re: compile(r"spent|paid|bought|on|for|at|add|\s+")?,
        })
    }

    /// Parse free text against the caller's category snapshot, resolving
    /// relative date keywords against the local calendar date.
    pub fn parse(&self, input: &str, categories: &[Category]) -> Option<ParsedInput> {
        self.parse_on(input, categories, Local::now().date_naive())
    }

    /// Like [`parse`](Self::parse) but with an explicit "today", so results
    /// are reproducible.
    pub fn parse_on(
        &self,
        input: &str,
        categories: &[Category],
        today: NaiveDate,
    ) -> Option<ParsedInput> {
        let text = input.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        let mut result = ParsedInput::default();
        // Matched substrings, stripped from the description in this order
        let mut spans: Vec<String> = Vec::new();

        if let Some(m) = self.amount_re.find(&text) {
            if let Ok(amount) = Decimal::from_str(m.as_str()) {
                result.amount = Some(amount);
                spans.push(m.as_str().to_string());
            }
        }

        if let Some((date, raw)) = self.extract_date(&text, today) {
            result.date = Some(date);
            spans.push(raw);
        }

        if let Some((time, raw)) = self.extract_time(&text) {
            result.time = Some(time);
            spans.push(raw);
        }

        let category = match categorize::resolve_match(&text, categories) {
            Some(m) => {
                spans.push(m.matched);
                m.slug
            }
            None => DEFAULT_CATEGORY.to_string(),
        };

        let mut desc = text;
        for span in &spans {
            if let Some(pos) = desc.find(span.as_str()) {
                desc.replace_range(pos..pos + span.len(), " ");
            }
        }
        let desc = self.filler_re.replace_all(&desc, " ");
        let desc = desc.split_whitespace().collect::<Vec<_>>().join(" ");
        if !desc.is_empty() {
            result.description = Some(desc);
        }

        // The fallback category counts as signal, so in practice only
        // empty input produces no result.
        result.category = Some(category);
        Some(result)
    }

    /// Date cascade: relative keywords, then numeric patterns, then natural
    /// language. Returns the date plus the raw matched substring.
    fn extract_date(&self, text: &str, today: NaiveDate) -> Option<(NaiveDate, String)> {
        if text.contains("yesterday") {
            let d = today.checked_sub_days(Days::new(1))?;
            return Some((d, "yesterday".to_string()));
        }
        if text.contains("today") {
            return Some((today, "today".to_string()));
        }
        if text.contains("last week") {
            let d = today.checked_sub_days(Days::new(7))?;
            return Some((d, "last week".to_string()));
        }

        if let Some(caps) = self.numeric_date_re.captures(text) {
            let first: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            // A leading value past 1900 can only be a year, so the groups
            // are read year-month-day instead of day-month-year. Ambiguous
            // all-small inputs like 03-04-2025 stay day-first.
            let date = if first > 1900 {
                let day: u32 = caps[3].parse().ok()?;
                NaiveDate::from_ymd_opt(first, month, day)
            } else {
                let year: i32 = match caps[3].len() {
                    2 => 2000 + caps[3].parse::<i32>().ok()?,
                    4 => caps[3].parse().ok()?,
                    _ => return None,
                };
                NaiveDate::from_ymd_opt(year, month, first as u32)
            };
            return date.map(|d| (d, caps[0].to_string()));
        }

        if let Some(caps) = self.day_month_re.captures(text) {
            let day: u32 = caps[1].parse().ok()?;
            let month = month_number(&caps[2])?;
            let year: i32 = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day).map(|d| (d, caps[0].to_string()));
        }

        if let Some(caps) = self.month_day_re.captures(text) {
            let month = month_number(&caps[1])?;
            let day: u32 = caps[2].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day).map(|d| (d, caps[0].to_string()));
        }

        None
    }

    /// "at H[:MM] [am|pm]" preferred, bare "H[:MM]am|pm" as fallback.
    /// Out-of-range clock values count as not detected.
    fn extract_time(&self, text: &str) -> Option<(NaiveTime, String)> {
        let caps = self
            .at_time_re
            .captures(text)
            .or_else(|| self.bare_time_re.captures(text))?;

        let mut hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        match caps.get(3).map(|m| m.as_str()) {
            Some("pm") if hour < 12 => hour += 12,
            Some("am") if hour == 12 => hour = 0,
            _ => {}
        }

        NaiveTime::from_hms_opt(hour, minute, 0).map(|t| (t, caps[0].to_string()))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("Invalid parser pattern: {pattern}"))
}

/// Month from a lowercase full name or 3-letter abbreviation.
fn month_number(name: &str) -> Option<u32> {
    let n = match name {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sept" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(n)
}

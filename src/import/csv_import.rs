use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use super::{detect_bank_format, BankProfile};
use crate::categorize;
use crate::models::{Category, Transaction};

/// A row the importer could not turn into a transaction, with every
/// problem found on it. Row numbers are 1-based and count the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub errors: Vec<String>,
}

/// Outcome of an import: the transactions that parsed, newest first,
/// plus the rows that did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub transactions: Vec<Transaction>,
    pub rejected: Vec<RowError>,
}

pub struct CsvImporter;

impl CsvImporter {
    pub fn from_path(path: &Path, categories: &[Category]) -> Result<ImportReport> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open CSV file '{}'", path.display()))?;
        Self::from_reader(file, categories)
    }

    /// Import transactions from CSV data. The bank layout is detected from
    /// the header row; bad rows are collected rather than failing the whole
    /// file. Rows with a blank category column fall back to keyword
    /// resolution against `categories`.
    pub fn from_reader<R: Read>(reader: R, categories: &[Category]) -> Result<ImportReport> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .context("Failed to read CSV header row")?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();
        let profile = detect_bank_format(&headers);

        let mut report = ImportReport::default();
        for (i, result) in rdr.records().enumerate() {
            // Row 1 is the header
            let row_number = i + 2;
            let record = result
                .with_context(|| format!("Failed to read CSV record at row {row_number}"))?;
            let row: Vec<String> = record.iter().map(|s| s.trim().to_string()).collect();

            match convert_row(&headers, &row, &profile, categories) {
                Ok(txn) => report.transactions.push(txn),
                Err(errors) => report.rejected.push(RowError {
                    row: row_number,
                    errors,
                }),
            }
        }

        report.transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(report)
    }
}

fn convert_row(
    headers: &[String],
    row: &[String],
    profile: &BankProfile,
    categories: &[Category],
) -> std::result::Result<Transaction, Vec<String>> {
    let mut errors = Vec::new();

    let date = match field(headers, row, &[profile.date_header, "Date", "Transaction Date"]) {
        Some(raw) => {
            let parsed = parse_date(raw);
            if parsed.is_none() {
                errors.push(format!("Invalid date format: '{raw}'"));
            }
            parsed
        }
        None => {
            errors.push("Date is required".into());
            None
        }
    };

    let amount = match field(
        headers,
        row,
        &[profile.amount_header, "Amount", "Debit", "Withdrawal Amt."],
    ) {
        Some(raw) => {
            let parsed = parse_amount(raw);
            if parsed.is_none() {
                errors.push(format!("Invalid amount: '{raw}'"));
            }
            parsed
        }
        None => {
            errors.push("Amount is required".into());
            None
        }
    };

    let description = field(
        headers,
        row,
        &[
            profile.description_header,
            "Description",
            "Narration",
            "Transaction Remarks",
        ],
    )
    .unwrap_or("")
    .to_string();
    if description.is_empty() {
        errors.push("Description is required".into());
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    let (Some(date), Some(amount)) = (date, amount) else {
        return Err(vec!["Row could not be parsed".into()]);
    };

    let category = match field(headers, row, &[profile.category_header, "Category"]) {
        Some(c) => c.to_lowercase(),
        None => categorize::resolve(&description, categories),
    };
    let time = field(headers, row, &["Time"]).and_then(parse_time);

    Ok(Transaction {
        id: compute_id(date, &description, amount),
        amount,
        description,
        category,
        date,
        time,
        created_at: None,
    })
}

/// Look up a row value by header name, trying each candidate in order.
/// Blank cells are treated as missing so later candidates can supply
/// the value.
fn field<'a>(headers: &[String], row: &'a [String], names: &[&str]) -> Option<&'a str> {
    for name in names {
        let found = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .filter(|v| !v.is_empty());
        if found.is_some() {
            return found;
        }
    }
    None
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    // Day-first formats before month-first: bank exports here are
    // predominantly dd/mm
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok().map(|d| d.abs())
}

/// Stable, deterministic id for deduplication across re-imports.
/// FNV-1a rather than DefaultHasher, which can change between Rust
/// releases.
fn compute_id(date: NaiveDate, description: &str, amount: Decimal) -> String {
    let input = format!("{date}|{description}|{amount}");
    let hash = fnv1a(input.as_bytes());
    format!("{hash:016x}")
}

fn fnv1a(data: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for &byte in data {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, Timelike};
use rust_decimal::Decimal;

use crate::models::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Extra inputs for the windowed granularities: `Hour` needs a calendar day,
/// `Week` needs a Monday-anchored week start. When the required option is
/// missing those granularities produce no buckets.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupOptions {
    pub selected_date: Option<NaiveDate>,
    pub selected_week_start: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub amount: Decimal,
}

/// A bucket paired with the matching bucket of the immediately preceding
/// period. Pairing is by explicit key (hour label, weekday offset, shifted
/// calendar label), never by array position.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketPair {
    pub label: String,
    pub amount: Decimal,
    pub previous: Decimal,
}

/// Bucket transactions by the given granularity.
///
/// `Hour` yields all 24 buckets `"00".."23"` zero-filled for the selected
/// date; `Week` yields 7 zero-filled day buckets from the week start. Both
/// sum the signed `amount`. `Day`/`Month`/`Year` group by date key with no
/// zero-fill, in first-seen order — except `Month`, which is sorted
/// ascending by its `"YYYY-MM"` label.
pub fn group_by(
    transactions: &[Transaction],
    granularity: Granularity,
    options: &GroupOptions,
) -> Vec<Bucket> {
    match granularity {
        Granularity::Hour => options
            .selected_date
            .map(|d| by_hour(transactions, d))
            .unwrap_or_default(),
        Granularity::Week => options
            .selected_week_start
            .map(|w| by_week(transactions, w))
            .unwrap_or_default(),
        Granularity::Day => by_key(transactions, day_key, false),
        Granularity::Month => by_key(transactions, Transaction::month_key, true),
        Granularity::Year => by_key(transactions, Transaction::year_key, false),
    }
}

/// Bucket the current period and pair each bucket with its counterpart in
/// the preceding period (previous day for `Hour`, previous 7-day window for
/// `Week`, preceding calendar day/month/year otherwise). Missing
/// counterparts read as zero.
pub fn compare_previous(
    transactions: &[Transaction],
    granularity: Granularity,
    options: &GroupOptions,
) -> Vec<BucketPair> {
    match granularity {
        Granularity::Hour => {
            let Some(day) = options.selected_date else {
                return Vec::new();
            };
            let previous = day
                .checked_sub_days(Days::new(1))
                .map(|d| by_hour(transactions, d))
                .unwrap_or_default();
            by_hour(transactions, day)
                .into_iter()
                .map(|b| {
                    let prev = lookup(&previous, &b.label);
                    pair(b, prev)
                })
                .collect()
        }
        Granularity::Week => {
            let Some(start) = options.selected_week_start else {
                return Vec::new();
            };
            let previous = start
                .checked_sub_days(Days::new(7))
                .map(|s| by_week(transactions, s))
                .unwrap_or_default();
            by_week(transactions, start)
                .into_iter()
                .map(|b| {
                    // Key on the weekday offset, so Monday lines up with
                    // Monday even though the date labels differ
                    let prev = weekday_offset(&b.label)
                        .and_then(|wd| {
                            previous
                                .iter()
                                .find(|p| weekday_offset(&p.label) == Some(wd))
                        })
                        .map(|p| p.amount)
                        .unwrap_or_default();
                    pair(b, prev)
                })
                .collect()
        }
        Granularity::Day => keyed_pairs(transactions, granularity, options, previous_day_label),
        Granularity::Month => keyed_pairs(transactions, granularity, options, previous_month_label),
        Granularity::Year => keyed_pairs(transactions, granularity, options, previous_year_label),
    }
}

fn by_hour(transactions: &[Transaction], day: NaiveDate) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = (0..24)
        .map(|h| Bucket {
            label: format!("{h:02}"),
            amount: Decimal::ZERO,
        })
        .collect();
    for t in transactions {
        if t.date != day {
            continue;
        }
        if let Some(time) = t.time {
            buckets[time.hour() as usize].amount += t.amount;
        }
    }
    buckets
}

fn by_week(transactions: &[Transaction], week_start: NaiveDate) -> Vec<Bucket> {
    let days: Vec<NaiveDate> = (0..7)
        .filter_map(|i| week_start.checked_add_days(Days::new(i)))
        .collect();
    let mut buckets: Vec<Bucket> = days
        .iter()
        .map(|d| Bucket {
            label: d.format("%Y-%m-%d").to_string(),
            amount: Decimal::ZERO,
        })
        .collect();
    for t in transactions {
        if let Some(i) = days.iter().position(|d| *d == t.date) {
            buckets[i].amount += t.amount;
        }
    }
    buckets
}

fn by_key<F>(transactions: &[Transaction], key_fn: F, sorted: bool) -> Vec<Bucket>
where
    F: Fn(&Transaction) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();
    for t in transactions {
        let key = key_fn(t);
        match index.get(&key) {
            Some(&i) => buckets[i].amount += t.amount,
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(Bucket {
                    label: key,
                    amount: t.amount,
                });
            }
        }
    }
    if sorted {
        buckets.sort_by(|a, b| a.label.cmp(&b.label));
    }
    buckets
}

fn keyed_pairs<F>(
    transactions: &[Transaction],
    granularity: Granularity,
    options: &GroupOptions,
    previous_label: F,
) -> Vec<BucketPair>
where
    F: Fn(&str) -> Option<String>,
{
    let buckets = group_by(transactions, granularity, options);
    let totals: HashMap<&str, Decimal> = buckets
        .iter()
        .map(|b| (b.label.as_str(), b.amount))
        .collect();
    buckets
        .iter()
        .map(|b| {
            let prev = previous_label(&b.label)
                .and_then(|l| totals.get(l.as_str()).copied())
                .unwrap_or_default();
            pair(b.clone(), prev)
        })
        .collect()
}

fn pair(bucket: Bucket, previous: Decimal) -> BucketPair {
    BucketPair {
        label: bucket.label,
        amount: bucket.amount,
        previous,
    }
}

fn lookup(buckets: &[Bucket], label: &str) -> Decimal {
    buckets
        .iter()
        .find(|b| b.label == label)
        .map(|b| b.amount)
        .unwrap_or_default()
}

fn day_key(t: &Transaction) -> String {
    t.date.format("%Y-%m-%d").to_string()
}

fn weekday_offset(label: &str) -> Option<u32> {
    NaiveDate::parse_from_str(label, "%Y-%m-%d")
        .ok()
        .map(|d| d.weekday().num_days_from_monday())
}

fn previous_day_label(label: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(label, "%Y-%m-%d").ok()?;
    Some(
        date.checked_sub_days(Days::new(1))?
            .format("%Y-%m-%d")
            .to_string(),
    )
}

fn previous_month_label(label: &str) -> Option<String> {
    let (y, m) = label.split_once('-')?;
    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    Some(match month {
        1 => format!("{}-12", year - 1),
        _ => format!("{year}-{:02}", month - 1),
    })
}

fn previous_year_label(label: &str) -> Option<String> {
    let year: i32 = label.parse().ok()?;
    Some((year - 1).to_string())
}

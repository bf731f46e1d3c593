#![allow(clippy::unwrap_used)]

use super::*;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_detects_hdfc_by_withdrawal_column() {
    let h = headers(&["Transaction Date", "Transaction Remarks", "Withdrawal Amt."]);
    let profile = detect_bank_format(&h);
    assert_eq!(profile.name, "HDFC");
    assert_eq!(profile.amount_header, "Withdrawal Amt.");
}

#[test]
fn test_detects_sbi_by_narration_column() {
    let h = headers(&["Date", "Narration", "Amount"]);
    let profile = detect_bank_format(&h);
    assert_eq!(profile.name, "SBI");
    assert_eq!(profile.description_header, "Narration");
}

#[test]
fn test_detects_axis_despite_debit_substring() {
    // "Debit Amount" must not be swallowed by the ICICI "debit" check
    let h = headers(&["Transaction Date", "Transaction Remarks", "Debit Amount"]);
    let profile = detect_bank_format(&h);
    assert_eq!(profile.name, "Axis");
}

#[test]
fn test_detects_icici_by_debit_column() {
    let h = headers(&["Transaction Date", "Transaction Remarks", "Debit"]);
    let profile = detect_bank_format(&h);
    assert_eq!(profile.name, "ICICI");
}

#[test]
fn test_detects_by_bank_name_in_headers() {
    let h = headers(&["HDFC Date", "Remarks", "Amount"]);
    assert_eq!(detect_bank_format(&h).name, "HDFC");
}

#[test]
fn test_unknown_layout_falls_back_to_generic() {
    let h = headers(&["Date", "Description", "Amount", "Category"]);
    let profile = detect_bank_format(&h);
    assert_eq!(profile.name, "Generic");
    assert_eq!(profile.date_header, "Date");
    assert_eq!(profile.amount_header, "Amount");
}

/// Column mapping for a known bank CSV layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankProfile {
    pub name: &'static str,
    pub date_header: &'static str,
    pub amount_header: &'static str,
    pub description_header: &'static str,
    pub category_header: &'static str,
}

const GENERIC: BankProfile = BankProfile {
    name: "Generic",
    date_header: "Date",
    amount_header: "Amount",
    description_header: "Description",
    category_header: "Category",
};

/// Known bank CSV fingerprints, tested against the joined lowercase header
/// row. Unrecognized layouts get the generic mapping, whose lookups fall
/// back to common header names anyway.
pub fn detect_bank_format(headers: &[String]) -> BankProfile {
    let joined = headers
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.contains("hdfc") || joined.contains("withdrawal amt") {
        return BankProfile {
            name: "HDFC",
            date_header: "Transaction Date",
            amount_header: "Withdrawal Amt.",
            description_header: "Transaction Remarks",
            category_header: "Category",
        };
    }

    if joined.contains("sbi") || joined.contains("narration") {
        return BankProfile {
            name: "SBI",
            date_header: "Date",
            amount_header: "Amount",
            description_header: "Narration",
            category_header: "Category",
        };
    }

    // "debit amount" before the bare "debit" check, or Axis files would
    // always detect as ICICI
    if joined.contains("axis") || joined.contains("debit amount") {
        return BankProfile {
            name: "Axis",
            date_header: "Transaction Date",
            amount_header: "Debit Amount",
            description_header: "Transaction Remarks",
            category_header: "Category",
        };
    }

    if joined.contains("icici") || joined.contains("debit") {
        return BankProfile {
            name: "ICICI",
            date_header: "Transaction Date",
            amount_header: "Debit",
            description_header: "Transaction Remarks",
            category_header: "Category",
        };
    }

    GENERIC
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;

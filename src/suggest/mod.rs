//! Description autocomplete from previously entered transactions.

/// Rolling store of past transaction descriptions, most recent last.
/// Capped at 50 entries; duplicates are kept once.
#[derive(Debug, Clone, Default)]
pub struct SuggestionStore {
    entries: Vec<String>,
}

const MAX_ENTRIES: usize = 50;
const MAX_MATCHES: usize = 5;
const MIN_INPUT_LEN: usize = 2;

impl SuggestionStore {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Stored descriptions containing `input`, case-insensitive, capped at
    /// five. Inputs under two characters match nothing rather than
    /// everything.
    pub fn matching(&self, input: &str) -> Vec<&str> {
        if input.len() < MIN_INPUT_LEN {
            return Vec::new();
        }
        let needle = input.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.to_lowercase().contains(&needle))
            .take(MAX_MATCHES)
            .map(String::as_str)
            .collect()
    }

    /// Remember a description for future autocomplete. Blank and duplicate
    /// entries are ignored; when full, the oldest entry is dropped.
    pub fn record(&mut self, description: &str) {
        let description = description.trim();
        if description.is_empty() || self.entries.iter().any(|e| e == description) {
            return;
        }
        self.entries.push(description.to_string());
        if self.entries.len() > MAX_ENTRIES {
            let overflow = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..overflow);
        }
    }
}

/// Distill a raw description down to a likely merchant name, for seeding
/// keyword rules from imported bank statements.
pub fn keyword_hint(description: &str) -> String {
    let cleaned = description
        .to_uppercase()
        .replace(|c: char| c.is_ascii_digit(), "")
        .replace('#', "")
        .replace('*', " ")
        .trim()
        .to_string();

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let pattern = if words.len() >= 2 {
        format!("{} {}", words[0], words[1])
    } else if !words.is_empty() {
        words[0].to_string()
    } else {
        description.to_string()
    };

    pattern.to_lowercase()
}

#[cfg(test)]
mod tests;

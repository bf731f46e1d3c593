use crate::models::{Category, DEFAULT_CATEGORY};

/// Fixed fallback table used when no runtime category matches. First rule
/// wins, keywords tested as case-insensitive substrings.
static KEYWORD_RULES: &[(&str, &[&str])] = &[
    ("food", &["food", "grocery", "restaurant"]),
    ("transport", &["transport", "bus", "train", "uber", "taxi", "cab"]),
    ("shopping", &["shop", "clothes", "amazon", "mall"]),
    ("entertainment", &["entertainment", "movie", "cinema", "netflix"]),
    ("health", &["health", "doctor", "pharmacy", "medicine"]),
    ("bills", &["bill", "utility", "electric", "water", "gas bill"]),
    ("education", &["education", "school", "college", "course"]),
    ("travel", &["travel", "flight", "hotel", "trip"]),
];

/// A resolved category together with the exact text that matched, so the
/// parser can strip it out of the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryMatch {
    pub(crate) slug: String,
    pub(crate) matched: String,
}

/// Map a description to a category slug. Tries the caller's category list
/// first (label, then slug, first category wins), then the keyword table,
/// and falls back to `"other"` — never absent.
pub fn resolve(description: &str, categories: &[Category]) -> String {
    resolve_match(description, categories)
        .map(|m| m.slug)
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

pub(crate) fn resolve_match(description: &str, categories: &[Category]) -> Option<CategoryMatch> {
    let text = description.to_lowercase();

    for cat in categories {
        let label = cat.label.to_lowercase();
        if !label.is_empty() && text.contains(&label) {
            return Some(CategoryMatch {
                slug: cat.value.clone(),
                matched: label,
            });
        }
        let value = cat.value.to_lowercase();
        if !value.is_empty() && text.contains(&value) {
            return Some(CategoryMatch {
                slug: cat.value.clone(),
                matched: value,
            });
        }
    }

    for (slug, keywords) in KEYWORD_RULES {
        for keyword in *keywords {
            if text.contains(keyword) {
                return Some(CategoryMatch {
                    slug: (*slug).to_string(),
                    matched: (*keyword).to_string(),
                });
            }
        }
    }

    None
}

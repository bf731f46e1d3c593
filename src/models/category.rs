#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique lowercase slug, distinct from the display label.
    pub value: String,
    pub label: String,
    pub emoji: String,
    pub color: String,
}

/// Slug assigned when nothing else matches.
pub const DEFAULT_CATEGORY: &str = "other";

impl Category {
    pub fn new(value: &str, label: &str, emoji: &str, color: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            emoji: emoji.to_string(),
            color: color.to_string(),
        }
    }

    /// The stock category set shipped with the tracker. Callers may extend
    /// or replace it at runtime; slugs must stay unique.
    pub fn defaults() -> Vec<Category> {
        vec![
            Category::new("food", "Food & Dining", "🍔", "red"),
            Category::new("transport", "Transportation", "🚗", "blue"),
            Category::new("shopping", "Shopping", "🛍️", "purple"),
            Category::new("entertainment", "Entertainment", "🎬", "green"),
            Category::new("health", "Health & Fitness", "💊", "pink"),
            Category::new("bills", "Bills & Utilities", "⚡", "yellow"),
            Category::new("education", "Education", "📚", "indigo"),
            Category::new("travel", "Travel", "✈️", "teal"),
            Category::new("other", "Other", "📦", "gray"),
        ]
    }

    /// Find a category by slug (case-insensitive) in a slice.
    pub fn find_by_value<'a>(categories: &'a [Category], value: &str) -> Option<&'a Category> {
        let lower = value.to_lowercase();
        categories.iter().find(|c| c.value.to_lowercase() == lower)
    }

    /// Find a category by display label (case-insensitive) in a slice.
    pub fn find_by_label<'a>(categories: &'a [Category], label: &str) -> Option<&'a Category> {
        let lower = label.to_lowercase();
        categories.iter().find(|c| c.label.to_lowercase() == lower)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji, self.label)
    }
}

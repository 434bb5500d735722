//! Domain types representing spending categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display metadata attached to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub category: Category,
    pub label: &'static str,
    pub color: &'static str,
    pub display_order: u8,
}

/// Single source of truth for labels, colours and ordering. The sentinel
/// `Empty` entry is last and never takes part in aggregation.
const CATEGORY_TABLE: [CategoryMeta; 6] = [
    CategoryMeta {
        category: Category::Food,
        label: "Alimentação",
        color: "#3B82F6",
        display_order: 0,
    },
    CategoryMeta {
        category: Category::Transport,
        label: "Transporte",
        color: "#60A5FA",
        display_order: 1,
    },
    CategoryMeta {
        category: Category::Leisure,
        label: "Lazer",
        color: "#93C5FD",
        display_order: 2,
    },
    CategoryMeta {
        category: Category::Housing,
        label: "Moradia",
        color: "#10B981",
        display_order: 3,
    },
    CategoryMeta {
        category: Category::Other,
        label: "Outros",
        color: "#F87171",
        display_order: 4,
    },
    CategoryMeta {
        category: Category::Empty,
        label: "Vazio",
        color: "#E5E7EB",
        display_order: 5,
    },
];

/// Closed set of spending categories plus the `Vazio` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Alimentação")]
    Food,
    #[serde(rename = "Transporte")]
    Transport,
    #[serde(rename = "Lazer")]
    Leisure,
    #[serde(rename = "Moradia")]
    Housing,
    #[serde(rename = "Outros")]
    Other,
    #[serde(rename = "Vazio")]
    Empty,
}

impl Category {
    /// Real categories in enumeration order, which is also the tie-break
    /// order for equal percentages.
    pub const KNOWN: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Leisure,
        Category::Housing,
        Category::Other,
    ];

    /// Category that absorbs expenses with unrecognised labels.
    pub const FALLBACK: Category = Category::Other;

    pub fn meta(self) -> &'static CategoryMeta {
        // Table rows are laid out in discriminant order.
        &CATEGORY_TABLE[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn color(self) -> &'static str {
        self.meta().color
    }

    pub fn display_order(self) -> u8 {
        self.meta().display_order
    }

    pub fn is_sentinel(self) -> bool {
        self == Category::Empty
    }

    /// Resolves a stored label to a real category. The `Vazio` sentinel and
    /// unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::KNOWN
            .iter()
            .copied()
            .find(|category| category.label() == label.trim())
    }

    /// Category an expense label is counted under during aggregation.
    pub fn for_aggregation(label: &str) -> Category {
        Self::from_label(label).unwrap_or(Self::FALLBACK)
    }

    /// Category preselected in the add-expense form.
    pub fn default_selection() -> Category {
        Self::KNOWN[0]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_match_their_variants() {
        for (idx, meta) in CATEGORY_TABLE.iter().enumerate() {
            assert_eq!(meta.category as usize, idx);
            assert_eq!(meta.display_order as usize, idx);
            assert_eq!(meta.category.meta(), meta);
        }
    }

    #[test]
    fn every_category_has_a_distinct_color() {
        let mut colors: Vec<_> = CATEGORY_TABLE.iter().map(|meta| meta.color).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), CATEGORY_TABLE.len());
    }

    #[test]
    fn from_label_resolves_known_categories_only() {
        assert_eq!(Category::from_label("Alimentação"), Some(Category::Food));
        assert_eq!(Category::from_label(" Moradia "), Some(Category::Housing));
        assert_eq!(Category::from_label("Vazio"), None);
        assert_eq!(Category::from_label("Unknown"), None);
        assert_eq!(Category::for_aggregation("Unknown"), Category::Other);
        assert_eq!(Category::for_aggregation("Vazio"), Category::Other);
    }

    #[test]
    fn serializes_with_portuguese_labels() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, "\"Transporte\"");
        let parsed: Category = serde_json::from_str("\"Lazer\"").unwrap();
        assert_eq!(parsed, Category::Leisure);
    }

    #[test]
    fn known_set_excludes_sentinel() {
        assert!(Category::KNOWN.iter().all(|category| !category.is_sentinel()));
        assert_eq!(Category::default_selection(), Category::Food);
    }
}

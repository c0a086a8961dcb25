use core::str::FromStr;

use serde::{Deserialize, Serialize};

use keepsake_core::ValueObject;

/// Closed set of item categories.
///
/// The declaration order is the canonical order exposed to collaborators.
/// Labels are the strings that are stored and transported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "時計")]
    Watches,
    #[serde(rename = "バッグ")]
    Bags,
    #[serde(rename = "ジュエリー")]
    Jewelry,
    #[serde(rename = "靴")]
    Shoes,
    #[serde(rename = "その他")]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Watches,
        Category::Bags,
        Category::Jewelry,
        Category::Shoes,
        Category::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Watches => "時計",
            Category::Bags => "バッグ",
            Category::Jewelry => "ジュエリー",
            Category::Shoes => "靴",
            Category::Other => "その他",
        }
    }

    /// Exact, case-sensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// All labels in canonical order, comma separated.
    pub fn joined_labels() -> String {
        Self::ALL.map(Category::label).join(", ")
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the category labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The category labels, in canonical order. Same list on every call.
pub fn valid_categories() -> [&'static str; 5] {
    Category::ALL.map(Category::label)
}

pub fn is_valid_category(category: &str) -> bool {
    Category::from_label(category).is_some()
}

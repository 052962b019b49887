use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Functional category assigned to a protein from its display name.
///
/// Variants are declared in matching priority order, and that order is also the
/// column order of every per-category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Envelope,
    Membrane,
    Capsid,
    Other,
}

/// Ordered keyword rules. The first keyword found in a lower-cased display name wins,
/// so a name mentioning both "envelope" and "membrane" is always an envelope protein.
/// [`Category::Other`] never takes part in matching.
pub const CATEGORY_RULES: [(&str, Category); 3] = [
    ("envelope", Category::Envelope),
    ("membrane", Category::Membrane),
    ("capsid", Category::Capsid),
];

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Envelope,
        Category::Membrane,
        Category::Capsid,
        Category::Other,
    ];

    /// Assigns a category by case-insensitive substring match against [`CATEGORY_RULES`],
    /// falling back to [`Category::Other`].
    pub fn from_display_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        CATEGORY_RULES
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|&(_, category)| category)
            .unwrap_or(Category::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Envelope => "envelope",
            Category::Membrane => "membrane",
            Category::Capsid => "capsid",
            Category::Other => "other",
        }
    }

    /// Position of the category in declaration order.
    pub fn index(&self) -> usize {
        match self {
            Category::Envelope => 0,
            Category::Membrane => 1,
            Category::Capsid => 2,
            Category::Other => 3,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid category name: '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "envelope" => Ok(Category::Envelope),
            "membrane" => Ok(Category::Membrane),
            "capsid" => Ok(Category::Capsid),
            "other" => Ok(Category::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

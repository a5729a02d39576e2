//! Per-level rules turning a path parameter into a lookup key.
//!
//! Stored names follow a different casing convention per level: provinces,
//! districts and sectors are stored upper-case, villages capitalized, and
//! cell names are matched exactly as given.

use crate::features::regions::models::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameNormalization {
    /// `kigali city` -> `KIGALI CITY`
    Uppercase,
    /// `BUGOMBA` -> `Bugomba`
    Capitalized,
    /// Used as given
    Verbatim,
}

pub const NAME_NORMALIZATION: [(Level, NameNormalization); 5] = [
    (Level::Province, NameNormalization::Uppercase),
    (Level::District, NameNormalization::Uppercase),
    (Level::Sector, NameNormalization::Uppercase),
    (Level::Cell, NameNormalization::Verbatim),
    (Level::Village, NameNormalization::Capitalized),
];

impl NameNormalization {
    pub fn for_level(level: Level) -> Self {
        NAME_NORMALIZATION
            .iter()
            .find(|(candidate, _)| *candidate == level)
            .map(|(_, rule)| *rule)
            .unwrap_or(NameNormalization::Verbatim)
    }

    /// Transform `raw` by this rule alone. Whitespace is kept, so padded
    /// input only matches a stored name padded the same way.
    pub fn apply(self, raw: &str) -> String {
        match self {
            NameNormalization::Uppercase => raw.to_uppercase(),
            NameNormalization::Capitalized => {
                let mut chars = raw.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.as_str().to_lowercase().chars())
                        .collect(),
                    None => String::new(),
                }
            }
            NameNormalization::Verbatim => raw.to_string(),
        }
    }
}

/// Normalize `raw` with the rule configured for `level`
pub fn normalize_name(level: Level, raw: &str) -> String {
    NameNormalization::for_level(level).apply(raw)
}

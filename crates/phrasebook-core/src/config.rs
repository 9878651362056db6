use serde::{Deserialize, Serialize};

/// Construction-time settings for a [`Dictionary`](crate::Dictionary).
///
/// `tab_spaces` is the number of spaces substituted for each literal
/// `\t` escape in a section body; the default of zero erases the escape.
/// `replacements` is an ordered list of `(match, replacement)` pairs
/// applied to every finalized body, kept as pairs rather than a table so
/// the order survives deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tab_spaces: usize,
    #[serde(default)]
    pub replacements: Vec<(String, String)>,
}

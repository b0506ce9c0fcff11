//! Orientation tagging from the filename suffix convention
//!
//! Block textures are named `<block>_top`, `<block>_bottom`, `<block>_side`
//! (e.g. `oak_log_top.png`). Anything else is untagged.

use serde::Serialize;
use std::fmt;

/// Which face of a block a texture belongs to
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Side,
    /// Written as `"null"` in results.json, the value existing consumers expect
    #[serde(rename = "null")]
    None,
}

/// Suffix rules, checked in order. First match wins.
const SUFFIX_RULES: [(&str, Category); 3] = [
    ("_top", Category::Top),
    ("_bottom", Category::Bottom),
    ("_side", Category::Side),
];

impl Category {
    /// Classify a base name (extension already stripped). Case-sensitive.
    pub fn classify(base_name: &str) -> Self {
        SUFFIX_RULES
            .iter()
            .find(|(suffix, _)| base_name.ends_with(suffix))
            .map(|&(_, category)| category)
            .unwrap_or(Category::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Side => "side",
            Category::None => "none",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`Category::classify`]
pub fn classify(base_name: &str) -> Category {
    Category::classify(base_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_suffixes() {
        assert_eq!(classify("grass_top"), Category::Top);
        assert_eq!(classify("stone_bottom"), Category::Bottom);
        assert_eq!(classify("wood_side"), Category::Side);
        assert_eq!(classify("dirt"), Category::None);
    }

    #[test]
    fn test_suffix_not_whole_name() {
        assert_eq!(classify("oak_log_top"), Category::Top);
        // Only the end of the name counts
        assert_eq!(classify("top_dirt"), Category::None);
        assert_eq!(classify("side_top_bottom"), Category::Bottom);
    }

    #[test]
    fn test_bare_suffix_and_empty() {
        assert_eq!(classify(""), Category::None);
        assert_eq!(classify("_top"), Category::Top);
        // Needs the underscore
        assert_eq!(classify("top"), Category::None);
        assert_eq!(classify("laptop"), Category::None);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(classify("grass_TOP"), Category::None);
        assert_eq!(classify("grass_Side"), Category::None);
    }

    #[test]
    fn test_deterministic() {
        for name in ["grass_top", "stone_bottom", "wood_side", "dirt", ""] {
            assert_eq!(classify(name), classify(name));
        }
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(serde_json::to_string(&Category::Top).unwrap(), "\"top\"");
        assert_eq!(serde_json::to_string(&Category::Bottom).unwrap(), "\"bottom\"");
        assert_eq!(serde_json::to_string(&Category::Side).unwrap(), "\"side\"");
        assert_eq!(serde_json::to_string(&Category::None).unwrap(), "\"null\"");
        assert_eq!(Category::None.to_string(), "none");
    }
}

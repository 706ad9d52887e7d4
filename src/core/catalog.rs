//! Static tool registry shared by the sidebar, home grid, and CLI `list`.

use serde::{Deserialize, Serialize};

/// Broad grouping used for the home-screen sections and sidebar headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    Calculators,
    Finance,
    Dates,
    Generators,
    Media,
    Text,
}

impl ToolCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Calculators => "Calculators",
            Self::Finance => "Finance",
            Self::Dates => "Dates & Time",
            Self::Generators => "Generators",
            Self::Media => "Images",
            Self::Text => "Text",
        }
    }
}

/// Semantic accent key, mapped to a concrete color by the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccentTag {
    Blue,
    Green,
    Orange,
    Purple,
    Red,
    Teal,
}

/// One entry in the tool registry. Ids are stable and persisted in config
/// (last open tool), so they must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    pub accent: AccentTag,
}

pub const TOOLS: &[ToolInfo] = &[
    ToolInfo {
        id: "calculator",
        name: "Calculator",
        description: "Basic keypad calculator with operator precedence",
        category: ToolCategory::Calculators,
        accent: AccentTag::Blue,
    },
    ToolInfo {
        id: "percentage-calculator",
        name: "Percentage Calculator",
        description: "Percent of a value, ratios, and reverse percentages",
        category: ToolCategory::Calculators,
        accent: AccentTag::Teal,
    },
    ToolInfo {
        id: "gst-calculator",
        name: "GST Calculator",
        description: "Add or remove GST at standard slab rates",
        category: ToolCategory::Finance,
        accent: AccentTag::Green,
    },
    ToolInfo {
        id: "emi-calculator",
        name: "EMI Calculator",
        description: "Monthly loan installment, total payment and interest",
        category: ToolCategory::Finance,
        accent: AccentTag::Orange,
    },
    ToolInfo {
        id: "age-calculator",
        name: "Age Calculator",
        description: "Exact age, next birthday, and life milestones",
        category: ToolCategory::Dates,
        accent: AccentTag::Purple,
    },
    ToolInfo {
        id: "date-difference",
        name: "Date Difference",
        description: "Span between two dates in several units",
        category: ToolCategory::Dates,
        accent: AccentTag::Blue,
    },
    ToolInfo {
        id: "profit-loss",
        name: "Profit / Loss",
        description: "Profit or loss from cost and selling price",
        category: ToolCategory::Finance,
        accent: AccentTag::Red,
    },
    ToolInfo {
        id: "area-calculator",
        name: "Area Calculator",
        description: "Areas of common shapes",
        category: ToolCategory::Calculators,
        accent: AccentTag::Green,
    },
    ToolInfo {
        id: "ecommerce-profit",
        name: "E-commerce Profit",
        description: "Net profit after marketplace fees and taxes",
        category: ToolCategory::Finance,
        accent: AccentTag::Teal,
    },
    ToolInfo {
        id: "gmail-generator",
        name: "Email Variations",
        description: "Username suggestions from first and last names",
        category: ToolCategory::Generators,
        accent: AccentTag::Red,
    },
    ToolInfo {
        id: "qr-code-generator",
        name: "QR Code Generator",
        description: "QR codes for text, links, email, and phone numbers",
        category: ToolCategory::Generators,
        accent: AccentTag::Purple,
    },
    ToolInfo {
        id: "password-generator",
        name: "Password Generator",
        description: "Random passwords with selectable character classes",
        category: ToolCategory::Generators,
        accent: AccentTag::Orange,
    },
    ToolInfo {
        id: "image-converter",
        name: "Image Converter",
        description: "Convert images between common formats",
        category: ToolCategory::Media,
        accent: AccentTag::Blue,
    },
    ToolInfo {
        id: "image-compressor",
        name: "Image Compressor",
        description: "Shrink images with a quality slider",
        category: ToolCategory::Media,
        accent: AccentTag::Green,
    },
    ToolInfo {
        id: "word-counter",
        name: "Word Counter",
        description: "Words, characters, sentences, and reading time",
        category: ToolCategory::Text,
        accent: AccentTag::Teal,
    },
];

/// Looks up a tool by its stable id.
pub fn find_tool(id: &str) -> Option<&'static ToolInfo> {
    TOOLS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_fifteen_tools() {
        assert_eq!(TOOLS.len(), 15);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = TOOLS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TOOLS.len());
    }

    #[test]
    fn test_ids_are_kebab_case() {
        for tool in TOOLS {
            assert!(
                tool.id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad id: {}",
                tool.id
            );
            assert!(!tool.id.is_empty());
        }
    }

    #[test]
    fn test_find_tool() {
        assert_eq!(find_tool("word-counter").map(|t| t.name), Some("Word Counter"));
        assert!(find_tool("missing-tool").is_none());
    }

    #[test]
    fn test_names_and_descriptions_nonempty() {
        for tool in TOOLS {
            assert!(!tool.name.is_empty());
            assert!(!tool.description.is_empty());
        }
    }
}

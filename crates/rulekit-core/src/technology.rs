use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// Indicator pattern matched against dependency names.
///
/// Written as a plain name for an exact match, or with a trailing `*` for a
/// prefix match (`@react-router/*` matches `@react-router/dev`). A `*`
/// anywhere else is treated literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Exact(String),
    Prefix(String),
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_suffix('*') {
            Some(prefix) => Pattern::Prefix(prefix.to_string()),
            None => Pattern::Exact(raw.to_string()),
        }
    }

    pub fn matches(&self, dependency: &str) -> bool {
        match self {
            Pattern::Exact(name) => dependency == name,
            Pattern::Prefix(prefix) => dependency.starts_with(prefix.as_str()),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(name) => write!(f, "{name}"),
            Pattern::Prefix(prefix) => write!(f, "{prefix}*"),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Display hint for listings. Never consulted by the matcher — overlapping
/// matches are all reported, with no precedence between technologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Technology
// ---------------------------------------------------------------------------

/// A detectable framework/library/platform referenced by rule documents.
/// Defined once in the static registry; immutable at runtime.
#[derive(Debug, Clone)]
pub struct Technology {
    /// Stable slug, e.g. `react-router`.
    pub id: &'static str,
    /// Human label shown in listings, e.g. "React Router".
    pub label: &'static str,
    pub priority: Priority,
    /// Indicator patterns; one hit is enough to include the technology.
    pub patterns: Vec<Pattern>,
    /// Ordered rule document ids surfaced when this technology matches.
    pub documents: Vec<&'static str>,
}

impl Technology {
    /// Returns the dependency names from `deps` that hit one of this
    /// technology's indicator patterns, in the order supplied.
    pub fn matched<'a>(&self, deps: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        deps.into_iter()
            .filter(|d| self.patterns.iter().any(|p| p.matches(d)))
            .map(str::to_string)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pattern_matches_only_exact() {
        let p = Pattern::parse("tailwindcss");
        assert!(p.matches("tailwindcss"));
        assert!(!p.matches("tailwindcss-animate"));
        assert!(!p.matches("@tailwindcss/vite"));
    }

    #[test]
    fn trailing_star_is_prefix_match() {
        let p = Pattern::parse("@react-router/*");
        assert_eq!(p, Pattern::Prefix("@react-router/".to_string()));
        assert!(p.matches("@react-router/dev"));
        assert!(p.matches("@react-router/node"));
        assert!(!p.matches("react-router"));
    }

    #[test]
    fn inner_star_is_literal() {
        let p = Pattern::parse("weird*name");
        assert_eq!(p, Pattern::Exact("weird*name".to_string()));
        assert!(p.matches("weird*name"));
        assert!(!p.matches("weirdXname"));
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(Pattern::parse("next").to_string(), "next");
        assert_eq!(Pattern::parse("@trpc/*").to_string(), "@trpc/*");
    }

    #[test]
    fn matched_preserves_supplied_order() {
        let tech = Technology {
            id: "tailwindcss",
            label: "Tailwind CSS",
            priority: Priority::High,
            patterns: vec![Pattern::parse("tailwindcss"), Pattern::parse("@tailwindcss/*")],
            documents: vec!["tailwindcss"],
        };
        let hits = tech.matched(["@tailwindcss/vite", "react", "tailwindcss"]);
        assert_eq!(hits, vec!["@tailwindcss/vite", "tailwindcss"]);
    }
}

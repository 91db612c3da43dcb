//! Accent color selection from free-text industry descriptions

/// Fallback accent when no industry rule matches
pub const DEFAULT_ACCENT: &str = "#3b82f6";

/// Ordered (keywords, color) rules. Evaluated top-down, first match wins.
pub const ACCENT_RULES: &[(&[&str], &str)] = &[
    (&["construction", "building"], "#f97316"),
    (&["health", "medical"], "#22c55e"),
    (&["tech", "software"], "#3b82f6"),
    (&["finance", "accounting"], "#0ea5e9"),
    (&["legal", "law"], "#6366f1"),
    (&["food", "restaurant"], "#ef4444"),
    (&["beauty", "salon"], "#ec4899"),
];

/// Pick the accent color for an industry description
pub fn accent_color(industry: &str) -> &'static str {
    let lower = industry.to_lowercase();
    ACCENT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(*k)))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_keywords_case_insensitive() {
        for industry in [
            "Construction",
            "home BUILDING and renovation",
            "Residential construction services",
        ] {
            assert_eq!(accent_color(industry), "#f97316", "{industry}");
        }
    }

    #[test]
    fn test_unmatched_industry_uses_default() {
        assert_eq!(accent_color("Random Industry"), DEFAULT_ACCENT);
        assert_eq!(accent_color(""), DEFAULT_ACCENT);
    }

    #[test]
    fn test_health_clinic() {
        assert_eq!(accent_color("City Health Clinic"), "#22c55e");
    }

    #[test]
    fn test_first_rule_wins_on_overlap() {
        // Both "building" and "software" appear; construction is tested first.
        assert_eq!(accent_color("Software for building sites"), "#f97316");
        // "law" is a substring of "lawn", so lawn care lands on the legal color.
        assert_eq!(accent_color("Lawn care"), "#6366f1");
        assert_eq!(accent_color("Hair salon"), "#ec4899");
    }
}

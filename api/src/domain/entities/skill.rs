//! Skill level entity

use serde::Serialize;

/// Skill rating inferred from annotation keywords.
///
/// Ordered by definition: `Unknown < Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
}

impl SkillLevel {
    /// Map an annotation token to a skill level, if it is a skill keyword
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "high" => Some(SkillLevel::High),
            "med" | "medium" | "mid" => Some(SkillLevel::Medium),
            "low" => Some(SkillLevel::Low),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Unknown => "Unknown",
            SkillLevel::Low => "Low",
            SkillLevel::Medium => "Medium",
            SkillLevel::High => "High",
        }
    }

    /// CSS class used by the HTML listing
    pub fn css_class(self) -> &'static str {
        match self {
            SkillLevel::Unknown => "skill-unknown",
            SkillLevel::Low => "skill-low",
            SkillLevel::Medium => "skill-medium",
            SkillLevel::High => "skill-high",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

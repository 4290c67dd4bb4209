//! Annotation tag parsing
//!
//! Turns the space-separated `info` tokens of a structured announcement into
//! display tags and a skill level.

use crate::domain::entities::SkillLevel;

/// Tags and skill extracted from an annotation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInfo {
    pub tags: Vec<String>,
    pub skill: SkillLevel,
}

/// Canonical display string for a single annotation token.
///
/// Known abbreviations are expanded; anything else gets its first character
/// upper-cased and is otherwise left alone.
pub fn normalize_tag(token: &str) -> String {
    match token.to_lowercase().as_str() {
        "ts" => "Team Survivor".to_string(),
        "ctf" => "Capture the Flag".to_string(),
        "bomb" => "Bomb Mode".to_string(),
        "hs" => "Have Server".to_string(),
        "ns" => "Need Server".to_string(),
        _ => capitalize_first(token),
    }
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fold annotation tokens into tags and a skill level.
///
/// Skill keywords are consumed and the last one wins; every other token is
/// normalized and kept in order of appearance.
pub fn parse_tokens<'a, I>(tokens: I) -> ParsedInfo
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .fold(ParsedInfo::default(), |mut parsed, token| {
            match SkillLevel::from_keyword(token) {
                Some(skill) => parsed.skill = skill,
                None => parsed.tags.push(normalize_tag(token)),
            }
            parsed
        })
}

/// Parse an optional `info` annotation; absent info yields no tags and an unknown skill
pub fn parse_info(info: Option<&str>) -> ParsedInfo {
    info.map(|text| parse_tokens(text.split_whitespace()))
        .unwrap_or_default()
}

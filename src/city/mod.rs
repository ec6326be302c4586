//! Heuristic city-name extraction used to label saved reports.

mod aliases;
mod patterns;

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

pub use aliases::CityRecord;
use aliases::{COUNTRY_PREFIXES, all_cities};
use patterns::{CITY_ARGUMENT, ORIGINAL_FORM_PATTERNS};

const GENERIC_QUERY_LABEL: &str = "Travel Query";
const CITY_TOOLS: [&str; 3] = ["get_weather", "get_attraction", "calculate_budget"];

/// Outcome of city resolution for a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityLabel {
    Resolved(String),
    GenericQuery,
}

impl CityLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Resolved(city) => city,
            Self::GenericQuery => GENERIC_QUERY_LABEL,
        }
    }
}

impl Display for CityLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Longest alias first, ties keep table order.
static BY_LONGEST_ALIAS: LazyLock<Vec<&'static CityRecord>> = LazyLock::new(|| {
    let mut records: Vec<_> = all_cities().collect();
    records.sort_by_key(|record| std::cmp::Reverse(longest_alias_chars(record)));
    records
});

fn longest_alias_chars(record: &CityRecord) -> usize {
    record
        .aliases
        .iter()
        .map(|alias| alias.chars().count())
        .max()
        .unwrap_or(0)
}

/// Finds a country-qualified city name and returns it exactly as written.
pub fn match_original_form(text: &str) -> Option<String> {
    ORIGINAL_FORM_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|city| city.as_str().trim())
            .filter(|city| !city.is_empty())
            .map(ToString::to_string)
    })
}

/// Finds the first known city whose alias occurs in `text`, ignoring case.
pub fn match_normalized(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    BY_LONGEST_ALIAS
        .iter()
        .find(|record| record.aliases.iter().any(|alias| alias_occurs(&lowered, alias)))
        .map(|record| record.name)
}

fn alias_occurs(lowered_text: &str, alias: &str) -> bool {
    let alias = alias.to_lowercase();
    if contains_alias(lowered_text, &alias) {
        return true;
    }
    COUNTRY_PREFIXES.iter().any(|prefix| {
        let prefix = prefix.to_lowercase();
        contains_alias(lowered_text, &format!("{prefix}{alias}"))
            || contains_alias(lowered_text, &format!("{prefix} {alias}"))
    })
}

/// Latin-script needles must sit between non-alphanumeric neighbours so that
/// short aliases like "la" do not fire inside ordinary words. Other scripts
/// match as plain substrings.
fn contains_alias(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    if !needle.is_ascii() {
        return haystack.contains(needle);
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(|c| c.is_ascii_alphanumeric())
            && !after.is_some_and(|c| c.is_ascii_alphanumeric())
    })
}

/// Picks the report city from everything a run produced, trying sources in
/// a fixed order and stopping at the first hit.
pub fn resolve_city(request: &str, answer: &str, transcript: &[String]) -> CityLabel {
    if let Some(city) = match_original_form(request) {
        return CityLabel::Resolved(city);
    }
    if let Some(city) = match_normalized(request) {
        return CityLabel::Resolved(city.to_string());
    }
    if let Some(city) = city_from_tool_calls(transcript) {
        return CityLabel::Resolved(city);
    }
    if let Some(city) = match_normalized(answer) {
        return CityLabel::Resolved(city.to_string());
    }
    transcript
        .iter()
        .find_map(|entry| match_normalized(entry))
        .map_or(CityLabel::GenericQuery, |city| {
            CityLabel::Resolved(city.to_string())
        })
}

fn city_from_tool_calls(transcript: &[String]) -> Option<String> {
    transcript
        .iter()
        .filter(|entry| CITY_TOOLS.iter().any(|tool| entry.contains(tool)))
        .filter_map(|entry| CITY_ARGUMENT.captures(entry))
        .filter_map(|caps| caps.get(1).map(|city| city.as_str()))
        .find(|city| !city.trim().is_empty())
        .map(|city| match_normalized(city).map_or_else(|| city.to_string(), ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::{CityLabel, match_normalized, match_original_form, resolve_city};

    fn transcript(entries: &[&str]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn aliases_match_case_insensitively() {
        assert_eq!(match_normalized("three days in BARCELONA please"), Some("Barcelona"));
        assert_eq!(match_normalized("周末去魔都玩"), Some("Shanghai"));
        assert_eq!(match_normalized("flying into nyc"), Some("New York"));
        assert_eq!(match_normalized("somewhere quiet"), None);
    }

    #[test]
    fn longer_alias_wins_over_embedded_shorter_one() {
        // 帕尔马 (Palma) sits inside 拉斯帕尔马斯 (Las Palmas)
        assert_eq!(match_normalized("我想去拉斯帕尔马斯"), Some("Las Palmas"));
        assert_eq!(match_normalized("我想去帕尔马"), Some("Palma"));
    }

    #[test]
    fn short_latin_aliases_need_word_boundaries() {
        assert_eq!(match_normalized("please plan a trip"), None);
        assert_eq!(match_normalized("Weekend in LA"), Some("Los Angeles"));
        assert_eq!(match_normalized("Napoleon museum"), None);
    }

    #[test]
    fn country_prefix_can_be_glued_to_latin_alias() {
        assert_eq!(match_normalized("SpainGranada itinerary"), Some("Granada"));
        assert_eq!(match_normalized("西班牙格拉纳达三日游"), Some("Granada"));
    }

    #[test]
    fn original_form_keeps_user_script() {
        assert_eq!(
            match_original_form("帮我规划西班牙格拉纳达一日游"),
            Some("格拉纳达".to_string())
        );
        assert_eq!(
            match_original_form("Plan a trip to USA   San Diego"),
            Some("San Diego".to_string())
        );
        assert_eq!(match_original_form("Plan a trip to San Diego"), None);
    }

    #[test]
    fn request_beats_every_other_source() {
        let label = resolve_city(
            "Plan a day in Rome",
            "Enjoy Paris!",
            &transcript(&["Action: get_weather(city=\"Tokyo\")"]),
        );
        assert_eq!(label, CityLabel::Resolved("Rome".to_string()));
    }

    #[test]
    fn tool_call_city_is_used_raw_when_unknown() {
        let label = resolve_city(
            "Plan my weekend",
            "Enjoy Paris!",
            &transcript(&[
                "User request: Plan my weekend",
                "Thought: check\nAction: get_weather(city=\"\")",
                "Thought: check\nAction: get_weather(city=\"Reykjavik\")",
            ]),
        );
        assert_eq!(label, CityLabel::Resolved("Reykjavik".to_string()));
    }

    #[test]
    fn tool_call_city_is_normalized_when_known() {
        let label = resolve_city(
            "Plan my weekend",
            "",
            &transcript(&["Action: get_attraction(city=\"北京\", weather=\"Sunny\")"]),
        );
        assert_eq!(label, CityLabel::Resolved("Beijing".to_string()));
    }

    #[test]
    fn answer_then_transcript_then_generic_label() {
        let from_answer = resolve_city("Plan my weekend", "Seoul is lovely", &[]);
        assert_eq!(from_answer, CityLabel::Resolved("Seoul".to_string()));

        let from_entry = resolve_city(
            "Plan my weekend",
            "Have fun",
            &transcript(&["Observation: Lisbon? No, Madrid is sunny"]),
        );
        assert_eq!(from_entry, CityLabel::Resolved("Madrid".to_string()));

        let generic = resolve_city("Plan my weekend", "Have fun", &[]);
        assert_eq!(generic, CityLabel::GenericQuery);
        assert_eq!(generic.to_string(), "Travel Query");
    }
}

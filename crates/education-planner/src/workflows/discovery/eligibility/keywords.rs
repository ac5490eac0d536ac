/// Lowercase synonyms searched for in a school's descriptive text, per priority tag.
const PRIORITY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Academic Excellence", &["academic", "excellence", "gifted"]),
    ("Arts & Creativity", &["arts", "drama", "music", "creative"]),
    ("Small Class Sizes", &["small class", "small"]),
    (
        "Language Learning",
        &["language", "french", "mandarin", "bilingual", "immersion"],
    ),
    ("Gifted Programs", &["gifted"]),
    ("Technology Focus", &["stem", "science", "technology"]),
    ("Outdoor Education", &["outdoor", "nature", "environment"]),
    ("Strong Community", &["community", "values", "character"]),
];

/// Keywords for a priority tag. Tags missing from the table match on their own
/// lowercased text.
pub(crate) fn keywords_for(tag: &str) -> Vec<String> {
    PRIORITY_KEYWORDS
        .iter()
        .find(|(label, _)| *label == tag)
        .map(|(_, keywords)| keywords.iter().map(|kw| kw.to_string()).collect())
        .unwrap_or_else(|| vec![tag.to_lowercase()])
}

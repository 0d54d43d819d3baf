//! Keyword-based emotion classification.
//!
//! The classifier is the local stand-in for the remote translation API:
//! it maps raw text to a small set of emotion labels via case-insensitive
//! substring matching against a fixed, ordered rule table. It is a pure
//! function and never returns an empty list.

/// Labels returned when no rule matches the input text.
pub const DEFAULT_EMOTION_LABELS: [&str; 2] = ["emotional", "expressive"];

/// Ordered rule table: `(keywords, labels)`.
///
/// Rules are independent. Any keyword hit appends all of the rule's labels
/// to the result, so text matching several rules collects labels from each.
const EMOTION_RULES: &[(&[&str], &[&str])] = &[
    (
        &["angry", "mad", "furious", "pissed"],
        &["angry", "frustrated"],
    ),
    (
        &["sad", "unhappy", "depressed", "cry", "tears"],
        &["sad", "disappointed"],
    ),
    (
        &["happy", "joy", "excited", "great", "wonderful"],
        &["happy", "pleased"],
    ),
    (
        &["scared", "afraid", "anxious", "worried", "nervous"],
        &["scared", "anxious"],
    ),
    (
        &["unloved", "ignored", "lonely", "abandoned", "rejected"],
        &["lonely", "unappreciated"],
    ),
    (
        &["overwhelmed", "stressed", "can't stand", "too much", "exhausted"],
        &["overwhelmed", "stressed"],
    ),
];

/// Classifies raw text into a non-empty, duplicate-free sequence of
/// lowercase emotion labels, in detection order.
///
/// # Examples
///
/// ```
/// use unsaid_core::emotion::classify_emotions;
///
/// let labels = classify_emotions("I am so angry and sad");
/// assert_eq!(labels, vec!["angry", "frustrated", "sad", "disappointed"]);
/// ```
pub fn classify_emotions(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut labels: Vec<String> = Vec::new();
    for (keywords, rule_labels) in EMOTION_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            labels.extend(rule_labels.iter().map(|label| (*label).to_string()));
        }
    }

    // De-duplicate, keeping the first occurrence of each label.
    let mut seen = std::collections::HashSet::new();
    labels.retain(|label| seen.insert(label.clone()));

    if labels.is_empty() {
        return DEFAULT_EMOTION_LABELS
            .iter()
            .map(|label| (*label).to_string())
            .collect();
    }

    labels
}

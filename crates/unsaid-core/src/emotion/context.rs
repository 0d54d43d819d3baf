//! Contextual analysis of an in-progress translation.
//!
//! Summarizes a translation (post-classification) into the structured
//! context used to pick validation templates: primary emotion, intensity,
//! communication style, and the strengths/needs observed in the text.

use crate::translation::TranslationDraft;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Three-level heuristic estimate of the emotional strength behind a
/// translation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Heuristic label describing communication patterns in the rephrased text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CommunicationStyle {
    Owning,
    SolutionFocused,
    NeedsExpressed,
    Balanced,
}

/// Structured summary of a translation's emotional context.
///
/// Produced by [`analyze_context`] and consumed by the context-aware
/// validation generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalContext {
    /// First detected emotion, or `"emotional"` when none were detected
    pub primary_emotion: String,
    /// Estimated emotional intensity
    pub intensity: Intensity,
    /// Detected communication style
    pub communication_style: CommunicationStyle,
    /// Short labels for observed communication strengths, in detection order
    pub strengths: Vec<String>,
    /// Needs surfaced by the text, in detection order
    pub needs: Vec<String>,
}

/// Adverbs that mark high emotional intensity in the clear expression.
const HIGH_INTENSITY_WORDS: [&str; 5] =
    ["extremely", "completely", "absolutely", "totally", "utterly"];

/// Summarizes a translation into an [`EmotionalContext`].
///
/// Pure function over the draft's emotion labels and clear expression.
/// Missing data degrades to defaults: no emotions yields a primary emotion
/// of `"emotional"`, and an empty text matches no style trigger.
///
/// Style checks run in source order and the last matching one wins, while
/// every matching check still contributes its strengths/needs entries.
pub fn analyze_context(draft: &TranslationDraft) -> EmotionalContext {
    let text = draft.clear_expression.to_lowercase();
    let emotions = &draft.emotions;

    let primary_emotion = emotions
        .first()
        .cloned()
        .unwrap_or_else(|| "emotional".to_string());

    let has_high_intensity = HIGH_INTENSITY_WORDS.iter().any(|word| text.contains(word));
    let emotion_count = emotions.len();

    // High takes precedence over low.
    let intensity = if has_high_intensity || emotion_count >= 4 {
        Intensity::High
    } else if emotion_count <= 1 {
        Intensity::Low
    } else {
        Intensity::Medium
    };

    let mut communication_style = CommunicationStyle::Balanced;
    let mut strengths = Vec::new();
    let mut needs = Vec::new();

    if text.contains("i feel") && !text.contains("you are") {
        communication_style = CommunicationStyle::Owning;
        strengths.push("Uses I-statements".to_string());
    }

    if text.contains("would like") || text.contains("could we") {
        communication_style = CommunicationStyle::SolutionFocused;
        strengths.push("Seeks resolution".to_string());
    }

    if text.contains("i need") || text.contains("i would appreciate") {
        communication_style = CommunicationStyle::NeedsExpressed;
        needs.push("Recognition".to_string());
        needs.push("Understanding".to_string());
    }

    EmotionalContext {
        primary_emotion,
        intensity,
        communication_style,
        strengths,
        needs,
    }
}

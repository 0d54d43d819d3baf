//! Validation category inference and display metadata.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Fixed six-way classification of a validation sentence's emotional
/// theme, used to select a display icon and color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ValidationCategory {
    Anger,
    Sadness,
    Anxiety,
    Positive,
    Complex,
    General,
}

impl Default for ValidationCategory {
    fn default() -> Self {
        ValidationCategory::General
    }
}

impl ValidationCategory {
    /// Infers the category from a validation sentence.
    ///
    /// Substring checks run top to bottom and the first match wins.
    /// Matching is case-sensitive, so a sentence that only carries a
    /// capitalized theme word ("Anger often signals...") falls through to
    /// `General`. That is a documented approximation of this inference,
    /// not something callers should correct for.
    pub fn of(validation: &str) -> Self {
        if validation.contains("anger") || validation.contains("frustrated") {
            return Self::Anger;
        }
        if validation.contains("sad") || validation.contains("hurt") {
            return Self::Sadness;
        }
        if validation.contains("anxious") || validation.contains("worried") {
            return Self::Anxiety;
        }
        if validation.contains("happy") || validation.contains("joy") {
            return Self::Positive;
        }
        if validation.contains("complex") || validation.contains("multiple") {
            return Self::Complex;
        }
        Self::General
    }

    /// Display icon for this category.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Anger => "🔥",
            Self::Sadness => "💧",
            Self::Anxiety => "🌀",
            Self::Positive => "✨",
            Self::Complex => "🧩",
            Self::General => "✅",
        }
    }

    /// Display color token for this category (CSS gradient class).
    pub fn color(self) -> &'static str {
        match self {
            Self::Anger => "from-rose-500 to-orange-500",
            Self::Sadness => "from-blue-500 to-indigo-500",
            Self::Anxiety => "from-amber-500 to-yellow-500",
            Self::Positive => "from-emerald-500 to-green-500",
            Self::Complex => "from-purple-500 to-pink-500",
            Self::General => "from-gray-500 to-slate-500",
        }
    }
}

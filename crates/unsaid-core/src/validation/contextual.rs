//! Context-aware validation generation (the preferred strategy).
//!
//! Selects a template pool keyed by the analyzed communication style,
//! extends it with strength, need, and high-intensity sentences, then
//! picks one entry uniformly at random.

use crate::emotion::{CommunicationStyle, EmotionalContext, Intensity};
use rand::Rng;
use rand::seq::SliceRandom;

/// Generates an affirming sentence from an emotional-context summary.
///
/// The base pool depends on the communication style; every pool entry is
/// parameterized by the primary emotion (the solution-focused pool also
/// embeds the intensity). Strengths, needs, and high intensity each
/// append further candidates before the uniform random pick.
///
/// Randomness comes from the caller-supplied source, so tests can fix
/// the seed.
pub fn generate_contextual_validation<R: Rng>(context: &EmotionalContext, rng: &mut R) -> String {
    let emotion = &context.primary_emotion;
    let intensity = context.intensity;

    let mut pool: Vec<String> = match context.communication_style {
        CommunicationStyle::Owning => vec![
            format!(
                "Using \"I feel\" statements to express {emotion} shows emotional maturity."
            ),
            format!("Owning your {emotion} without blame creates space for understanding."),
            format!("This direct expression of {emotion} demonstrates self-awareness."),
        ],
        CommunicationStyle::SolutionFocused => vec![
            format!("Combining {emotion} with solution-seeking is a powerful communication approach."),
            format!("Your {intensity} {emotion} paired with constructive thinking shows resilience."),
            "This balanced expression addresses both feelings and forward movement.".to_string(),
        ],
        CommunicationStyle::NeedsExpressed => vec![
            format!("Clearly stating needs alongside {emotion} is relationship-healthy."),
            format!("Your expression of {emotion} includes important information about what you need."),
            format!("Naming {emotion} and needs together creates clarity for everyone."),
        ],
        CommunicationStyle::Balanced => vec![
            format!("Your expression of {emotion} is clear and respectful."),
            format!("This balanced communication about {emotion} maintains relationship integrity."),
            format!(
                "You've expressed {emotion} in a way that honors both your experience and the relationship."
            ),
        ],
    };

    for strength in &context.strengths {
        pool.push(format!(
            "Your {} in expressing {emotion} is commendable.",
            strength.to_lowercase()
        ));
    }

    for need in &context.needs {
        pool.push(format!(
            "Acknowledging your need for {} alongside {emotion} is important.",
            need.to_lowercase()
        ));
    }

    if context.intensity == Intensity::High {
        pool.push(format!(
            "Managing {intensity} {emotion} with this clarity shows emotional strength."
        ));
        pool.push(format!(
            "Your ability to articulate {intensity} {emotion} is a valuable skill."
        ));
    }

    pool.choose(rng).cloned().unwrap_or_default()
}

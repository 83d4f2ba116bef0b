//! Weighted blending of component scores.
//!
//! The engine produces either three component scores (edit, frequency,
//! semantic) or two when the semantic judge is unavailable. The weights are
//! part of the observable contract: callers and tests rely on the exact
//! blended values, so they are fixed constants rather than configuration.

use serde::{Deserialize, Serialize};

/// Edit distance weight when all three scorers ran.
pub const FULL_EDIT_WEIGHT: f32 = 0.2;
/// Term frequency weight when all three scorers ran.
pub const FULL_FREQ_WEIGHT: f32 = 0.3;
/// Semantic judge weight when all three scorers ran.
pub const FULL_SEMANTIC_WEIGHT: f32 = 0.5;

/// Edit distance weight when only the local scorers ran.
pub const DEGRADED_EDIT_WEIGHT: f32 = 0.4;
/// Term frequency weight when only the local scorers ran.
pub const DEGRADED_FREQ_WEIGHT: f32 = 0.6;

/// Clamps a score to the 0-100 contract range.
#[inline]
#[must_use]
pub fn clamp_score(score: f32) -> f32 {
    score.clamp(0.0, 100.0)
}

/// Component scores for one comparison, tagged by the weight scheme that
/// applies to them.
///
/// `Full` carries all three components; `Degraded` records that the
/// semantic judge did not contribute and the local scores were reweighted.
/// The variant is serialized as a `scheme` tag so API consumers can tell
/// the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum ScoreParts {
    Full { edit: f32, freq: f32, semantic: f32 },
    Degraded { edit: f32, freq: f32 },
}

impl ScoreParts {
    /// Weighted combination of the components, clamped to [0, 100].
    #[must_use]
    pub fn blend(&self) -> f32 {
        let combined = match *self {
            ScoreParts::Full {
                edit,
                freq,
                semantic,
            } => {
                edit * FULL_EDIT_WEIGHT + freq * FULL_FREQ_WEIGHT + semantic * FULL_SEMANTIC_WEIGHT
            }
            ScoreParts::Degraded { edit, freq } => {
                edit * DEGRADED_EDIT_WEIGHT + freq * DEGRADED_FREQ_WEIGHT
            }
        };
        clamp_score(combined)
    }

    /// Edit distance component.
    #[inline]
    #[must_use]
    pub fn edit(&self) -> f32 {
        match *self {
            ScoreParts::Full { edit, .. } | ScoreParts::Degraded { edit, .. } => edit,
        }
    }

    /// Term frequency component.
    #[inline]
    #[must_use]
    pub fn freq(&self) -> f32 {
        match *self {
            ScoreParts::Full { freq, .. } | ScoreParts::Degraded { freq, .. } => freq,
        }
    }

    /// Semantic judge component, absent in degraded mode.
    #[inline]
    #[must_use]
    pub fn semantic(&self) -> Option<f32> {
        match *self {
            ScoreParts::Full { semantic, .. } => Some(semantic),
            ScoreParts::Degraded { .. } => None,
        }
    }

    /// True when the semantic judge did not contribute.
    #[inline]
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, ScoreParts::Degraded { .. })
    }
}

//! # Rating Scales
//!
//! Discrete rating scales for evaluation templates. A scale has a fixed
//! number of points (3, 5, or 10), unit step, and one label per point —
//! the label is what the evaluating manager actually sees.

use serde::{Deserialize, Serialize};

/// The supported rating scale sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleKind {
    /// Three-point scale (e.g., below / meets / exceeds).
    ThreePoint,
    /// Five-point scale, the common default.
    FivePoint,
    /// Ten-point scale for fine-grained scoring.
    TenPoint,
}

impl ScaleKind {
    /// All scale kinds as a slice.
    pub fn all() -> &'static [ScaleKind] {
        &[Self::ThreePoint, Self::FivePoint, Self::TenPoint]
    }

    /// The highest rating point on this scale.
    pub fn max(&self) -> u8 {
        match self {
            Self::ThreePoint => 3,
            Self::FivePoint => 5,
            Self::TenPoint => 10,
        }
    }

    /// The canonical string name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreePoint => "THREE_POINT",
            Self::FivePoint => "FIVE_POINT",
            Self::TenPoint => "TEN_POINT",
        }
    }
}

impl std::fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discrete rating scale with one label per point.
///
/// Scales always run from 1 to the kind's maximum in unit steps; the
/// explicit `min`/`max`/`step` fields exist so payloads are
/// self-describing, and validation rejects any combination that
/// disagrees with the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RatingScale {
    /// The scale size.
    pub kind: ScaleKind,
    /// Lowest rating point (always 1).
    pub min: u8,
    /// Highest rating point (3, 5, or 10 per `kind`).
    pub max: u8,
    /// Step between rating points (always 1).
    pub step: u8,
    /// Ordered labels, one per rating point, lowest first.
    pub labels: Vec<String>,
}

impl RatingScale {
    /// Build a scale of the given kind from ordered labels.
    ///
    /// Bounds are filled in from the kind; label cardinality is checked
    /// later by template validation, not here.
    pub fn of_kind(kind: ScaleKind, labels: Vec<String>) -> Self {
        Self {
            kind,
            min: 1,
            max: kind.max(),
            step: 1,
            labels,
        }
    }

    /// Whether the declared bounds agree with the kind.
    pub fn bounds_consistent(&self) -> bool {
        self.min == 1 && self.step == 1 && self.max == self.kind.max()
    }

    /// Whether a score lies within this scale's bounds.
    ///
    /// Accepts fractional scores — a weighted total like 3.8 is valid on
    /// a five-point scale even though individual ratings are integers.
    pub fn contains(&self, score: f64) -> bool {
        score.is_finite() && score >= f64::from(self.min) && score <= f64::from(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Level {i}")).collect()
    }

    #[test]
    fn test_kind_max() {
        assert_eq!(ScaleKind::ThreePoint.max(), 3);
        assert_eq!(ScaleKind::FivePoint.max(), 5);
        assert_eq!(ScaleKind::TenPoint.max(), 10);
    }

    #[test]
    fn test_of_kind_fills_bounds() {
        let scale = RatingScale::of_kind(ScaleKind::FivePoint, labels(5));
        assert_eq!(scale.min, 1);
        assert_eq!(scale.max, 5);
        assert_eq!(scale.step, 1);
        assert!(scale.bounds_consistent());
    }

    #[test]
    fn test_inconsistent_bounds_detected() {
        let mut scale = RatingScale::of_kind(ScaleKind::ThreePoint, labels(3));
        scale.max = 4;
        assert!(!scale.bounds_consistent());
    }

    #[test]
    fn test_contains_accepts_fractional_scores() {
        let scale = RatingScale::of_kind(ScaleKind::FivePoint, labels(5));
        assert!(scale.contains(3.8));
        assert!(scale.contains(1.0));
        assert!(scale.contains(5.0));
    }

    #[test]
    fn test_contains_rejects_out_of_bounds() {
        let scale = RatingScale::of_kind(ScaleKind::FivePoint, labels(5));
        assert!(!scale.contains(0.5));
        assert!(!scale.contains(5.1));
        assert!(!scale.contains(f64::NAN));
        assert!(!scale.contains(f64::INFINITY));
    }
}

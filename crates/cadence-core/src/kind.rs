//! # Review Kinds
//!
//! The review kind classifies both templates and cycles — an annual
//! cycle is driven by annual templates. One enum, shared by both, so the
//! two can never disagree on the vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The category of a review template or appraisal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewKind {
    /// Full-year performance review.
    Annual,
    /// Half-year checkpoint review.
    SemiAnnual,
    /// End-of-probation evaluation.
    Probationary,
    /// Project wrap-up evaluation.
    Project,
    /// One-off review outside the regular calendar.
    AdHoc,
}

impl ReviewKind {
    /// All review kinds as a slice.
    pub fn all() -> &'static [ReviewKind] {
        &[
            Self::Annual,
            Self::SemiAnnual,
            Self::Probationary,
            Self::Project,
            Self::AdHoc,
        ]
    }

    /// The canonical string name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "ANNUAL",
            Self::SemiAnnual => "SEMI_ANNUAL",
            Self::Probationary => "PROBATIONARY",
            Self::Project => "PROJECT",
            Self::AdHoc => "AD_HOC",
        }
    }

    /// Parse a canonical string name.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "ANNUAL" => Ok(Self::Annual),
            "SEMI_ANNUAL" => Ok(Self::SemiAnnual),
            "PROBATIONARY" => Ok(Self::Probationary),
            "PROJECT" => Ok(Self::Project),
            "AD_HOC" => Ok(Self::AdHoc),
            other => Err(CoreError::UnknownReviewKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for ReviewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for kind in ReviewKind::all() {
            assert_eq!(ReviewKind::parse(kind.as_str()).unwrap(), *kind);
        }
    }

    #[test]
    fn test_parse_unknown_rejected() {
        assert!(ReviewKind::parse("QUARTERLY").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ReviewKind::SemiAnnual.to_string(), "SEMI_ANNUAL");
        assert_eq!(ReviewKind::AdHoc.to_string(), "AD_HOC");
    }
}

//! The constitutional review seam.
//!
//! The original defense stack includes a "constitutional" layer: a second
//! model reads the agent's draft response and judges whether it violates the
//! agent's rules. The model call itself is an external collaborator (network
//! I/O lives outside this crate); this module defines the seam - the trait a
//! backend implements and the verdict format it must produce.
//!
//! ## Wire Format
//!
//! Reviewers are prompted to answer with a single JSON object:
//!
//! ```text
//! {"safe": false, "violations": ["leaked other customer's email"], "risk_level": "high"}
//! ```
//!
//! Models wrap JSON in prose despite instructions, so
//! [`parse_review_verdict`] extracts the outermost `{...}` span before
//! deserializing. A reply with no parseable verdict is a [`ReviewError`],
//! never a silent pass - the engine decides what that means under its
//! fail-closed policy.

use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

/// A second-model reviewer for draft agent responses.
///
/// Implementations call out to whatever model backend the deployment uses
/// and return the parsed verdict. The engine owns the policy for `Err`
/// returns; implementations should not swallow failures.
pub trait ConstitutionalReviewer {
    /// Judge the agent's draft `response` to `user_message`.
    fn review(&self, user_message: &str, response: &str) -> Result<ReviewVerdict, ReviewError>;
}

/// The reviewer's judgment of one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewVerdict {
    /// True if the response violates none of the agent's rules.
    pub safe: bool,

    /// The rules the response violates, in the reviewer's words.
    #[serde(default)]
    pub violations: Vec<String>,

    /// The reviewer's overall risk assessment.
    #[serde(default)]
    pub risk_level: RiskLevel,
}

/// Risk assessment scale used by reviewers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No risk identified.
    None,
    /// Minor issue, cosmetic or ambiguous.
    Low,
    /// Clear policy concern, limited blast radius.
    Medium,
    /// Serious violation (PII leak, policy bypass).
    High,
    /// Severe violation with immediate business impact.
    Critical,
    /// The reviewer did not state a level.
    #[default]
    Unknown,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::None => "none",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
            RiskLevel::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Extract and parse a [`ReviewVerdict`] from free-form reviewer text.
///
/// Takes the span from the first `{` to the last `}` (reviewers often wrap
/// the JSON in commentary) and deserializes it.
///
/// # Errors
///
/// [`ReviewError::MalformedVerdict`] if the text contains no braces or the
/// extracted span is not a valid verdict object.
pub fn parse_review_verdict(raw: &str) -> Result<ReviewVerdict, ReviewError> {
    let start = raw.find('{');
    let end = raw.rfind('}');

    let span = match (start, end) {
        (Some(s), Some(e)) if s < e => &raw[s..=e],
        _ => {
            return Err(ReviewError::MalformedVerdict {
                raw: raw.to_string(),
            })
        }
    };

    serde_json::from_str(span).map_err(|_| ReviewError::MalformedVerdict {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_json() {
        let verdict = parse_review_verdict(
            r#"{"safe": false, "violations": ["leaked PII"], "risk_level": "high"}"#,
        )
        .unwrap();
        assert!(!verdict.safe);
        assert_eq!(verdict.violations, vec!["leaked PII"]);
        assert_eq!(verdict.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_parse_json_wrapped_in_prose() {
        let raw = "Here is my assessment:\n\
                   {\"safe\": true, \"violations\": [], \"risk_level\": \"none\"}\n\
                   Let me know if you need more detail.";
        let verdict = parse_review_verdict(raw).unwrap();
        assert!(verdict.safe);
        assert_eq!(verdict.risk_level, RiskLevel::None);
    }

    #[test]
    fn test_parse_missing_optional_fields() {
        let verdict = parse_review_verdict(r#"{"safe": true}"#).unwrap();
        assert!(verdict.safe);
        assert!(verdict.violations.is_empty());
        assert_eq!(verdict.risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn test_parse_garbage_is_an_error() {
        let err = parse_review_verdict("I refuse to answer in JSON.").unwrap_err();
        assert!(matches!(err, ReviewError::MalformedVerdict { .. }));
    }

    #[test]
    fn test_parse_invalid_json_is_an_error() {
        let err = parse_review_verdict("{not json}").unwrap_err();
        assert!(matches!(err, ReviewError::MalformedVerdict { .. }));
    }
}

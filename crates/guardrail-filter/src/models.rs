//! Core types for pattern classification.
//!
//! These types carry the outcome of a single classifier pass. They are
//! created fresh per call, never persisted, and derive Serde traits so
//! screening decisions can be logged and audited.

use serde::{Deserialize, Serialize};

/// Names a pattern set in the registry.
///
/// Each variant corresponds to one guardrail layer backed by regular
/// expressions. The constitutional-review layer has no pattern set; it is
/// model-based and lives behind a trait in `guardrail-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardrailKind {
    /// Scans user input for known injection phrasings before it reaches
    /// the agent.
    InputValidation,

    /// Scans the agent's response before the user sees it. Catches leaked
    /// PII, bulk data dumps, and system prompt fragments.
    OutputFilter,

    /// Verifies a request stays within the agent's authorized actions.
    ScopeEnforcement,

    /// Flags actions that must be queued for human approval before
    /// execution (refunds, deletions, transfers).
    Escalation,
}

impl GuardrailKind {
    /// Short display name used in reports and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            GuardrailKind::InputValidation => "Input Validation",
            GuardrailKind::OutputFilter => "Output Filtering",
            GuardrailKind::ScopeEnforcement => "Scope Enforcement",
            GuardrailKind::Escalation => "Human Escalation",
        }
    }
}

impl std::fmt::Display for GuardrailKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One triggered rule: the rule's label plus its source expression.
///
/// The expression is included for display and audit trails - when a
/// screening decision is questioned, the reviewer can see exactly which
/// pattern fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Human-readable description of what the rule flags.
    pub label: String,

    /// The regular expression that matched.
    pub pattern: String,
}

/// Result of applying one pattern set to one text.
///
/// `detections` preserves registry order: rules are evaluated in the order
/// they were registered, and every match is reported. Repeated calls with
/// the same input yield identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// True if at least one rule matched.
    pub triggered: bool,

    /// All matching rules, in registry order.
    pub detections: Vec<Detection>,

    /// Naive risk score: `min(matches / 3.0, 1.0)`.
    ///
    /// Three or more distinct rule hits saturate the score. This is a
    /// coarse signal for dashboards, not a calibrated probability.
    pub risk_score: f64,
}

impl Classification {
    /// Build a classification from the rules that matched.
    pub fn from_detections(detections: Vec<Detection>) -> Self {
        let risk_score = (detections.len() as f64 / 3.0).min(1.0);
        Self {
            triggered: !detections.is_empty(),
            detections,
            risk_score,
        }
    }

    /// A classification with no matches.
    pub fn clean() -> Self {
        Self::from_detections(Vec::new())
    }

    /// The matching labels, in registry order.
    pub fn labels(&self) -> Vec<&str> {
        self.detections.iter().map(|d| d.label.as_str()).collect()
    }

    /// Number of rules that matched.
    pub fn match_count(&self) -> usize {
        self.detections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(label: &str) -> Detection {
        Detection {
            label: label.to_string(),
            pattern: String::new(),
        }
    }

    #[test]
    fn test_clean_classification() {
        let c = Classification::clean();
        assert!(!c.triggered);
        assert!(c.labels().is_empty());
        assert_eq!(c.risk_score, 0.0);
    }

    #[test]
    fn test_risk_score_scales_with_matches() {
        let one = Classification::from_detections(vec![detection("a")]);
        let two = Classification::from_detections(vec![detection("a"), detection("b")]);
        assert!((one.risk_score - 1.0 / 3.0).abs() < 1e-9);
        assert!((two.risk_score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_risk_score_saturates_at_one() {
        let many = Classification::from_detections(vec![
            detection("a"),
            detection("b"),
            detection("c"),
            detection("d"),
        ]);
        assert_eq!(many.risk_score, 1.0);
    }

    #[test]
    fn test_labels_preserve_order() {
        let c = Classification::from_detections(vec![detection("first"), detection("second")]);
        assert_eq!(c.labels(), vec!["first", "second"]);
    }

    #[test]
    fn test_classification_serializes() {
        let c = Classification::from_detections(vec![detection("a")]);
        let json = serde_json::to_string(&c).unwrap();
        let parsed: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
    }
}

//! Verdict types for screening results.

use serde::{Deserialize, Serialize};

use crate::review::RiskLevel;

/// The final verdict from a screening pass.
///
/// The engine returns one of three verdicts:
/// - `Allow`: content passed every active layer
/// - `Block`: content failed at least one layer, with reasons
/// - `Review`: content needs human review before proceeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// Content passed all active guardrails.
    Allow,

    /// Content failed a guardrail. Do not forward it.
    Block {
        /// Every reason collected before the pipeline stopped.
        reasons: Vec<BlockReason>,
    },

    /// Content requires human review before execution.
    Review {
        /// Flags indicating why review is needed.
        flags: Vec<ReviewFlag>,
    },
}

impl Verdict {
    /// Create an Allow verdict.
    pub fn allow() -> Self {
        Self::Allow
    }

    /// Create a Block verdict with the given reasons.
    pub fn block(reasons: Vec<BlockReason>) -> Self {
        Self::Block { reasons }
    }

    /// Create a Review verdict with the given flags.
    pub fn review(flags: Vec<ReviewFlag>) -> Self {
        Self::Review { flags }
    }

    /// Returns true if this is an Allow verdict.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns true if this is a Block verdict.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Block { .. })
    }

    /// Returns true if this requires review.
    pub fn requires_review(&self) -> bool {
        matches!(self, Self::Review { .. })
    }
}

/// Reasons for blocking content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockReason {
    /// Input validation matched injection patterns.
    InjectionDetected {
        /// Labels of the matching rules, in registry order.
        labels: Vec<String>,
    },

    /// The request is outside the agent's authorized scope.
    ScopeViolation {
        /// Labels of the violated scope rules.
        labels: Vec<String>,
    },

    /// The response contains content the output filter blocks.
    SensitiveOutput {
        /// Labels of the matching output rules.
        labels: Vec<String>,
    },

    /// The constitutional reviewer found rule violations.
    ReviewerRejected {
        /// Violations reported by the reviewer.
        violations: Vec<String>,
        /// The reviewer's risk assessment.
        risk_level: RiskLevel,
    },

    /// The reviewer failed while the engine is fail-closed.
    ReviewerUnavailable {
        /// What went wrong.
        detail: String,
    },
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InjectionDetected { labels } => {
                write!(f, "Injection detected: {}", labels.join(", "))
            }
            Self::ScopeViolation { labels } => {
                write!(f, "Scope violation: {}", labels.join(", "))
            }
            Self::SensitiveOutput { labels } => {
                write!(f, "Sensitive output: {}", labels.join(", "))
            }
            Self::ReviewerRejected {
                violations,
                risk_level,
            } => {
                write!(
                    f,
                    "Reviewer rejected ({}): {}",
                    risk_level,
                    violations.join(", ")
                )
            }
            Self::ReviewerUnavailable { detail } => {
                write!(f, "Reviewer unavailable: {}", detail)
            }
        }
    }
}

/// Flags indicating why human review is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReviewFlag {
    /// The request matches escalation triggers and is queued for human
    /// approval.
    EscalationRequired {
        /// Labels of the matching escalation rules.
        labels: Vec<String>,
    },

    /// The reviewer failed while the engine is fail-open.
    ReviewerUnavailable {
        /// What went wrong.
        detail: String,
    },
}

impl std::fmt::Display for ReviewFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EscalationRequired { labels } => {
                write!(f, "Human approval required: {}", labels.join(", "))
            }
            Self::ReviewerUnavailable { detail } => {
                write!(f, "Reviewer unavailable: {}", detail)
            }
        }
    }
}

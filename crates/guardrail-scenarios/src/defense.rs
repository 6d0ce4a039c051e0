//! The five defense layers and their metadata.

use guardrail_filter::GuardrailKind;
use serde::{Deserialize, Serialize};

/// One layer of the defense stack.
///
/// Four layers are pattern-backed and map onto a [`GuardrailKind`];
/// constitutional review is model-based and has no pattern set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Defense {
    /// Scans user input for known injection patterns before it reaches the
    /// agent.
    InputFilter,

    /// Verifies the request stays within the agent's authorized actions.
    ScopeCheck,

    /// A second model reviews the agent's draft response before it is sent.
    ConstitutionalReview,

    /// Scans the agent's response before the user sees it.
    OutputFilter,

    /// Flags high-risk actions for human approval before execution.
    HumanReview,
}

impl Defense {
    /// All layers, in stack order (cheapest first).
    pub const ALL: [Defense; 5] = [
        Defense::InputFilter,
        Defense::ScopeCheck,
        Defense::ConstitutionalReview,
        Defense::OutputFilter,
        Defense::HumanReview,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Defense::InputFilter => "Input Validation",
            Defense::ScopeCheck => "Scope Enforcement",
            Defense::ConstitutionalReview => "Constitutional Review",
            Defense::OutputFilter => "Output Filtering",
            Defense::HumanReview => "Human-in-the-Loop",
        }
    }

    /// Short name used as a coverage-matrix column header.
    pub fn short_name(&self) -> &'static str {
        match self {
            Defense::InputFilter => "Input Filter",
            Defense::ScopeCheck => "Scope Check",
            Defense::ConstitutionalReview => "Constitutional Review",
            Defense::OutputFilter => "Output Filter",
            Defense::HumanReview => "Human Review",
        }
    }

    /// What the layer does.
    pub fn description(&self) -> &'static str {
        match self {
            Defense::InputFilter => {
                "Scans user input for known injection patterns before it reaches the agent."
            }
            Defense::ScopeCheck => {
                "Verifies the request stays within the agent's authorized actions."
            }
            Defense::ConstitutionalReview => {
                "A second LLM reviews the agent's draft response before it's sent."
            }
            Defense::OutputFilter => {
                "Scans the agent's response before the user sees it - a last line of defense."
            }
            Defense::HumanReview => {
                "Flags high-risk actions for human approval before execution."
            }
        }
    }

    /// How the layer works, mechanically.
    pub fn mechanism(&self) -> &'static str {
        match self {
            Defense::InputFilter => {
                "Regex + keyword detection for phrases like 'ignore previous instructions', \
                 'system prompt', 'DAN', embedded [SYSTEM] tags, etc."
            }
            Defense::ScopeCheck => {
                "Maintains a whitelist of allowed operations (view own account, request \
                 escalation) and blocks anything outside scope (access other accounts, \
                 process large refunds)."
            }
            Defense::ConstitutionalReview => {
                "Sends the agent's draft response to a reviewer LLM asking: 'Does this \
                 response violate any rules? Does it leak data, break character, or exceed \
                 authority?'"
            }
            Defense::OutputFilter => {
                "Checks responses for PII patterns (emails, phone numbers, account IDs not \
                 belonging to the current user), system prompt fragments, and bulk data dumps."
            }
            Defense::HumanReview => {
                "Any action involving financial transactions over a threshold, bulk data \
                 access, or account modifications gets queued for human approval."
            }
        }
    }

    /// Attack classes this layer catches.
    pub fn catches(&self) -> &'static [&'static str] {
        match self {
            Defense::InputFilter => {
                &["Direct overrides", "Known jailbreak patterns", "Embedded system tags"]
            }
            Defense::ScopeCheck => {
                &["Cross-account access", "Unauthorized transactions", "Privilege escalation"]
            }
            Defense::ConstitutionalReview => {
                &["Subtle data leaks", "Character breaks", "Policy violations", "Indirect injections"]
            }
            Defense::OutputFilter => {
                &["Leaked PII", "System prompt in response", "Bulk data exports"]
            }
            Defense::HumanReview => {
                &["Unauthorized refunds", "Account changes", "Bulk operations"]
            }
        }
    }

    /// Operating cost of the layer.
    pub fn cost(&self) -> &'static str {
        match self {
            Defense::InputFilter => "Low latency (~5ms), no API cost",
            Defense::ScopeCheck => "Low latency (~5ms), no API cost",
            Defense::ConstitutionalReview => {
                "Higher latency (+500ms-2s), doubles API cost per interaction"
            }
            Defense::OutputFilter => "Low latency (~10ms), no API cost",
            Defense::HumanReview => "High latency (minutes to hours), requires staffing",
        }
    }

    /// Known blind spots.
    pub fn limitations(&self) -> &'static str {
        match self {
            Defense::InputFilter => {
                "Can be bypassed with creative rephrasing or encoding tricks"
            }
            Defense::ScopeCheck => "Requires well-defined scope boundaries upfront",
            Defense::ConstitutionalReview => {
                "The reviewer itself could potentially be manipulated; adds cost and latency"
            }
            Defense::OutputFilter => {
                "Cannot catch semantically leaked info without an exact pattern match"
            }
            Defense::HumanReview => {
                "Doesn't scale for high-volume operations; creates a bottleneck"
            }
        }
    }

    /// The pattern set backing this layer, if it is pattern-based.
    pub fn pattern_kind(&self) -> Option<GuardrailKind> {
        match self {
            Defense::InputFilter => Some(GuardrailKind::InputValidation),
            Defense::ScopeCheck => Some(GuardrailKind::ScopeEnforcement),
            Defense::OutputFilter => Some(GuardrailKind::OutputFilter),
            Defense::HumanReview => Some(GuardrailKind::Escalation),
            Defense::ConstitutionalReview => None,
        }
    }
}

impl std::fmt::Display for Defense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

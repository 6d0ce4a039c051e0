//! The pattern registry.
//!
//! Four rule sets, one per pattern-backed guardrail layer. Rules are
//! immutable, defined at startup, and evaluated in registry order. The
//! expressions carry the `(?i)` flag so matching is case-insensitive
//! everywhere, and they are compiled exactly once when a set is built.
//!
//! A malformed expression panics at construction. That is deliberate: a
//! regex that does not compile is a defect in this file, not a runtime
//! condition the caller could handle.

use regex::Regex;

use crate::models::GuardrailKind;

/// A single detector: a compiled expression paired with a human-readable
/// label describing what it flags.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// The compiled, case-insensitive expression.
    pub expression: Regex,

    /// What a match means, in words a human reviewer understands.
    pub label: &'static str,
}

fn rule(expression: &str, label: &'static str) -> PatternRule {
    PatternRule {
        expression: Regex::new(expression).unwrap(),
        label,
    }
}

/// An ordered rule set for one guardrail layer.
#[derive(Debug, Clone)]
pub struct PatternSet {
    /// Which layer this set backs.
    pub kind: GuardrailKind,

    /// The rules, in evaluation order.
    pub rules: Vec<PatternRule>,
}

impl PatternSet {
    /// Build the registry set for the given layer.
    pub fn for_kind(kind: GuardrailKind) -> Self {
        let rules = match kind {
            GuardrailKind::InputValidation => input_validation_rules(),
            GuardrailKind::OutputFilter => output_filter_rules(),
            GuardrailKind::ScopeEnforcement => scope_enforcement_rules(),
            GuardrailKind::Escalation => escalation_rules(),
        };
        Self { kind, rules }
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Injection phrasings scanned in user input before it reaches the agent.
///
/// These catch the common, directly-worded attacks. They do not catch
/// creative rephrasing - the scenario driver in `guardrail-scenarios`
/// demonstrates exactly which attacks slip past this set.
pub fn input_validation_rules() -> Vec<PatternRule> {
    vec![
        rule(
            r"(?i)ignore\s+(all\s+)?(previous|prior|above)\s+(instructions|rules|prompts)",
            "Direct instruction override",
        ),
        rule(r"(?i)you\s+are\s+now\s+(a|an)\s+", "Role reassignment attempt"),
        rule(
            r"(?i)\bDAN\b|do\s+anything\s+now",
            "Known jailbreak pattern (DAN)",
        ),
        rule(
            r"(?i)system\s+prompt|internal\s+(instructions|config)",
            "System prompt extraction",
        ),
        rule(
            r"(?i)\[SYSTEM[^\]]*\]|\[ADMIN[^\]]*\]|\[OVERRIDE[^\]]*\]",
            "Embedded system tags",
        ),
        rule(
            r"(?i)(output|reveal|show|display)\s+(all|every|the)\s+(customer|user|account|record)",
            "Bulk data request",
        ),
        rule(
            r"(?i)(forget|disregard|bypass)\s+(your|the)\s+(rules|restrictions|limitations)",
            "Rule bypass attempt",
        ),
        rule(
            r"(?i)security\s+(audit|review|test).*\b(output|show|reveal)\b",
            "Fake authority claim",
        ),
    ]
}

/// Sensitive content scanned in agent responses before the user sees them.
///
/// The PII rules name the demo deployment's protected customer records
/// (every customer except the authenticated one). In a real deployment this
/// set would be generated from the tenant's data catalog.
pub fn output_filter_rules() -> Vec<PatternRule> {
    vec![
        rule(
            r"(?i)james\.?w@corp\.net|james\s+wilson.*email|CUST-1102",
            "Other customer PII (James Wilson)",
        ),
        rule(
            r"(?i)m\.garcia@startup\.io|maria\s+garcia.*email|CUST-5567",
            "Other customer PII (Maria Garcia)",
        ),
        rule(
            r"(?i)alex\.k@dev\.org|alex\s+kumar.*email|CUST-3340",
            "Other customer PII (Alex Kumar)",
        ),
        rule(r#"(?i)"customers"\s*:\s*\["#, "Bulk data export detected"),
        rule(
            r"(?i)RULES YOU MUST FOLLOW|OTHER CUSTOMERS IN DATABASE",
            "System prompt leak",
        ),
    ]
}

/// Requests outside the agent's authorized actions.
pub fn scope_enforcement_rules() -> Vec<PatternRule> {
    vec![
        rule(
            r"(?i)(access|look\s+up|check|view)\s+(james|maria|alex|another|other|his|her|their)\s*(account|order|info|record|email)?",
            "Cross-account access attempt",
        ),
        rule(
            r"(?i)(process|issue|complete)\s+(a\s+)?(refund|return)\s.*\$\s*[5-9]\d{2,}|\$\s*[1-9]\d{3,}",
            "High-value refund (requires manager)",
        ),
        rule(
            r"(?i)(delete|modify|change)\s+(the\s+)?(database|records|all\s+accounts)",
            "Unauthorized database operation",
        ),
    ]
}

/// Actions queued for human approval regardless of how they are phrased.
pub fn escalation_rules() -> Vec<PatternRule> {
    vec![
        rule(r"(?i)refund", "Refund request"),
        rule(r"(?i)delete", "Destructive operation"),
        rule(r"(?i)modify.*account", "Account modification"),
        rule(r"(?i)transfer", "Funds transfer"),
        rule(r"(?i)cancel", "Order cancellation"),
    ]
}

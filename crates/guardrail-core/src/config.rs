//! Configuration types for the screening engine.

use serde::{Deserialize, Serialize};

/// Configuration for the guardrail engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which defense layers are active.
    pub layers: LayerToggles,

    /// Stop at the first blocking layer instead of collecting every reason.
    pub short_circuit: bool,

    /// Fail-closed mode: a reviewer failure blocks the response instead of
    /// downgrading to a review flag.
    pub fail_closed: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layers: LayerToggles::default(),
            short_circuit: true,
            fail_closed: true,
        }
    }
}

impl EngineConfig {
    /// A configuration with every layer disabled.
    ///
    /// Useful for demonstrating unguarded behavior; everything screens as
    /// `Allow`.
    pub fn unguarded() -> Self {
        Self {
            layers: LayerToggles::none(),
            ..Self::default()
        }
    }
}

/// Per-layer on/off switches.
///
/// Pattern layers default to on. Constitutional review defaults to off
/// because it needs an external reviewer installed via
/// [`GuardrailEngine::with_reviewer`](crate::GuardrailEngine::with_reviewer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerToggles {
    /// Scan user input for injection patterns.
    pub input_validation: bool,

    /// Verify requests stay within the agent's authorized actions.
    pub scope_enforcement: bool,

    /// Queue high-risk actions for human approval.
    pub escalation: bool,

    /// Scan agent responses for sensitive content.
    pub output_filter: bool,

    /// Have a second model review draft responses.
    pub constitutional_review: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            input_validation: true,
            scope_enforcement: true,
            escalation: true,
            output_filter: true,
            constitutional_review: false,
        }
    }
}

impl LayerToggles {
    /// All layers off.
    pub fn none() -> Self {
        Self {
            input_validation: false,
            scope_enforcement: false,
            escalation: false,
            output_filter: false,
            constitutional_review: false,
        }
    }

    /// All layers on, including constitutional review.
    pub fn all() -> Self {
        Self {
            input_validation: true,
            scope_enforcement: true,
            escalation: true,
            output_filter: true,
            constitutional_review: true,
        }
    }

    /// True if any layer is active.
    pub fn any_active(&self) -> bool {
        self.input_validation
            || self.scope_enforcement
            || self.escalation
            || self.output_filter
            || self.constitutional_review
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.short_circuit);
        assert!(config.fail_closed);
        assert!(config.layers.input_validation);
        assert!(!config.layers.constitutional_review);
    }

    #[test]
    fn test_unguarded_has_no_active_layers() {
        let config = EngineConfig::unguarded();
        assert!(!config.layers.any_active());
    }

    #[test]
    fn test_config_serialization() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.short_circuit, config.short_circuit);
        assert_eq!(parsed.layers.escalation, config.layers.escalation);
    }
}

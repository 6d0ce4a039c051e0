//! The guardrail engine facade.
//!
//! This module provides the main entry point for screening agent traffic.
//! The [`GuardrailEngine`] struct owns the pattern classifier and the
//! optional reviewer, and folds their results into a single [`Verdict`].

use guardrail_filter::Classifier;

use crate::{
    config::EngineConfig,
    review::ConstitutionalReviewer,
    verdict::{BlockReason, ReviewFlag, Verdict},
};

use tracing::{debug, info, warn};

/// The layered screening engine.
///
/// # Screening Model
///
/// Two pipelines share one configuration:
///
/// - [`screen_input`](Self::screen_input) runs before the model sees the
///   user's message: input validation, then scope enforcement, then
///   escalation.
/// - [`screen_output`](Self::screen_output) runs before the user sees the
///   model's response: output filtering, then constitutional review.
///
/// Blocking layers contribute [`BlockReason`]s; escalation and reviewer
/// degradation contribute [`ReviewFlag`]s. Any block reason outweighs any
/// flag. With `short_circuit` enabled the pipeline stops at the first
/// blocking layer.
///
/// # Example
///
/// ```rust
/// use guardrail_core::{EngineConfig, GuardrailEngine};
///
/// let engine = GuardrailEngine::new(EngineConfig::default());
///
/// // An escalation-worthy request is queued for a human, not blocked.
/// let verdict = engine.screen_input("I'd like a refund for order ORD-9923.");
/// assert!(verdict.requires_review());
/// ```
pub struct GuardrailEngine {
    /// Configuration.
    config: EngineConfig,

    /// Pattern classifier shared by all pattern layers.
    classifier: Classifier,

    /// Optional second-model reviewer for draft responses.
    reviewer: Option<Box<dyn ConstitutionalReviewer>>,
}

impl GuardrailEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        info!(
            short_circuit = config.short_circuit,
            fail_closed = config.fail_closed,
            "guardrail engine initialized"
        );
        Self {
            config,
            classifier: Classifier::new(),
            reviewer: None,
        }
    }

    /// Install a constitutional reviewer.
    ///
    /// The reviewer only runs when `layers.constitutional_review` is also
    /// enabled. Enabling the layer without installing a reviewer logs a
    /// warning and skips the layer.
    pub fn with_reviewer(mut self, reviewer: Box<dyn ConstitutionalReviewer>) -> Self {
        self.reviewer = Some(reviewer);
        self
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The underlying pattern classifier.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Screen a user message before it reaches the model.
    ///
    /// Runs the enabled pre-LLM layers in order. Input validation and scope
    /// enforcement block; escalation queues the request for human approval
    /// via a `Review` verdict.
    pub fn screen_input(&self, text: &str) -> Verdict {
        let layers = &self.config.layers;
        let mut reasons = Vec::new();

        if layers.input_validation {
            let result = self.classifier.check_input(text);
            if result.triggered {
                warn!(
                    matches = result.match_count(),
                    risk = result.risk_score,
                    "input validation triggered"
                );
                reasons.push(BlockReason::InjectionDetected {
                    labels: owned_labels(&result),
                });
                if self.config.short_circuit {
                    return Verdict::block(reasons);
                }
            } else {
                debug!("input validation passed");
            }
        }

        if layers.scope_enforcement {
            let result = self.classifier.check_scope(text);
            if result.triggered {
                warn!(matches = result.match_count(), "scope enforcement triggered");
                reasons.push(BlockReason::ScopeViolation {
                    labels: owned_labels(&result),
                });
                if self.config.short_circuit {
                    return Verdict::block(reasons);
                }
            }
        }

        if !reasons.is_empty() {
            return Verdict::block(reasons);
        }

        if layers.escalation {
            let result = self.classifier.check_escalation(text);
            if result.triggered {
                info!(
                    matches = result.match_count(),
                    "request queued for human approval"
                );
                return Verdict::review(vec![ReviewFlag::EscalationRequired {
                    labels: owned_labels(&result),
                }]);
            }
        }

        debug!("input passed all pre-LLM layers");
        Verdict::allow()
    }

    /// Screen a model response before the user sees it.
    ///
    /// Runs the output filter, then the constitutional reviewer when one is
    /// installed and enabled. A reviewer failure blocks when the engine is
    /// fail-closed and downgrades to a review flag otherwise; it is never a
    /// silent pass.
    pub fn screen_output(&self, user_message: &str, response: &str) -> Verdict {
        let layers = &self.config.layers;
        let mut reasons = Vec::new();
        let mut flags = Vec::new();

        if layers.output_filter {
            let result = self.classifier.check_output(response);
            if result.triggered {
                warn!(matches = result.match_count(), "output filter triggered");
                reasons.push(BlockReason::SensitiveOutput {
                    labels: owned_labels(&result),
                });
                if self.config.short_circuit {
                    return Verdict::block(reasons);
                }
            } else {
                debug!("output filter passed");
            }
        }

        if layers.constitutional_review {
            match &self.reviewer {
                None => {
                    warn!("constitutional review enabled but no reviewer installed; skipping");
                }
                Some(reviewer) => match reviewer.review(user_message, response) {
                    Ok(verdict) if !verdict.safe => {
                        warn!(
                            risk = %verdict.risk_level,
                            "constitutional reviewer rejected response"
                        );
                        reasons.push(BlockReason::ReviewerRejected {
                            violations: verdict.violations,
                            risk_level: verdict.risk_level,
                        });
                    }
                    Ok(_) => {
                        debug!("constitutional reviewer approved response");
                    }
                    Err(e) => {
                        if self.config.fail_closed {
                            warn!(error = %e, "reviewer failed; blocking (fail-closed)");
                            reasons.push(BlockReason::ReviewerUnavailable {
                                detail: e.to_string(),
                            });
                        } else {
                            warn!(error = %e, "reviewer failed; flagging for review");
                            flags.push(ReviewFlag::ReviewerUnavailable {
                                detail: e.to_string(),
                            });
                        }
                    }
                },
            }
        }

        if !reasons.is_empty() {
            Verdict::block(reasons)
        } else if !flags.is_empty() {
            Verdict::review(flags)
        } else {
            Verdict::allow()
        }
    }
}

fn owned_labels(result: &guardrail_filter::Classification) -> Vec<String> {
    result.labels().into_iter().map(str::to_string).collect()
}

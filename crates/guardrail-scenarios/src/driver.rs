//! The scenario driver and coverage matrix.
//!
//! The driver feeds each catalog scenario through the pattern layers and
//! records what actually triggers. The coverage matrix is the complementary
//! view built from scenario metadata: which layers *help* against which
//! attack, including the model-based layer the driver cannot exercise.

use guardrail_filter::{Classification, Classifier};
use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, AttackCategory, AttackScenario};
use crate::defense::Defense;

/// Pattern-layer results for one scenario.
///
/// Pre-LLM layers run against the attack prompt; the output filter runs
/// against the unprotected response (the breach the filter would have to
/// catch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// The scenario's name.
    pub scenario: String,

    /// Input validation on the attack prompt.
    pub input_filter: Classification,

    /// Scope enforcement on the attack prompt.
    pub scope_check: Classification,

    /// Escalation triggers on the attack prompt.
    pub escalation: Classification,

    /// Output filtering on the unprotected response.
    pub output_filter: Classification,
}

impl ScenarioReport {
    /// Classify one scenario.
    pub fn run(scenario: &AttackScenario, classifier: &Classifier) -> Self {
        Self {
            scenario: scenario.name.clone(),
            input_filter: classifier.check_input(&scenario.attack_prompt),
            scope_check: classifier.check_scope(&scenario.attack_prompt),
            escalation: classifier.check_escalation(&scenario.attack_prompt),
            output_filter: classifier.check_output(&scenario.unprotected_response),
        }
    }

    /// The pattern-backed layers that triggered.
    pub fn triggered_layers(&self) -> Vec<Defense> {
        let mut layers = Vec::new();
        if self.input_filter.triggered {
            layers.push(Defense::InputFilter);
        }
        if self.scope_check.triggered {
            layers.push(Defense::ScopeCheck);
        }
        if self.escalation.triggered {
            layers.push(Defense::HumanReview);
        }
        if self.output_filter.triggered {
            layers.push(Defense::OutputFilter);
        }
        layers
    }

    /// True if no pre-LLM pattern layer flags the attack prompt.
    ///
    /// These are the attacks that reach the model untouched; only output
    /// filtering or model-based review can still stop them.
    pub fn evades_prescreen(&self) -> bool {
        !self.input_filter.triggered && !self.scope_check.triggered && !self.escalation.triggered
    }
}

/// Run the whole catalog through the classifier.
pub fn run_all(classifier: &Classifier) -> Vec<ScenarioReport> {
    catalog()
        .iter()
        .map(|scenario| ScenarioReport::run(scenario, classifier))
        .collect()
}

/// One row of the coverage matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageRow {
    /// Scenario name.
    pub scenario: String,
    /// Attack class.
    pub category: AttackCategory,
    /// Layers that help against this attack (scenario metadata).
    pub covered_by: Vec<Defense>,
}

impl CoverageRow {
    /// True if the given layer helps against this row's attack.
    pub fn covers(&self, defense: Defense) -> bool {
        self.covered_by.contains(&defense)
    }
}

/// The scenario x defense coverage table.
///
/// Built from scenario metadata. Its teaching point is structural: no
/// single column is all checkmarks, so no single layer is sufficient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageMatrix {
    /// One row per catalog scenario.
    pub rows: Vec<CoverageRow>,
}

impl CoverageMatrix {
    /// Build the matrix from the scenario catalog.
    pub fn build() -> Self {
        let rows = catalog()
            .into_iter()
            .map(|scenario| CoverageRow {
                scenario: scenario.name,
                category: scenario.category,
                covered_by: scenario.defenses,
            })
            .collect();
        Self { rows }
    }

    /// How many scenarios the given layer helps against.
    pub fn coverage_count(&self, defense: Defense) -> usize {
        self.rows.iter().filter(|row| row.covers(defense)).count()
    }

    /// True if one layer covers every scenario (it never does).
    pub fn covers_all(&self, defense: Defense) -> bool {
        self.rows.iter().all(|row| row.covers(defense))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_override_caught_by_input_filter() {
        let classifier = Classifier::new();
        let reports = run_all(&classifier);
        let direct = &reports[0];
        assert_eq!(direct.scenario, "Direct Instruction Override");
        assert!(direct.input_filter.triggered);
        assert!(direct
            .input_filter
            .labels()
            .contains(&"Direct instruction override"));
    }

    #[test]
    fn test_gradual_escalation_evades_input_filter() {
        let classifier = Classifier::new();
        let reports = run_all(&classifier);
        let escalation = &reports[2];
        assert_eq!(escalation.scenario, "Gradual Escalation");
        // The attack uses only innocuous words; the injection patterns see
        // nothing, but the scope check catches the cross-account request.
        assert!(!escalation.input_filter.triggered);
        assert!(escalation.scope_check.triggered);
    }

    #[test]
    fn test_refund_override_evades_both_pattern_prefilters() {
        let classifier = Classifier::new();
        let reports = run_all(&classifier);
        let refund = &reports[4];
        assert_eq!(refund.scenario, "Refund Policy Override");
        // The formatted amount ($1,249.99) defeats the high-value-refund
        // rule, and nothing in the prompt looks like an injection. Only the
        // escalation layer still fires, on the word "refund".
        assert!(!refund.input_filter.triggered);
        assert!(!refund.scope_check.triggered);
        assert!(refund.escalation.triggered);
        assert!(!refund.evades_prescreen());
    }

    #[test]
    fn test_refund_breach_also_evades_output_filter() {
        let classifier = Classifier::new();
        let reports = run_all(&classifier);
        let refund = &reports[4];
        // The breach response leaks no PII and no prompt fragments; the
        // output filter has nothing to match. Policy bypasses are invisible
        // to every pattern layer except escalation.
        assert!(!refund.output_filter.triggered);
    }

    #[test]
    fn test_every_breach_with_pii_caught_by_output_filter() {
        let classifier = Classifier::new();
        let reports = run_all(&classifier);
        // All scenarios except the refund override leak customer data or
        // prompt fragments in their unprotected response.
        for (i, report) in reports.iter().enumerate() {
            if i == 4 {
                continue;
            }
            assert!(
                report.output_filter.triggered,
                "{} breach should trip the output filter",
                report.scenario
            );
        }
    }

    #[test]
    fn test_indirect_injection_caught_by_embedded_tag_rule() {
        let classifier = Classifier::new();
        let reports = run_all(&classifier);
        let indirect = &reports[5];
        assert!(indirect
            .input_filter
            .labels()
            .contains(&"Embedded system tags"));
        assert!(indirect
            .output_filter
            .labels()
            .contains(&"Bulk data export detected"));
    }

    #[test]
    fn test_matrix_has_no_complete_column() {
        let matrix = CoverageMatrix::build();
        for defense in Defense::ALL {
            assert!(
                !matrix.covers_all(defense),
                "{defense} should not cover every scenario"
            );
        }
    }

    #[test]
    fn test_constitutional_review_has_widest_coverage() {
        let matrix = CoverageMatrix::build();
        let constitutional = matrix.coverage_count(Defense::ConstitutionalReview);
        for defense in Defense::ALL {
            assert!(constitutional >= matrix.coverage_count(defense));
        }
    }
}

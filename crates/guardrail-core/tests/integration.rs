//! # Engine Integration Tests
//!
//! End-to-end screening: the engine's pre-LLM and post-LLM pipelines
//! running against the scenario catalog and the simulated vulnerable agent.

use guardrail_core::{BlockReason, EngineConfig, GuardrailEngine, ReviewFlag, Verdict};
use guardrail_scenarios::{catalog, VulnerableResponder};

fn guarded() -> GuardrailEngine {
    GuardrailEngine::new(EngineConfig::default())
}

// =============================================================================
// PRE-LLM SCREENING AGAINST THE CATALOG
// =============================================================================

#[test]
fn test_direct_override_blocked_at_input() {
    let engine = guarded();
    let scenario = &catalog()[0];
    let verdict = engine.screen_input(&scenario.attack_prompt);

    assert!(verdict.is_blocked());
    if let Verdict::Block { reasons } = verdict {
        assert!(matches!(reasons[0], BlockReason::InjectionDetected { .. }));
    }
}

#[test]
fn test_dan_roleplay_blocked_at_input() {
    let engine = guarded();
    let scenario = &catalog()[1];
    assert!(engine.screen_input(&scenario.attack_prompt).is_blocked());
}

#[test]
fn test_gradual_escalation_blocked_by_scope_not_input() {
    let engine = guarded();
    let scenario = &catalog()[2];
    let verdict = engine.screen_input(&scenario.attack_prompt);

    assert!(verdict.is_blocked());
    if let Verdict::Block { reasons } = verdict {
        // The input filter saw nothing; the block comes from scope
        // enforcement catching the cross-account request.
        assert!(matches!(reasons[0], BlockReason::ScopeViolation { .. }));
    }
}

#[test]
fn test_prompt_extraction_blocked_at_input() {
    let engine = guarded();
    let scenario = &catalog()[3];
    assert!(engine.screen_input(&scenario.attack_prompt).is_blocked());
}

#[test]
fn test_refund_override_queued_for_human_approval() {
    let engine = guarded();
    let scenario = &catalog()[4];
    let verdict = engine.screen_input(&scenario.attack_prompt);

    // Neither pattern pre-filter recognizes this attack; the escalation
    // layer queues it for a human instead of letting it through.
    assert!(verdict.requires_review());
    if let Verdict::Review { flags } = verdict {
        assert!(matches!(flags[0], ReviewFlag::EscalationRequired { .. }));
    }
}

#[test]
fn test_indirect_injection_blocked_at_input() {
    let engine = guarded();
    let scenario = &catalog()[5];
    assert!(engine.screen_input(&scenario.attack_prompt).is_blocked());
}

// =============================================================================
// POST-LLM SCREENING OF BREACH RESPONSES
// =============================================================================

#[test]
fn test_output_filter_catches_catalog_breaches() {
    let engine = guarded();
    for (i, scenario) in catalog().iter().enumerate() {
        let verdict = engine.screen_output(&scenario.attack_prompt, &scenario.unprotected_response);
        if i == 4 {
            // The refund bypass leaks no data; no output pattern can see it.
            assert!(verdict.is_allowed(), "{}", scenario.name);
        } else {
            assert!(verdict.is_blocked(), "{}", scenario.name);
        }
    }
}

#[test]
fn test_unguarded_engine_passes_every_attack() {
    let engine = GuardrailEngine::new(EngineConfig::unguarded());
    for scenario in catalog() {
        assert!(engine.screen_input(&scenario.attack_prompt).is_allowed());
        assert!(engine
            .screen_output(&scenario.attack_prompt, &scenario.unprotected_response)
            .is_allowed());
    }
}

#[test]
fn test_simulated_breaches_stopped_by_output_screen() {
    // Run attacks against the unguarded vulnerable agent, then screen what
    // it says with the guarded engine: every data leak is caught at the
    // output boundary.
    let engine = guarded();
    let responder = VulnerableResponder::new();

    for scenario in catalog() {
        let breach = responder.respond(&scenario.attack_prompt).unwrap();
        let verdict = engine.screen_output(&scenario.attack_prompt, &breach.response);

        if breach.breach_type.contains("Leak") {
            assert!(verdict.is_blocked(), "{}", scenario.name);
        } else {
            assert!(verdict.is_allowed(), "{}", scenario.name);
        }
    }
}

// =============================================================================
// LAYERED DEFENSE
// =============================================================================

#[test]
fn test_every_catalog_attack_is_stopped_somewhere() {
    // Defense in depth: for each scenario, at least one boundary (input or
    // output) produces a non-Allow verdict.
    let engine = guarded();
    for scenario in catalog() {
        let input = engine.screen_input(&scenario.attack_prompt);
        let output =
            engine.screen_output(&scenario.attack_prompt, &scenario.unprotected_response);
        assert!(
            !input.is_allowed() || !output.is_allowed(),
            "{} slipped through every layer",
            scenario.name
        );
    }
}

#[test]
fn test_no_single_layer_stops_every_attack() {
    // Enable one pattern layer at a time; each configuration must miss at
    // least one catalog attack at the input boundary.
    let layer_configs: [fn(&mut EngineConfig); 3] = [
        |c| c.layers.input_validation = true,
        |c| c.layers.scope_enforcement = true,
        |c| c.layers.escalation = true,
    ];

    for enable in layer_configs {
        let mut config = EngineConfig::unguarded();
        enable(&mut config);
        let engine = GuardrailEngine::new(config);

        let missed = catalog()
            .iter()
            .filter(|s| engine.screen_input(&s.attack_prompt).is_allowed())
            .count();
        assert!(missed > 0, "a single layer should not cover the catalog");
    }
}

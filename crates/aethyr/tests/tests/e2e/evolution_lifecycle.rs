//! E2E: commit, rejection and reproducibility of node evolution.

use aethyr_core::{Bounds, CoreConfig, EvolutionRequest, EvolutionStatus};
use aethyr_evolution::FixedRiskAssessor;
use aethyr_tests::{parameter_invariants_hold, seeded_core, seeded_core_with};

#[test]
fn default_node_commits_and_keeps_invariants() {
    let mut core = seeded_core(10);
    for _ in 0..100 {
        let report = core.evolve_default();
        assert_eq!(report.status, EvolutionStatus::Committed);
        assert!(parameter_invariants_hold(&report.parameters));
    }
    assert_eq!(core.metrics().committed, 100);
}

#[test]
fn forced_risk_rejection_is_idempotent() {
    let mut core = seeded_core(11).with_risk_assessor(FixedRiskAssessor(0.75));
    let before = core.parameters().clone();
    let first = core.evolve(EvolutionRequest::new(0.8, 20));
    let second = core.evolve(EvolutionRequest::new(0.8, 20));
    assert_eq!(first, before);
    assert_eq!(second, before);
    assert_eq!(core.metrics().rejected, 2);
}

#[test]
fn zero_threshold_rejects_everything() {
    let config = CoreConfig {
        bounds: Bounds::new(0.8, 0.0).unwrap(),
        ..CoreConfig::seeded(12)
    };
    let mut core = seeded_core_with(config);
    let before = core.parameters().clone();
    let report = core.evolve_default();
    assert_eq!(report.status, EvolutionStatus::Rejected);
    assert!(report.risk_score > 0.0);
    assert_eq!(core.parameters(), &before);
}

#[test]
fn same_seed_same_history() {
    let requests: Vec<EvolutionRequest> = (1..=20)
        .map(|i| EvolutionRequest::new(0.05 * i as f64, (i % 4) as u32 + 1))
        .collect();

    let run = |seed: u64| {
        let mut core = seeded_core(seed);
        requests
            .iter()
            .map(|r| core.evolve_report(*r))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(99), run(99));
    assert_ne!(run(99), run(100));
}

#[test]
fn committed_state_feeds_next_call() {
    let mut core = seeded_core(13);
    let first = core.evolve(EvolutionRequest::new(0.8, 1));
    assert_eq!(core.parameters(), &first);
    let second = core.evolve(EvolutionRequest::new(0.8, 1));
    assert_ne!(first, second);
}

#[test]
fn autonomy_caps_mutation_probability() {
    let config = CoreConfig {
        bounds: Bounds::new(0.0, 0.2).unwrap(),
        ..CoreConfig::seeded(14)
    };
    let mut core = seeded_core_with(config);
    let before = core.parameters().clone();
    let report = core.evolve_report(EvolutionRequest::new(1.0, 10));
    assert_eq!(report.effective_mutation_rate, 0.0);
    for (name, value) in report.parameters.iter() {
        if name != "learning_rate" {
            assert_eq!(Some(value), before.get(name));
        }
    }
}

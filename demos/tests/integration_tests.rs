//! Integration tests for the demo suite.

use std::f64::consts::TAU;

use alsvid_demos::layouts::entangling_ladder;
use alsvid_demos::runners::MaxCutRunner;
use alsvid_opt::{INITIAL_ROTATION, ObjectiveAdapter, Optimizer, PatternSearch};
use alsvid_sim::{ExpectationEvaluator, Graph};

/// Every preset graph runs end to end and reports a consistent result.
#[test]
fn test_all_preset_graphs_run() {
    for graph in [
        Graph::square_4(),
        Graph::complete_4(),
        Graph::ring_6(),
        Graph::braided_6(),
    ] {
        let n_nodes = graph.n_nodes;
        let result = MaxCutRunner::new(graph.clone())
            .with_depth(n_nodes as u32 + 1)
            .run()
            .unwrap();

        assert_eq!(result.rotations.len(), n_nodes);
        assert_eq!(result.dominant_state.len(), n_nodes);
        assert!(result.cut_value <= result.best_cut);
        assert!(result.approximation_ratio >= 0.0);
        assert!(result.approximation_ratio <= 1.0);
        for rotation in &result.rotations {
            assert!((0.0..TAU).contains(rotation));
        }
    }
}

/// The search never worsens the π-seeded cost.
#[test]
fn test_search_improves_on_seed() {
    let graph = Graph::braided_6();
    let mut model = entangling_ladder(6, 8).unwrap();
    let mut evaluator = ExpectationEvaluator::maxcut(&graph).unwrap();
    let mut adapter = ObjectiveAdapter::new(&mut model, &mut evaluator);

    let seed = vec![INITIAL_ROTATION; 6];
    let seed_cost = adapter.evaluate_rotations(&seed).unwrap();

    let result = PatternSearch::default()
        .minimize(|angles| adapter.evaluate_rotations(angles), seed)
        .unwrap();

    assert!(result.cost.unwrap() <= seed_cost);
}

/// Running the search again from its own output cannot regress.
#[test]
fn test_repeated_search_is_monotonic() {
    let graph = Graph::square_4();
    let mut model = entangling_ladder(4, 5).unwrap();
    let mut evaluator = ExpectationEvaluator::maxcut(&graph).unwrap();
    let mut adapter = ObjectiveAdapter::new(&mut model, &mut evaluator);

    let search = PatternSearch::default();
    let first = search
        .minimize(|angles| adapter.evaluate_rotations(angles), vec![INITIAL_ROTATION; 4])
        .unwrap();
    let second = search
        .minimize(|angles| adapter.evaluate_rotations(angles), first.rotations.clone())
        .unwrap();

    assert!(second.cost.unwrap() <= first.cost.unwrap());
}

/// More epochs never produce a worse final cost.
#[test]
fn test_epochs_are_monotonic() {
    let graph = Graph::ring_6();
    let one = MaxCutRunner::new(graph.clone())
        .with_depth(7)
        .run()
        .unwrap();
    let three = MaxCutRunner::new(graph)
        .with_depth(7)
        .with_epochs(3)
        .run()
        .unwrap();

    assert!(three.cost <= one.cost + 1e-9);
}

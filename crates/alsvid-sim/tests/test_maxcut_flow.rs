//! End-to-end tests: grid → compiled operations → expectation evaluator →
//! greedy search.

use std::f64::consts::PI;

use alsvid_grid::{CircuitGridModel, CircuitNode, GateKind, GridPosition};
use alsvid_opt::{CircuitEvaluator, ObjectiveAdapter, Optimizer, PatternSearch};
use alsvid_sim::{ExpectationEvaluator, Graph};

/// Ry(π) on every qubit in column 0, then a controlled-X ladder down the
/// diagonal.
fn ladder_model(num_qubits: u32, depth: u32) -> CircuitGridModel {
    let mut model = CircuitGridModel::new(num_qubits, depth);
    for qubit in 0..num_qubits {
        model
            .set_node(
                GridPosition::new(qubit, 0),
                CircuitNode::new(GateKind::ry(PI)),
            )
            .unwrap();
    }
    for qubit in 1..num_qubits.min(depth) {
        model
            .set_node(
                GridPosition::new(qubit, qubit),
                CircuitNode::new(GateKind::X).with_control(qubit - 1),
            )
            .unwrap();
    }
    model
}

#[test]
fn compiled_ladder_evaluates_cleanly() {
    let graph = Graph::square_4();
    let model = ladder_model(4, 5);
    let mut evaluator = ExpectationEvaluator::maxcut(&graph).unwrap();

    let operations = model.compute_operations();
    assert_eq!(operations.len(), 7); // 4 rotations + 3 controlled-X

    let evaluation = evaluator.evaluate(&operations).unwrap();
    assert_eq!(evaluation.dominant_state.len(), 4);
    assert!(evaluation.cost.is_finite());
}

#[test]
fn all_flipped_register_cuts_nothing() {
    let graph = Graph::square_4();
    let (offset, _) = graph.ising_terms();
    let mut model = CircuitGridModel::new(4, 1);
    for qubit in 0..4 {
        model
            .set_node(GridPosition::new(qubit, 0), CircuitNode::new(GateKind::X))
            .unwrap();
    }

    let mut evaluator = ExpectationEvaluator::maxcut(&graph).unwrap();
    let evaluation = evaluator.evaluate(&model.compute_operations()).unwrap();

    // |1111⟩ puts every node on the same side: zero cut.
    assert_eq!(evaluation.dominant_state, "1111");
    assert!((graph.cut_value_of_bits(&evaluation.dominant_state)).abs() < 1e-12);
    assert!((evaluation.cost - offset).abs() < 1e-9);
}

#[test]
fn search_never_worsens_the_seeded_cost() {
    let graph = Graph::braided_6();
    let mut model = ladder_model(6, 8);
    let mut evaluator = ExpectationEvaluator::maxcut(&graph).unwrap();
    let mut adapter = ObjectiveAdapter::new(&mut model, &mut evaluator);

    let seed = adapter.initial_rotations();
    assert_eq!(seed.len(), 6);
    let seed_cost = adapter.evaluate_rotations(&seed).unwrap();

    let search = PatternSearch::default();
    let result = search
        .minimize(|x| adapter.evaluate_rotations(x), seed)
        .unwrap();

    let final_cost = result.cost.unwrap();
    assert!(final_cost <= seed_cost);

    // The reported cost is reproducible from the returned vector.
    let replayed = adapter.evaluate_rotations(&result.rotations).unwrap();
    assert!((replayed - final_cost).abs() < 1e-9);

    // And the dominant state maps onto a real partition of the graph.
    let evaluation = adapter.evaluate_full(&result.rotations).unwrap();
    assert_eq!(evaluation.dominant_state.len(), 6);
    let cut = graph.cut_value_of_bits(&evaluation.dominant_state);
    assert!(cut >= 0.0);
}

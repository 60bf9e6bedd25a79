//! Property-based tests for provider IR roundtrip conversion.
//!
//! Tests that circuit → provider program → circuit preserves the gate
//! sequence for gates with single-primitive lowerings.

use proptest::prelude::*;
use qbridge_adapter::{from_braket, to_braket, wrap_verbatim_boxes};
use qbridge_ir::{Circuit, QubitId};

/// Generate a random simple circuit for property testing.
///
/// Generates circuits with:
/// - 1-5 qubits
/// - 1-10 gates whose lowering is a single provider primitive
fn arb_simple_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=5).prop_flat_map(|num_qubits| {
        (
            Just(num_qubits),
            prop::collection::vec(arb_gate_op(num_qubits), 1..=10),
        )
            .prop_map(move |(nq, ops)| {
                let mut circuit = Circuit::with_size("test", nq, 0);
                for op in ops {
                    op.apply(&mut circuit);
                }
                circuit
            })
    })
}

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    Y(u32),
    Z(u32),
    Rz(u32, f64),
    CX(u32, u32),
    Swap(u32, u32),
}

impl GateOp {
    fn apply(self, circuit: &mut Circuit) {
        match self {
            GateOp::H(q) => {
                let _ = circuit.h(QubitId(q));
            }
            GateOp::X(q) => {
                let _ = circuit.x(QubitId(q));
            }
            GateOp::Y(q) => {
                let _ = circuit.y(QubitId(q));
            }
            GateOp::Z(q) => {
                let _ = circuit.z(QubitId(q));
            }
            GateOp::Rz(q, theta) => {
                let _ = circuit.rz(theta, QubitId(q));
            }
            GateOp::CX(q1, q2) => {
                let _ = circuit.cx(QubitId(q1), QubitId(q2));
            }
            GateOp::Swap(q1, q2) => {
                let _ = circuit.swap(QubitId(q1), QubitId(q2));
            }
        }
    }
}

/// Generate a random gate operation for a circuit with given number of qubits.
fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    // For single-qubit circuits, only generate single-qubit gates
    if num_qubits < 2 {
        prop_oneof![
            (0..num_qubits).prop_map(GateOp::H),
            (0..num_qubits).prop_map(GateOp::X),
            (0..num_qubits).prop_map(GateOp::Y),
            (0..num_qubits).prop_map(GateOp::Z),
            (0..num_qubits, 0.0..std::f64::consts::TAU).prop_map(|(q, t)| GateOp::Rz(q, t)),
        ]
        .boxed()
    } else {
        prop_oneof![
            (0..num_qubits).prop_map(GateOp::H),
            (0..num_qubits).prop_map(GateOp::X),
            (0..num_qubits).prop_map(GateOp::Y),
            (0..num_qubits).prop_map(GateOp::Z),
            (0..num_qubits, 0.0..std::f64::consts::TAU).prop_map(|(q, t)| GateOp::Rz(q, t)),
            (0..num_qubits, 0..num_qubits)
                .prop_filter("Control and target must differ", |(c, t)| c != t)
                .prop_map(|(c, t)| GateOp::CX(c, t)),
            (0..num_qubits, 0..num_qubits)
                .prop_filter("Swap qubits must differ", |(a, b)| a != b)
                .prop_map(|(a, b)| GateOp::Swap(a, b)),
        ]
        .boxed()
    }
}

/// Project a circuit onto its gate sequence: (name, qubit indices) pairs.
fn gate_sequence(circuit: &Circuit) -> Vec<(String, Vec<u32>)> {
    circuit
        .instructions()
        .iter()
        .filter(|i| i.is_gate())
        .map(|i| {
            (
                i.name().to_string(),
                i.qubits.iter().map(|q| q.0).collect(),
            )
        })
        .collect()
}

proptest! {
    /// Test that circuit → program → circuit preserves the gate sequence.
    ///
    /// Properties verified:
    /// - Gate names and qubit operands survive the roundtrip in order
    /// - The lifted circuit stays within the original qubit count
    #[test]
    fn test_roundtrip_preserves_gate_sequence(circuit in arb_simple_circuit()) {
        let program = to_braket(&circuit).expect("Failed to lower circuit");
        let lifted = from_braket(&program).expect("Failed to lift program back");

        prop_assert_eq!(gate_sequence(&lifted), gate_sequence(&circuit),
            "Gate sequence mismatch after roundtrip");
        prop_assert!(lifted.num_qubits() <= circuit.num_qubits(),
            "Lifted circuit touches more qubits than the original");
    }

    /// Test that lowering emits one instruction per single-primitive gate.
    #[test]
    fn test_lowering_is_one_to_one_for_lifts(circuit in arb_simple_circuit()) {
        let program = to_braket(&circuit).expect("Failed to lower circuit");

        prop_assert_eq!(program.instructions.len(), gate_sequence(&circuit).len());
        prop_assert!(program.result_types.is_empty(),
            "Circuit without measurements produced result declarations");
    }

    /// Test that lowering is deterministic.
    #[test]
    fn test_lowering_is_deterministic(circuit in arb_simple_circuit()) {
        let program1 = to_braket(&circuit).expect("First conversion failed");
        let program2 = to_braket(&circuit).expect("Second conversion failed");

        prop_assert_eq!(program1, program2, "Lowering is not deterministic");
    }

    /// Test that verbatim wrapping preserves length and adds exactly the
    /// two region markers per circuit.
    #[test]
    fn test_verbatim_wrap_shape(circuits in prop::collection::vec(arb_simple_circuit(), 0..4)) {
        let programs: Vec<_> = circuits
            .iter()
            .map(|c| to_braket(c).expect("Failed to lower circuit"))
            .collect();
        let original = programs.clone();

        let wrapped = wrap_verbatim_boxes(&programs);

        prop_assert_eq!(wrapped.len(), programs.len());
        prop_assert_eq!(&programs, &original, "Inputs were mutated");
        for (wrapped, source) in wrapped.iter().zip(&programs) {
            prop_assert_eq!(wrapped.instructions.len(), source.instructions.len() + 2);
            prop_assert!(wrapped.has_verbatim_markers());
            prop_assert_eq!(&wrapped.result_types, &source.result_types);
        }
    }
}

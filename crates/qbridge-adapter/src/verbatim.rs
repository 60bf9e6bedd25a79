//! Verbatim region wrapping.
//!
//! Devices skip their own transpilation for instructions inside a verbatim
//! region. Wrapping is applied to provider circuits just before submission.

use qbridge_braket::BraketCircuit;

/// Wrap each circuit's instructions in a verbatim region.
///
/// Result type declarations are carried over unchanged. The inputs are not
/// mutated; the output has one circuit per input, in order.
pub fn wrap_verbatim_boxes(circuits: &[BraketCircuit]) -> Vec<BraketCircuit> {
    circuits
        .iter()
        .map(|circuit| {
            let mut wrapped = BraketCircuit::new();
            wrapped.add_verbatim_box(circuit.instructions.clone());
            wrapped.result_types = circuit.result_types.clone();
            wrapped
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbridge_braket::{BraketGate, Observable, Operator, ResultType};

    fn sample_circuit() -> BraketCircuit {
        let mut circuit = BraketCircuit::new();
        circuit
            .add_gate(BraketGate::H, vec![0])
            .add_gate(BraketGate::CNot, vec![0, 1])
            .add_result_type(ResultType::Sample {
                observable: Observable::Z,
                targets: vec![0],
            });
        circuit
    }

    #[test]
    fn test_wrap_is_length_preserving() {
        let circuits = vec![sample_circuit(), BraketCircuit::new()];
        let wrapped = wrap_verbatim_boxes(&circuits);
        assert_eq!(wrapped.len(), 2);
    }

    #[test]
    fn test_wrap_brackets_instructions() {
        let wrapped = wrap_verbatim_boxes(&[sample_circuit()]);
        let instructions = &wrapped[0].instructions;

        assert_eq!(instructions.len(), 4);
        assert_eq!(instructions[0].operator, Operator::StartVerbatimBox);
        assert_eq!(instructions[1].operator, Operator::Gate(BraketGate::H));
        assert_eq!(instructions[2].operator, Operator::Gate(BraketGate::CNot));
        assert_eq!(instructions[3].operator, Operator::EndVerbatimBox);
    }

    #[test]
    fn test_wrap_carries_result_types() {
        let wrapped = wrap_verbatim_boxes(&[sample_circuit()]);
        assert_eq!(wrapped[0].result_types, sample_circuit().result_types);
    }

    #[test]
    fn test_wrap_does_not_mutate_inputs() {
        let circuits = vec![sample_circuit()];
        let _ = wrap_verbatim_boxes(&circuits);
        assert_eq!(circuits[0], sample_circuit());
        assert!(!circuits[0].has_verbatim_markers());
    }

    #[test]
    fn test_wrap_empty_circuit() {
        let wrapped = wrap_verbatim_boxes(&[BraketCircuit::new()]);
        assert_eq!(wrapped[0].instructions.len(), 2);
        assert!(wrapped[0].has_verbatim_markers());
    }
}

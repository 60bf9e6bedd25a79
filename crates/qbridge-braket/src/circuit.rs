//! Provider-side circuit representation.
//!
//! A provider circuit is a flat instruction list addressing qubits by
//! numeric index, plus declared result types. Control qubits live on the
//! instruction rather than the gate, which is how controlled variants of
//! base gates are expressed.

use serde::{Deserialize, Serialize};

use crate::gate::BraketGate;

/// A Pauli observable for result type declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Observable {
    /// Pauli-X observable.
    X,
    /// Pauli-Y observable.
    Y,
    /// Pauli-Z observable.
    Z,
}

/// A declared result type attached to a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultType {
    /// Per-shot sample of an observable on specific qubits.
    Sample {
        /// The observable to sample.
        observable: Observable,
        /// Qubit indices the observable acts on.
        targets: Vec<u32>,
    },
    /// Probability distribution over specific qubits.
    Probability {
        /// Qubit indices to report probabilities for.
        targets: Vec<u32>,
    },
}

impl ResultType {
    /// Get the qubit indices this result type targets.
    pub fn targets(&self) -> &[u32] {
        match self {
            ResultType::Sample { targets, .. } | ResultType::Probability { targets } => targets,
        }
    }
}

/// The operator of a provider instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operator {
    /// A gate application.
    Gate(BraketGate),
    /// Marker opening a verbatim region.
    StartVerbatimBox,
    /// Marker closing a verbatim region.
    EndVerbatimBox,
}

impl Operator {
    /// Get the operator name.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Gate(g) => g.name(),
            Operator::StartVerbatimBox => "start_verbatim_box",
            Operator::EndVerbatimBox => "end_verbatim_box",
        }
    }
}

/// A single provider instruction: an operator with control and target
/// qubit indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BraketInstruction {
    /// The operator to apply.
    pub operator: Operator,
    /// Control qubit indices, outermost first.
    pub control: Vec<u32>,
    /// Target qubit indices of the base operator.
    pub target: Vec<u32>,
}

impl BraketInstruction {
    /// Create a gate instruction with no extra controls.
    pub fn gate(gate: BraketGate, target: impl Into<Vec<u32>>) -> Self {
        Self {
            operator: Operator::Gate(gate),
            control: vec![],
            target: target.into(),
        }
    }

    /// Create a gate instruction with explicit control qubits.
    pub fn controlled(
        gate: BraketGate,
        control: impl Into<Vec<u32>>,
        target: impl Into<Vec<u32>>,
    ) -> Self {
        Self {
            operator: Operator::Gate(gate),
            control: control.into(),
            target: target.into(),
        }
    }

    /// Get the gate, if this instruction is a gate application.
    pub fn as_gate(&self) -> Option<&BraketGate> {
        match &self.operator {
            Operator::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// Check whether this instruction is a verbatim region marker.
    pub fn is_verbatim_marker(&self) -> bool {
        matches!(
            self.operator,
            Operator::StartVerbatimBox | Operator::EndVerbatimBox
        )
    }
}

/// A provider circuit: instructions plus declared result types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BraketCircuit {
    /// The ordered instruction list.
    pub instructions: Vec<BraketInstruction>,
    /// Declared result types.
    pub result_types: Vec<ResultType>,
}

impl BraketCircuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a gate over the given target qubits.
    pub fn add_gate(&mut self, gate: BraketGate, target: impl Into<Vec<u32>>) -> &mut Self {
        self.instructions.push(BraketInstruction::gate(gate, target));
        self
    }

    /// Append an instruction.
    pub fn add_instruction(&mut self, instruction: BraketInstruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    /// Append a result type declaration.
    pub fn add_result_type(&mut self, result_type: ResultType) -> &mut Self {
        self.result_types.push(result_type);
        self
    }

    /// Wrap a block of instructions in a verbatim region.
    ///
    /// The markers carry no qubit operands.
    pub fn add_verbatim_box(&mut self, instructions: Vec<BraketInstruction>) -> &mut Self {
        self.instructions.push(BraketInstruction {
            operator: Operator::StartVerbatimBox,
            control: vec![],
            target: vec![],
        });
        self.instructions.extend(instructions);
        self.instructions.push(BraketInstruction {
            operator: Operator::EndVerbatimBox,
            control: vec![],
            target: vec![],
        });
        self
    }

    /// Number of qubits touched by the circuit, computed as one past the
    /// highest referenced qubit index. Empty circuits have zero qubits.
    pub fn qubit_count(&self) -> u32 {
        self.instructions
            .iter()
            .flat_map(|i| i.control.iter().chain(i.target.iter()))
            .map(|q| q + 1)
            .max()
            .unwrap_or(0)
    }

    /// Check whether the circuit contains verbatim region markers.
    pub fn has_verbatim_markers(&self) -> bool {
        self.instructions.iter().any(|i| i.is_verbatim_marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Angle;

    #[test]
    fn test_empty_circuit() {
        let circuit = BraketCircuit::new();
        assert_eq!(circuit.qubit_count(), 0);
        assert!(circuit.instructions.is_empty());
        assert!(!circuit.has_verbatim_markers());
    }

    #[test]
    fn test_qubit_count_from_indices() {
        let mut circuit = BraketCircuit::new();
        circuit
            .add_gate(BraketGate::H, vec![0])
            .add_gate(BraketGate::CNot, vec![0, 4]);
        assert_eq!(circuit.qubit_count(), 5);
    }

    #[test]
    fn test_qubit_count_includes_controls() {
        let mut circuit = BraketCircuit::new();
        circuit.add_instruction(BraketInstruction::controlled(
            BraketGate::X,
            vec![7],
            vec![2],
        ));
        assert_eq!(circuit.qubit_count(), 8);
    }

    #[test]
    fn test_verbatim_box_markers() {
        let mut circuit = BraketCircuit::new();
        circuit.add_verbatim_box(vec![
            BraketInstruction::gate(BraketGate::Rz(Angle::Bound(0.5)), vec![0]),
        ]);
        assert_eq!(circuit.instructions.len(), 3);
        assert_eq!(circuit.instructions[0].operator, Operator::StartVerbatimBox);
        assert_eq!(circuit.instructions[2].operator, Operator::EndVerbatimBox);
        assert!(circuit.has_verbatim_markers());
        // Markers carry no operands and do not affect the qubit count.
        assert_eq!(circuit.qubit_count(), 1);
    }

    #[test]
    fn test_result_type_targets() {
        let sample = ResultType::Sample {
            observable: Observable::Z,
            targets: vec![0, 2],
        };
        assert_eq!(sample.targets(), &[0, 2]);

        let prob = ResultType::Probability { targets: vec![1] };
        assert_eq!(prob.targets(), &[1]);
    }
}

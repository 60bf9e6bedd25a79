//! Bidirectional circuit conversion.
//!
//! [`to_braket`] lowers a front-end [`Circuit`] to a provider
//! [`BraketCircuit`] through the decomposition registry; [`from_braket`]
//! lifts a provider circuit back, deriving controlled gate names from each
//! instruction's control list. Both directions allocate fresh circuits and
//! fail fast on the first untranslatable construct.

use rustc_hash::FxHashSet;
use tracing::debug;

use qbridge_braket::{Angle, BraketCircuit, BraketInstruction, Observable, ResultType};
use qbridge_ir::{
    Circuit, ClbitId, CustomGate, GateKind, Instruction, InstructionKind, ParameterExpression,
    QubitId, StandardGate,
};

use crate::error::{AdapterError, AdapterResult};
use crate::vocabulary::{self, GateVocabulary};

// =========================================================================
// Forward conversion
// =========================================================================

/// Lower a front-end circuit to a provider circuit using the standard
/// vocabulary.
pub fn to_braket(circuit: &Circuit) -> AdapterResult<BraketCircuit> {
    to_braket_with(circuit, vocabulary::standard())
}

/// Lower a front-end circuit to a provider circuit.
///
/// Measurements become Z-basis `Sample` result declarations, barriers are
/// dropped, and every gate goes through the vocabulary's decomposition
/// registry. Instruction order is preserved.
pub fn to_braket_with(
    circuit: &Circuit,
    vocabulary: &GateVocabulary,
) -> AdapterResult<BraketCircuit> {
    let mut output = BraketCircuit::new();

    for instruction in circuit.instructions() {
        match &instruction.kind {
            InstructionKind::Measure => {
                for (i, qubit) in instruction.qubits.iter().enumerate() {
                    let q = resolve_qubit(circuit, *qubit, instruction)?;
                    let targets = match instruction.clbits.get(i) {
                        Some(clbit) => vec![q, resolve_clbit(circuit, *clbit, instruction)?],
                        None => vec![q],
                    };
                    output.add_result_type(ResultType::Sample {
                        observable: Observable::Z,
                        targets,
                    });
                }
            }
            InstructionKind::Barrier => {
                debug!(qubits = instruction.qubits.len(), "dropping barrier");
            }
            InstructionKind::Gate(gate) => {
                let params: Vec<ParameterExpression> =
                    gate.parameters().into_iter().cloned().collect();
                let primitives = vocabulary.decompose(gate.name(), &params)?;
                if primitives.is_empty() {
                    // A registry entry must lower to at least one primitive.
                    return Err(AdapterError::MissingDecomposition(gate.name().to_string()));
                }

                let targets: Vec<u32> = instruction
                    .qubits
                    .iter()
                    .map(|q| resolve_qubit(circuit, *q, instruction))
                    .collect::<AdapterResult<_>>()?;

                for primitive in primitives {
                    output.add_instruction(BraketInstruction::gate(primitive, targets.clone()));
                }
            }
        }
    }

    Ok(output)
}

/// Lower a slice of front-end circuits.
pub fn to_braket_circuits(circuits: &[Circuit]) -> AdapterResult<Vec<BraketCircuit>> {
    circuits.iter().map(to_braket).collect()
}

fn resolve_qubit(
    circuit: &Circuit,
    qubit: QubitId,
    instruction: &Instruction,
) -> AdapterResult<u32> {
    let index = circuit
        .qubit_index(qubit)
        .ok_or_else(|| qbridge_ir::IrError::QubitNotFound {
            qubit,
            gate_name: Some(instruction.name().to_string()),
        })?;
    Ok(index as u32)
}

fn resolve_clbit(
    circuit: &Circuit,
    clbit: ClbitId,
    instruction: &Instruction,
) -> AdapterResult<u32> {
    let index = circuit
        .clbit_index(clbit)
        .ok_or_else(|| qbridge_ir::IrError::ClbitNotFound {
            clbit,
            gate_name: Some(instruction.name().to_string()),
        })?;
    Ok(index as u32)
}

// =========================================================================
// Reverse conversion
// =========================================================================

/// Lift a provider circuit to a front-end circuit using the standard
/// vocabulary.
pub fn from_braket(circuit: &BraketCircuit) -> AdapterResult<Circuit> {
    from_braket_with(circuit, vocabulary::standard())
}

/// Lift a provider circuit to a front-end circuit.
///
/// The qubit count is inferred as one past the highest referenced index.
/// Control qubits on an instruction derive a controlled gate name from the
/// template's base name; known derived names instantiate standard gates,
/// anything else becomes a [`CustomGate`]. Declared result types become
/// explicit measurements, one per distinct target index (a sample
/// declaration over `[q, c]` lists the same readout twice and collapses to
/// a single measurement); a circuit with none gets a measure-all
/// terminator.
pub fn from_braket_with(
    circuit: &BraketCircuit,
    vocabulary: &GateVocabulary,
) -> AdapterResult<Circuit> {
    let num_qubits = circuit.qubit_count();
    let mut output = Circuit::with_size("from_braket", num_qubits, num_qubits);

    for instruction in &circuit.instructions {
        let Some(gate) = instruction.as_gate() else {
            return Err(AdapterError::UnsupportedGate(
                instruction.operator.name().to_string(),
            ));
        };

        let template = vocabulary
            .template(gate.name())
            .ok_or_else(|| AdapterError::UnsupportedGate(gate.name().to_string()))?;

        let derived = controlled_name(template.name, instruction.control.len());
        let total_qubits = instruction.control.len() as u32 + template.num_qubits;
        let params: Vec<ParameterExpression> =
            gate.angle().map(angle_to_parameter).into_iter().collect();

        let kind = instantiate_gate(&derived, total_qubits, params);
        let qubits = instruction
            .control
            .iter()
            .chain(instruction.target.iter())
            .map(|q| QubitId(*q));

        output.push(Instruction::gate(kind, qubits))?;
    }

    if circuit.result_types.is_empty() {
        if num_qubits > 0 {
            output.measure_all()?;
        }
    } else {
        let mut measured = FxHashSet::default();
        for result_type in &circuit.result_types {
            for &target in result_type.targets() {
                if target >= num_qubits {
                    return Err(AdapterError::ResultTargetOutOfRange {
                        target,
                        num_qubits,
                    });
                }
                if measured.insert(target) {
                    output.measure(QubitId(target), ClbitId(target))?;
                }
            }
        }
    }

    Ok(output)
}

/// Lift a slice of provider circuits.
pub fn from_braket_circuits(circuits: &[BraketCircuit]) -> AdapterResult<Vec<Circuit>> {
    circuits.iter().map(from_braket).collect()
}

/// Derive the controlled gate name for a base name and a control count.
fn controlled_name(base: &str, controls: usize) -> String {
    match controls {
        0 => base.to_string(),
        1 => format!("c{base}"),
        2 => format!("cc{base}"),
        _ if base == "cx" => format!("m{base}"),
        n => format!("c{n}{base}"),
    }
}

fn angle_to_parameter(angle: &Angle) -> ParameterExpression {
    match angle {
        Angle::Bound(value) => ParameterExpression::Constant(*value),
        Angle::Free(name) => ParameterExpression::Symbol(name.clone()),
    }
}

/// Build a gate from a derived name.
///
/// Names matching a standard gate of the same arity instantiate it
/// directly; everything else becomes a custom gate carrying the derived
/// name.
fn instantiate_gate(name: &str, num_qubits: u32, params: Vec<ParameterExpression>) -> GateKind {
    let standard = match (name, params.as_slice()) {
        ("id", []) => Some(StandardGate::I),
        ("x", []) => Some(StandardGate::X),
        ("y", []) => Some(StandardGate::Y),
        ("z", []) => Some(StandardGate::Z),
        ("h", []) => Some(StandardGate::H),
        ("s", []) => Some(StandardGate::S),
        ("sdg", []) => Some(StandardGate::Sdg),
        ("t", []) => Some(StandardGate::T),
        ("tdg", []) => Some(StandardGate::Tdg),
        ("sx", []) => Some(StandardGate::SX),
        ("sxdg", []) => Some(StandardGate::SXdg),
        ("rx", [p]) => Some(StandardGate::Rx(p.clone())),
        ("ry", [p]) => Some(StandardGate::Ry(p.clone())),
        ("rz", [p]) => Some(StandardGate::Rz(p.clone())),
        ("p", [p]) => Some(StandardGate::P(p.clone())),
        ("u1", [p]) => Some(StandardGate::U1(p.clone())),
        ("cx", []) => Some(StandardGate::CX),
        ("cy", []) => Some(StandardGate::CY),
        ("cz", []) => Some(StandardGate::CZ),
        ("ch", []) => Some(StandardGate::CH),
        ("swap", []) => Some(StandardGate::Swap),
        ("iswap", []) => Some(StandardGate::ISwap),
        ("ecr", []) => Some(StandardGate::ECR),
        ("crx", [p]) => Some(StandardGate::CRx(p.clone())),
        ("cry", [p]) => Some(StandardGate::CRy(p.clone())),
        ("crz", [p]) => Some(StandardGate::CRz(p.clone())),
        ("cp", [p]) => Some(StandardGate::CP(p.clone())),
        ("rxx", [p]) => Some(StandardGate::RXX(p.clone())),
        ("ryy", [p]) => Some(StandardGate::RYY(p.clone())),
        ("rzz", [p]) => Some(StandardGate::RZZ(p.clone())),
        ("ccx", []) => Some(StandardGate::CCX),
        ("cswap", []) => Some(StandardGate::CSwap),
        _ => None,
    };

    match standard {
        Some(gate) if gate.num_qubits() == num_qubits => GateKind::Standard(gate),
        _ => GateKind::Custom(CustomGate::new(name, num_qubits).with_params(params)),
    }
}

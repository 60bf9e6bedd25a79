//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{GateKind, StandardGate};
use crate::instruction::{Instruction, InstructionKind};
use crate::parameter::ParameterExpression;
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit: an ordered sequence of instructions over a fixed set
/// of qubits and classical bits.
///
/// The circuit exclusively owns its instructions; converting between IRs
/// always produces a new, independent circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubit ids in the circuit, in allocation order.
    qubits: Vec<QubitId>,
    /// Classical bit ids in the circuit, in allocation order.
    clbits: Vec<ClbitId>,
    /// The ordered instruction sequence.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            clbits: vec![],
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.qubits.len() as u32);
        self.qubits.push(id);
        id
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.clbits.len() as u32);
        self.clbits.push(id);
        id
    }

    /// Append an instruction, validating its operands against this circuit.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<()> {
        let gate_name = || Some(instruction.name().to_string());
        for (i, qubit) in instruction.qubits.iter().enumerate() {
            if !self.qubits.contains(qubit) {
                return Err(IrError::QubitNotFound {
                    qubit: *qubit,
                    gate_name: gate_name(),
                });
            }
            if instruction.qubits[..i].contains(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit: *qubit,
                    gate_name: gate_name(),
                });
            }
        }
        for clbit in &instruction.clbits {
            if !self.clbits.contains(clbit) {
                return Err(IrError::ClbitNotFound {
                    clbit: *clbit,
                    gate_name: gate_name(),
                });
            }
        }
        self.instructions.push(instruction);
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::H, qubit))?;
        Ok(self)
    }

    /// Apply identity gate.
    pub fn id(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::I, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::X, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::Y, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::Z, qubit))?;
        Ok(self)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::S, qubit))?;
        Ok(self)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))?;
        Ok(self)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::T, qubit))?;
        Ok(self)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::Tdg, qubit))?;
        Ok(self)
    }

    /// Apply sqrt(X) gate.
    pub fn sx(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::SX, qubit))?;
        Ok(self)
    }

    /// Apply sqrt(X)-dagger gate.
    pub fn sxdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::SXdg, qubit))?;
        Ok(self)
    }

    /// Apply Rx rotation gate.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(
            StandardGate::Rx(theta.into()),
            qubit,
        ))?;
        Ok(self)
    }

    /// Apply Ry rotation gate.
    pub fn ry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(
            StandardGate::Ry(theta.into()),
            qubit,
        ))?;
        Ok(self)
    }

    /// Apply Rz rotation gate.
    pub fn rz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(
            StandardGate::Rz(theta.into()),
            qubit,
        ))?;
        Ok(self)
    }

    /// Apply phase gate.
    pub fn p(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(
            StandardGate::P(theta.into()),
            qubit,
        ))?;
        Ok(self)
    }

    /// Apply universal U gate.
    pub fn u(
        &mut self,
        theta: impl Into<ParameterExpression>,
        phi: impl Into<ParameterExpression>,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(
            StandardGate::U(theta.into(), phi.into(), lambda.into()),
            qubit,
        ))?;
        Ok(self)
    }

    /// Apply legacy U1 gate.
    pub fn u1(
        &mut self,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(
            StandardGate::U1(lambda.into()),
            qubit,
        ))?;
        Ok(self)
    }

    /// Apply legacy U2 gate.
    pub fn u2(
        &mut self,
        phi: impl Into<ParameterExpression>,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(
            StandardGate::U2(phi.into(), lambda.into()),
            qubit,
        ))?;
        Ok(self)
    }

    /// Apply legacy U3 gate.
    pub fn u3(
        &mut self,
        theta: impl Into<ParameterExpression>,
        phi: impl Into<ParameterExpression>,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(
            StandardGate::U3(theta.into(), phi.into(), lambda.into()),
            qubit,
        ))?;
        Ok(self)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::CX, control, target))?;
        Ok(self)
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::CY, control, target))?;
        Ok(self)
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::CZ, control, target))?;
        Ok(self)
    }

    /// Apply controlled-Hadamard gate.
    pub fn ch(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::CH, control, target))?;
        Ok(self)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))?;
        Ok(self)
    }

    /// Apply iSWAP gate.
    pub fn iswap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::ISwap, q1, q2))?;
        Ok(self)
    }

    /// Apply echoed cross-resonance gate.
    pub fn ecr(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::ECR, q1, q2))?;
        Ok(self)
    }

    /// Apply controlled-Rx gate.
    pub fn crx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(
            StandardGate::CRx(theta.into()),
            control,
            target,
        ))?;
        Ok(self)
    }

    /// Apply controlled-Ry gate.
    pub fn cry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(
            StandardGate::CRy(theta.into()),
            control,
            target,
        ))?;
        Ok(self)
    }

    /// Apply controlled-Rz gate.
    pub fn crz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(
            StandardGate::CRz(theta.into()),
            control,
            target,
        ))?;
        Ok(self)
    }

    /// Apply controlled-phase gate.
    pub fn cp(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(
            StandardGate::CP(theta.into()),
            control,
            target,
        ))?;
        Ok(self)
    }

    /// Apply RXX (XX rotation) gate.
    pub fn rxx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        q1: QubitId,
        q2: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(
            StandardGate::RXX(theta.into()),
            q1,
            q2,
        ))?;
        Ok(self)
    }

    /// Apply RYY (YY rotation) gate.
    pub fn ryy(
        &mut self,
        theta: impl Into<ParameterExpression>,
        q1: QubitId,
        q2: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(
            StandardGate::RYY(theta.into()),
            q1,
            q2,
        ))?;
        Ok(self)
    }

    /// Apply RZZ (ZZ rotation) gate.
    pub fn rzz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        q1: QubitId,
        q2: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(
            StandardGate::RZZ(theta.into()),
            q1,
            q2,
        ))?;
        Ok(self)
    }

    // =========================================================================
    // Three-qubit gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::gate(StandardGate::CCX, [c1, c2, target]))?;
        Ok(self)
    }

    /// Apply Fredkin (CSWAP) gate.
    pub fn cswap(&mut self, control: QubitId, t1: QubitId, t2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::gate(StandardGate::CSwap, [control, t1, t2]))?;
        Ok(self)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Apply an arbitrary gate.
    pub fn gate(
        &mut self,
        gate: impl Into<GateKind>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::gate(gate, qubits))?;
        Ok(self)
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.push(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }

    /// Measure all qubits to corresponding classical bits.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        // Ensure we have enough classical bits
        while self.clbits.len() < self.qubits.len() {
            self.add_clbit();
        }

        let qubits = self.qubits.clone();
        let clbits: Vec<_> = self.clbits.iter().copied().take(qubits.len()).collect();

        self.push(Instruction::measure_all(qubits, clbits)?)?;
        Ok(self)
    }

    /// Apply a barrier to specified qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.push(Instruction::barrier(qubits))?;
        Ok(self)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits = self.qubits.clone();
        self.push(Instruction::barrier(qubits))?;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Get the ordered instruction sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the qubit ids in the circuit.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Get the classical bit ids in the circuit.
    pub fn clbits(&self) -> &[ClbitId] {
        &self.clbits
    }

    /// Resolve a qubit to its index in this circuit's bit ordering.
    pub fn qubit_index(&self, qubit: QubitId) -> Option<usize> {
        self.qubits.iter().position(|q| *q == qubit)
    }

    /// Resolve a classical bit to its index in this circuit's bit ordering.
    pub fn clbit_index(&self, clbit: ClbitId) -> Option<usize> {
        self.clbits.iter().position(|c| *c == clbit)
    }

    /// Iterate over the gate instructions only.
    pub fn gates(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter().filter(|i| i.is_gate())
    }

    /// Total instruction count.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check whether the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2);
        circuit
            .h(QubitId(0))?
            .cx(QubitId(0), QubitId(1))?
            .measure(QubitId(0), ClbitId(0))?
            .measure(QubitId(1), ClbitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        if n == 0 {
            return Ok(Self::new("ghz_0"));
        }

        let mut circuit = Self::with_size("ghz", n, n);
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        for i in 0..n {
            circuit.measure(QubitId(i), ClbitId(i))?;
        }
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_circuit_with_size() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
    }

    #[test]
    fn test_bell_state() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.len(), 4); // H, CX, 2 measures
    }

    #[test]
    fn test_ghz_state() {
        let circuit = Circuit::ghz(5).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 5);
        assert_eq!(circuit.len(), 10); // H, 4 CX, 5 measures
    }

    #[test]
    fn test_unknown_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        let err = circuit.h(QubitId(5)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { .. }));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.cx(QubitId(0), QubitId(0)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_unknown_clbit_rejected() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        let err = circuit.measure(QubitId(0), ClbitId(0)).unwrap_err();
        assert!(matches!(err, IrError::ClbitNotFound { .. }));
    }

    #[test]
    fn test_parameterized_gate() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit.rx(PI / 2.0, QubitId(0)).unwrap();
        circuit
            .ry(ParameterExpression::symbol("theta"), QubitId(0))
            .unwrap();
        assert_eq!(circuit.len(), 2);
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();
        assert_eq!(circuit.len(), 4);
    }

    #[test]
    fn test_measure_all_grows_clbits() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.measure_all().unwrap();
        assert_eq!(circuit.num_clbits(), 3);
        assert_eq!(circuit.instructions()[0].qubits.len(), 3);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .crz(ParameterExpression::symbol("theta"), QubitId(0), QubitId(1))
            .unwrap()
            .measure_all()
            .unwrap();

        let json = serde_json::to_string(&circuit).unwrap();
        let decoded: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, circuit);
    }

    #[test]
    fn test_bit_index_resolution() {
        let circuit = Circuit::with_size("test", 2, 1);
        assert_eq!(circuit.qubit_index(QubitId(1)), Some(1));
        assert_eq!(circuit.qubit_index(QubitId(9)), None);
        assert_eq!(circuit.clbit_index(ClbitId(0)), Some(0));
    }
}

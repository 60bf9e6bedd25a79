//! QBridge Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits on the front-end side of the QBridge translation stack. Circuits
//! built with this IR can be lowered to a provider program via
//! `qbridge-adapter`, and provider programs can be lifted back into it.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical bits
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CX, etc.) and
//!   [`CustomGate`] for user-defined operations
//! - **Parameters**: [`ParameterExpression`] for symbolic parameters in
//!   variational circuits
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API over an ordered
//!   instruction sequence
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qbridge_ir::{Circuit, QubitId};
//!
//! // Create a new circuit with 2 qubits and 2 classical bits
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! // Add measurement
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.len(), 3); // H, CX, measure
//! ```
//!
//! # Example: Parameterized Circuit
//!
//! ```rust
//! use qbridge_ir::{Circuit, QubitId, ParameterExpression};
//! use std::f64::consts::PI;
//!
//! // Create a 1-qubit circuit
//! let mut circuit = Circuit::with_size("variational", 1, 0);
//!
//! // Create a symbolic parameter
//! let theta = ParameterExpression::symbol("theta");
//!
//! // Add parameterized rotation
//! circuit.rx(theta.clone(), QubitId(0)).unwrap();
//!
//! // Later, bind the parameter to a concrete value
//! let bound = theta.bind("theta", PI / 4.0);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, GateKind, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use parameter::{BinOp, ParameterExpression};
pub use qubit::{ClbitId, QubitId};

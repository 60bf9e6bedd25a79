//! QBridge Provider-Side IR
//!
//! Value objects mirroring the provider's program representation and
//! capability documents:
//!
//! - **Gates**: [`BraketGate`] with the provider's gate names and [`Angle`]
//!   parameters (bound values or named free parameters)
//! - **Circuits**: [`BraketCircuit`], a flat list of [`BraketInstruction`]s
//!   addressing qubits by numeric index, plus [`ResultType`] declarations
//! - **Verbatim regions**: [`Operator::StartVerbatimBox`] /
//!   [`Operator::EndVerbatimBox`] compiler directives
//! - **Capabilities**: [`DeviceCapabilities`], parsed from the provider's
//!   camelCase JSON capability documents and classified on the schema header
//!
//! Translation to and from the front-end circuit IR lives in
//! `qbridge-adapter`; this crate carries no conversion logic.

pub mod capabilities;
pub mod circuit;
pub mod gate;

pub use capabilities::{
    ActionProperties, Connectivity, DeviceActions, DeviceCapabilities, QpuCapabilities,
    QpuParadigm, SimulatorCapabilities, SimulatorParadigm,
};
pub use circuit::{BraketCircuit, BraketInstruction, Observable, Operator, ResultType};
pub use gate::{Angle, BraketGate};

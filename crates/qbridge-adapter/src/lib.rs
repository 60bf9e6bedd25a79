//! QBridge Adapter
//!
//! Bidirectional translation between the front-end circuit IR
//! (`qbridge-ir`) and the provider program IR (`qbridge-braket`), plus
//! construction of device targets from capability documents.
//!
//! # Components
//!
//! - **Vocabulary** ([`vocabulary`]): the gate name map, the decomposition
//!   registry lowering front-end gates to provider primitives, and the
//!   reverse template map
//! - **Conversion** ([`convert`]): [`to_braket`] / [`from_braket`] and
//!   their plural forms
//! - **Targets** ([`target`]): [`device_to_target`] builds the supported
//!   operation set of a device from its capability document
//! - **Verbatim regions** ([`verbatim`]): [`wrap_verbatim_boxes`] for
//!   transpilation-free submission
//!
//! # Example
//!
//! ```rust
//! use qbridge_adapter::{from_braket, to_braket};
//! use qbridge_ir::Circuit;
//!
//! let circuit = Circuit::bell().unwrap();
//! let program = to_braket(&circuit).unwrap();
//! assert_eq!(program.qubit_count(), 2);
//!
//! let round_tripped = from_braket(&program).unwrap();
//! assert_eq!(round_tripped.num_qubits(), 2);
//! ```

pub mod convert;
pub mod error;
pub mod target;
pub mod verbatim;
pub mod vocabulary;

pub use convert::{
    from_braket, from_braket_circuits, from_braket_with, to_braket, to_braket_circuits,
    to_braket_with,
};
pub use error::{AdapterError, AdapterResult};
pub use target::{device_to_target, InstructionProperties, Target};
pub use verbatim::wrap_verbatim_boxes;
pub use vocabulary::{GateTemplate, GateVocabulary};

//! Device capability descriptors.
//!
//! Mirrors the provider's capability document wire format (camelCase JSON,
//! schema-header dispatch). Documents are classified into QPU or simulator
//! capabilities on their schema header name; unrecognized schemas are kept
//! as `Unsupported` so the caller can report the class.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Schema header names for QPU capability documents.
const QPU_SCHEMAS: &[&str] = &[
    "braket.device_schema.ionq.ionq_device_capabilities",
    "braket.device_schema.rigetti.rigetti_device_capabilities",
    "braket.device_schema.oqc.oqc_device_capabilities",
];

/// Schema header name for gate-model simulator capability documents.
const SIMULATOR_SCHEMA: &str =
    "braket.device_schema.simulators.gate_model_simulator_device_capabilities";

/// Qubit connectivity of a QPU.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connectivity {
    /// Whether any qubit pair can interact directly.
    #[serde(default)]
    pub fully_connected: bool,
    /// Directed adjacency, keyed by qubit-index strings.
    #[serde(default)]
    pub connectivity_graph: FxHashMap<String, Vec<String>>,
}

/// The paradigm section of a QPU capability document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QpuParadigm {
    /// Number of physical qubits.
    pub qubit_count: u32,
    /// Native gate names.
    #[serde(default)]
    pub native_gate_set: Vec<String>,
    /// Qubit connectivity.
    pub connectivity: Connectivity,
}

/// The paradigm section of a simulator capability document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorParadigm {
    /// Maximum simulable qubit count.
    pub qubit_count: u32,
}

/// Properties of a single program action (IR dialect) entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionProperties {
    /// Operation names the device accepts in this dialect.
    #[serde(default)]
    pub supported_operations: Vec<String>,
}

/// The action map of a capability document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceActions {
    /// OpenQASM program action, if offered.
    #[serde(rename = "braket.ir.openqasm.program", default)]
    pub openqasm: Option<ActionProperties>,
    /// Legacy JAQCD program action, if offered.
    #[serde(rename = "braket.ir.jaqcd.program", default)]
    pub jaqcd: Option<ActionProperties>,
}

/// Parsed QPU capability document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QpuCapabilities {
    /// Hardware paradigm: qubit count and connectivity.
    pub paradigm: QpuParadigm,
    /// Supported program actions.
    #[serde(default)]
    pub action: DeviceActions,
}

/// Parsed simulator capability document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorCapabilities {
    /// Simulator paradigm: qubit count.
    pub paradigm: SimulatorParadigm,
    /// Supported program actions.
    #[serde(default)]
    pub action: DeviceActions,
}

/// A classified device capability document.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCapabilities {
    /// A quantum processing unit.
    Qpu(QpuCapabilities),
    /// A gate-model simulator.
    Simulator(SimulatorCapabilities),
    /// A document with an unrecognized schema (e.g. annealers).
    Unsupported {
        /// The schema header name of the document.
        class: String,
    },
}

#[derive(Deserialize)]
struct SchemaHeader {
    name: String,
}

#[derive(Deserialize)]
struct RawHeader {
    #[serde(rename = "braketSchemaHeader")]
    braket_schema_header: SchemaHeader,
}

impl DeviceCapabilities {
    /// Parse and classify a raw capability document.
    ///
    /// Dispatches on `braketSchemaHeader.name`: known QPU schemas parse as
    /// [`DeviceCapabilities::Qpu`], the gate-model simulator schema as
    /// [`DeviceCapabilities::Simulator`], and everything else is preserved
    /// as [`DeviceCapabilities::Unsupported`] without further parsing.
    pub fn from_json(document: &str) -> serde_json::Result<Self> {
        let header: RawHeader = serde_json::from_str(document)?;
        let class = header.braket_schema_header.name;

        if QPU_SCHEMAS.contains(&class.as_str()) {
            let qpu: QpuCapabilities = serde_json::from_str(document)?;
            Ok(DeviceCapabilities::Qpu(qpu))
        } else if class == SIMULATOR_SCHEMA {
            let sim: SimulatorCapabilities = serde_json::from_str(document)?;
            Ok(DeviceCapabilities::Simulator(sim))
        } else {
            Ok(DeviceCapabilities::Unsupported { class })
        }
    }

    /// Get the declared qubit count, if the document was recognized.
    pub fn qubit_count(&self) -> Option<u32> {
        match self {
            DeviceCapabilities::Qpu(qpu) => Some(qpu.paradigm.qubit_count),
            DeviceCapabilities::Simulator(sim) => Some(sim.paradigm.qubit_count),
            DeviceCapabilities::Unsupported { .. } => None,
        }
    }
}

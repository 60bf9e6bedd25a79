//! Capability-to-target construction.
//!
//! Builds a [`Target`] (the set of operations a device supports, keyed by
//! gate name and qubit tuple) from a parsed capability document. Supported
//! operation names are resolved through the reverse template map; names
//! without a mapping and operations over more than two qubits are dropped
//! with a debug log.

use rustc_hash::FxHashMap;
use tracing::debug;

use qbridge_braket::{ActionProperties, Connectivity, DeviceCapabilities};

use crate::error::{AdapterError, AdapterResult};
use crate::vocabulary::GateVocabulary;

/// Calibration data for one (operation, qubits) entry.
///
/// Capability documents carry no calibration, so entries are registered
/// with `None` properties; the type exists so callers can attach their own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InstructionProperties {
    /// Gate duration in seconds.
    pub duration: Option<f64>,
    /// Average gate error.
    pub error: Option<f64>,
}

/// The operations a device supports, per qubit tuple.
#[derive(Debug, Clone, Default)]
pub struct Target {
    /// Number of device qubits.
    pub num_qubits: u32,
    instructions: FxHashMap<String, FxHashMap<Vec<u32>, Option<InstructionProperties>>>,
}

impl Target {
    /// Create an empty target with a fixed qubit count.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            instructions: FxHashMap::default(),
        }
    }

    /// Register an operation over a qubit tuple.
    pub fn add_instruction(
        &mut self,
        name: impl Into<String>,
        qubits: Vec<u32>,
        properties: Option<InstructionProperties>,
    ) {
        self.instructions
            .entry(name.into())
            .or_default()
            .insert(qubits, properties);
    }

    /// Check whether an operation is supported on specific qubits.
    pub fn supports(&self, name: &str, qubits: &[u32]) -> bool {
        self.instructions
            .get(name)
            .is_some_and(|qargs| qargs.contains_key(qubits))
    }

    /// Get the registered operation names.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.instructions.keys().map(String::as_str)
    }

    /// Get the qubit tuples an operation is registered on.
    pub fn qargs_for(&self, name: &str) -> Option<&FxHashMap<Vec<u32>, Option<InstructionProperties>>> {
        self.instructions.get(name)
    }

    /// Number of distinct registered operation names.
    pub fn num_operations(&self) -> usize {
        self.instructions.len()
    }
}

/// Build a [`Target`] from a classified capability document.
pub fn device_to_target(
    capabilities: &DeviceCapabilities,
    vocabulary: &GateVocabulary,
) -> AdapterResult<Target> {
    match capabilities {
        DeviceCapabilities::Unsupported { class } => {
            Err(AdapterError::UnsupportedCapability(class.clone()))
        }
        DeviceCapabilities::Qpu(qpu) => {
            // OpenQASM is the operative dialect; fall back to legacy JAQCD.
            let action = qpu
                .action
                .openqasm
                .as_ref()
                .or(qpu.action.jaqcd.as_ref())
                .ok_or_else(missing_action)?;
            build_target(
                qpu.paradigm.qubit_count,
                action,
                &qpu.paradigm.connectivity,
                vocabulary,
            )
        }
        DeviceCapabilities::Simulator(sim) => {
            let action = sim.action.jaqcd.as_ref().ok_or_else(missing_action)?;
            let connectivity = Connectivity {
                fully_connected: true,
                connectivity_graph: FxHashMap::default(),
            };
            build_target(sim.paradigm.qubit_count, action, &connectivity, vocabulary)
        }
    }
}

fn missing_action() -> AdapterError {
    AdapterError::InvalidDescriptor("no supported program action".to_string())
}

fn build_target(
    num_qubits: u32,
    action: &ActionProperties,
    connectivity: &Connectivity,
    vocabulary: &GateVocabulary,
) -> AdapterResult<Target> {
    if num_qubits == 0 {
        return Err(AdapterError::InvalidDescriptor(
            "device declares zero qubits".to_string(),
        ));
    }

    let mut target = Target::new(num_qubits);

    for qubit in 0..num_qubits {
        target.add_instruction("measure", vec![qubit], None);
    }

    for operation in &action.supported_operations {
        let Some(template) = vocabulary.template(operation) else {
            debug!(operation, "dropping operation without a gate mapping");
            continue;
        };

        match template.num_qubits {
            1 => {
                for qubit in 0..num_qubits {
                    target.add_instruction(template.name, vec![qubit], None);
                }
            }
            2 => {
                for (a, b) in two_qubit_pairs(num_qubits, connectivity)? {
                    target.add_instruction(template.name, vec![a, b], None);
                }
            }
            arity => {
                debug!(operation, arity, "dropping operation over more than two qubits");
            }
        }
    }

    Ok(target)
}

/// Enumerate the directed qubit pairs two-qubit gates run on.
///
/// Fully connected devices get both orderings of every distinct pair;
/// otherwise exactly the pairs listed in the adjacency graph.
fn two_qubit_pairs(
    num_qubits: u32,
    connectivity: &Connectivity,
) -> AdapterResult<Vec<(u32, u32)>> {
    if connectivity.fully_connected {
        let mut pairs = Vec::new();
        for a in 0..num_qubits {
            for b in 0..num_qubits {
                if a != b {
                    pairs.push((a, b));
                }
            }
        }
        return Ok(pairs);
    }

    let mut pairs = Vec::new();
    for (source, neighbors) in &connectivity.connectivity_graph {
        let a = parse_qubit_key(source)?;
        for neighbor in neighbors {
            pairs.push((a, parse_qubit_key(neighbor)?));
        }
    }
    Ok(pairs)
}

fn parse_qubit_key(key: &str) -> AdapterResult<u32> {
    key.parse().map_err(|_| {
        AdapterError::InvalidDescriptor(format!("non-numeric adjacency key '{key}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary;
    use qbridge_braket::{
        DeviceActions, QpuCapabilities, QpuParadigm, SimulatorCapabilities, SimulatorParadigm,
    };

    fn qpu(
        num_qubits: u32,
        connectivity: Connectivity,
        operations: &[&str],
    ) -> DeviceCapabilities {
        DeviceCapabilities::Qpu(QpuCapabilities {
            paradigm: QpuParadigm {
                qubit_count: num_qubits,
                native_gate_set: vec![],
                connectivity,
            },
            action: DeviceActions {
                openqasm: Some(ActionProperties {
                    supported_operations: operations.iter().map(|s| s.to_string()).collect(),
                }),
                jaqcd: None,
            },
        })
    }

    fn fully_connected() -> Connectivity {
        Connectivity {
            fully_connected: true,
            connectivity_graph: FxHashMap::default(),
        }
    }

    fn graph(edges: &[(&str, &[&str])]) -> Connectivity {
        Connectivity {
            fully_connected: false,
            connectivity_graph: edges
                .iter()
                .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
                .collect(),
        }
    }

    #[test]
    fn test_measure_on_every_qubit() {
        let caps = qpu(3, fully_connected(), &[]);
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        assert_eq!(target.num_qubits, 3);
        for q in 0..3 {
            assert!(target.supports("measure", &[q]));
        }
    }

    #[test]
    fn test_single_qubit_gate_on_every_qubit() {
        let caps = qpu(4, fully_connected(), &["h", "rx"]);
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        for q in 0..4 {
            assert!(target.supports("h", &[q]));
            assert!(target.supports("rx", &[q]));
        }
    }

    #[test]
    fn test_fully_connected_two_qubit_pairs() {
        let caps = qpu(3, fully_connected(), &["cnot"]);
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        // Both orderings of every distinct pair of 3 qubits.
        let pairs = target.qargs_for("cx").unwrap();
        assert_eq!(pairs.len(), 6);
        assert!(target.supports("cx", &[0, 2]));
        assert!(target.supports("cx", &[2, 0]));
        assert!(!target.supports("cx", &[0, 0]));
    }

    #[test]
    fn test_graph_connectivity_exact_pairs() {
        let caps = qpu(3, graph(&[("0", &["1"])]), &["cz"]);
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        let pairs = target.qargs_for("cz").unwrap();
        assert_eq!(pairs.len(), 1);
        assert!(target.supports("cz", &[0, 1]));
        assert!(!target.supports("cz", &[1, 0]));
    }

    #[test]
    fn test_bad_adjacency_key() {
        let caps = qpu(2, graph(&[("q0", &["1"])]), &["cz"]);
        let err = device_to_target(&caps, vocabulary::standard()).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidDescriptor(_)));
    }

    #[test]
    fn test_unmapped_operation_dropped() {
        let caps = qpu(2, fully_connected(), &["gpi2", "h"]);
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        assert!(target.supports("h", &[0]));
        assert!(target.qargs_for("gpi2").is_none());
        // measure + h only
        assert_eq!(target.num_operations(), 2);
    }

    #[test]
    fn test_three_qubit_operation_dropped() {
        let caps = qpu(3, fully_connected(), &["ccnot", "x"]);
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        assert!(target.qargs_for("ccx").is_none());
        assert!(target.supports("x", &[2]));
    }

    #[test]
    fn test_operation_names_renamed_to_frontend() {
        let caps = qpu(2, fully_connected(), &["cnot", "v", "phaseshift"]);
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        let mut names: Vec<_> = target.operation_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["cx", "measure", "p", "sx"]);
    }

    #[test]
    fn test_zero_qubits_rejected() {
        let caps = qpu(0, fully_connected(), &["h"]);
        let err = device_to_target(&caps, vocabulary::standard()).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidDescriptor(_)));
    }

    #[test]
    fn test_missing_action_rejected() {
        let caps = DeviceCapabilities::Qpu(QpuCapabilities {
            paradigm: QpuParadigm {
                qubit_count: 2,
                native_gate_set: vec![],
                connectivity: fully_connected(),
            },
            action: DeviceActions::default(),
        });
        let err = device_to_target(&caps, vocabulary::standard()).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidDescriptor(_)));
    }

    #[test]
    fn test_qpu_falls_back_to_jaqcd() {
        let caps = DeviceCapabilities::Qpu(QpuCapabilities {
            paradigm: QpuParadigm {
                qubit_count: 2,
                native_gate_set: vec![],
                connectivity: fully_connected(),
            },
            action: DeviceActions {
                openqasm: None,
                jaqcd: Some(ActionProperties {
                    supported_operations: vec!["h".to_string()],
                }),
            },
        });
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        assert!(target.supports("h", &[0]));
    }

    #[test]
    fn test_simulator_is_fully_connected() {
        let caps = DeviceCapabilities::Simulator(SimulatorCapabilities {
            paradigm: SimulatorParadigm { qubit_count: 3 },
            action: DeviceActions {
                openqasm: None,
                jaqcd: Some(ActionProperties {
                    supported_operations: vec!["cnot".to_string()],
                }),
            },
        });
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        assert_eq!(target.qargs_for("cx").unwrap().len(), 6);
    }

    #[test]
    fn test_target_from_raw_document() {
        let document = r#"{
            "braketSchemaHeader": {
                "name": "braket.device_schema.rigetti.rigetti_device_capabilities"
            },
            "paradigm": {
                "qubitCount": 2,
                "connectivity": {
                    "fullyConnected": false,
                    "connectivityGraph": {"0": ["1"]}
                }
            },
            "action": {
                "braket.ir.openqasm.program": {
                    "supportedOperations": ["rx", "rz", "cz"]
                }
            }
        }"#;

        let caps = DeviceCapabilities::from_json(document).unwrap();
        let target = device_to_target(&caps, vocabulary::standard()).unwrap();
        assert!(target.supports("rx", &[0]));
        assert!(target.supports("rz", &[1]));
        assert!(target.supports("cz", &[0, 1]));
        assert!(!target.supports("cz", &[1, 0]));
    }

    #[test]
    fn test_unsupported_class() {
        let caps = DeviceCapabilities::Unsupported {
            class: "braket.device_schema.dwave.dwave_device_capabilities".to_string(),
        };
        let err = device_to_target(&caps, vocabulary::standard()).unwrap_err();
        assert!(matches!(err, AdapterError::UnsupportedCapability(class) if class.contains("dwave")));
    }
}

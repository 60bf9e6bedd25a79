//! Error types for IR translation.

use qbridge_ir::IrError;
use thiserror::Error;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors that can occur while translating circuits or building targets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdapterError {
    /// Capability document class has no translation.
    #[error("Unsupported device capability class: {0}")]
    UnsupportedCapability(String),

    /// Provider gate name has no front-end template.
    #[error("Gate '{0}' is not supported")]
    UnsupportedGate(String),

    /// Front-end gate has no provider decomposition.
    #[error("No decomposition registered for gate '{0}'")]
    MissingDecomposition(String),

    /// Gate received the wrong number of parameters.
    #[error("Gate '{gate}' expects {expected} parameter(s), got {got}")]
    ParameterCountMismatch {
        /// The gate name.
        gate: String,
        /// Declared parameter slot count.
        expected: usize,
        /// Number of parameters supplied.
        got: usize,
    },

    /// Parameter expression is neither a bound value nor a plain symbol.
    #[error("Parameter expression '{0}' is neither bound nor a plain symbol")]
    UnboundExpression(String),

    /// Capability document is structurally invalid.
    #[error("Invalid capability descriptor: {0}")]
    InvalidDescriptor(String),

    /// Declared result target lies outside the circuit.
    #[error("Result target {target} is outside the circuit ({num_qubits} qubit(s))")]
    ResultTargetOutOfRange {
        /// The out-of-range target index.
        target: u32,
        /// Inferred qubit count of the circuit.
        num_qubits: u32,
    },

    /// Front-end circuit construction failure.
    #[error(transparent)]
    Ir(#[from] IrError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_gate_display() {
        let err = AdapterError::UnsupportedGate("gpi2".into());
        assert!(err.to_string().contains("gpi2"));
    }

    #[test]
    fn test_parameter_count_mismatch_display() {
        let err = AdapterError::ParameterCountMismatch {
            gate: "u3".into(),
            expected: 3,
            got: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("u3"));
        assert!(msg.contains('3'));
        assert!(msg.contains('1'));
    }

    #[test]
    fn test_ir_error_is_transparent() {
        let ir = IrError::MeasureWidthMismatch {
            qubits: 2,
            clbits: 1,
        };
        let wrapped: AdapterError = ir.into();
        assert!(wrapped.to_string().contains("qubit count"));
    }
}

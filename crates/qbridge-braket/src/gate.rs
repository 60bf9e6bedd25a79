//! Provider-side gate primitives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A gate angle: either a bound numeric value or a named free parameter.
///
/// Free parameters keep their name through translation so the caller can
/// bind them at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Angle {
    /// A concrete numeric angle in radians.
    Bound(f64),
    /// A named free parameter.
    Free(String),
}

impl Angle {
    /// Get the numeric value if the angle is bound.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Angle::Bound(v) => Some(*v),
            Angle::Free(_) => None,
        }
    }

    /// Get the parameter name if the angle is free.
    pub fn as_free(&self) -> Option<&str> {
        match self {
            Angle::Bound(_) => None,
            Angle::Free(name) => Some(name),
        }
    }

    /// Check whether the angle is a free parameter.
    pub fn is_free(&self) -> bool {
        matches!(self, Angle::Free(_))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Bound(v) => write!(f, "{v}"),
            Angle::Free(name) => write!(f, "{name}"),
        }
    }
}

impl From<f64> for Angle {
    fn from(value: f64) -> Self {
        Angle::Bound(value)
    }
}

impl From<&str> for Angle {
    fn from(name: &str) -> Self {
        Angle::Free(name.to_string())
    }
}

/// The provider's native gate set.
///
/// Gate names follow the provider's spelling (`cnot` rather than `cx`,
/// `phaseshift` rather than `p`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BraketGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate.
    S,
    /// S-dagger gate.
    Si,
    /// T gate.
    T,
    /// T-dagger gate.
    Ti,
    /// V gate (sqrt(X)).
    V,
    /// V-dagger gate (sqrt(X) inverse).
    Vi,
    /// Rotation around X axis.
    Rx(Angle),
    /// Rotation around Y axis.
    Ry(Angle),
    /// Rotation around Z axis.
    Rz(Angle),
    /// Single-qubit phase shift.
    PhaseShift(Angle),
    /// Controlled-NOT gate.
    CNot,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Controlled phase shift.
    CPhaseShift(Angle),
    /// SWAP gate.
    Swap,
    /// iSWAP gate.
    ISwap,
    /// Toffoli gate.
    CCNot,
    /// Fredkin gate.
    CSwap,
    /// Echoed cross-resonance gate.
    ECR,
    /// Ising XX coupling gate.
    XX(Angle),
    /// XY coupling gate.
    XY(Angle),
    /// Ising YY coupling gate.
    YY(Angle),
    /// Ising ZZ coupling gate.
    ZZ(Angle),
}

impl BraketGate {
    /// Get the provider name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BraketGate::I => "i",
            BraketGate::X => "x",
            BraketGate::Y => "y",
            BraketGate::Z => "z",
            BraketGate::H => "h",
            BraketGate::S => "s",
            BraketGate::Si => "si",
            BraketGate::T => "t",
            BraketGate::Ti => "ti",
            BraketGate::V => "v",
            BraketGate::Vi => "vi",
            BraketGate::Rx(_) => "rx",
            BraketGate::Ry(_) => "ry",
            BraketGate::Rz(_) => "rz",
            BraketGate::PhaseShift(_) => "phaseshift",
            BraketGate::CNot => "cnot",
            BraketGate::CY => "cy",
            BraketGate::CZ => "cz",
            BraketGate::CPhaseShift(_) => "cphaseshift",
            BraketGate::Swap => "swap",
            BraketGate::ISwap => "iswap",
            BraketGate::CCNot => "ccnot",
            BraketGate::CSwap => "cswap",
            BraketGate::ECR => "ecr",
            BraketGate::XX(_) => "xx",
            BraketGate::XY(_) => "xy",
            BraketGate::YY(_) => "yy",
            BraketGate::ZZ(_) => "zz",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn qubit_count(&self) -> u32 {
        match self {
            BraketGate::I
            | BraketGate::X
            | BraketGate::Y
            | BraketGate::Z
            | BraketGate::H
            | BraketGate::S
            | BraketGate::Si
            | BraketGate::T
            | BraketGate::Ti
            | BraketGate::V
            | BraketGate::Vi
            | BraketGate::Rx(_)
            | BraketGate::Ry(_)
            | BraketGate::Rz(_)
            | BraketGate::PhaseShift(_) => 1,

            BraketGate::CNot
            | BraketGate::CY
            | BraketGate::CZ
            | BraketGate::CPhaseShift(_)
            | BraketGate::Swap
            | BraketGate::ISwap
            | BraketGate::ECR
            | BraketGate::XX(_)
            | BraketGate::XY(_)
            | BraketGate::YY(_)
            | BraketGate::ZZ(_) => 2,

            BraketGate::CCNot | BraketGate::CSwap => 3,
        }
    }

    /// Get the angle parameter, if this gate has one.
    pub fn angle(&self) -> Option<&Angle> {
        match self {
            BraketGate::Rx(a)
            | BraketGate::Ry(a)
            | BraketGate::Rz(a)
            | BraketGate::PhaseShift(a)
            | BraketGate::CPhaseShift(a)
            | BraketGate::XX(a)
            | BraketGate::XY(a)
            | BraketGate::YY(a)
            | BraketGate::ZZ(a) => Some(a),
            _ => None,
        }
    }
}

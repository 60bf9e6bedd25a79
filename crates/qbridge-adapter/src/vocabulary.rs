//! Gate vocabulary: the translation tables between the two gate namespaces.
//!
//! Three tables make up the vocabulary:
//!
//! 1. A name map from front-end gate names to provider gate names.
//! 2. A decomposition registry lowering each front-end gate to a sequence of
//!    provider primitives. Most entries are single-gate lifts; the legacy
//!    composite rotations (`u`, `u1`, `u2`, `u3`) expand to fixed
//!    Rz/Rx/Ry sequences.
//! 3. A reverse template map from provider gate names to abstract front-end
//!    gate descriptors.
//!
//! The standard vocabulary is built once per process ([`standard`]); tests
//! and callers with non-standard gate sets can construct their own via
//! [`GateVocabulary::standard`] and mutate it.

use std::f64::consts::FRAC_PI_2;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use qbridge_braket::{Angle, BraketGate};
use qbridge_ir::ParameterExpression;

use crate::error::{AdapterError, AdapterResult};

/// An abstract front-end gate descriptor.
///
/// Templates carry names and shapes only, never concrete parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateTemplate {
    /// Front-end gate name.
    pub name: &'static str,
    /// Number of qubits the gate operates on.
    pub num_qubits: u32,
    /// Declared parameter slot names, in order.
    pub params: &'static [&'static str],
}

/// A decomposition: front-end parameters in, provider primitives out.
pub type DecomposeFn =
    Box<dyn Fn(&[ParameterExpression]) -> AdapterResult<Vec<BraketGate>> + Send + Sync>;

/// The three vocabulary tables, bundled.
pub struct GateVocabulary {
    names: FxHashMap<&'static str, &'static str>,
    decompositions: FxHashMap<&'static str, DecomposeFn>,
    templates: FxHashMap<&'static str, GateTemplate>,
}

static STANDARD: LazyLock<GateVocabulary> = LazyLock::new(GateVocabulary::standard);

/// Get the process-wide standard vocabulary.
pub fn standard() -> &'static GateVocabulary {
    &STANDARD
}

impl GateVocabulary {
    /// Build the standard vocabulary.
    pub fn standard() -> Self {
        Self {
            names: standard_names(),
            decompositions: standard_decompositions(),
            templates: standard_templates(),
        }
    }

    /// Map a front-end gate name to the provider's name for it.
    pub fn backend_name(&self, name: &str) -> Option<&'static str> {
        self.names.get(name).copied()
    }

    /// Check whether a front-end gate has a registered decomposition.
    pub fn has_decomposition(&self, name: &str) -> bool {
        self.decompositions.contains_key(name)
    }

    /// Lower a front-end gate to provider primitives.
    ///
    /// Fails with [`AdapterError::MissingDecomposition`] for unregistered
    /// names and [`AdapterError::ParameterCountMismatch`] when the parameter
    /// list does not match the gate's declared slots.
    pub fn decompose(
        &self,
        name: &str,
        params: &[ParameterExpression],
    ) -> AdapterResult<Vec<BraketGate>> {
        let decompose = self
            .decompositions
            .get(name)
            .ok_or_else(|| AdapterError::MissingDecomposition(name.to_string()))?;
        decompose(params)
    }

    /// Look up the front-end template for a provider gate name.
    ///
    /// Lookup is case-insensitive on the provider name. Absence means the
    /// gate has no front-end mapping; callers decide whether that is fatal.
    pub fn template(&self, backend_name: &str) -> Option<&GateTemplate> {
        self.templates.get(backend_name.to_lowercase().as_str())
    }

    /// Replace or insert a decomposition entry.
    pub fn register_decomposition(&mut self, name: &'static str, decompose: DecomposeFn) {
        self.decompositions.insert(name, decompose);
    }
}

impl std::fmt::Debug for GateVocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateVocabulary")
            .field("names", &self.names.len())
            .field("decompositions", &self.decompositions.len())
            .field("templates", &self.templates.len())
            .finish()
    }
}

/// Convert a parameter expression to a provider angle.
///
/// Bound expressions evaluate to a numeric angle; plain symbols become free
/// parameters of the same name. Compound symbolic expressions have no
/// provider representation.
pub fn to_angle(expr: &ParameterExpression) -> AdapterResult<Angle> {
    if let Some(value) = expr.as_f64() {
        return Ok(Angle::Bound(value));
    }
    if let Some(name) = expr.as_symbol() {
        return Ok(Angle::Free(name.to_string()));
    }
    Err(AdapterError::UnboundExpression(expr.to_string()))
}

fn ensure_params(
    gate: &'static str,
    expected: usize,
    params: &[ParameterExpression],
) -> AdapterResult<()> {
    if params.len() != expected {
        return Err(AdapterError::ParameterCountMismatch {
            gate: gate.to_string(),
            expected,
            got: params.len(),
        });
    }
    Ok(())
}

// =========================================================================
// Composite decompositions
// =========================================================================

/// Lower `u` / `u3` (θ, φ, λ) to an Rz/Rx sequence.
pub fn decompose_u(params: &[ParameterExpression]) -> AdapterResult<Vec<BraketGate>> {
    ensure_params("u", 3, params)?;
    let theta = to_angle(&params[0])?;
    let phi = to_angle(&params[1])?;
    let lambda = to_angle(&params[2])?;
    Ok(vec![
        BraketGate::Rz(lambda),
        BraketGate::Rx(Angle::Bound(FRAC_PI_2)),
        BraketGate::Rz(theta),
        BraketGate::Rx(Angle::Bound(-FRAC_PI_2)),
        BraketGate::Rz(phi),
    ])
}

/// Lower `u1` (λ) to a single Rz.
pub fn decompose_u1(params: &[ParameterExpression]) -> AdapterResult<Vec<BraketGate>> {
    ensure_params("u1", 1, params)?;
    Ok(vec![BraketGate::Rz(to_angle(&params[0])?)])
}

/// Lower `u2` (φ, λ) to an Rz/Ry/Rz sequence.
pub fn decompose_u2(params: &[ParameterExpression]) -> AdapterResult<Vec<BraketGate>> {
    ensure_params("u2", 2, params)?;
    let phi = to_angle(&params[0])?;
    let lambda = to_angle(&params[1])?;
    Ok(vec![
        BraketGate::Rz(lambda),
        BraketGate::Ry(Angle::Bound(FRAC_PI_2)),
        BraketGate::Rz(phi),
    ])
}

// =========================================================================
// Table construction
// =========================================================================

/// Identity lift of a parameterless gate.
fn lift0(name: &'static str, gate: fn() -> BraketGate) -> (&'static str, DecomposeFn) {
    let decompose: DecomposeFn = Box::new(move |params| {
        ensure_params(name, 0, params)?;
        Ok(vec![gate()])
    });
    (name, decompose)
}

/// Identity lift of a single-angle gate.
fn lift1(name: &'static str, gate: fn(Angle) -> BraketGate) -> (&'static str, DecomposeFn) {
    let decompose: DecomposeFn = Box::new(move |params| {
        ensure_params(name, 1, params)?;
        Ok(vec![gate(to_angle(&params[0])?)])
    });
    (name, decompose)
}

fn standard_names() -> FxHashMap<&'static str, &'static str> {
    [
        ("u", "u"),
        ("u1", "u1"),
        ("u2", "u2"),
        ("u3", "u3"),
        ("p", "phaseshift"),
        ("cx", "cnot"),
        ("x", "x"),
        ("y", "y"),
        ("z", "z"),
        ("t", "t"),
        ("tdg", "ti"),
        ("s", "s"),
        ("sdg", "si"),
        ("sx", "v"),
        ("sxdg", "vi"),
        ("swap", "swap"),
        ("rx", "rx"),
        ("ry", "ry"),
        ("rz", "rz"),
        ("rzz", "zz"),
        ("id", "i"),
        ("h", "h"),
        ("cy", "cy"),
        ("cz", "cz"),
        ("ccx", "ccnot"),
        ("cswap", "cswap"),
        ("cp", "cphaseshift"),
        ("rxx", "xx"),
        ("ryy", "yy"),
        ("ecr", "ecr"),
    ]
    .into_iter()
    .collect()
}

fn standard_decompositions() -> FxHashMap<&'static str, DecomposeFn> {
    let mut map: FxHashMap<&'static str, DecomposeFn> = FxHashMap::default();

    for (name, decompose) in [
        lift0("id", || BraketGate::I),
        lift0("x", || BraketGate::X),
        lift0("y", || BraketGate::Y),
        lift0("z", || BraketGate::Z),
        lift0("h", || BraketGate::H),
        lift0("s", || BraketGate::S),
        lift0("sdg", || BraketGate::Si),
        lift0("t", || BraketGate::T),
        lift0("tdg", || BraketGate::Ti),
        lift0("sx", || BraketGate::V),
        lift0("sxdg", || BraketGate::Vi),
        lift0("cx", || BraketGate::CNot),
        lift0("cy", || BraketGate::CY),
        lift0("cz", || BraketGate::CZ),
        lift0("swap", || BraketGate::Swap),
        lift0("ccx", || BraketGate::CCNot),
        lift0("cswap", || BraketGate::CSwap),
        lift0("ecr", || BraketGate::ECR),
        lift1("rx", BraketGate::Rx),
        lift1("ry", BraketGate::Ry),
        lift1("rz", BraketGate::Rz),
        lift1("p", BraketGate::PhaseShift),
        lift1("cp", BraketGate::CPhaseShift),
        lift1("rxx", BraketGate::XX),
        lift1("ryy", BraketGate::YY),
        lift1("rzz", BraketGate::ZZ),
    ] {
        map.insert(name, decompose);
    }

    map.insert("u", Box::new(decompose_u));
    map.insert("u3", Box::new(decompose_u));
    map.insert("u1", Box::new(decompose_u1));
    map.insert("u2", Box::new(decompose_u2));

    map
}

fn standard_templates() -> FxHashMap<&'static str, GateTemplate> {
    const THETA: &[&str] = &["theta"];
    const U_PARAMS: &[&str] = &["theta", "phi", "lam"];
    const U2_PARAMS: &[&str] = &["phi", "lam"];
    const LAM: &[&str] = &["lam"];
    const NONE: &[&str] = &[];

    fn t(name: &'static str, num_qubits: u32, params: &'static [&'static str]) -> GateTemplate {
        GateTemplate {
            name,
            num_qubits,
            params,
        }
    }

    [
        ("u", t("u", 1, U_PARAMS)),
        ("u1", t("u1", 1, LAM)),
        ("u2", t("u2", 1, U2_PARAMS)),
        ("u3", t("u3", 1, U_PARAMS)),
        ("h", t("h", 1, NONE)),
        ("ccnot", t("ccx", 3, NONE)),
        ("cnot", t("cx", 2, NONE)),
        ("cphaseshift", t("cp", 2, THETA)),
        ("cswap", t("cswap", 3, NONE)),
        ("cy", t("cy", 2, NONE)),
        ("cz", t("cz", 2, NONE)),
        ("i", t("id", 1, NONE)),
        ("iswap", t("iswap", 2, NONE)),
        ("phaseshift", t("p", 1, THETA)),
        ("rx", t("rx", 1, THETA)),
        ("ry", t("ry", 1, THETA)),
        ("rz", t("rz", 1, THETA)),
        ("s", t("s", 1, NONE)),
        ("si", t("sdg", 1, NONE)),
        ("swap", t("swap", 2, NONE)),
        ("t", t("t", 1, NONE)),
        ("ti", t("tdg", 1, NONE)),
        ("v", t("sx", 1, NONE)),
        ("vi", t("sxdg", 1, NONE)),
        ("x", t("x", 1, NONE)),
        ("xx", t("rxx", 2, THETA)),
        ("xy", t("xx_plus_yy", 2, THETA)),
        ("y", t("y", 1, NONE)),
        ("yy", t("ryy", 2, THETA)),
        ("z", t("z", 1, NONE)),
        ("zz", t("rzz", 2, THETA)),
        ("ecr", t("ecr", 2, NONE)),
    ]
    .into_iter()
    .collect()
}

//! Named session parameters and solver-info strings.
//!
//! Stands in for the session reader: parameters are plain `f64` scalars,
//! solver info entries are strings. Both are case-sensitive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CompressibleError, Result};

/// Already-loaded session values.
///
/// # Example
///
/// ```
/// use dg_compressible::config::SessionParameters;
///
/// let session = SessionParameters::new()
///     .with_parameter("Gamma", 1.4)
///     .with_solver_info("UpwindType", "ExactToro");
///
/// assert!(session.defines_parameter("Gamma"));
/// assert_eq!(session.load_parameter("GasConstant", 287.058), 287.058);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionParameters {
    /// Scalar parameters.
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
    /// Solver-info key/value strings.
    #[serde(default)]
    pub solver_info: BTreeMap<String, String>,
}

impl SessionParameters {
    /// Empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a scalar parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Add or replace a solver-info entry.
    pub fn with_solver_info(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.solver_info.insert(name.into(), value.into());
        self
    }

    /// Whether the scalar parameter is present.
    pub fn defines_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Whether the solver-info entry is present.
    pub fn defines_solver_info(&self, name: &str) -> bool {
        self.solver_info.contains_key(name)
    }

    /// Scalar parameter or `default`.
    pub fn load_parameter(&self, name: &str, default: f64) -> f64 {
        self.parameters.get(name).copied().unwrap_or(default)
    }

    /// Scalar parameter that must be present.
    pub fn require_parameter(&self, name: &'static str) -> Result<f64> {
        self.parameters
            .get(name)
            .copied()
            .ok_or(CompressibleError::missing_parameter(name))
    }

    /// Solver-info entry or `default`.
    pub fn load_solver_info<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.solver_info.get(name).map_or(default, String::as_str)
    }

    /// Solver-info entry that must be present.
    pub fn require_solver_info(&self, name: &'static str) -> Result<&str> {
        self.solver_info
            .get(name)
            .map(String::as_str)
            .ok_or(CompressibleError::MissingSolverInfo { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_overrides() {
        let session = SessionParameters::new().with_parameter("mu", 2.0e-5);
        assert_eq!(session.load_parameter("mu", 1.78e-5), 2.0e-5);
        assert_eq!(session.load_parameter("Twall", 300.15), 300.15);
        assert_eq!(session.load_solver_info("AdvectionType", "WeakDG"), "WeakDG");
    }

    #[test]
    fn test_required_values() {
        let session = SessionParameters::new().with_solver_info("UpwindType", "Roe");
        assert_eq!(session.require_solver_info("UpwindType"), Ok("Roe"));
        assert_eq!(
            session.require_parameter("pInf"),
            Err(CompressibleError::missing_parameter("pInf"))
        );
        assert_eq!(
            session.require_solver_info("Projection"),
            Err(CompressibleError::MissingSolverInfo { name: "Projection" })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "parameters": { "Gamma": 1.4, "pInf": 101325.0 },
            "solver_info": { "UpwindType": "Average" }
        }"#;
        let session: SessionParameters = serde_json::from_str(json).unwrap();
        assert_eq!(session.load_parameter("Gamma", 0.0), 1.4);
        assert!(session.defines_solver_info("UpwindType"));

        let back = serde_json::to_string(&session).unwrap();
        let again: SessionParameters = serde_json::from_str(&back).unwrap();
        assert_eq!(session, again);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let session: SessionParameters = serde_json::from_str("{}").unwrap();
        assert!(session.parameters.is_empty());
        assert!(session.solver_info.is_empty());
    }
}

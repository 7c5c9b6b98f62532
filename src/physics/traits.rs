//! Physics module traits.

/// Key/value pairs describing a configured physics module.
pub type SummaryList = Vec<(String, String)>;

/// Non-generic information about a physics module.
pub trait PhysicsModuleInfo: Send + Sync {
    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Short description of the physics being modeled.
    fn description(&self) -> &str;

    /// Number of conserved variables in the system.
    fn n_variables(&self) -> usize;

    /// Names of the conserved variables (e.g., ["rho", "rhou", "E"]).
    fn variable_names(&self) -> &[&'static str];

    /// Configuration summary for run headers.
    fn summary(&self) -> SummaryList {
        vec![
            ("Physics".to_string(), self.name().to_string()),
            ("Variables".to_string(), self.variable_names().join(", ")),
        ]
    }
}

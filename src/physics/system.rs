//! Compressible Navier-Stokes flow system.
//!
//! Ties the immutable gas description and solver settings to the
//! collaborators of a run (trace restriction, element geometry,
//! over-integration, communicator) and exposes the callbacks the
//! surrounding discretisation calls each step:
//!
//! - [`InviscidFluxVector`] / [`ViscousFluxVector`], standard or
//!   de-aliased according to the settings
//! - [`apply_boundary_condition`](CompressibleFlowSystem::apply_boundary_condition)
//!   per boundary region
//! - [`time_step`](CompressibleFlowSystem::time_step) once per step

use std::sync::Arc;

use log::debug;

use super::traits::{PhysicsModuleInfo, SummaryList};
use crate::boundary::{BoundaryRegion, TraceSpace, apply_boundary};
use crate::config::{FreestreamReference, SolverSettings};
use crate::equations;
use crate::error::{CompressibleError, Result};
use crate::flux::{
    InviscidFluxVector, ViscousFluxVector, euler_flux, euler_flux_dealiased, viscous_flux,
    viscous_flux_dealiased,
};
use crate::operators::{ExpansionGeometry, OverIntegration};
use crate::time::{Communicator, estimate_time_step, stability_limit_vector};
use crate::types::{FluxTensor, GradientTensor, PointFields, SpaceDim};

/// Configured compressible flow physics. Built by
/// [`CompressibleFlowBuilder`](super::CompressibleFlowBuilder).
pub struct CompressibleFlowSystem {
    pub(crate) dim: SpaceDim,
    pub(crate) gas: FreestreamReference,
    pub(crate) settings: SolverSettings,
    pub(crate) vel_loc: Vec<usize>,
    pub(crate) regions: Vec<BoundaryRegion>,
    pub(crate) trace: Option<Arc<dyn TraceSpace + Send + Sync>>,
    pub(crate) geometry: Option<Arc<dyn ExpansionGeometry + Send + Sync>>,
    pub(crate) over_integration: Option<Arc<dyn OverIntegration + Send + Sync>>,
    pub(crate) comm: Arc<dyn Communicator + Send + Sync>,
}

impl CompressibleFlowSystem {
    #[inline]
    pub fn dim(&self) -> SpaceDim {
        self.dim
    }

    #[inline]
    pub fn gas(&self) -> &FreestreamReference {
        &self.gas
    }

    #[inline]
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Ratio of specific heats, as handed to interface Riemann solvers.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gas.gamma
    }

    /// Field indices of the momentum components.
    #[inline]
    pub fn vel_loc(&self) -> &[usize] {
        &self.vel_loc
    }

    /// Outward trace normals, if a trace is attached.
    pub fn normals(&self) -> Option<&[Vec<f64>]> {
        self.trace.as_deref().map(|t| t.trace_normals())
    }

    pub fn regions(&self) -> &[BoundaryRegion] {
        &self.regions
    }

    /// Boundary region `index`.
    pub fn region(&self, index: usize) -> Result<&BoundaryRegion> {
        let count = self.regions.len();
        self.regions
            .get(index)
            .ok_or(CompressibleError::BoundaryRegionOutOfRange { index, count })
    }

    /// Pressure of `state`.
    pub fn pressure(&self, state: &PointFields) -> Result<Vec<f64>> {
        state.expect_variables(self.dim.n_variables())?;
        Ok(equations::pressure(&self.gas, self.dim, state))
    }

    /// Velocity components of `state`.
    pub fn velocity(&self, state: &PointFields) -> Result<Vec<Vec<f64>>> {
        state.expect_variables(self.dim.n_variables())?;
        Ok(equations::velocity(self.dim, state))
    }

    /// Temperature of `state`.
    pub fn temperature(&self, state: &PointFields) -> Result<Vec<f64>> {
        let p = self.pressure(state)?;
        Ok(equations::temperature(&self.gas, state, &p))
    }

    /// Speed of sound of `state`.
    pub fn sound_speed(&self, state: &PointFields) -> Result<Vec<f64>> {
        let p = self.pressure(state)?;
        Ok(equations::sound_speed(&self.gas, state, &p))
    }

    /// Mach number of `state`.
    pub fn mach(&self, state: &PointFields) -> Result<Vec<f64>> {
        let c = self.sound_speed(state)?;
        Ok(equations::mach(self.dim, state, &c))
    }

    /// Apply the closure of region `index`, writing into its storage.
    pub fn apply_boundary_condition(&mut self, index: usize, state: &PointFields) -> Result<()> {
        let count = self.regions.len();
        let trace = self
            .trace
            .as_deref()
            .ok_or(CompressibleError::MissingCollaborator("trace space"))?;
        let region = self
            .regions
            .get_mut(index)
            .ok_or(CompressibleError::BoundaryRegionOutOfRange { index, count })?;

        debug!(
            "applying {} boundary condition to region {index} ({} points)",
            region.kind(),
            region.n_points()
        );
        apply_boundary(&self.gas, self.dim, trace, region, state)
    }

    /// Apply every region's closure in order.
    pub fn apply_boundary_conditions(&mut self, state: &PointFields) -> Result<()> {
        for index in 0..self.regions.len() {
            self.apply_boundary_condition(index, state)?;
        }
        Ok(())
    }

    /// Stable time step for `state`, reduced over all partitions.
    pub fn time_step(&self, state: &PointFields) -> Result<f64> {
        let geometry = self
            .geometry
            .as_deref()
            .ok_or(CompressibleError::MissingCollaborator("expansion geometry"))?;
        estimate_time_step(
            &self.gas,
            self.dim,
            state,
            geometry,
            self.comm.as_ref(),
            &self.settings,
        )
    }

    /// 1D CFL denominators for every element's order (modes − 1).
    pub fn stability_limits(&self) -> Result<Vec<f64>> {
        let geometry = self
            .geometry
            .as_deref()
            .ok_or(CompressibleError::MissingCollaborator("expansion geometry"))?;
        let orders: Vec<usize> = (0..geometry.n_elements())
            .map(|e| geometry.n_modes(e).saturating_sub(1))
            .collect();
        stability_limit_vector(&orders, self.settings.projection)
    }

    fn dealiasing_operator(&self) -> Result<&(dyn OverIntegration + Send + Sync)> {
        self.over_integration
            .as_deref()
            .ok_or(CompressibleError::MissingCollaborator("over-integration operator"))
    }
}

impl InviscidFluxVector for CompressibleFlowSystem {
    fn flux_vector(&self, state: &PointFields) -> Result<FluxTensor> {
        if self.settings.dealiasing {
            euler_flux_dealiased(&self.gas, self.dim, state, self.dealiasing_operator()?)
        } else {
            euler_flux(&self.gas, self.dim, state)
        }
    }
}

impl ViscousFluxVector for CompressibleFlowSystem {
    fn viscous_flux_vector(
        &self,
        primitives: &PointFields,
        derivatives: &GradientTensor,
    ) -> Result<FluxTensor> {
        if self.settings.dealiasing {
            viscous_flux_dealiased(
                &self.gas,
                self.dim,
                primitives,
                derivatives,
                self.dealiasing_operator()?,
            )
        } else {
            viscous_flux(&self.gas, self.dim, primitives, derivatives)
        }
    }
}

impl PhysicsModuleInfo for CompressibleFlowSystem {
    fn name(&self) -> &'static str {
        "CompressibleFlowSystem"
    }

    fn description(&self) -> &str {
        "Compressible Navier-Stokes equations for a calorically perfect gas"
    }

    fn n_variables(&self) -> usize {
        self.dim.n_variables()
    }

    fn variable_names(&self) -> &[&'static str] {
        self.dim.variable_names()
    }

    fn summary(&self) -> SummaryList {
        let s = &self.settings;
        let g = &self.gas;
        let mut list: SummaryList = vec![
            ("Physics".into(), self.name().into()),
            ("Dimension".into(), self.dim.to_string()),
            ("Variables".into(), self.variable_names().join(", ")),
            ("Projection".into(), s.projection.to_string()),
            ("Advection".into(), s.advection_type.clone()),
            ("Diffusion".into(), s.diffusion_type.clone()),
            ("Riemann solver".into(), s.upwind_type.clone()),
            ("Dealiasing".into(), s.dealiasing.to_string()),
            ("CFL".into(), s.cfl_safety_factor.to_string()),
            ("Gamma".into(), g.gamma.to_string()),
            ("Viscosity".into(), g.viscosity_model.to_string()),
            ("Prandtl".into(), format!("{:.4}", g.prandtl())),
        ];
        list.extend(
            self.regions
                .iter()
                .enumerate()
                .map(|(i, r)| (format!("Boundary {i}"), r.kind().to_string())),
        );
        list
    }
}

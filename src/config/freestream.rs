//! Freestream reference state and gas constants.
//!
//! Built once from the session and then passed by reference into every
//! closure. Nothing in the crate mutates it after construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::session::SessionParameters;
use crate::error::{CompressibleError, Result};
use crate::types::SpaceDim;

/// Default specific gas constant for air (J/(kg K)).
pub const DEFAULT_GAS_CONSTANT: f64 = 287.058;
/// Default wall temperature (K).
pub const DEFAULT_WALL_TEMPERATURE: f64 = 300.15;
/// Default reference dynamic viscosity (kg/(m s)).
pub const DEFAULT_VISCOSITY: f64 = 1.78e-5;
/// Default thermal conductivity (W/(m K)).
pub const DEFAULT_THERMAL_CONDUCTIVITY: f64 = 0.0257;

/// How the dynamic viscosity is evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityModel {
    /// Constant reference viscosity everywhere.
    #[default]
    Constant,
    /// Sutherland's law evaluated on the local temperature.
    Variable,
}

impl FromStr for ViscosityModel {
    type Err = CompressibleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Constant" => Ok(Self::Constant),
            "Variable" => Ok(Self::Variable),
            other => Err(CompressibleError::UnknownViscosityModel(other.to_string())),
        }
    }
}

impl fmt::Display for ViscosityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "Constant"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

/// Calorically perfect gas constants and the freestream reference state.
///
/// # Example
///
/// ```
/// use dg_compressible::config::FreestreamReference;
///
/// let gas = FreestreamReference::air();
/// let c_inf = gas.freestream_sound_speed();
/// assert!((c_inf - 340.29).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreestreamReference {
    /// Ratio of specific heats γ.
    pub gamma: f64,
    /// Specific gas constant R.
    pub gas_constant: f64,
    /// Thermal conductivity k.
    pub thermal_conductivity: f64,
    /// Freestream density ρ∞.
    pub rho_inf: f64,
    /// Freestream pressure p∞.
    pub p_inf: f64,
    /// Freestream velocity x-component.
    pub u_inf: f64,
    /// Freestream velocity y-component.
    pub v_inf: f64,
    /// Freestream velocity z-component.
    pub w_inf: f64,
    /// Wall temperature.
    pub wall_temperature: f64,
    /// Viscosity model selector.
    pub viscosity_model: ViscosityModel,
    /// Reference (or constant) dynamic viscosity μ.
    pub mu: f64,
}

impl Default for FreestreamReference {
    fn default() -> Self {
        Self::air()
    }
}

impl FreestreamReference {
    /// Sea-level air with a slow x-directed freestream.
    pub fn air() -> Self {
        Self {
            gamma: 1.4,
            gas_constant: DEFAULT_GAS_CONSTANT,
            thermal_conductivity: DEFAULT_THERMAL_CONDUCTIVITY,
            rho_inf: 1.225,
            p_inf: 101_325.0,
            u_inf: 0.1,
            v_inf: 0.0,
            w_inf: 0.0,
            wall_temperature: DEFAULT_WALL_TEMPERATURE,
            viscosity_model: ViscosityModel::Constant,
            mu: DEFAULT_VISCOSITY,
        }
    }

    /// Load from session parameters for a given dimension.
    ///
    /// `Gamma`, `pInf`, `rhoInf` and `uInf` are always required, `vInf` for
    /// 2D/3D and `wInf` for 3D. Everything else falls back to air defaults.
    pub fn from_session(session: &SessionParameters, dim: SpaceDim) -> Result<Self> {
        let gamma = session.require_parameter("Gamma")?;
        let p_inf = session.require_parameter("pInf")?;
        let rho_inf = session.require_parameter("rhoInf")?;
        let u_inf = session.require_parameter("uInf")?;

        let v_inf = if dim.get() >= 2 {
            session.require_parameter("vInf")?
        } else {
            0.0
        };
        let w_inf = if dim.get() == 3 {
            session.require_parameter("wInf")?
        } else {
            0.0
        };

        let viscosity_model = session
            .load_solver_info("ViscosityType", "Constant")
            .parse()?;

        Ok(Self {
            gamma,
            gas_constant: session.load_parameter("GasConstant", DEFAULT_GAS_CONSTANT),
            thermal_conductivity: session
                .load_parameter("thermalConductivity", DEFAULT_THERMAL_CONDUCTIVITY),
            rho_inf,
            p_inf,
            u_inf,
            v_inf,
            w_inf,
            wall_temperature: session.load_parameter("Twall", DEFAULT_WALL_TEMPERATURE),
            viscosity_model,
            mu: session.load_parameter("mu", DEFAULT_VISCOSITY),
        })
    }

    /// Builder-style override of the freestream velocity.
    pub fn with_velocity(mut self, u: f64, v: f64, w: f64) -> Self {
        self.u_inf = u;
        self.v_inf = v;
        self.w_inf = w;
        self
    }

    /// Builder-style override of the viscosity model.
    pub fn with_viscosity_model(mut self, model: ViscosityModel) -> Self {
        self.viscosity_model = model;
        self
    }

    /// Specific heat at constant pressure: cp = γ/(γ−1) R.
    pub fn cp(&self) -> f64 {
        self.gamma / (self.gamma - 1.0) * self.gas_constant
    }

    /// Prandtl number: Pr = cp μ / k.
    pub fn prandtl(&self) -> f64 {
        self.cp() * self.mu / self.thermal_conductivity
    }

    /// Freestream speed of sound √(γ p∞/ρ∞).
    pub fn freestream_sound_speed(&self) -> f64 {
        (self.gamma * self.p_inf / self.rho_inf).sqrt()
    }

    /// Freestream entropy measure p∞/ρ∞^γ.
    pub fn freestream_entropy(&self) -> f64 {
        self.p_inf / self.rho_inf.powf(self.gamma)
    }

    /// Sutherland reference temperature T* = p∞/(ρ∞ R).
    pub fn reference_temperature(&self) -> f64 {
        self.p_inf / (self.rho_inf * self.gas_constant)
    }

    /// Freestream velocity truncated to `dim` components.
    pub fn velocity(&self, dim: SpaceDim) -> Vec<f64> {
        [self.u_inf, self.v_inf, self.w_inf][..dim.get()].to_vec()
    }

    /// Freestream conserved state `[ρ, ρu.., E]` for `dim`.
    pub fn conserved_state(&self, dim: SpaceDim) -> Vec<f64> {
        let vel = self.velocity(dim);
        let kinetic: f64 = vel.iter().map(|v| 0.5 * self.rho_inf * v * v).sum();

        let mut state = Vec::with_capacity(dim.n_variables());
        state.push(self.rho_inf);
        state.extend(vel.iter().map(|v| self.rho_inf * v));
        state.push(self.p_inf / (self.gamma - 1.0) + kinetic);
        state
    }
}

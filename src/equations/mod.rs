//! Gas-dynamics closure relations.
//!
//! Currently a single calorically perfect ideal gas closure, see
//! [`thermodynamics`].

pub mod thermodynamics;

pub use thermodynamics::{
    SUTHERLAND_CONSTANT, dynamic_viscosity, mach, point_pressure, pressure,
    pressure_with_velocity, sound_speed, temperature, velocity, viscosity,
};

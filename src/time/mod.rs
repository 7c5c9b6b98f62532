//! Time-step control.
//!
//! The outer integrator queries [`estimate_time_step`] once per step; the
//! per-partition estimate is reduced through a [`Communicator`].

mod comm;
mod timestep;

pub use comm::{Communicator, SerialCommunicator};
#[cfg(feature = "parallel")]
pub use timestep::max_std_velocity_parallel;
pub use timestep::{
    C_LAMBDA, MAX_STABILITY_ORDER, estimate_time_step, stability_limit, stability_limit_vector,
    std_velocity_bounds,
};

//! Integration tests for the CFL time-step estimate.
//!
//! These tests verify:
//! - Closed-form Δt on a uniform quadrilateral mesh
//! - Δt halves when the sound speed doubles in fluid at rest
//! - The estimate is reduced through the communicator
//! - Stability limits for every supported order
//! - Unsupported element shapes are rejected

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_relative_eq;
use dg_compressible::time::{C_LAMBDA, MAX_STABILITY_ORDER, std_velocity_bounds};
use dg_compressible::{
    CompressibleError, CompressibleFlowBuilder, Communicator, ElementInfo, ElementMetrics,
    ElementShape, FreestreamReference, GeometryType, PointFields, ProjectionType,
    SerialCommunicator, SolverSettings, SpaceDim, estimate_time_step, stability_limit,
};

const GAMMA: f64 = 1.4;

/// Fluid at rest with density 1 and pressure `p` on `n_points` points.
fn resting_state(p: f64, n_points: usize) -> PointFields {
    PointFields::uniform(&[1.0, 0.0, 0.0, p / (GAMMA - 1.0)], n_points)
}

/// Communicator standing in for a partition that reports `remote`.
struct FixedRemote {
    remote: f64,
    calls: AtomicUsize,
}

impl Communicator for FixedRemote {
    fn all_reduce_min(&self, value: f64) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        value.min(self.remote)
    }

    fn size(&self) -> usize {
        2
    }
}

#[test]
fn test_unit_square_closed_form() {
    let gas = FreestreamReference::air();
    let n_modes = 4;
    let geometry = ElementMetrics::uniform_quads(1, 1, 1.0, 1.0, n_modes);
    let state = resting_state(1.0e5, n_modes * n_modes);
    let settings = SolverSettings::default();

    let c = (GAMMA * 1.0e5_f64).sqrt();
    let bounds = std_velocity_bounds(&gas, SpaceDim::TWO, &state, &geometry).unwrap();
    assert_relative_eq!(bounds[0], c, max_relative = 1e-14);

    let dt = estimate_time_step(
        &gas,
        SpaceDim::TWO,
        &state,
        &geometry,
        &SerialCommunicator,
        &settings,
    )
    .unwrap();
    let order = (n_modes - 1) as f64;
    let expected = settings.cfl_safety_factor * 1.0 / (c * C_LAMBDA * order * order);
    assert_relative_eq!(dt, expected, max_relative = 1e-12);
}

#[test]
fn test_time_step_halves_when_sound_speed_doubles() {
    let gas = FreestreamReference::air();
    let n_modes = 3;
    let geometry = ElementMetrics::uniform_quads(3, 2, 1.5, 0.5, n_modes);
    let n = 6 * n_modes * n_modes;
    let settings = SolverSettings::default();

    let slow = resting_state(1.0e5, n);
    // Four times the pressure at fixed density doubles c.
    let fast = resting_state(4.0e5, n);

    let dt = |state: &PointFields| {
        estimate_time_step(
            &gas,
            SpaceDim::TWO,
            state,
            &geometry,
            &SerialCommunicator,
            &settings,
        )
        .unwrap()
    };
    assert_relative_eq!(dt(&fast), 0.5 * dt(&slow), max_relative = 1e-12);
}

#[test]
fn test_global_reduction_through_system() {
    let geometry = ElementMetrics::uniform_quads(2, 2, 1.0, 1.0, 3);
    let state = resting_state(1.0e5, 4 * 9);

    let serial = CompressibleFlowBuilder::new(
        SpaceDim::TWO,
        FreestreamReference::air(),
        SolverSettings::default(),
    )
    .with_geometry(Arc::new(geometry.clone()))
    .build()
    .unwrap()
    .time_step(&state)
    .unwrap();

    let comm = Arc::new(FixedRemote {
        remote: 1.0e-9,
        calls: AtomicUsize::new(0),
    });
    let system = CompressibleFlowBuilder::new(
        SpaceDim::TWO,
        FreestreamReference::air(),
        SolverSettings::default(),
    )
    .with_geometry(Arc::new(geometry))
    .with_communicator(comm.clone())
    .build()
    .unwrap();

    assert_eq!(system.time_step(&state).unwrap(), 1.0e-9);
    assert_eq!(comm.calls.load(Ordering::SeqCst), 1);
    assert!(serial > 1.0e-9);
}

#[test]
fn test_cfl_scales_time_step() {
    let geometry = ElementMetrics::uniform_quads(1, 1, 1.0, 1.0, 5);
    let state = resting_state(1.0e5, 25);
    let dt = |cfl: f64| {
        CompressibleFlowBuilder::new(
            SpaceDim::TWO,
            FreestreamReference::air(),
            SolverSettings::default().with_cfl_safety_factor(cfl),
        )
        .with_geometry(Arc::new(geometry.clone()))
        .build()
        .unwrap()
        .time_step(&state)
        .unwrap()
    };
    assert_relative_eq!(dt(1.0), 2.0 * dt(0.5), max_relative = 1e-14);
}

#[test]
fn test_stability_limits() {
    assert_eq!(stability_limit(0, ProjectionType::Discontinuous).unwrap(), 2.0);
    assert_eq!(stability_limit(1, ProjectionType::Discontinuous).unwrap(), 6.0);
    assert_eq!(
        stability_limit(MAX_STABILITY_ORDER, ProjectionType::Discontinuous).unwrap(),
        321.83
    );

    let mut previous = 0.0;
    for order in 0..=MAX_STABILITY_ORDER {
        let limit = stability_limit(order, ProjectionType::Discontinuous).unwrap();
        assert!(limit > previous);
        previous = limit;
    }

    assert_eq!(
        stability_limit(MAX_STABILITY_ORDER + 1, ProjectionType::Discontinuous),
        Err(CompressibleError::StabilityOrder(MAX_STABILITY_ORDER + 1))
    );
}

#[test]
fn test_unsupported_shape_rejected() {
    let gas = FreestreamReference::air();
    let prism = ElementInfo {
        shape: ElementShape::Prism,
        geometry_type: GeometryType::Regular,
        derivative_factors: vec![vec![1.0]; 9],
        area: 1.0,
        n_points: 8,
        n_modes: 2,
    };
    let mut geometry = ElementMetrics::new(SpaceDim::THREE);
    geometry.push(prism);
    let state = PointFields::uniform(&[1.0, 0.0, 0.0, 0.0, 2.5e5], 8);

    let result = estimate_time_step(
        &gas,
        SpaceDim::THREE,
        &state,
        &geometry,
        &SerialCommunicator,
        &SolverSettings::default(),
    );
    assert_eq!(
        result,
        Err(CompressibleError::UnsupportedElementShape {
            element: 0,
            shape: ElementShape::Prism.to_string(),
        })
    );
}

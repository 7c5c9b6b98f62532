//! End-to-end tests of a configured flow system.
//!
//! These tests verify:
//! - Session-driven setup with de-aliasing enabled
//! - The de-aliased Euler flux agrees with the direct flux for polynomial
//!   states the over-integrated set resolves
//! - One step of the callback sequence (boundary values, fluxes, Δt)
//! - Settings survive a JSON round trip for run records

use std::sync::Arc;

use approx::assert_relative_eq;
use dg_compressible::polynomial::gauss_lobatto_nodes;
use dg_compressible::{
    BoundaryRegion, CompressibleError, CompressibleFlowBuilder, ElementMetrics, FluxTensor,
    FreestreamReference, IndexedTrace, InviscidFluxVector, LineOverIntegration, PhysicsModuleInfo,
    PointFields, SessionParameters, SolverSettings, SpaceDim, ViscousFluxVector, euler_flux,
};

fn session_1d() -> SessionParameters {
    SessionParameters::new()
        .with_parameter("Gamma", 1.4)
        .with_parameter("pInf", 1.0)
        .with_parameter("rhoInf", 1.0)
        .with_parameter("uInf", 0.5)
        .with_solver_info("UpwindType", "ExactToro")
        .with_solver_info("SpectralhpDealiasing", "True")
}

#[test]
fn test_dealiased_flux_of_linear_momentum() {
    let n_elements = 2;
    let order = 4;
    let over_integration = LineOverIntegration::new(n_elements, order);
    let nodes = gauss_lobatto_nodes(order);

    let system = CompressibleFlowBuilder::from_session(&session_1d(), SpaceDim::ONE)
        .unwrap()
        .with_over_integration(Arc::new(over_integration))
        .build()
        .unwrap();
    assert!(system.settings().dealiasing);

    // ρ = 1 and E = 3 are constant, ρu linear per element.
    let n = n_elements * (order + 1);
    let mut state = PointFields::uniform(&[1.0, 0.0, 3.0], n);
    for e in 0..n_elements {
        for (i, &x) in nodes.iter().enumerate() {
            state.field_mut(1)[e * (order + 1) + i] = 0.2 + 0.1 * x + 0.05 * e as f64;
        }
    }

    let dealiased = system.flux_vector(&state).unwrap();
    let direct = euler_flux(system.gas(), SpaceDim::ONE, &state).unwrap();

    // Density flux is the momentum itself; u ρu + p is quadratic in x and
    // resolved on the solution points.
    for v in 0..2 {
        for p in 0..n {
            assert_relative_eq!(
                dealiased.get(0, v, p),
                direct.get(0, v, p),
                epsilon = 1e-12
            );
        }
    }

    // De-aliased viscous flux is unavailable.
    let primitives = PointFields::uniform(&[0.5, 1.0], n);
    let gradients = FluxTensor::new(1, 2, n);
    assert_eq!(
        system.viscous_flux_vector(&primitives, &gradients),
        Err(CompressibleError::NotImplemented("de-aliased viscous flux"))
    );
}

#[test]
fn test_single_step_callback_sequence() {
    let dim = SpaceDim::TWO;
    let session = SessionParameters::new()
        .with_parameter("Gamma", 1.4)
        .with_parameter("pInf", 101_325.0)
        .with_parameter("rhoInf", 1.225)
        .with_parameter("uInf", 30.0)
        .with_parameter("vInf", 0.0)
        .with_parameter("CFL", 0.3)
        .with_solver_info("UpwindType", "Roe")
        .with_solver_info("ViscosityType", "Variable");

    let n_modes = 3;
    let geometry = ElementMetrics::uniform_quads(2, 1, 2.0, 1.0, n_modes);
    let n = 2 * n_modes * n_modes;

    // Bottom edge of each element: first row of its nodes, normal −y.
    let bottom: Vec<usize> = (0..2)
        .flat_map(|e| (0..n_modes).map(move |i| e * n_modes * n_modes + i))
        .collect();
    // Top edge of each element: last row of its nodes, normal +y.
    let top: Vec<usize> = (0..2)
        .flat_map(|e| (0..n_modes).map(move |i| e * n_modes * n_modes + n_modes * (n_modes - 1) + i))
        .collect();
    let indices: Vec<usize> = bottom.iter().chain(&top).copied().collect();
    let normals = vec![
        vec![0.0; indices.len()],
        bottom
            .iter()
            .map(|_| -1.0)
            .chain(top.iter().map(|_| 1.0))
            .collect(),
    ];
    let trace = IndexedTrace::new(indices, normals).unwrap();

    let mut system = CompressibleFlowBuilder::from_session(&session, dim)
        .unwrap()
        .with_trace(Arc::new(trace))
        .with_geometry(Arc::new(geometry))
        .with_boundary_region(
            BoundaryRegion::from_tag("WallViscous", &[(n_modes, 0), (n_modes, n_modes)], 4)
                .unwrap(),
        )
        .with_boundary_region(
            BoundaryRegion::from_tag(
                "RiemannInvariant",
                &[(n_modes, 2 * n_modes), (n_modes, 3 * n_modes)],
                4,
            )
            .unwrap(),
        )
        .build()
        .unwrap();

    let freestream = system.gas().conserved_state(dim);
    let state = PointFields::uniform(&freestream, n);

    system.apply_boundary_conditions(&state).unwrap();
    let wall = system.region(0).unwrap().storage();
    let far = system.region(1).unwrap().storage();
    for b in 0..2 * n_modes {
        assert_relative_eq!(wall[1][b], -freestream[1], max_relative = 1e-14);
        assert_relative_eq!(wall[2][b], 0.0);
        for (v, &e) in freestream.iter().enumerate() {
            assert_relative_eq!(far[v][b], e, max_relative = 1e-10, epsilon = 1e-9);
        }
    }

    let flux = system.flux_vector(&state).unwrap();
    assert_eq!(flux.n_directions(), 2);
    assert_relative_eq!(flux.get(0, 0, 0), freestream[1], max_relative = 1e-14);

    let dt = system.time_step(&state).unwrap();
    let c = system.sound_speed(&state).unwrap()[0];
    // Δx = 1: ‖vˢ‖ = 2u, L_min = 1, order 2.
    let expected = 0.3 / ((2.0 * 30.0 + c) * 0.2 * 4.0);
    assert_relative_eq!(dt, expected, max_relative = 1e-12);

    let summary = system.summary();
    assert!(summary.contains(&("Viscosity".to_string(), "Variable".to_string())));
    assert!(summary.contains(&("Boundary 1".to_string(), "RiemannInvariant".to_string())));
}

#[test]
fn test_settings_json_round_trip() {
    let settings = SolverSettings::from_session(&session_1d()).unwrap();
    let json = serde_json::to_string(&settings).unwrap();
    let back: SolverSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);

    let gas = FreestreamReference::from_session(&session_1d(), SpaceDim::ONE).unwrap();
    let json = serde_json::to_string(&gas).unwrap();
    let back: FreestreamReference = serde_json::from_str(&json).unwrap();
    assert_eq!(back.viscosity_model, gas.viscosity_model);
    assert_relative_eq!(back.gamma, gas.gamma, max_relative = 1e-15);
    assert_relative_eq!(back.gas_constant, gas.gas_constant, max_relative = 1e-15);
    assert_relative_eq!(back.mu, gas.mu, max_relative = 1e-15);
}

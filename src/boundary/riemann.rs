//! Riemann-invariant (characteristic) far-field closure.
//!
//! Along the boundary normal the 1D invariants
//!
//! R± = Vn ± 2c/(γ−1)
//!
//! travel with speeds Vn ± c. Per trace point the pair (R+, R−) is taken
//! from the interior or the freestream depending on flow direction and
//! normal Mach number:
//!
//! | Vn    | \|Vn\|/c | R+        | R−         | entropy, tangential base |
//! |-------|----------|-----------|------------|--------------------------|
//! | ≤ 0   | < 1      | interior  | freestream | freestream               |
//! | ≤ 0   | ≥ 1      | freestream| freestream | freestream               |
//! | > 0   | < 1      | interior  | freestream | interior                 |
//! | > 0   | ≥ 1      | interior  | interior   | interior                 |
//!
//! and the boundary state is rebuilt from Vn_bc = ½(R+ + R−),
//! c_bc = ¼(γ−1)(R+ − R−) and the entropy s = p/ρ^γ.

use super::{BoundaryRegion, TraceSpace, extract_trace_state};
use crate::config::FreestreamReference;
use crate::equations::point_pressure;
use crate::types::{PointFields, SpaceDim};

/// Characteristic far-field closure. Overwrites every variable.
pub fn riemann_invariant<T>(
    gas: &FreestreamReference,
    dim: SpaceDim,
    trace: &T,
    region: &mut BoundaryRegion,
    state: &PointFields,
) where
    T: TraceSpace + ?Sized,
{
    let n = dim.get();
    let gamma = gas.gamma;
    let gm1 = gamma - 1.0;
    let gm1_inv = 1.0 / gm1;

    let fwd = extract_trace_state(trace, state);
    let normals = trace.trace_normals();

    let vel_inf = gas.velocity(dim);
    let c_inf = gas.freestream_sound_speed();
    let s_inf = gas.freestream_entropy();

    let mut momentum = vec![0.0; n];
    let mut vel_bc = vec![0.0; n];
    let pairs: Vec<_> = region.point_pairs().collect();

    for (t, b) in pairs {
        let rho = fwd.field(0)[t];
        let energy = fwd.field(dim.energy_index())[t];
        for (i, m) in momentum.iter_mut().enumerate() {
            *m = fwd.field(dim.momentum_index(i))[t];
        }

        let vn: f64 = (0..n).map(|i| normals[i][t] * (momentum[i] / rho)).sum();
        let vn_inf: f64 = (0..n).map(|i| vel_inf[i] * normals[i][t]).sum();

        let p = point_pressure(gamma, rho, &momentum, energy);
        let c = (gamma * p / rho).sqrt();
        let normal_mach = (vn / c).abs();
        let subsonic = normal_mach < 1.0;

        let (r_plus, r_minus) = if vn <= 0.0 {
            if subsonic {
                (vn + 2.0 * c * gm1_inv, vn_inf - 2.0 * c_inf * gm1_inv)
            } else {
                (vn_inf + 2.0 * c_inf * gm1_inv, vn_inf - 2.0 * c_inf * gm1_inv)
            }
        } else if subsonic {
            (vn + 2.0 * c * gm1_inv, vn_inf - 2.0 * c_inf * gm1_inv)
        } else {
            (vn + 2.0 * c * gm1_inv, vn - 2.0 * c * gm1_inv)
        };

        let vn_bc = 0.5 * (r_plus + r_minus);
        let c_bc = 0.25 * gm1 * (r_plus - r_minus);

        let inflow = vn <= 0.0;
        let (vd_bc, s_bc) = if inflow {
            (vn_bc - vn_inf, s_inf)
        } else {
            (vn_bc - vn, p / rho.powf(gamma))
        };

        let rho_bc = (c_bc * c_bc / (gamma * s_bc)).powf(gm1_inv);
        let p_bc = rho_bc * c_bc * c_bc / gamma;

        let mut kinetic = 0.0;
        for i in 0..n {
            let base = if inflow { vel_inf[i] } else { momentum[i] / rho };
            vel_bc[i] = base + vd_bc * normals[i][t];
            kinetic += 0.5 * rho_bc * vel_bc[i] * vel_bc[i];
        }

        let storage = &mut region.storage;
        storage.field_mut(0)[b] = rho_bc;
        for i in 0..n {
            storage.field_mut(dim.momentum_index(i))[b] = rho_bc * vel_bc[i];
        }
        storage.field_mut(dim.energy_index())[b] = p_bc * gm1_inv + kinetic;
    }
}

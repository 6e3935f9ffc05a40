//! Fixed-step velocity-Verlet integrator for the N-body system
//!
//! One step is a single atomic transition: it is computed on a scratch copy
//! of the system and committed only if every position and velocity is
//! finite. On failure the caller's system is untouched.

use tracing::error;

use crate::error::{SimError, SimResult};
use super::states::{is_finite, System, NVec3};
use super::forces::AccelSet;

/// Advance the system by one step using velocity-Verlet
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` by `dt`. `step` is the caller's step counter, used only to
/// label a divergence
pub fn verlet_step(sys: &mut System, forces: &AccelSet, dt: f64, step: u64) -> SimResult<()> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimError::InvalidTimeStep(dt));
    }

    let n = sys.len();
    if n == 0 { // no bodies, only the clock moves
        sys.t += dt;
        return Ok(());
    }

    let half_dt2 = 0.5 * dt * dt;
    let mut next = sys.clone();

    // a(t) from x(t)
    let mut a_old = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys, &mut a_old);

    // x(t+dt) = x + v dt + 1/2 a(t) dt^2
    for (b, a) in next.bodies_mut().iter_mut().zip(a_old.iter()) {
        b.x += dt * b.v + half_dt2 * *a;
    }

    // a(t+dt) from the new positions
    let mut a_new = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&next, &mut a_new);

    // v(t+dt) = v + 1/2 (a(t) + a(t+dt)) dt
    for ((b, a0), a1) in next.bodies_mut().iter_mut().zip(a_old.iter()).zip(a_new.iter()) {
        b.v += 0.5 * dt * (*a0 + *a1);
    }

    next.t += dt;

    if let Some(bad) = next.bodies().iter().find(|b| !is_finite(&b.x) || !is_finite(&b.v)) {
        error!(step, t = sys.t, body = bad.label(), "non-finite state, step discarded");
        return Err(SimError::SimulationDivergence {
            step,
            time: sys.t,
            body: bad.label().to_string(),
        });
    }

    *sys = next;
    Ok(())
}

//! High-level runtime engine settings
//!
//! Fixed step size, per-frame step cap, default time scale and the
//! diagnostics cadence used by the `SimulationDriver`

use crate::error::{SimError, SimResult};
use super::params::DAY;

#[derive(Debug, Clone)]
pub struct Engine {
    pub dt: f64, // fixed integrator step (s)
    pub max_steps_per_frame: usize, // bound on work per advance call
    pub time_scale: f64, // simulated seconds per real second
    pub barycentric: bool, // zero total momentum, applied by Scenario::build only
    pub energy_check_interval: u64, // steps between drift checks, 0 = off
    pub energy_drift_warn: f64, // relative drift that triggers a warning
}

impl Engine {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if self.max_steps_per_frame == 0 {
            return Err(SimError::InvalidParameter {
                name: "max_steps_per_frame",
                value: 0.0,
                reason: "must allow at least one step",
            });
        }
        if !(self.time_scale.is_finite() && self.time_scale >= 0.0) {
            return Err(SimError::InvalidParameter {
                name: "time_scale",
                value: self.time_scale,
                reason: "must be finite and non-negative",
            });
        }
        if !(self.energy_drift_warn.is_finite() && self.energy_drift_warn >= 0.0) {
            return Err(SimError::InvalidParameter {
                name: "energy_drift_warn",
                value: self.energy_drift_warn,
                reason: "must be finite and non-negative",
            });
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            dt: 3600.0,
            max_steps_per_frame: 50,
            time_scale: DAY,
            barycentric: false,
            energy_check_interval: 1000,
            energy_drift_warn: 1.0e-3,
        }
    }
}

//! Frame-driven orchestration of the integrator
//!
//! `SimulationDriver` owns the live `System` and is the only thing that
//! steps it. External collaborators talk to it in two ways:
//! - a frame loop calls [`SimulationDriver::advance`] (or `tick`) with the
//!   wall-clock interval since the last frame
//! - UI controls set pause, time scale and focus; none of these reach the
//!   integrator or the force field
//!
//! Renderers read owned [`Snapshot`]s. Because `advance` takes `&mut self`,
//! no reader can hold a view of the system while a step runs.

use tracing::{debug, error, info, warn};

use crate::error::{SimError, SimResult};
use super::energy::{energy, Energy, EnergyMonitor};
use super::engine::Engine;
use super::forces::AccelSet;
use super::integrator::verlet_step;
use super::scenario::Scenario;
use super::states::{Body, BodySnapshot, Snapshot, System};

/// Number of fixed steps that cover one frame:
/// `clamp(round(time_scale * real_dt / dt), 1, cap)`
pub fn steps_for_frame(real_dt: f64, time_scale: f64, dt: f64, cap: usize) -> usize {
    let cap = cap.max(1);
    let n = (time_scale * real_dt / dt).round();
    if n.is_nan() || n < 1.0 {
        1
    } else if n >= cap as f64 {
        cap
    } else {
        n as usize
    }
}

pub struct SimulationDriver {
    system: System,
    forces: AccelSet,
    engine: Engine,
    monitor: EnergyMonitor,
    steps: u64, // committed integrator steps
    halted_at: Option<u64>, // step that diverged
    last_drift: Option<f64>,
    paused: bool,
    time_scale: f64,
    focus: usize, // index into the system's bodies
}

impl SimulationDriver {
    /// Drive `system` as given. `engine.barycentric` is not applied here,
    /// momentum zeroing happens in `Scenario::build`
    pub fn new(system: System, forces: AccelSet, engine: Engine) -> SimResult<Self> {
        engine.validate()?;

        let monitor = EnergyMonitor::new(&system);
        info!(
            bodies = system.len(),
            dt = engine.dt,
            energy = monitor.baseline.total,
            "simulation driver ready"
        );

        Ok(Self {
            time_scale: engine.time_scale,
            system,
            forces,
            engine,
            monitor,
            steps: 0,
            halted_at: None,
            last_drift: None,
            paused: false,
            focus: 0,
        })
    }

    pub fn from_scenario(scenario: Scenario) -> SimResult<Self> {
        let Scenario { engine, system, forces, .. } = scenario;
        Self::new(system, forces, engine)
    }

    /// Advance by the number of fixed steps covering `real_dt` wall-clock
    /// seconds at `time_scale`. Returns the number of steps taken.
    ///
    /// Steps run strictly in sequence and each commits atomically. A
    /// divergence halts the driver: the failing step is discarded and every
    /// later call returns [`SimError::Halted`]
    pub fn advance(&mut self, real_dt: f64, time_scale: f64) -> SimResult<usize> {
        if let Some(step) = self.halted_at {
            return Err(SimError::Halted { step });
        }
        if !(real_dt.is_finite() && real_dt >= 0.0 && time_scale.is_finite() && time_scale >= 0.0) {
            return Err(SimError::InvalidFrame { real_dt, time_scale });
        }

        let nsteps = steps_for_frame(real_dt, time_scale, self.engine.dt, self.engine.max_steps_per_frame);

        for _ in 0..nsteps {
            if let Err(err) = verlet_step(&mut self.system, &self.forces, self.engine.dt, self.steps) {
                if matches!(err, SimError::SimulationDivergence { .. }) {
                    self.halted_at = Some(self.steps);
                    error!(step = self.steps, "simulation halted");
                }
                return Err(err);
            }
            self.steps += 1;
            self.check_energy();
        }

        debug!(nsteps, t = self.system.time(), "frame advanced");
        Ok(nsteps)
    }

    /// Advance one frame with the stored time scale, or do nothing when paused
    pub fn tick(&mut self, real_dt: f64) -> SimResult<usize> {
        if self.paused {
            return Ok(0);
        }
        self.advance(real_dt, self.time_scale)
    }

    fn check_energy(&mut self) {
        let every = self.engine.energy_check_interval;
        if every == 0 || self.steps % every != 0 {
            return;
        }

        let drift = self.monitor.drift(&self.system);
        self.last_drift = Some(drift);
        if drift > self.engine.energy_drift_warn {
            warn!(step = self.steps, drift, "energy drift above threshold");
        } else {
            debug!(step = self.steps, drift, "energy drift");
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.system.snapshot()
    }

    pub fn energy(&self) -> Energy {
        energy(&self.system)
    }

    /// Current relative drift against the energy at construction
    pub fn energy_drift(&self) -> f64 {
        self.monitor.drift(&self.system)
    }

    /// Drift measured at the most recent periodic check
    pub fn last_energy_check(&self) -> Option<f64> {
        self.last_drift
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_halted(&self) -> bool {
        self.halted_at.is_some()
    }

    // ----- UI controls -----

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, time_scale: f64) -> SimResult<()> {
        if !(time_scale.is_finite() && time_scale >= 0.0) {
            return Err(SimError::InvalidParameter {
                name: "time_scale",
                value: time_scale,
                reason: "must be finite and non-negative",
            });
        }
        self.time_scale = time_scale;
        Ok(())
    }

    /// Focus the camera target on the body with `label`
    pub fn set_focus(&mut self, label: &str) -> SimResult<()> {
        let idx = self
            .system
            .bodies()
            .iter()
            .position(|b| b.label() == label)
            .ok_or_else(|| SimError::UnknownBody(label.to_string()))?;
        self.focus = idx;
        Ok(())
    }

    /// Cycle focus to the next body in insertion order
    pub fn focus_next(&mut self) -> Option<&str> {
        if self.system.is_empty() {
            return None;
        }
        self.focus = (self.focus + 1) % self.system.len();
        Some(self.system.bodies()[self.focus].label())
    }

    pub fn focus_label(&self) -> Option<&str> {
        self.system.bodies().get(self.focus).map(|b| b.label())
    }

    /// Current state of the focused body
    pub fn focus(&self) -> Option<BodySnapshot> {
        self.system.bodies().get(self.focus).map(Body::snapshot)
    }
}

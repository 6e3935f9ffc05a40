//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – step size, per-frame cap, time scale, diagnostics
//! - [`ParametersConfig`] – physical constants (`G`, softening length)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every `engine` and `parameters` key is optional. A body either gives its
//! Cartesian state directly or an `orbit` around a body listed before it:
//!
//! ```yaml
//! engine:
//!   dt: 86400.0                # fixed step (s)
//!   max_steps_per_frame: 50
//!   time_scale: 864000.0       # simulated seconds per real second
//!   barycentric: true          # zero total momentum at t = 0
//!   energy_check_interval: 365 # steps between drift checks, 0 = off
//!   energy_drift_warn: 1.0e-3
//!
//! parameters:
//!   G: 6.67430e-11
//!   softening: 1.0e7           # m
//!
//! bodies:
//!   - label: sun
//!     m: 1.98847e30
//!     x: [0.0, 0.0, 0.0]       # m
//!     v: [0.0, 0.0, 0.0]       # m/s
//!   - label: earth
//!     m: 5.97237e24
//!     orbit:
//!       central: sun
//!       a: 1.00000011          # AU
//!       e: 0.01671022
//!       i: 0.00005             # degrees
//!       node: -11.26064
//!       periapsis: 102.94719
//!       mean_anomaly: 100.46435
//! ```
//!
//! The scenario builder maps this configuration into the runtime `System`.

use serde::Deserialize;

use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, DEFAULT_SOFTENING, G};

/// Driver-level configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub dt: f64, // fixed integrator step (s)
    pub max_steps_per_frame: usize, // cap on steps per advance call
    pub time_scale: f64, // simulated seconds per real second
    pub barycentric: bool, // remove net momentum before the run starts
    pub energy_check_interval: u64, // steps between energy drift checks
    pub energy_drift_warn: f64, // relative drift that is logged as a warning
}

impl Default for EngineConfig {
    fn default() -> Self {
        let engine = Engine::default();
        Self {
            dt: engine.dt,
            max_steps_per_frame: engine.max_steps_per_frame,
            time_scale: engine.time_scale,
            barycentric: engine.barycentric,
            energy_check_interval: engine.energy_check_interval,
            energy_drift_warn: engine.energy_drift_warn,
        }
    }
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Engine {
            dt: cfg.dt,
            max_steps_per_frame: cfg.max_steps_per_frame,
            time_scale: cfg.time_scale,
            barycentric: cfg.barycentric,
            energy_check_interval: cfg.energy_check_interval,
            energy_drift_warn: cfg.energy_drift_warn,
        }
    }
}

/// Physical constants for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub softening: f64, // softening length (m), prevents singular forces at small separations
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G,
            softening: DEFAULT_SOFTENING,
        }
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Parameters {
            G: cfg.G,
            softening: cfg.softening,
        }
    }
}

/// Orbit of a body around a previously listed central body.
/// Units follow published element tables: `a` in AU, angles in degrees
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitConfig {
    pub central: String, // label of the central body
    pub a: f64, // semi-major axis (AU)
    pub e: f64, // eccentricity
    #[serde(default)]
    pub i: f64, // inclination
    #[serde(default)]
    pub node: f64, // longitude of ascending node
    #[serde(default)]
    pub periapsis: f64, // argument of periapsis
    #[serde(default)]
    pub mean_anomaly: f64, // mean anomaly at t = 0
}

/// How a body's initial state is given
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum InitialStateConfig {
    Orbit { orbit: OrbitConfig },
    Cartesian { x: [f64; 3], v: [f64; 3] },
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub label: String, // unique label, also the key for renderer-side metadata
    pub m: f64, // mass (kg)
    #[serde(flatten)]
    pub initial: InitialStateConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>, // initial bodies, in output order
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}

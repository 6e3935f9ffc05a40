//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! Bodies given as orbits are converted from their elements here, relative
//! to the state of their central body. Elements are not kept afterwards.

use tracing::info;

use crate::configuration::config::{BodyConfig, InitialStateConfig, OrbitConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::driver::SimulationDriver;
use crate::simulation::elements::OrbitalElements;
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, System, NVec3};

/// A fully-initialized simulation, ready to hand to a `SimulationDriver`
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build(cfg: &ScenarioConfig) -> SimResult<Self> {
        let engine = Engine::from(&cfg.engine);
        engine.validate()?;

        let parameters = Parameters::from(&cfg.parameters);
        parameters.validate()?;

        // Bodies in listed order; an orbit may only refer to an earlier body
        let mut bodies: Vec<Body> = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            let body = build_body(bc, &bodies, &parameters)?;
            bodies.push(body);
        }

        if engine.barycentric {
            zero_momentum(&mut bodies);
        }

        let system = System::new(bodies, parameters)?;
        info!(
            bodies = system.len(),
            barycentric = engine.barycentric,
            "scenario built"
        );

        Ok(Self {
            engine,
            parameters,
            system,
            forces: AccelSet::gravity(),
        })
    }

    pub fn into_driver(self) -> SimResult<SimulationDriver> {
        SimulationDriver::from_scenario(self)
    }
}

fn build_body(bc: &BodyConfig, built: &[Body], parameters: &Parameters) -> SimResult<Body> {
    match &bc.initial {
        InitialStateConfig::Cartesian { x, v } => {
            Body::new(bc.label.as_str(), bc.m, NVec3::from(*x), NVec3::from(*v))
        }
        InitialStateConfig::Orbit { orbit } => {
            let (x, v) = orbit_state(orbit, built, parameters)
                .map_err(|err| err.for_body(&bc.label))?;
            Body::new(bc.label.as_str(), bc.m, x, v)
        }
    }
}

/// Absolute state of a body on `orbit`, mu = G * m_central
fn orbit_state(orbit: &OrbitConfig, built: &[Body], parameters: &Parameters) -> SimResult<(NVec3, NVec3)> {
    let central = built
        .iter()
        .find(|b| b.label() == orbit.central)
        .ok_or_else(|| SimError::UnknownBody(orbit.central.clone()))?;

    let elements = OrbitalElements::from_degrees(
        orbit.a * AU,
        orbit.e,
        orbit.i,
        orbit.node,
        orbit.periapsis,
        orbit.mean_anomaly,
        parameters.G * central.mass(),
    );
    let (r, v) = elements.to_state()?;

    Ok((central.position() + r, central.velocity() + v))
}

/// Shift every velocity by the centre-of-mass velocity so the total linear
/// momentum is zero
fn zero_momentum(bodies: &mut [Body]) {
    let total_mass: f64 = bodies.iter().map(|b| b.mass()).sum();
    if total_mass <= 0.0 {
        return;
    }
    let p: NVec3 = bodies.iter().map(|b| b.momentum()).sum();
    let v_cm = p / total_mass;
    for b in bodies.iter_mut() {
        b.v -= v_cm;
    }
}


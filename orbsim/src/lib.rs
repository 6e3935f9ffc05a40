pub mod error;
pub mod simulation;
pub mod configuration;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, System, NVec3, Snapshot, BodySnapshot};
pub use simulation::params::{Parameters, G, AU, DAY, YEAR, DEFAULT_SOFTENING};
pub use simulation::engine::Engine;
pub use simulation::elements::{OrbitalElements, KeplerSolver, elements_to_state};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, accelerations};
pub use simulation::integrator::verlet_step;
pub use simulation::energy::{Energy, EnergyMonitor, energy, total_momentum, center_of_mass};
pub use simulation::driver::{SimulationDriver, steps_for_frame};
pub use simulation::scenario::Scenario;
pub use simulation::presets::{solar_system, sun_earth};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, OrbitConfig, InitialStateConfig, ScenarioConfig};

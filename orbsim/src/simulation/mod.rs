pub mod states;
pub mod params;
pub mod engine;
pub mod elements;
pub mod forces;
pub mod integrator;
pub mod energy;
pub mod driver;
pub mod scenario;
pub mod presets;

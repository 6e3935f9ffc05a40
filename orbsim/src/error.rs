//! Error types for the simulation core

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while building or advancing a simulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid orbital element `{element}` = {value}: {reason}")]
    InvalidOrbitalElement {
        element: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Kepler solve did not converge for M = {mean_anomaly}, e = {eccentricity} after {iterations} iterations (residual {residual:e})")]
    NumericalDivergence {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
        residual: f64,
    },

    #[error("step {step} at t = {time} s produced non-finite state for body `{body}`")]
    SimulationDivergence { step: u64, time: f64, body: String },

    #[error("invalid body `{label}`: {reason}")]
    InvalidBody { label: String, reason: &'static str },

    #[error("duplicate body label `{0}`")]
    DuplicateLabel(String),

    #[error("unknown body `{0}`")]
    UnknownBody(String),

    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid time step {0}: must be finite and positive")]
    InvalidTimeStep(f64),

    #[error("invalid frame: real_dt = {real_dt}, time_scale = {time_scale}")]
    InvalidFrame { real_dt: f64, time_scale: f64 },

    #[error("simulation halted after divergence at step {step}")]
    Halted { step: u64 },

    #[error("body `{label}`: {source}")]
    Body {
        label: String,
        #[source]
        source: Box<SimError>,
    },
}

impl SimError {
    /// Attach the label of the body whose configuration caused the error
    pub fn for_body(self, label: impl Into<String>) -> Self {
        SimError::Body {
            label: label.into(),
            source: Box::new(self),
        }
    }
}

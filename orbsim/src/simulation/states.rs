//! Core state types for the N-body simulation.
//!
//! - `Body`   one point mass with its label, position and velocity
//! - `System` the ordered bodies, the injected `Parameters` and the clock `t`
//! - `Snapshot` an owned, read-only copy of the state handed to renderers
//!
//! Masses never change after construction. Positions and velocities are
//! crate-private so that only the integrator can write them.

use std::collections::HashSet;
use std::sync::Arc;

use nalgebra::Vector3;

use crate::error::{SimError, SimResult};
use super::params::Parameters;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    label: Arc<str>, // identifying label
    pub(crate) x: NVec3, // position (m)
    pub(crate) v: NVec3, // velocity (m/s)
    m: f64, // mass (kg)
}

impl Body {
    /// Create a body from a literal state
    pub fn new(label: impl Into<Arc<str>>, m: f64, x: NVec3, v: NVec3) -> SimResult<Self> {
        let label = label.into();
        let reason = if !(m.is_finite() && m > 0.0) {
            Some("mass must be finite and positive")
        } else if !is_finite(&x) {
            Some("position must be finite")
        } else if !is_finite(&v) {
            Some("velocity must be finite")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SimError::InvalidBody {
                label: label.to_string(),
                reason,
            }),
            None => Ok(Self { label, x, v, m }),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> NVec3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            label: Arc::clone(&self.label),
            position: self.x,
            velocity: self.v,
        }
    }
}

/// True when every component is neither NaN nor infinite
pub(crate) fn is_finite(v: &NVec3) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>, // insertion-ordered bodies
    pub(crate) t: f64, // elapsed simulated time (s)
    parameters: Parameters, // G and softening, fixed for the run
}

impl System {
    /// Build a system at t = 0. Labels must be unique
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> SimResult<Self> {
        parameters.validate()?;

        let mut seen = HashSet::with_capacity(bodies.len());
        for b in &bodies {
            if !seen.insert(b.label()) {
                return Err(SimError::DuplicateLabel(b.label().to_string()));
            }
        }

        Ok(Self {
            bodies,
            t: 0.0,
            parameters,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Elapsed simulated time (s)
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn body(&self, label: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.label() == label)
    }

    /// Owned copy of the observable state. Holds no reference into `self`
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            t: self.t,
            bodies: self.bodies.iter().map(Body::snapshot).collect(),
        }
    }
}

/// Renderer-facing state of one body
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub label: Arc<str>,
    pub position: NVec3,
    pub velocity: NVec3,
}

/// Renderer-facing state of the whole system, taken between steps
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub t: f64,
    pub bodies: Vec<BodySnapshot>,
}

impl Snapshot {
    pub fn get(&self, label: &str) -> Option<&BodySnapshot> {
        self.bodies.iter().find(|b| &*b.label == label)
    }
}

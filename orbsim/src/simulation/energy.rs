//! Conserved-quantity diagnostics
//!
//! Read-only measurements of a `System` used to validate the integrator:
//! kinetic/potential/total energy, linear momentum, centre of mass, and a
//! drift monitor against a baseline energy. Nothing here feeds back into
//! the dynamics.

use super::states::{System, NVec3};

/// Energy split of a system (J)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

/// Kinetic, softened potential and total energy of `sys`
///
/// The potential uses the same softening length as the force field:
/// `U = -sum_{i<j} G m_i m_j / sqrt(|x_i - x_j|^2 + eps^2)`
pub fn energy(sys: &System) -> Energy {
    let bodies = sys.bodies();
    let g = sys.parameters().G;
    let eps2 = sys.parameters().eps2();

    let kinetic: f64 = bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.v.norm_squared())
        .sum();

    let mut potential = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let d = ((bj.x - bi.x).norm_squared() + eps2).sqrt();
            potential -= g * bi.mass() * bj.mass() / d;
        }
    }

    Energy {
        kinetic,
        potential,
        total: kinetic + potential,
    }
}

/// Total linear momentum: sum_i m_i v_i
pub fn total_momentum(sys: &System) -> NVec3 {
    sys.bodies().iter().map(|b| b.momentum()).sum()
}

/// Mass-weighted mean position, `None` for an empty system
pub fn center_of_mass(sys: &System) -> Option<NVec3> {
    let total_mass: f64 = sys.bodies().iter().map(|b| b.mass()).sum();
    if total_mass <= 0.0 {
        return None;
    }
    let weighted: NVec3 = sys.bodies().iter().map(|b| b.mass() * b.x).sum();
    Some(weighted / total_mass)
}

/// Relative energy error against a baseline captured once
#[derive(Debug, Clone, Copy)]
pub struct EnergyMonitor {
    pub baseline: Energy,
}

impl EnergyMonitor {
    pub fn new(sys: &System) -> Self {
        Self {
            baseline: energy(sys),
        }
    }

    /// |E - E0| / |E0|, or the absolute error when E0 is ~0
    pub fn drift(&self, sys: &System) -> f64 {
        let e0 = self.baseline.total;
        let diff = (energy(sys).total - e0).abs();
        if e0.abs() > f64::MIN_POSITIVE {
            diff / e0.abs()
        } else {
            diff
        }
    }
}

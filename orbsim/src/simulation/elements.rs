//! Classical orbital elements and their conversion to Cartesian state
//!
//! Pipeline: mean anomaly -> eccentric anomaly (Kepler's equation, Newton
//! iteration) -> true anomaly -> perifocal position/velocity -> rotation
//! `Rz(Omega) * Rx(i) * Rz(omega)` into the reference frame.
//! Only elliptical orbits (0 <= e < 1) are supported.

use std::f64::consts::{PI, TAU};

use nalgebra::Matrix3;

use crate::error::{SimError, SimResult};
use super::states::NVec3;

/// Keplerian elements of an elliptical orbit around a central mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub a: f64, // semi-major axis (m)
    pub e: f64, // eccentricity, [0, 1)
    pub i: f64, // inclination (rad)
    pub node: f64, // longitude of ascending node, Omega (rad)
    pub periapsis: f64, // argument of periapsis, omega (rad)
    pub mean_anomaly: f64, // M (rad)
    pub mu: f64, // G * M_central (m^3/s^2)
}

impl OrbitalElements {
    /// Build from published-style elements: angles in degrees, `a` in meters
    pub fn from_degrees(
        a: f64,
        e: f64,
        i_deg: f64,
        node_deg: f64,
        periapsis_deg: f64,
        mean_anomaly_deg: f64,
        mu: f64,
    ) -> Self {
        Self {
            a,
            e,
            i: i_deg.to_radians(),
            node: node_deg.to_radians(),
            periapsis: periapsis_deg.to_radians(),
            mean_anomaly: mean_anomaly_deg.to_radians(),
            mu,
        }
    }

    /// Check the domain of every element
    pub fn validate(&self) -> SimResult<()> {
        let invalid = |element, value, reason| {
            Err(SimError::InvalidOrbitalElement { element, value, reason })
        };

        if !(self.a.is_finite() && self.a > 0.0) {
            return invalid("a", self.a, "semi-major axis must be finite and positive");
        }
        if !(self.e.is_finite() && (0.0..1.0).contains(&self.e)) {
            return invalid("e", self.e, "only elliptical orbits with 0 <= e < 1 are supported");
        }
        if !(self.mu.is_finite() && self.mu > 0.0) {
            return invalid("mu", self.mu, "gravitational parameter must be finite and positive");
        }
        for (element, value) in [
            ("i", self.i),
            ("node", self.node),
            ("periapsis", self.periapsis),
            ("mean_anomaly", self.mean_anomaly),
        ] {
            if !value.is_finite() {
                return invalid(element, value, "angle must be finite");
            }
        }
        Ok(())
    }

    /// Mean motion n = sqrt(mu / a^3) (rad/s)
    pub fn mean_motion(&self) -> f64 {
        (self.mu / self.a.powi(3)).sqrt()
    }

    /// Orbital period (s)
    pub fn period(&self) -> f64 {
        TAU / self.mean_motion()
    }

    /// Perifocal -> reference frame rotation, `Rz(Omega) * Rx(i) * Rz(omega)`
    pub fn rotation(&self) -> Matrix3<f64> {
        let (sin_o, cos_o) = self.node.sin_cos();
        let (sin_i, cos_i) = self.i.sin_cos();
        let (sin_w, cos_w) = self.periapsis.sin_cos();

        Matrix3::new(
            cos_o * cos_w - sin_o * sin_w * cos_i,
            -cos_o * sin_w - sin_o * cos_w * cos_i,
            sin_o * sin_i,

            sin_o * cos_w + cos_o * sin_w * cos_i,
            -sin_o * sin_w + cos_o * cos_w * cos_i,
            -cos_o * sin_i,

            sin_w * sin_i,
            cos_w * sin_i,
            cos_i,
        )
    }

    /// Position (m) and velocity (m/s) relative to the central mass
    pub fn to_state(&self) -> SimResult<(NVec3, NVec3)> {
        self.to_state_with(&KeplerSolver::default())
    }

    /// As [`to_state`](Self::to_state) with an explicit Kepler solver
    pub fn to_state_with(&self, solver: &KeplerSolver) -> SimResult<(NVec3, NVec3)> {
        self.validate()?;

        let e = self.e;
        let ea = solver.solve(self.mean_anomaly, e)?;
        let nu = true_anomaly(ea, e);

        // Orbital-plane position
        let r = self.a * (1.0 - e * ea.cos());
        let (sin_nu, cos_nu) = nu.sin_cos();
        let pos_pf = NVec3::new(r * cos_nu, r * sin_nu, 0.0);

        // Orbital-plane velocity from specific angular momentum h
        let h = (self.mu * self.a * (1.0 - e * e)).sqrt();
        let k = self.mu / h;
        let vel_pf = NVec3::new(-k * sin_nu, k * (e + cos_nu), 0.0);

        let rot = self.rotation();
        Ok((rot * pos_pf, rot * vel_pf))
    }
}

/// Convert classical elements to Cartesian state around a central mass
pub fn elements_to_state(
    a: f64,
    e: f64,
    i: f64,
    node: f64,
    periapsis: f64,
    mean_anomaly: f64,
    mu: f64,
) -> SimResult<(NVec3, NVec3)> {
    OrbitalElements { a, e, i, node, periapsis, mean_anomaly, mu }.to_state()
}

/// Newton-Raphson solver for Kepler's equation `M = E - e sin E`
#[derive(Debug, Clone, Copy)]
pub struct KeplerSolver {
    pub tolerance: f64, // stop once |f(E)| falls below this
    pub max_iterations: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-10,
            max_iterations: 32,
        }
    }
}

impl KeplerSolver {
    /// Eccentric anomaly E for mean anomaly `m` (rad) and eccentricity `e`
    pub fn solve(&self, m: f64, e: f64) -> SimResult<f64> {
        let m = normalize_angle(m);

        // Starting from M converges poorly near apoapsis for high e
        let mut ea = if e < 0.8 { m } else { PI };
        let mut residual = f64::NAN;

        for _ in 0..self.max_iterations {
            residual = ea - e * ea.sin() - m;
            if residual.abs() < self.tolerance {
                return Ok(ea);
            }
            ea -= residual / (1.0 - e * ea.cos());
        }

        // the last Newton update may have landed inside the tolerance
        let last = ea - e * ea.sin() - m;
        if last.abs() < self.tolerance {
            return Ok(ea);
        }
        if last.is_finite() {
            residual = last;
        }

        Err(SimError::NumericalDivergence {
            mean_anomaly: m,
            eccentricity: e,
            iterations: self.max_iterations,
            residual,
        })
    }
}

/// True anomaly from eccentric anomaly, quadrant-safe half-angle form
pub fn true_anomaly(ea: f64, e: f64) -> f64 {
    let (sin_half, cos_half) = (0.5 * ea).sin_cos();
    2.0 * ((1.0 + e).sqrt() * sin_half).atan2((1.0 - e).sqrt() * cos_half)
}

/// Wrap an angle into [0, 2pi)
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU { 0.0 } else { a }
}

//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the set that sums its terms, and direct
//! Newtonian gravity with Plummer softening

use crate::simulation::states::{System, NVec3};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Set holding only Newtonian gravity, the model every scenario runs
    pub fn gravity() -> Self {
        Self::new().with(NewtonianGravity)
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::gravity()
    }
}

/// Acceleration sources operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body and
/// must not depend on anything but the current positions and masses
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity with softening (direct n^2 sum)
///
/// `a_i = sum_j G m_j (x_j - x_i) / (|x_j - x_i|^2 + eps^2)^(3/2)`
///
/// `G` and `eps` come from the system's parameters so they stay fixed for
/// the whole run
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]) {
        let bodies = sys.bodies();
        let n = bodies.len();
        if n < 2 { // Nothing to pair
            return;
        }

        let g = sys.parameters().G;
        let eps2 = sys.parameters().eps2();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = bodies[i].x; // position of body i
            let mi = bodies[i].mass(); // mass of body i

            for j in (i + 1)..n {
                let xj = bodies[j].x; // position of body j
                let mj = bodies[j].mass(); // mass of body j

                // r points from i to j: i is pulled along +r, j along -r
                let r = xj - xi;

                // coef = G / (|r|^2 + eps^2)^(3/2)
                let coef = g * inv_softened_cube(r.norm_squared(), eps2);

                // Equal and opposite contributions
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}

/// 1 / (r2 + eps2)^(3/2)
fn inv_softened_cube(r2: f64, eps2: f64) -> f64 {
    let inv_r = (r2 + eps2).sqrt().recip();
    inv_r * inv_r * inv_r
}

/// Gravitational accelerations of every body in `sys`, in body order
pub fn accelerations(sys: &System) -> Vec<NVec3> {
    let mut out = vec![NVec3::zeros(); sys.len()];
    NewtonianGravity.acceleration(sys, &mut out);
    out
}

//! Physical constants and parameters for the simulation
//!
//! The constants are process-wide and immutable. A run copies the values it
//! uses into [`Parameters`], which is injected into the `System` at
//! construction so the force field and energy diagnostics always agree.

use crate::error::{SimError, SimResult};

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67430e-11;

/// Astronomical unit (m)
pub const AU: f64 = 1.495978707e11;

/// Seconds in a day
pub const DAY: f64 = 86_400.0;

/// Seconds in a Julian year
pub const YEAR: f64 = 365.25 * DAY;

/// Default softening length (m), 10,000 km
pub const DEFAULT_SOFTENING: f64 = 1.0e7;

/// Physical parameters of a run. Held constant for the lifetime of a `System`
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub softening: f64, // softening length eps (m)
}

impl Parameters {
    /// Reject values the force law cannot use
    pub fn validate(&self) -> SimResult<()> {
        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "G",
                value: self.G,
                reason: "must be finite and positive",
            });
        }
        if !(self.softening.is_finite() && self.softening >= 0.0) {
            return Err(SimError::InvalidParameter {
                name: "softening",
                value: self.softening,
                reason: "must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Squared softening length, the form used by the force law
    pub fn eps2(&self) -> f64 {
        self.softening * self.softening
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G,
            softening: DEFAULT_SOFTENING,
        }
    }
}

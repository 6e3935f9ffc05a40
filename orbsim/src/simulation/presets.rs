//! Built-in scenarios
//!
//! Approximate J2000 osculating elements (heliocentric ecliptic) for the
//! eight planets. Good for visualization and short runs, not ephemerides.

use crate::configuration::config::{
    BodyConfig, EngineConfig, InitialStateConfig, OrbitConfig, ParametersConfig, ScenarioConfig,
};
use crate::simulation::params::DAY;

pub const SUN_MASS: f64 = 1.98847e30;
pub const EARTH_MASS: f64 = 5.97237e24;

/// name, mass (kg), a (AU), e, i, node, periapsis, mean anomaly (degrees)
const PLANETS: [(&str, f64, f64, f64, f64, f64, f64, f64); 8] = [
    ("mercury", 3.3011e23, 0.38709927, 0.20563593, 7.00498, 48.33077, 29.12703, 174.79253),
    ("venus", 4.8675e24, 0.72333566, 0.00677672, 3.39468, 76.67984, 54.92262, 50.37663),
    ("earth", EARTH_MASS, 1.00000011, 0.01671022, 0.00005, -11.26064, 102.94719, 100.46435),
    ("mars", 6.4171e23, 1.52371034, 0.09339410, 1.84969, 49.55954, -73.50317, 19.39020),
    ("jupiter", 1.8982e27, 5.20288700, 0.04838624, 1.30440, 100.47391, -85.74543, 19.66796),
    ("saturn", 5.6834e26, 9.53667594, 0.05386179, 2.48599, 113.66242, -21.06355, -42.64463),
    ("uranus", 8.6810e25, 19.18916464, 0.04725744, 0.77264, 74.01693, 96.93735, 142.28383),
    ("neptune", 1.02413e26, 30.06992276, 0.00859048, 1.77004, 131.78423, -86.81946, -100.08479),
];

fn sun() -> BodyConfig {
    BodyConfig {
        label: "sun".to_string(),
        m: SUN_MASS,
        initial: InitialStateConfig::Cartesian {
            x: [0.0; 3],
            v: [0.0; 3],
        },
    }
}

fn orbiting(label: &str, m: f64, orbit: OrbitConfig) -> BodyConfig {
    BodyConfig {
        label: label.to_string(),
        m,
        initial: InitialStateConfig::Orbit { orbit },
    }
}

/// Sun and eight planets in the barycentric frame, 4 hour steps
pub fn solar_system() -> ScenarioConfig {
    let mut bodies = vec![sun()];
    for (label, m, a, e, i, node, periapsis, mean_anomaly) in PLANETS {
        bodies.push(orbiting(
            label,
            m,
            OrbitConfig {
                central: "sun".to_string(),
                a,
                e,
                i,
                node,
                periapsis,
                mean_anomaly,
            },
        ));
    }

    ScenarioConfig {
        engine: EngineConfig {
            dt: 4.0 * 3600.0,
            barycentric: true,
            ..EngineConfig::default()
        },
        parameters: ParametersConfig::default(),
        bodies,
    }
}

/// Sun and an Earth-like planet starting at perihelion, one day steps
pub fn sun_earth() -> ScenarioConfig {
    ScenarioConfig {
        engine: EngineConfig {
            dt: DAY,
            energy_check_interval: 30,
            ..EngineConfig::default()
        },
        parameters: ParametersConfig::default(),
        bodies: vec![
            sun(),
            orbiting(
                "earth",
                EARTH_MASS,
                OrbitConfig {
                    central: "sun".to_string(),
                    a: 1.0,
                    e: 0.0167,
                    i: 0.0,
                    node: 0.0,
                    periapsis: 0.0,
                    mean_anomaly: 0.0,
                },
            ),
        ],
    }
}

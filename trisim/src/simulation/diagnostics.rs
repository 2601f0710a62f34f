//! Energy diagnostics
//!
//! With the Sun pinned the exact dynamics conserve
//! `E = KE_earth + KE_moon + U_earth_sun + U_moon_sun + U_moon_earth`,
//! so the drift of `E` over a run is a cheap measure of integration error.

use crate::error::{BodyPair, SimError, SimResult};
use crate::simulation::params::PhysicalConstants;
use crate::simulation::states::SystemState;

/// Total mechanical energy of `sys` [J]
pub fn total_energy(sys: &SystemState, c: &PhysicalConstants) -> SimResult<f64> {
    let kinetic = 0.5 * c.m_earth * sys.earth.v.norm_squared() + 0.5 * c.m_moon * sys.moon.v.norm_squared();

    let r_es = sys.earth.x.norm();
    let r_ms = sys.moon.x.norm();
    let r_me = (sys.moon.x - sys.earth.x).norm();

    for (r, pair) in [(r_es, BodyPair::EarthSun), (r_ms, BodyPair::MoonSun), (r_me, BodyPair::MoonEarth)] {
        if r == 0.0 {
            return Err(SimError::CoincidentBodies { pair });
        }
    }

    let potential = -c.G * c.m_sun * c.m_earth / r_es - c.G * c.m_sun * c.m_moon / r_ms - c.G * c.m_earth * c.m_moon / r_me;

    Ok(kinetic + potential)
}

/// `|e1 - e0| / |e0|`
pub fn relative_energy_drift(e0: f64, e1: f64) -> f64 {
    if e0 == 0.0 {
        return (e1 - e0).abs();
    }
    ((e1 - e0) / e0).abs()
}

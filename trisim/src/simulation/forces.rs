//! Pairwise Newtonian gravity for the Earth–Moon–Sun system
//!
//! Three pairs interact: Earth–Sun, Moon–Sun and Moon–Earth. The Sun is
//! fixed, so the forces on it are never needed. The Earth does not feel
//! the Moon; only the Moon feels the Earth.
//!
//! There is no softening: a zero separation is reported as
//! [`SimError::DegenerateSeparation`] instead of producing NaN.

use crate::error::{BodyPair, SimError, SimResult};
use crate::simulation::params::PhysicalConstants;
use crate::simulation::states::{NVec2, SystemState};

/// Force on the body at the tip of `separation` exerted by the body at its tail
///
/// `F = -G * m1 * m2 / |r|^2 * (r / |r|)`, attractive toward the tail.
/// `step` is only used to label the error.
#[allow(non_snake_case)]
pub fn newtonian_force(G: f64, m1: f64, m2: f64, separation: NVec2, pair: BodyPair, step: usize) -> SimResult<NVec2> {
    let r = separation.norm();
    if r == 0.0 || !r.is_finite() {
        return Err(SimError::DegenerateSeparation { step, pair });
    }

    // unit vector along the separation
    let r_hat = separation / r;

    Ok(-G * m1 * m2 / (r * r) * r_hat)
}

/// The three pairwise forces evaluated at one state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairForces {
    pub earth_sun: NVec2, // on Earth from Sun
    pub moon_sun: NVec2, // on Moon from Sun
    pub moon_earth: NVec2, // on Moon from Earth
}

impl PairForces {
    /// Acceleration of the Earth
    pub fn earth_accel(&self, c: &PhysicalConstants) -> NVec2 {
        self.earth_sun / c.m_earth
    }

    /// Acceleration of the Moon
    pub fn moon_accel(&self, c: &PhysicalConstants) -> NVec2 {
        (self.moon_sun + self.moon_earth) / c.m_moon
    }
}

/// Newtonian gravity between a fixed Sun at the origin, the Earth and the Moon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub constants: PhysicalConstants,
}

impl NewtonianGravity {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    /// Forces at `sys`, using positions only
    pub fn forces(&self, sys: &SystemState, step: usize) -> SimResult<PairForces> {
        let c = &self.constants;
        let r_earth = sys.earth.x;
        let r_moon = sys.moon.x;

        let earth_sun = newtonian_force(c.G, c.m_sun, c.m_earth, r_earth, BodyPair::EarthSun, step)?;
        let moon_sun = newtonian_force(c.G, c.m_sun, c.m_moon, r_moon, BodyPair::MoonSun, step)?;
        let moon_earth = newtonian_force(c.G, c.m_earth, c.m_moon, r_moon - r_earth, BodyPair::MoonEarth, step)?;

        Ok(PairForces {
            earth_sun,
            moon_sun,
            moon_earth,
        })
    }
}

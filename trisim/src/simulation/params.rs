//! Numerical and physical parameters for the simulation
//!
//! - `PhysicalConstants`: gravitational constant and the three masses
//! - `Parameters`: fixed step size and step count
//!
//! Both are validated once, before the first step.

use crate::error::{require_positive, SimError, SimResult};

/// Default step size, 6 hours
pub const DEFAULT_DT: f64 = 6.0 * 60.0 * 60.0;

/// Default step count, ~1 year at 6h/step
pub const DEFAULT_NUM_STEPS: usize = 1460;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub G: f64, // gravitational constant [m^3 kg^-1 s^-2]
    pub m_sun: f64, // [kg]
    pub m_earth: f64, // [kg]
    pub m_moon: f64, // [kg]
}

impl PhysicalConstants {
    pub fn validate(&self) -> SimResult<()> {
        require_positive("G", self.G)?;
        require_positive("M_sun", self.m_sun)?;
        require_positive("M_earth", self.m_earth)?;
        require_positive("M_moon", self.m_moon)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size [s]
    pub num_steps: usize, // number of steps, also trajectory length
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            num_steps: DEFAULT_NUM_STEPS,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> SimResult<()> {
        require_positive("dt", self.dt)?;
        if self.num_steps == 0 {
            return Err(SimError::InvalidStepCount);
        }
        Ok(())
    }

    /// Simulated time covered by a full run
    pub fn duration(&self) -> f64 {
        self.dt * self.num_steps as f64
    }
}

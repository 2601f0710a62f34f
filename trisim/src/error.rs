//! Domain errors for the Earth–Moon–Sun integrator
//!
//! Two classes:
//! - parameter errors, raised before any stepping begins
//! - numerical degeneracy, raised from inside the stepping loop

use std::fmt;

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// The two bodies whose separation is being measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPair {
    EarthSun,
    MoonSun,
    MoonEarth,
}

impl fmt::Display for BodyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BodyPair::EarthSun => "earth-sun",
            BodyPair::MoonSun => "moon-sun",
            BodyPair::MoonEarth => "moon-earth",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("step count must be positive")]
    InvalidStepCount,

    #[error("degenerate separation ({pair}) at step {step}: bodies coincide")]
    DegenerateSeparation { step: usize, pair: BodyPair },

    /// Coincident bodies found outside the stepping loop
    #[error("bodies coincide ({pair})")]
    CoincidentBodies { pair: BodyPair },

    #[error("state became non-finite at step {step}")]
    NonFiniteState { step: usize },
}

/// Reject anything that is not a finite, strictly positive number
pub(crate) fn require_positive(name: &'static str, value: f64) -> SimResult<f64> {
    if !value.is_finite() {
        return Err(SimError::InvalidParameter { name, value, reason: "must be finite" });
    }
    if value <= 0.0 {
        return Err(SimError::InvalidParameter { name, value, reason: "must be positive" });
    }
    Ok(value)
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value, reason: "must be finite" })
    }
}

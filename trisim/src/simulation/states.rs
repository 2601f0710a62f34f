//! Core state types for the Earth–Moon–Sun simulation.
//!
//! The Sun is pinned at the origin and carries no state of its own;
//! only Earth and Moon move. Each step consumes a `SystemState` and
//! returns the next one.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub x: NVec2, // position [m]
    pub v: NVec2, // velocity [m/s]
}

impl BodyState {
    pub fn new(x: NVec2, v: NVec2) -> Self {
        Self { x, v }
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemState {
    pub earth: BodyState,
    pub moon: BodyState,
    pub t: f64, // time [s]
}

impl SystemState {
    pub fn new(earth: BodyState, moon: BodyState) -> Self {
        Self { earth, moon, t: 0.0 }
    }

    /// Same positions, both velocities negated
    pub fn reversed(&self) -> Self {
        Self {
            earth: BodyState::new(self.earth.x, -self.earth.v),
            moon: BodyState::new(self.moon.x, -self.moon.v),
            t: self.t,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.earth.is_finite() && self.moon.is_finite() && self.t.is_finite()
    }
}

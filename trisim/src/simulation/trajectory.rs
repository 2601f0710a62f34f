//! Recorded output of an integration
//!
//! `Snapshot` is one recorded position pair, `Trajectory` the full history
//! handed to consumers (viewer, YAML export), `Run` pairs it with the
//! state the integrator finished in.

use serde::Serialize;

use crate::simulation::states::{NVec2, SystemState};

/// Positions recorded by a single step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub step: usize, // index into the trajectory
    pub t: f64, // simulated time of the recorded positions
    pub earth: NVec2,
    pub moon: NVec2,
}

/// Position history of Earth and Moon, one entry per step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub dt: f64,
    pub earth: Vec<NVec2>,
    pub moon: Vec<NVec2>,
}

impl Trajectory {
    pub fn with_capacity(dt: f64, n: usize) -> Self {
        Self {
            dt,
            earth: Vec::with_capacity(n),
            moon: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, snap: &Snapshot) {
        debug_assert_eq!(snap.step, self.earth.len());
        self.earth.push(snap.earth);
        self.moon.push(snap.moon);
    }

    pub fn len(&self) -> usize {
        self.earth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earth.is_empty()
    }

    /// Simulated time of entry `i`, which is `(i + 1) * dt`, not `i * dt`
    ///
    /// Entry `i` holds the positions *after* step `i` has been applied, so
    /// entry 0 is already one step past the initial state.
    pub fn time_at(&self, i: usize) -> f64 {
        (i + 1) as f64 * self.dt
    }

    /// Snapshot view of entry `i`
    pub fn get(&self, i: usize) -> Option<Snapshot> {
        Some(Snapshot {
            step: i,
            t: self.time_at(i),
            earth: *self.earth.get(i)?,
            moon: *self.moon.get(i)?,
        })
    }
}

/// A finished integration
#[derive(Debug, Clone)]
pub struct Run {
    pub trajectory: Trajectory,
    pub final_state: SystemState,
}

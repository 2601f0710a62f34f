//! Fixed-step semi-implicit Euler integrator for the Earth–Moon–Sun system
//!
//! Each step is a pure function of (state, gravity, dt): velocities are
//! kicked with the force at the current positions, then positions drift
//! with the already-updated velocities. The ordering is load-bearing;
//! swapping it gives textbook explicit Euler and different numbers.

use log::{debug, info};

use super::forces::NewtonianGravity;
use super::params::Parameters;
use super::states::{BodyState, SystemState};
use super::trajectory::{Run, Snapshot, Trajectory};
use crate::error::{SimError, SimResult};

/// Advance the system by one step of size `dt`
/// Returns the new state and the positions recorded for `step`
pub fn semi_implicit_euler_step(sys: SystemState, gravity: &NewtonianGravity, dt: f64, step: usize) -> SimResult<(SystemState, Snapshot)> {
    let c = &gravity.constants;

    // Forces from the pre-update positions x_n
    let f = gravity.forces(&sys, step)?;

    // Kick: v_n+1 = v_n + (F / m) * dt
    let v_earth = sys.earth.v + f.earth_accel(c) * dt;
    let v_moon = sys.moon.v + f.moon_accel(c) * dt;

    // Drift with the new velocity: x_n+1 = x_n + v_n+1 * dt
    let x_earth = sys.earth.x + v_earth * dt;
    let x_moon = sys.moon.x + v_moon * dt;

    let next = SystemState {
        earth: BodyState::new(x_earth, v_earth),
        moon: BodyState::new(x_moon, v_moon),
        t: sys.t + dt,
    };

    if !next.is_finite() {
        return Err(SimError::NonFiniteState { step });
    }

    let snap = Snapshot {
        step,
        t: next.t,
        earth: next.earth.x,
        moon: next.moon.x,
    };

    Ok((next, snap))
}

/// Lazy sequence of per-step snapshots
///
/// Parameters are validated on construction, before any step runs.
/// Yields at most `num_steps` items. After the first error it yields
/// nothing more. Build a fresh one from the same initial state to restart.
#[derive(Debug, Clone)]
pub struct Steps {
    gravity: NewtonianGravity,
    dt: f64,
    num_steps: usize,
    next_step: usize,
    state: SystemState,
    failed: bool,
}

impl Steps {
    pub fn new(initial: SystemState, gravity: NewtonianGravity, params: &Parameters) -> SimResult<Self> {
        gravity.constants.validate()?;
        params.validate()?;

        Ok(Self {
            gravity,
            dt: params.dt,
            num_steps: params.num_steps,
            next_step: 0,
            state: initial,
            failed: false,
        })
    }

    /// State after the last successful step
    pub fn state(&self) -> &SystemState {
        &self.state
    }
}

impl Iterator for Steps {
    type Item = SimResult<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_step >= self.num_steps {
            return None;
        }

        let step = self.next_step;
        match semi_implicit_euler_step(self.state, &self.gravity, self.dt, step) {
            Ok((next, snap)) => {
                self.state = next;
                self.next_step += 1;
                Some(Ok(snap))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let left = self.num_steps - self.next_step;
        (0, Some(left))
    }
}

impl std::iter::FusedIterator for Steps {}

/// Run all `params.num_steps` steps from `initial`
///
/// All or nothing: any error discards the partial trajectory.
pub fn integrate(initial: &SystemState, gravity: &NewtonianGravity, params: &Parameters) -> SimResult<Run> {
    let mut steps = Steps::new(*initial, *gravity, params)?;

    info!("integrating {} steps of {} s ({:.3e} s simulated)", params.num_steps, params.dt, params.duration());

    let mut trajectory = Trajectory::with_capacity(params.dt, params.num_steps);

    for snap in steps.by_ref() {
        let snap = snap?;
        trajectory.push(&snap);
    }

    let final_state = *steps.state();
    debug!("finished at t = {} s, earth at {:?}", final_state.t, final_state.earth.x);

    Ok(Run {
        trajectory,
        final_state,
    })
}

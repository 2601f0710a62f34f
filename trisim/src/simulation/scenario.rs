//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - physical constants and integration parameters, validated
//! - the initial `SystemState` (Earth and Moon on the +x axis, moving along +y)
//! - the gravity model
//!
//! Nothing here steps the system; see [`Scenario::run`] and [`Scenario::steps`].

use log::debug;

use crate::configuration::config::ScenarioConfig;
use crate::error::{require_finite, SimResult};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::{integrate, Steps};
use crate::simulation::params::{Parameters, PhysicalConstants};
use crate::simulation::states::{BodyState, NVec2, SystemState};
use crate::simulation::trajectory::Run;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub initial: SystemState,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    /// Validate `cfg` and lay out the initial state
    ///
    /// Distances are only required to be finite; a configuration that puts
    /// a body on the Sun or on the other body fails at the first step with
    /// a degenerate separation.
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let constants = PhysicalConstants {
            G: cfg.g,
            m_sun: cfg.m_sun,
            m_earth: cfg.m_earth,
            m_moon: cfg.m_moon,
        };
        constants.validate()?;

        let parameters = Parameters {
            dt: cfg.dt,
            num_steps: cfg.num_steps,
        };
        parameters.validate()?;

        let d_es = require_finite("d_earth_sun", cfg.d_earth_sun)?;
        let d_me = require_finite("d_moon_earth", cfg.d_moon_earth)?;
        let v_e = require_finite("v_earth", cfg.v_earth)?;
        let v_mr = require_finite("v_moon_relative", cfg.v_moon_relative)?;

        // Earth on +x, Moon further out along the same axis
        let x_earth = NVec2::new(d_es, 0.0);
        let x_moon = x_earth + NVec2::new(d_me, 0.0);

        // Both moving along +y, Moon carried along with Earth
        let v_earth = NVec2::new(0.0, v_e);
        let v_moon = v_earth + NVec2::new(0.0, v_mr);

        let initial = SystemState::new(BodyState::new(x_earth, v_earth), BodyState::new(x_moon, v_moon));

        debug!("scenario: {:?}, {:?}", constants, parameters);

        Ok(Self {
            parameters,
            initial,
            gravity: NewtonianGravity::new(constants),
        })
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.gravity.constants
    }

    /// Lazy per-step snapshots, starting over from the initial state on every call
    pub fn steps(&self) -> SimResult<Steps> {
        Steps::new(self.initial, self.gravity, &self.parameters)
    }

    /// Integrate the whole scenario
    pub fn run(&self) -> SimResult<Run> {
        integrate(&self.initial, &self.gravity, &self.parameters)
    }
}

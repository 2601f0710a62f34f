pub mod simulation;
pub mod configuration;
pub mod error;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use simulation::states::{BodyState, SystemState, NVec2};
pub use simulation::params::{Parameters, PhysicalConstants};
pub use simulation::forces::{newtonian_force, NewtonianGravity, PairForces};
pub use simulation::integrator::{integrate, semi_implicit_euler_step, Steps};
pub use simulation::trajectory::{Run, Snapshot, Trajectory};
pub use simulation::diagnostics::{relative_energy_drift, total_energy};
pub use simulation::scenario::Scenario;

pub use configuration::config::ScenarioConfig;

pub use error::{BodyPair, SimError, SimResult};

#[cfg(feature = "viewer")]
pub use visualization::orbit_vis2d::run_2d;

//! Configuration types for loading the Earth–Moon–Sun scenario from YAML.
//!
//! The file is a flat mapping of SI scalars. The six physical keys are
//! required; the integration settings and initial speeds are optional.
//!
//! # YAML format
//!
//! ```yaml
//! G: 6.674e-11
//! M_sun: 1.989e30
//! M_earth: 5.972e24
//! M_moon: 7.348e22
//! d_earth_sun: 1.496e11
//! d_moon_earth: 3.844e8
//!
//! dt: 21600             # optional, 6 hours
//! num_steps: 1460       # optional, ~1 year
//! v_earth: 29.78e3      # optional, Earth speed along +y
//! v_moon_relative: 1.022e3 # optional, Moon speed relative to Earth
//! ```
//!
//! Scalars may also be quoted (`G: "6.674e-11"`); some YAML writers emit
//! exponent floats without a decimal point as strings.
//!
//! [`Scenario::build_scenario`](crate::simulation::scenario::Scenario::build_scenario)
//! validates the values and maps them into runtime types.

use std::io::Read;

use serde::{Deserialize, Deserializer};

use crate::simulation::params::{DEFAULT_DT, DEFAULT_NUM_STEPS};

/// Earth's initial orbital speed [m/s]
pub const DEFAULT_V_EARTH: f64 = 29.78e3;

/// Moon's initial speed relative to Earth [m/s]
pub const DEFAULT_V_MOON_RELATIVE: f64 = 1.022e3;

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(rename = "G", deserialize_with = "scalar")]
    pub g: f64, // gravitational constant
    #[serde(rename = "M_sun", deserialize_with = "scalar")]
    pub m_sun: f64,
    #[serde(rename = "M_earth", deserialize_with = "scalar")]
    pub m_earth: f64,
    #[serde(rename = "M_moon", deserialize_with = "scalar")]
    pub m_moon: f64,
    #[serde(deserialize_with = "scalar")]
    pub d_earth_sun: f64, // initial Earth–Sun distance, Earth starts on +x
    #[serde(deserialize_with = "scalar")]
    pub d_moon_earth: f64, // initial Moon–Earth distance, Moon starts beyond Earth on +x

    #[serde(default = "default_dt", deserialize_with = "scalar")]
    pub dt: f64,
    #[serde(default = "default_num_steps")]
    pub num_steps: usize,
    #[serde(default = "default_v_earth", deserialize_with = "scalar")]
    pub v_earth: f64,
    #[serde(default = "default_v_moon_relative", deserialize_with = "scalar")]
    pub v_moon_relative: f64,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}

fn default_dt() -> f64 {
    DEFAULT_DT
}

fn default_num_steps() -> usize {
    DEFAULT_NUM_STEPS
}

fn default_v_earth() -> f64 {
    DEFAULT_V_EARTH
}

fn default_v_moon_relative() -> f64 {
    DEFAULT_V_MOON_RELATIVE
}

/// Accept a YAML number or a string holding one
fn scalar<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Num(f64),
        Str(String),
    }

    match Scalar::deserialize(deserializer)? {
        Scalar::Num(v) => Ok(v),
        Scalar::Str(s) => s.trim().parse::<f64>().map_err(|e| serde::de::Error::custom(format!("`{s}` is not a number: {e}"))),
    }
}

use trisim::{relative_energy_drift, total_energy, Scenario, ScenarioConfig, Trajectory};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Earth–Moon–Sun orbit integrator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scenario file, as a path or a name under scenarios/
    #[arg(short, default_value = "earth_moon_sun.yaml")]
    file_name: String,

    /// Override the number of steps
    #[arg(long)]
    steps: Option<usize>,

    /// Override the step size in seconds
    #[arg(long)]
    dt: Option<f64>,

    /// Write the trajectory as YAML
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip the viewer
    #[arg(long, default_value_t = false)]
    headless: bool,
}

fn resolve_scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg = ScenarioConfig::from_reader(reader).with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(cfg)
}

fn write_trajectory(path: &Path, trajectory: &Trajectory) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_yaml::to_writer(BufWriter::new(file), trajectory).context("failed to write trajectory")?;
    info!("wrote {} entries to {}", trajectory.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let path = resolve_scenario_path(&args.file_name);
    let mut cfg = load_scenario_from_yaml(&path)?;
    if let Some(steps) = args.steps {
        cfg.num_steps = steps;
    }
    if let Some(dt) = args.dt {
        cfg.dt = dt;
    }

    let scenario = Scenario::build_scenario(cfg).context("invalid scenario")?;
    let run = scenario.run().context("integration failed")?;

    let e0 = total_energy(&scenario.initial, scenario.constants())?;
    let e1 = total_energy(&run.final_state, scenario.constants())?;
    info!(
        "done: {} steps, t = {:.3e} s, energy drift {:.3e}",
        run.trajectory.len(),
        run.final_state.t,
        relative_energy_drift(e0, e1)
    );

    if let Some(out) = &args.output {
        write_trajectory(out, &run.trajectory)?;
    }

    if args.headless {
        return Ok(());
    }

    #[cfg(feature = "viewer")]
    trisim::run_2d(&run.trajectory);

    #[cfg(not(feature = "viewer"))]
    log::warn!("built without the `viewer` feature, nothing to show");

    Ok(())
}

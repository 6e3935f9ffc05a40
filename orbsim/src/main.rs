use orbsim::{center_of_mass, solar_system, sun_earth, Scenario, ScenarioConfig, DAY, YEAR};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    Solar,
    SunEarth,
}

/// Headless runner: steps a scenario frame by frame and reports energy drift
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`, takes precedence over --preset
    #[arg(short, long)]
    file_name: Option<String>,

    #[arg(short, long, value_enum, default_value = "solar")]
    preset: Preset,

    /// Simulated days to run
    #[arg(short, long, default_value_t = YEAR / DAY)]
    days: f64,

    /// Frames per wall-clock second
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Simulated seconds per real second, overrides the scenario's value
    #[arg(short, long)]
    time_scale: Option<f64>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let Some(file_name) = &args.file_name else {
        return Ok(match args.preset {
            Preset::Solar => solar_system(),
            Preset::SunEarth => sun_earth(),
        });
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening {}", config_path.display()))?;
    let scenario_cfg = ScenarioConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let scenario_cfg = load_scenario(&args)?;
    let mut driver = Scenario::build(&scenario_cfg)?.into_driver()?;
    if let Some(time_scale) = args.time_scale {
        driver.set_time_scale(time_scale)?;
    }

    let frame_dt = 1.0 / args.fps;
    let t_end = args.days * DAY;
    let mut frames: u64 = 0;

    while driver.system().time() < t_end {
        driver.tick(frame_dt)?;
        frames += 1;

        if frames % 600 == 0 {
            let e = driver.energy();
            info!(
                days = driver.system().time() / DAY,
                total = e.total,
                drift = driver.energy_drift(),
                "energy"
            );
        }
    }

    info!(frames, steps = driver.steps(), drift = driver.energy_drift(), "run finished");
    if let Some(com) = center_of_mass(driver.system()) {
        info!(x = com.x, y = com.y, z = com.z, "center of mass");
    }
    for b in driver.snapshot().bodies {
        info!(
            body = &*b.label,
            x = b.position.x,
            y = b.position.y,
            z = b.position.z,
            speed = b.velocity.norm(),
            "final state"
        );
    }

    Ok(())
}

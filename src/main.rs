use quadgrav::{bench_gravity, bench_tick, build_engine, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use std::fs::File;
use std::io::BufReader;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML to run
    #[arg(short, default_value = "scenarios/orbit.yaml")]
    file_name: String,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn load_scenario(file_name: &str) -> Result<ScenarioConfig> {
    let file = File::open(file_name)?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(cfg)
}

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_tick();
        return Ok(());
    }

    let cfg = load_scenario(&args.file_name)?;
    let steps = (cfg.parameters.t_end / cfg.parameters.h0).ceil() as u64;
    let mut engine = build_engine(cfg)?;

    log::info!(
        "running {} bodies for {} steps (theta {}, h0 {})",
        engine.bodies().len(),
        steps,
        engine.params().theta,
        engine.params().h0
    );

    let report_every = (steps / 10).max(1);
    for step in 0..steps {
        engine.tick()?;
        if (step + 1) % report_every == 0 {
            let p = engine.total_momentum();
            log::info!(
                "t = {:>10.3}: momentum = ({:+.6e}, {:+.6e})",
                engine.t(),
                p.x,
                p.y
            );
        }
    }

    log::info!("done at t = {:.3}", engine.t());
    Ok(())
}

use clap::Parser;
use spatialarm::engines::generation::{ConsoleProgressCallback, EvolutionEngine, Termination};
use spatialarm::{Arm, ArmModel, CancellationToken, ConfigManager, SolveReport};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, propagate_version = true)]
#[command(about = "Evolutionary inverse kinematics for a three-link arm", long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target point
    #[arg(short, long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    target: Option<Vec<f64>>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations
    #[arg(short, long)]
    generations: Option<usize>,

    /// Population size
    #[arg(short, long)]
    population: Option<usize>,

    /// Log progress every N generations
    #[arg(long, default_value_t = 10)]
    report_every: usize,

    /// Write the effective configuration to this file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Print the solve report as JSON
    #[arg(long)]
    json: bool,
}

/// Process status for a finished solve: 2 when the target is out of reach
fn exit_status(report: &SolveReport) -> u8 {
    match report.termination {
        Termination::Unreachable => 2,
        _ => 0,
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let manager = ConfigManager::new();
    if let Some(path) = &args.config {
        manager.load_from_file(path)?;
    }

    manager.update(|config| {
        if let Some(target) = &args.target {
            config.target = [target[0], target[1], target[2]];
        }
        if let Some(seed) = args.seed {
            config.solver.seed = Some(seed);
        }
        if let Some(generations) = args.generations {
            config.solver.generation_count = generations;
        }
        if let Some(population) = args.population {
            config.solver.population_size = population;
        }
    })?;

    if let Some(path) = &args.save_config {
        manager.save_to_file(path)?;
        log::info!("Configuration written to {}", path.display());
    }

    let config = manager.get()?;
    let arm = Arm::from_config(&config.arm)?;
    let target = config.target_pose();

    let mut engine = EvolutionEngine::new(arm, config.solver.clone())?;
    let report = engine.run(
        target,
        ConsoleProgressCallback::new(args.report_every),
        &CancellationToken::new(),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let Some(best) = report.best else {
        eprintln!(
            "Target ({}, {}, {}) is out of reach (maximum reach {})",
            target.x,
            target.y,
            target.z,
            arm.max_reach()
        );
        return Ok(ExitCode::from(exit_status(&report)));
    };

    if !args.json {
        let mut model = ArmModel::new(arm);
        model.apply_genome(&best.genome);

        println!("Termination: {:?} after {} generations", report.termination, report.generations_run);
        for (i, link) in model.angles().iter().enumerate() {
            println!("  Link {}: theta {:8.3}°  gamma {:8.3}°", i + 1, link.theta, link.gamma);
        }
        for (i, joint) in model.joint_positions().iter().enumerate() {
            println!("  Joint {}: ({:.4}, {:.4}, {:.4})", i, joint.x, joint.y, joint.z);
        }
        println!("  Distance to target: {:.6}", model.distance_to(&target));
    }

    if report.termination == Termination::Exhausted {
        log::warn!(
            "Tolerance {} not reached, returning best effort",
            config.solver.convergence_tolerance
        );
    }

    Ok(ExitCode::from(exit_status(&report)))
}

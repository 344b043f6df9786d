mod csv;
mod prompt;

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tj_config::{ConfigError, EngineConfig, EngineConfigDef};
use tj_core::units::{k, m};
use tj_cycle::{CycleError, CycleInputs, CycleResult, Infeasibility};
use tj_sizing::{SizingError, solve_sizing};
use tj_sweep::SweepError;
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Cycle error: {0}")]
    Cycle(#[from] CycleError),

    #[error("Sizing error: {0}")]
    Sizing(#[from] SizingError),

    #[error("Sweep error: {0}")]
    Sweep(#[from] SweepError),

    #[error("Cannot size rotor, cycle is infeasible: {0}")]
    Infeasible(#[from] Infeasibility),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "tj-cli")]
#[command(about = "Turbojet cycle evaluator and rotor sizing tool", long_about = None)]
struct Cli {
    /// Engine configuration file (YAML or JSON); defaults to the reference engine
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the cycle at one operating point
    Evaluate {
        /// Overall pressure ratio
        #[arg(long)]
        opr: f64,
        /// Turbine inlet temperature in kelvin
        #[arg(long)]
        tit: f64,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep pressure ratio at each configured turbine inlet temperature
    Sweep {
        /// Evaluate points on the rayon thread pool
        #[arg(long)]
        parallel: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Size the rotor for the design-point compressor work
    Size {
        /// Overall pressure ratio; prompted for when omitted
        #[arg(long)]
        opr: Option<f64>,
        /// Rotor tip diameter in meters
        #[arg(long)]
        diameter: Option<f64>,
    },
    /// Write the reference engine configuration as YAML
    InitConfig {
        /// Destination file
        path: PathBuf,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Evaluate { opr, tit, json } => {
            cmd_evaluate(&load_engine(config)?, opr, tit, json)
        }
        Commands::Sweep { parallel, output } => {
            cmd_sweep(&load_engine(config)?, parallel, output.as_deref())
        }
        Commands::Size { opr, diameter } => cmd_size(&load_engine(config)?, opr, diameter),
        Commands::InitConfig { path } => cmd_init_config(&path),
    }
}

fn load_engine(path: Option<&Path>) -> CliResult<EngineConfig> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading engine configuration");
            Ok(tj_config::load(path)?)
        }
        None => Ok(tj_config::validate(&EngineConfigDef::default()).map_err(ConfigError::from)?),
    }
}

fn cmd_evaluate(engine: &EngineConfig, opr: f64, tit: f64, json: bool) -> CliResult<()> {
    let inputs = CycleInputs::new(opr, k(tit))?;
    let result = engine.cycle.evaluate(inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}: OPR {:.3}, TIT {:.1} K", engine.name, opr, tit);
    match result {
        CycleResult::Success(metrics) => {
            println!("  Specific thrust:  {:.2} N·s/kg", metrics.specific_thrust);
            println!("  TSFC:             {:.5} kg/(N·h)", metrics.tsfc);
            println!("  Compressor work:  {:.0} J/kg", metrics.compressor_work);
            println!("  Fuel-air ratio:   {:.5}", metrics.fuel_air_ratio);
            println!("  Thermal eff.:     {:.2} %", metrics.thermal_efficiency * 100.0);
        }
        CycleResult::Infeasible(reason) => {
            println!("  Infeasible: {}", reason);
        }
    }
    Ok(())
}

fn cmd_sweep(engine: &EngineConfig, parallel: bool, output: Option<&Path>) -> CliResult<()> {
    tracing::info!(
        sweep = %engine.sweep.pressure_ratios(),
        temperatures = engine.sweep.turbine_inlet_temperatures_k().len(),
        parallel,
        "running design-space sweep"
    );

    let series = if parallel {
        engine.sweep.execute_parallel(&engine.cycle)?
    } else {
        engine.sweep.execute(&engine.cycle)?
    };

    for s in &series {
        for skip in &s.skipped {
            tracing::info!(
                tit_k = s.turbine_inlet_k,
                opr = skip.pressure_ratio,
                reason = %skip.reason,
                "point skipped"
            );
        }
    }

    let csv = csv::render(&series);
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        let rows: usize = series.iter().map(|s| s.len()).sum();
        println!("✓ Exported {} points to {}", rows, path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_size(engine: &EngineConfig, opr: Option<f64>, diameter: Option<f64>) -> CliResult<()> {
    let default_opr = engine.sizing.default_pressure_ratio;
    let opr = match opr {
        Some(opr) => opr,
        None => {
            let stdin = io::stdin();
            prompt::prompt_pressure_ratio(&mut stdin.lock(), &mut io::stdout(), default_opr)?
        }
    };

    let sizing = match diameter {
        Some(d) => engine.sizing.with_diameter(m(d)),
        None => engine.sizing,
    };

    let inputs = CycleInputs::new(opr, k(sizing.design_turbine_inlet_k))?;
    let metrics = engine.cycle.evaluate(inputs).into_result()?;
    let sizing_inputs = sizing.inputs_for(&metrics)?;
    let result = solve_sizing(&sizing_inputs);

    println!(
        "{}: OPR {:.3}, TIT {:.1} K, D = {:.3} m",
        engine.name,
        opr,
        sizing.design_turbine_inlet_k,
        sizing_inputs.rotor_diameter_m()
    );
    println!("  Compressor work:  {:.0} J/kg", metrics.compressor_work);
    println!("  Required speed:   {:.0} RPM", result.rpm);
    println!(
        "  Tip speed:        {:.1} m/s ({:.0} % of limit)",
        result.tip_speed_mps,
        result.tip_speed_utilization(&sizing_inputs) * 100.0
    );
    println!("  Verdict:          {}", result.verdict);
    Ok(())
}

fn cmd_init_config(path: &Path) -> CliResult<()> {
    tj_config::save_yaml(path, &EngineConfigDef::default())?;
    println!("✓ Wrote reference configuration to {}", path.display());
    Ok(())
}

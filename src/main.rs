// Elevator Dispatch Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/elevator-dispatch-sim
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/elevator-dispatch-sim --elevator-count 4 --total-passengers 200 --seed 7 --verbose
// ```

use anyhow::Context;
use clap::Parser;
use elevator_dispatch_sim::simulation::{
    LoggingConfig, RunOutcome, SimulationOrchestrator, SimulationReport,
};
use elevator_dispatch_sim::types::config::CliArgs;
use elevator_dispatch_sim::types::{OutputFormat, SimulationConfig};
use std::io::{self, BufWriter, Write};
use std::process;
use tracing::{error, info, Level};

/// Exit code for a run stopped by the cycle ceiling
const EXIT_CEILING_REACHED: i32 = 2;

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags; the guard flushes file output on drop
    let logging_result = match (&args.log_dir, args.debug, args.verbose) {
        (Some(directory), debug, verbose) => {
            let level = if debug {
                Level::DEBUG
            } else if verbose {
                Level::INFO
            } else {
                Level::WARN
            };
            LoggingConfig::new().with_level(level).with_file_logging(directory.clone()).init()
        }
        (None, true, _) => LoggingConfig::init_debug(),
        (None, false, true) => LoggingConfig::init_verbose(),
        (None, false, false) => LoggingConfig::new().with_level(Level::WARN).init(),
    };

    let _logging_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Elevator Dispatch Simulator");

    let quiet = args.quiet;
    let dry_run = args.dry_run;

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    if !quiet {
        print_startup_banner(&config);
    }

    match run_simulation(config, quiet) {
        Ok(RunOutcome::Completed) => {
            info!("Elevator Dispatch Simulator completed successfully");
        }
        Ok(RunOutcome::CycleCeilingReached { incomplete }) => {
            eprintln!("Simulation stopped at the cycle ceiling with {} passengers incomplete", incomplete);
            process::exit(EXIT_CEILING_REACHED);
        }
        Err(e) => {
            error!("Simulation failed: {:#}", e);
            eprintln!("Simulation failed: {:#}", e);
            process::exit(1);
        }
    }
}

/// Run the simulation, print the event log, and write the optional report file
fn run_simulation(config: SimulationConfig, quiet: bool) -> anyhow::Result<RunOutcome> {
    let format = config.get_output_format().map_err(anyhow::Error::msg)?;
    let report_output = config.report_output.clone();

    let report = SimulationOrchestrator::new(config)
        .context("Failed to initialize simulation")?
        .run()
        .context("Simulation run failed")?;

    if !quiet {
        print_event_log(&report, format)?;
        eprintln!();
        eprintln!("{}", report.statistics.generate_summary_report());
    }

    if let Some(path) = report_output {
        write_report(&report, &path)?;
        info!("Report written to: {}", path);
        if !quiet {
            eprintln!("Report written to: {}", path);
        }
    }

    Ok(report.outcome)
}

/// Print every log entry to stdout in the configured format
fn print_event_log(report: &SimulationReport, format: OutputFormat) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for entry in &report.log {
        match format {
            OutputFormat::Text => writeln!(writer, "{}", entry)?,
            OutputFormat::Json => {
                let line = serde_json::to_string(entry).context("Failed to serialize log entry")?;
                writeln!(writer, "{}", line)?;
            }
        }
    }

    writer.flush().context("Failed to flush event log output")?;
    Ok(())
}

/// Write the full report as pretty JSON
fn write_report(report: &SimulationReport, path: &str) -> anyhow::Result<()> {
    report
        .save_to_file(path)
        .map_err(|e| {
            error!(
                category = e.category(),
                recoverable = e.is_recoverable(),
                "Failed to write report: {}",
                e
            );
            e
        })
        .with_context(|| format!("Failed to write report to '{}'", path))
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Elevator Dispatch Simulator");
    eprintln!("===========================");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Floors: {} - {}", config.min_floor, config.max_floor);
    eprintln!("  Elevators: {} (capacity {})", config.elevator_count, config.elevator_capacity);
    eprintln!(
        "  Timing: {} tick(s) per floor, doors held {} tick(s)",
        config.travel_time_per_floor, config.door_hold_time
    );
    eprintln!(
        "  Passengers: {} (one every {} tick(s))",
        config.total_passengers, config.generation_interval
    );
    eprintln!("  Cycle Ceiling: {}", config.max_cycles());
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

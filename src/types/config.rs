//! Configuration structures for the elevator simulation
//!
//! This module contains the simulation configuration, the dispatch cost weights,
//! the command line arguments, and the validation logic that guards the engine's
//! preconditions (at least two floors, at least one elevator with room for one
//! passenger, and non-zero timing constants).

use super::{FloorRange, OutputFormat};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default building settings, matching the reference ten-floor, two-car bank
pub mod defaults {
    /// Lowest floor
    pub const MIN_FLOOR: i32 = 1;
    /// Highest floor
    pub const MAX_FLOOR: i32 = 10;
    /// Number of elevators
    pub const ELEVATOR_COUNT: usize = 2;
    /// Passengers per elevator
    pub const ELEVATOR_CAPACITY: usize = 5;
    /// Ticks to pass one floor
    pub const TRAVEL_TIME_PER_FLOOR: u32 = 1;
    /// Ticks the doors stay open at a stop
    pub const DOOR_HOLD_TIME: u32 = 1;
    /// Ticks between passenger spawns
    pub const GENERATION_INTERVAL: u64 = 1;
    /// Passengers spawned over the run
    pub const TOTAL_PASSENGERS: usize = 40;
    /// Per-passenger service estimate used to size the cycle ceiling
    pub const ESTIMATED_PROCESSING_TIME: u64 = 5;
    /// Score added per passenger aboard
    pub const PASSENGER_WEIGHT: u32 = 2;
    /// Score added per committed target floor
    pub const TARGET_WEIGHT: u32 = 1;
}

/// Weights of the dispatch cost function
///
/// Penalties left as `None` are derived from the building height when the
/// dispatcher is built, so that they scale with the floor range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DispatchWeights {
    /// Added when the call floor is behind an elevator sweeping in the call's direction
    /// (default: one building height)
    pub behind_penalty: Option<u32>,
    /// Added when the elevator must reverse to serve the call (default: two building heights)
    pub reversal_penalty: Option<u32>,
    /// Added per passenger currently aboard
    pub passenger_weight: u32,
    /// Added per floor the elevator is already committed to
    pub target_weight: u32,
    /// When set, full elevators stay eligible with this penalty instead of being excluded
    pub full_elevator_penalty: Option<u32>,
}

impl Default for DispatchWeights {
    fn default() -> Self {
        Self {
            behind_penalty: None,
            reversal_penalty: None,
            passenger_weight: defaults::PASSENGER_WEIGHT,
            target_weight: defaults::TARGET_WEIGHT,
            full_elevator_penalty: None,
        }
    }
}

impl DispatchWeights {
    /// Behind-the-sweep penalty for a building with `floor_count` floors
    pub fn behind_penalty_for(&self, floor_count: u32) -> u32 {
        self.behind_penalty.unwrap_or(floor_count)
    }

    /// Reversal penalty for a building with `floor_count` floors
    pub fn reversal_penalty_for(&self, floor_count: u32) -> u32 {
        self.reversal_penalty.unwrap_or(floor_count.saturating_mul(2))
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "elevator-dispatch-sim",
    version = "0.1.0",
    about = "Elevator Dispatch Simulator - simulates a bank of elevators serving random passenger demand",
    long_about = "Runs a tick-driven simulation of a fixed bank of elevators. Passengers spawn on random floors, \
the dispatcher assigns each call to the cheapest elevator, and every car follows a LOOK sweep until all \
passengers are delivered or the cycle ceiling is reached.

EXAMPLES:
    # Run with default settings (10 floors, 2 elevators, 40 passengers)
    elevator-dispatch-sim

    # Reproducible run
    elevator-dispatch-sim --seed 42

    # Use a configuration file
    elevator-dispatch-sim --config building.json

    # Larger building, JSON trace, full report on disk
    elevator-dispatch-sim --max-floor 30 --elevator-count 4 --output-format json --report-output report.json

    # Generate configuration template
    elevator-dispatch-sim --print-config > building.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Lowest floor served
    #[arg(long, allow_negative_numbers = true, help = "Lowest floor served")]
    pub min_floor: Option<i32>,

    /// Highest floor served
    #[arg(long, allow_negative_numbers = true, help = "Highest floor served")]
    pub max_floor: Option<i32>,

    /// Number of elevators in the bank
    #[arg(long, help = "Number of elevators")]
    pub elevator_count: Option<usize>,

    /// Passenger capacity of each elevator
    #[arg(long, help = "Passenger capacity per elevator")]
    pub elevator_capacity: Option<usize>,

    /// Ticks needed to pass one floor
    #[arg(long, help = "Ticks needed to pass one floor")]
    pub travel_time: Option<u32>,

    /// Ticks the doors stay open at each stop
    #[arg(long, help = "Ticks the doors stay open at each stop")]
    pub door_time: Option<u32>,

    /// Ticks between passenger spawns
    #[arg(long, help = "Ticks between passenger spawns")]
    pub generation_interval: Option<u64>,

    /// Number of passengers to simulate
    #[arg(
        long,
        help = "Number of passengers to simulate",
        long_help = "Total number of passengers spawned over the run. Must be greater than 0. Default: 40"
    )]
    pub total_passengers: Option<usize>,

    /// Per-passenger service estimate used for the cycle ceiling
    #[arg(
        long,
        help = "Per-passenger processing estimate (ticks)",
        long_help = "Used to derive the cycle ceiling: passengers x floors x estimate. Default: 5"
    )]
    pub processing_estimate: Option<u64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output format for the event trace
    #[arg(
        long,
        help = "Trace output format (text or json)",
        long_help = "Output format for the event trace. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Output path for the full simulation report
    #[arg(long, help = "Write the full simulation report (JSON) to this path")]
    pub report_output: Option<String>,

    /// Suppress the event trace on stdout
    #[arg(short, long, help = "Suppress the event trace on stdout")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Directory for rolling diagnostic log files
    #[arg(long, help = "Write diagnostic logs to this directory")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Lowest floor served
    pub min_floor: Option<i32>,
    /// Highest floor served
    pub max_floor: Option<i32>,
    /// Number of elevators
    pub elevator_count: Option<usize>,
    /// Passenger capacity per elevator
    pub elevator_capacity: Option<usize>,
    /// Ticks needed to pass one floor
    pub travel_time_per_floor: Option<u32>,
    /// Ticks the doors stay open at each stop
    pub door_hold_time: Option<u32>,
    /// Ticks between passenger spawns
    pub generation_interval: Option<u64>,
    /// Number of passengers to simulate
    pub total_passengers: Option<usize>,
    /// Per-passenger service estimate used for the cycle ceiling
    pub estimated_processing_time: Option<u64>,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
    /// Output format for the event trace
    pub output_format: Option<String>,
    /// Output path for the full simulation report
    pub report_output: Option<String>,
    /// Dispatch cost weights
    pub dispatch: Option<DispatchWeights>,
}

/// Configuration for the elevator simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Lowest floor served
    pub min_floor: i32,
    /// Highest floor served
    pub max_floor: i32,
    /// Number of elevators
    pub elevator_count: usize,
    /// Passenger capacity per elevator
    pub elevator_capacity: usize,
    /// Ticks needed to pass one floor
    pub travel_time_per_floor: u32,
    /// Ticks the doors stay open at each stop
    pub door_hold_time: u32,
    /// Ticks between passenger spawns
    pub generation_interval: u64,
    /// Number of passengers to simulate
    pub total_passengers: usize,
    /// Per-passenger service estimate used for the cycle ceiling
    pub estimated_processing_time: u64,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
    /// Output format for the event trace
    pub output_format: String,
    /// Output path for the full simulation report
    pub report_output: Option<String>,
    /// Dispatch cost weights
    #[serde(default)]
    pub dispatch: DispatchWeights,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Floor range holds fewer than two floors
    #[error("Invalid floor range: max floor ({1}) must be greater than min floor ({0})")]
    InvalidFloorRange(i32, i32),

    /// No elevators configured
    #[error("Elevator count must be greater than 0, got {0}")]
    InvalidElevatorCount(usize),

    /// Elevators cannot carry anyone
    #[error("Elevator capacity must be greater than 0, got {0}")]
    InvalidCapacity(usize),

    /// Travel time is zero
    #[error("Travel time per floor must be greater than 0, got {0}")]
    InvalidTravelTime(u32),

    /// Door hold time is zero
    #[error("Door hold time must be greater than 0, got {0}")]
    InvalidDoorTime(u32),

    /// Generation interval is zero
    #[error("Generation interval must be greater than 0, got {0}")]
    InvalidGenerationInterval(u64),

    /// Passenger count is zero
    #[error("Total passengers must be greater than 0, got {0}")]
    InvalidPassengerCount(usize),

    /// Processing estimate is zero
    #[error("Estimated processing time must be greater than 0, got {0}")]
    InvalidProcessingEstimate(u64),

    /// Output format is not recognised
    #[error("Unknown output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_floor: defaults::MIN_FLOOR,
            max_floor: defaults::MAX_FLOOR,
            elevator_count: defaults::ELEVATOR_COUNT,
            elevator_capacity: defaults::ELEVATOR_CAPACITY,
            travel_time_per_floor: defaults::TRAVEL_TIME_PER_FLOOR,
            door_hold_time: defaults::DOOR_HOLD_TIME,
            generation_interval: defaults::GENERATION_INTERVAL,
            total_passengers: defaults::TOTAL_PASSENGERS,
            estimated_processing_time: defaults::ESTIMATED_PROCESSING_TIME,
            seed: None,
            output_format: "text".to_string(),
            report_output: None,
            dispatch: DispatchWeights::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            min_floor: config_file.min_floor.unwrap_or(defaults.min_floor),
            max_floor: config_file.max_floor.unwrap_or(defaults.max_floor),
            elevator_count: config_file.elevator_count.unwrap_or(defaults.elevator_count),
            elevator_capacity: config_file.elevator_capacity.unwrap_or(defaults.elevator_capacity),
            travel_time_per_floor: config_file
                .travel_time_per_floor
                .unwrap_or(defaults.travel_time_per_floor),
            door_hold_time: config_file.door_hold_time.unwrap_or(defaults.door_hold_time),
            generation_interval: config_file
                .generation_interval
                .unwrap_or(defaults.generation_interval),
            total_passengers: config_file.total_passengers.unwrap_or(defaults.total_passengers),
            estimated_processing_time: config_file
                .estimated_processing_time
                .unwrap_or(defaults.estimated_processing_time),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            report_output: config_file.report_output.or(defaults.report_output),
            dispatch: config_file.dispatch.unwrap_or(defaults.dispatch),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.min_floor {
            config.min_floor = value;
        }
        if let Some(value) = args.max_floor {
            config.max_floor = value;
        }
        if let Some(value) = args.elevator_count {
            config.elevator_count = value;
        }
        if let Some(value) = args.elevator_capacity {
            config.elevator_capacity = value;
        }
        if let Some(value) = args.travel_time {
            config.travel_time_per_floor = value;
        }
        if let Some(value) = args.door_time {
            config.door_hold_time = value;
        }
        if let Some(value) = args.generation_interval {
            config.generation_interval = value;
        }
        if let Some(value) = args.total_passengers {
            config.total_passengers = value;
        }
        if let Some(value) = args.processing_estimate {
            config.estimated_processing_time = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.report_output {
            config.report_output = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_floor <= self.min_floor {
            return Err(ConfigValidationError::InvalidFloorRange(self.min_floor, self.max_floor));
        }

        if self.elevator_count == 0 {
            return Err(ConfigValidationError::InvalidElevatorCount(self.elevator_count));
        }

        if self.elevator_capacity == 0 {
            return Err(ConfigValidationError::InvalidCapacity(self.elevator_capacity));
        }

        if self.travel_time_per_floor == 0 {
            return Err(ConfigValidationError::InvalidTravelTime(self.travel_time_per_floor));
        }

        if self.door_hold_time == 0 {
            return Err(ConfigValidationError::InvalidDoorTime(self.door_hold_time));
        }

        if self.generation_interval == 0 {
            return Err(ConfigValidationError::InvalidGenerationInterval(self.generation_interval));
        }

        if self.total_passengers == 0 {
            return Err(ConfigValidationError::InvalidPassengerCount(self.total_passengers));
        }

        if self.estimated_processing_time == 0 {
            return Err(ConfigValidationError::InvalidProcessingEstimate(
                self.estimated_processing_time,
            ));
        }

        if self.get_output_format().is_err() {
            return Err(ConfigValidationError::InvalidOutputFormat(self.output_format.clone()));
        }

        Ok(())
    }

    /// Floors served by the bank
    pub fn floor_range(&self) -> FloorRange {
        FloorRange::new(self.min_floor, self.max_floor)
    }

    /// Number of floors served by the bank
    pub fn floor_count(&self) -> u32 {
        self.floor_range().floor_count()
    }

    /// Maximum number of ticks before a run is declared non-converging
    ///
    /// `total_passengers x floor_count x estimated_processing_time`
    pub fn max_cycles(&self) -> u64 {
        (self.total_passengers as u64)
            .saturating_mul(u64::from(self.floor_count()))
            .saturating_mul(self.estimated_processing_time)
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse::<OutputFormat>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();

        assert_eq!(config.min_floor, 1);
        assert_eq!(config.max_floor, 10);
        assert_eq!(config.elevator_count, 2);
        assert_eq!(config.elevator_capacity, 5);
        assert_eq!(config.travel_time_per_floor, 1);
        assert_eq!(config.door_hold_time, 1);
        assert_eq!(config.generation_interval, 1);
        assert_eq!(config.total_passengers, 40);
        assert_eq!(config.estimated_processing_time, 5);
        assert_eq!(config.output_format, "text");
        assert!(config.seed.is_none());
        assert!(config.report_output.is_none());
        assert_eq!(config.dispatch, DispatchWeights::default());
    }

    #[test]
    fn test_max_cycles_formula() {
        let config = SimulationConfig::default();
        // 40 passengers x 10 floors x 5 ticks
        assert_eq!(config.max_cycles(), 2_000);

        let config = SimulationConfig {
            min_floor: -2,
            max_floor: 7,
            total_passengers: 3,
            estimated_processing_time: 4,
            ..SimulationConfig::default()
        };
        assert_eq!(config.floor_count(), 10);
        assert_eq!(config.max_cycles(), 120);
    }

    #[test]
    fn test_dispatch_weights_scale_with_building() {
        let weights = DispatchWeights::default();
        assert_eq!(weights.behind_penalty_for(10), 10);
        assert_eq!(weights.reversal_penalty_for(10), 20);

        let weights = DispatchWeights {
            behind_penalty: Some(3),
            reversal_penalty: Some(7),
            ..DispatchWeights::default()
        };
        assert_eq!(weights.behind_penalty_for(10), 3);
        assert_eq!(weights.reversal_penalty_for(10), 7);
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "min_floor": 0,
            "max_floor": 20,
            "elevator_count": 4,
            "elevator_capacity": 8,
            "total_passengers": 100,
            "seed": 12345,
            "output_format": "json",
            "dispatch": { "passenger_weight": 3 }
        }"#;

        temp_file.write_all(config_json.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = SimulationConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.min_floor, 0);
        assert_eq!(config.max_floor, 20);
        assert_eq!(config.elevator_count, 4);
        assert_eq!(config.elevator_capacity, 8);
        assert_eq!(config.total_passengers, 100);
        assert_eq!(config.seed, Some(12345));
        assert_eq!(config.output_format, "json");
        assert_eq!(config.dispatch.passenger_weight, 3);
        // Unspecified weights keep their defaults
        assert_eq!(config.dispatch.target_weight, 1);
        // Unspecified fields keep their defaults
        assert_eq!(config.door_hold_time, 1);
        assert_eq!(config.estimated_processing_time, 5);
    }

    #[test]
    fn test_config_file_unsupported_extension() {
        use tempfile::Builder;

        let temp_file = Builder::new().suffix(".yaml").tempfile().unwrap();
        match SimulationConfig::from_file(temp_file.path()) {
            Err(ConfigError::UnsupportedFormat(ext)) => assert_eq!(ext, "yaml"),
            other => panic!("Expected UnsupportedFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_file_missing() {
        match SimulationConfig::from_file("/definitely/not/here.json") {
            Err(ConfigError::FileNotFound(_)) => {}
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::try_parse_from([
            "test",
            "--min-floor",
            "-1",
            "--max-floor",
            "15",
            "--elevator-count",
            "3",
            "--total-passengers",
            "12",
            "--seed",
            "99",
        ])
        .unwrap();

        let config = SimulationConfig::from_cli_args(args).unwrap();

        assert_eq!(config.min_floor, -1);
        assert_eq!(config.max_floor, 15);
        assert_eq!(config.elevator_count, 3);
        assert_eq!(config.total_passengers, 12);
        assert_eq!(config.seed, Some(99));
        // Default values should remain for non-overridden fields
        assert_eq!(config.elevator_capacity, 5);
        assert_eq!(config.door_hold_time, 1);
    }

    #[test]
    fn test_simulation_config_validation_success() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_simulation_config_validation_floor_range() {
        let config = SimulationConfig { min_floor: 5, max_floor: 5, ..SimulationConfig::default() };

        match config.validate() {
            Err(ConfigValidationError::InvalidFloorRange(5, 5)) => {}
            _ => panic!("Expected InvalidFloorRange error"),
        }
    }

    #[test]
    fn test_simulation_config_validation_counts() {
        let config = SimulationConfig { elevator_count: 0, ..SimulationConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidElevatorCount(0))));

        let config = SimulationConfig { elevator_capacity: 0, ..SimulationConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidCapacity(0))));

        let config = SimulationConfig { total_passengers: 0, ..SimulationConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidPassengerCount(0))));
    }

    #[test]
    fn test_simulation_config_validation_timing() {
        let config = SimulationConfig { travel_time_per_floor: 0, ..SimulationConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidTravelTime(0))));

        let config = SimulationConfig { door_hold_time: 0, ..SimulationConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidDoorTime(0))));

        let config = SimulationConfig { generation_interval: 0, ..SimulationConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidGenerationInterval(0))
        ));

        let config =
            SimulationConfig { estimated_processing_time: 0, ..SimulationConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidProcessingEstimate(0))
        ));
    }

    #[test]
    fn test_simulation_config_validation_output_format() {
        let config =
            SimulationConfig { output_format: "csv".to_string(), ..SimulationConfig::default() };

        match config.validate() {
            Err(ConfigValidationError::InvalidOutputFormat(format)) => assert_eq!(format, "csv"),
            _ => panic!("Expected InvalidOutputFormat error"),
        }
    }

    #[test]
    fn test_simulation_config_serialization() {
        let config = SimulationConfig { seed: Some(7), ..SimulationConfig::default() };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.max_floor, deserialized.max_floor);
        assert_eq!(config.elevator_count, deserialized.elevator_count);
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.dispatch, deserialized.dispatch);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("building.json");

        let config = SimulationConfig { max_floor: 25, ..SimulationConfig::default() };
        config.save_to_file(&path).unwrap();

        let reloaded = SimulationConfig::from_file(&path).unwrap();
        assert_eq!(reloaded.max_floor, 25);
    }
}

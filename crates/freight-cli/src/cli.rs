//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use freight_types::OutputFormat;

#[derive(Parser)]
#[command(name = "freight")]
#[command(version)]
#[command(about = "Assign client cargo to trains, airplanes and other vehicles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// State document path. Uses config value if not specified.
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage clients
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Manage vehicles
    Vehicle {
        #[command(subcommand)]
        action: VehicleAction,
    },

    /// Assign clients to vehicles and show the result
    Distribute {
        /// Export the result (.json for JSON, anything else for CSV)
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Import clients and vehicles from a TOML seed file
    Seed {
        /// Path to TOML file
        file: PathBuf,

        /// Replace the current fleet instead of appending
        #[arg(long)]
        replace: bool,
    },

    /// Interactive numbered menu
    Menu,

    /// Show fleet totals
    Summary,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set company name
        #[arg(long)]
        set_company: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Empty vehicles before each distribution in the interactive menu
        #[arg(long)]
        set_reset: Option<bool>,

        /// Enable/disable the client name and weight policy
        #[arg(long)]
        set_input_policy: Option<bool>,

        /// Set state document path
        #[arg(long)]
        set_state: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum ClientAction {
    /// Register a client
    Add {
        /// Client name (letters, hyphens, spaces)
        #[arg(long, short = 'n')]
        name: String,

        /// Cargo weight
        #[arg(long, short = 'w')]
        weight: f64,

        /// Mark as VIP
        #[arg(long)]
        vip: bool,
    },

    /// Change a client by list index
    Edit {
        index: usize,

        #[arg(long, short = 'n')]
        name: Option<String>,

        #[arg(long, short = 'w')]
        weight: Option<f64>,

        #[arg(long)]
        vip: Option<bool>,
    },

    /// Remove a client by list index
    Remove { index: usize },

    /// List clients
    List {
        /// Only names containing this text
        #[arg(long, short = 's')]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum VehicleAction {
    /// Register a vehicle
    Add {
        #[command(subcommand)]
        spec: VehicleSpec,
    },

    /// Change a vehicle by list index (empties its load)
    Edit {
        index: usize,

        #[arg(long, short = 'c')]
        capacity: Option<f64>,

        /// Turn into a train with this many cars
        #[arg(long, conflicts_with_all = ["altitude", "plain"])]
        cars: Option<u32>,

        /// Turn into an airplane with this max altitude
        #[arg(long, conflicts_with = "plain")]
        altitude: Option<u32>,

        /// Turn into a plain vehicle
        #[arg(long)]
        plain: bool,
    },

    /// Remove a vehicle by list index
    Remove { index: usize },

    /// List vehicles
    List,
}

#[derive(Subcommand)]
pub enum VehicleSpec {
    /// Plain vehicle
    Plain {
        #[arg(long, short = 'c')]
        capacity: f64,
    },

    /// Train
    Train {
        #[arg(long, short = 'c')]
        capacity: f64,

        /// Number of cars
        #[arg(long)]
        cars: u32,
    },

    /// Airplane
    Airplane {
        #[arg(long, short = 'c')]
        capacity: f64,

        /// Maximum altitude (> 0)
        #[arg(long)]
        altitude: u32,
    },
}

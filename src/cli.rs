//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands;
use homeguard::core::models::{ArmingStatus, SensorType};
use homeguard::output::OutputMode;

/// homeguard - Home-security alarm control
#[derive(Parser, Debug)]
#[command(
    name = "homeguard",
    version,
    about = "Home-security alarm control",
    long_about = "Arm and disarm the system, report sensor changes and camera frames.\n\n\
                  The alarm status is derived from sensor activity, the arming mode\n\
                  and cat detection on the camera."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show arming, alarm and sensor status
    Status,

    /// Arm the system
    Arm {
        /// Arming mode
        #[arg(value_enum)]
        mode: ArmMode,
    },

    /// Disarm the system (clears any alarm)
    Disarm,

    /// Manage sensors
    Sensor {
        #[command(subcommand)]
        action: SensorAction,
    },

    /// Process a camera frame
    Image {
        /// Path to the frame
        path: PathBuf,

        /// Cat confidence (percent) reported by the classifier for this frame
        #[arg(short, long, default_value_t = 0.0)]
        confidence: f32,
    },

    /// Show version
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmMode {
    /// Occupants at home
    Home,
    /// House empty
    Away,
}

impl From<ArmMode> for ArmingStatus {
    fn from(mode: ArmMode) -> Self {
        match mode {
            ArmMode::Home => Self::ArmedHome,
            ArmMode::Away => Self::ArmedAway,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorState {
    /// Active (triggered)
    On,
    /// Inactive
    Off,
}

#[derive(Subcommand, Debug)]
pub enum SensorAction {
    /// Register a sensor
    Add {
        /// Sensor name
        name: String,

        /// Sensor type: door, window, motion
        #[arg(short = 't', long = "type", default_value = "door")]
        sensor_type: SensorType,
    },

    /// List sensors
    List,

    /// Remove a sensor
    Remove {
        /// Sensor name
        name: String,
    },

    /// Report a sensor's activation state
    Set {
        /// Sensor name
        name: String,

        /// New state
        #[arg(value_enum)]
        state: SensorState,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Status) => commands::status(output_mode),
        Some(Command::Arm { mode }) => commands::arm(mode.into(), output_mode),
        Some(Command::Disarm) => commands::arm(ArmingStatus::Disarmed, output_mode),
        Some(Command::Sensor { action }) => commands::sensor_cmd(action, output_mode),
        Some(Command::Image { path, confidence }) => {
            commands::image(&path, confidence, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("homeguard v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("homeguard v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'homeguard --help' for usage");
                println!("Run 'homeguard status' to see the system state");
            }
            Ok(())
        },
    }
}

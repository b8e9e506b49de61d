// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::combine::{self, Operation};
use crate::helpers::telemetry::setup_simple_tracing;
use crate::{dense, evaluate, show};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use polyterm_config::load_config;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polyterm")]
#[command(about = "Add, multiply and evaluate polynomials stored as one-line text files", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `polyterm -vvv` will give
    /// you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        let config = load_config(self.config.clone())?;
        if let Some(file) = config.config_file() {
            info!("Config loaded from: {:?}", file);
        }

        match self.command {
            Commands::Show { file } => show::execute(&file)?,
            Commands::Add {
                left,
                right,
                output,
            } => combine::execute(Operation::Add, &left, &right, output, &config)?,
            Commands::Multiply {
                left,
                right,
                output,
            } => combine::execute(Operation::Multiply, &left, &right, output, &config)?,
            Commands::Eval { file, x } => evaluate::execute_eval(&file, x)?,
            Commands::HasRoot { file, x } => evaluate::execute_has_root(&file, x)?,
            Commands::Table { file } => evaluate::execute_table(&file, &config)?,
            Commands::Dense {
                coefficients,
                output,
            } => dense::execute(coefficients, output, &config)?,
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a polynomial file in canonical and readable form
    Show {
        /// Polynomial file
        file: PathBuf,
    },

    /// Add two polynomial files and save the sum
    Add {
        left: PathBuf,
        right: PathBuf,

        /// Output file (defaults to the configured `output`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Multiply two polynomial files and save the product
    Multiply {
        left: PathBuf,
        right: PathBuf,

        /// Output file (defaults to the configured `output`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evaluate a polynomial at a point
    Eval {
        file: PathBuf,
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },

    /// Check whether a point is an exact root
    HasRoot {
        file: PathBuf,
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },

    /// Evaluate a polynomial at the configured sample points
    Table {
        file: PathBuf,
    },

    /// Build a polynomial from dense coefficients (constant term first) and save it
    Dense {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        coefficients: Vec<f64>,

        /// Output file (defaults to the configured `output`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

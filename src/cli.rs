use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::{DEFAULT_CONFIG_PATH, RenderSettings};
use commands::{check, render};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Render and verify the portfolio page")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML, YAML or JSON); skipped when it does not exist
    #[arg(short, long, global = true, env = "PORTFOLIO_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the page to static HTML
    ///
    /// Examples:
    ///   portfolio render --output dist/index.html
    ///   portfolio render --year 2030 --fragment
    Render {
        /// Destination file, or `-` for stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Pin the copyright year instead of reading the system clock
        #[arg(short, long)]
        year: Option<i32>,

        /// Emit only the page body, without the surrounding document
        #[arg(long)]
        fragment: bool,
    },
    /// Render the page and verify its structure
    ///
    /// Checks anchor uniqueness, landmarks, capability groups, the tech
    /// stack, outbound links and the copyright year. Exits non-zero on any
    /// violation.
    Check {
        /// Pin the copyright year instead of reading the system clock
        #[arg(short, long)]
        year: Option<i32>,

        /// Print the inspection report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = RenderSettings::load(&self.config)?;

        match self.command {
            Commands::Render { output, year, fragment } => {
                render(&settings.with_overrides(output, year), fragment).await?;
            }
            Commands::Check { year, json } => {
                check(&settings.with_overrides(None, year), json).await?;
            }
        }
        Ok(())
    }
}

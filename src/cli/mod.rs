//! CLI module for moose-discovery
//!
//! Provides subcommands:
//! - `define`: resolve jargon terms to definitions
//! - `discover`: turn observations into hypotheses

pub mod define;
pub mod discover;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Moose discovery - scientific jargon resolution and hypothesis generation
#[derive(Parser)]
#[command(name = "moose")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve jargon terms and print their definitions
    Define(define::DefineArgs),

    /// Generate a hypothesis for an observation
    Discover(discover::DiscoverArgs),
}

/// Loads `.env`, layered configuration and the global subscriber
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    config
}

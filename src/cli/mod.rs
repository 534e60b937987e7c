// CLI module for calculator-microservice
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// calculator-microservice - Arithmetic HTTP microservice
#[derive(Parser, Debug, Default)]
#[command(name = "calculator-microservice", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (defaults to the user config directory)
    #[arg(long, env = "CALCULATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP listener to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Directory for combined.log and error.log
    #[arg(long)]
    pub log_dir: Option<String>,
}

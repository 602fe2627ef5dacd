use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Madrasati Load Testing Tool
#[derive(Parser, Debug)]
#[command(name = "load-test")]
#[command(about = "Load testing tool for the Madrasati student API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Mode {
    /// Host the mock Madrasati API (runs until Ctrl+C)
    Server(ServerArgs),

    /// Run the student load test against a Madrasati host
    Client(ClientArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Address to listen on, overrides the configured `bind`
    #[arg(long, env = "MADRASATI_BIND")]
    pub bind: Option<SocketAddr>,

    /// Path to a TOML configuration file (defaults to config/server)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Base URL of the API under test
    #[arg(long, default_value = "http://localhost:8080", env = "MADRASATI_HOST")]
    pub host: String,

    /// Attack profile: smoke, standard, stress
    #[arg(
        long,
        default_value = "standard",
        value_parser = ["smoke", "standard", "stress"]
    )]
    pub profile: String,

    /// Number of virtual users, overrides the profile
    #[arg(long)]
    pub users: Option<usize>,

    /// Users spawned per second, overrides the profile
    #[arg(long)]
    pub hatch_rate: Option<String>,

    /// Test duration in seconds, overrides the profile
    #[arg(long)]
    pub duration: Option<usize>,

    /// Login username
    #[arg(long, default_value = "student")]
    pub username: String,

    /// Login password
    #[arg(long, default_value = "secret")]
    pub password: String,

    /// Write an HTML report to this path
    #[arg(long)]
    pub report_file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Explicit config file (merged over user and directory configs)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the prowler binary
    #[arg(long, global = true)]
    pub prowler_path: Option<PathBuf>,

    /// Credentials store override
    #[arg(long, global = true)]
    pub credentials_file: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    pub generate_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the delivered credentials can drive the scanner at all
    Verify {
        /// Path to the options JSON payload
        #[arg(short, long)]
        options: Option<PathBuf>,

        /// Path to the secret_data JSON payload
        #[arg(short, long)]
        secret: PathBuf,

        /// Secret schema identifier (accepted for contract compatibility)
        #[arg(long)]
        schema: Option<String>,
    },

    /// Run a full compliance scan and emit the findings JSON
    Check {
        /// Path to the options JSON payload
        #[arg(short, long)]
        options: PathBuf,

        /// Path to the secret_data JSON payload
        #[arg(short, long)]
        secret: PathBuf,

        /// Secret schema identifier (accepted for contract compatibility)
        #[arg(long)]
        schema: Option<String>,

        /// Write the scan JSON to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the known compliance frameworks
    Frameworks,

    /// Print the cloud service type metadata as JSON
    Metadata,
}

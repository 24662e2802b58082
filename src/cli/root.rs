use anyhow::Result;
use clap::{CommandFactory, Parser};

use crate::cli::args::{Args, Commands};
use crate::cli::commands::{
    ScannerOverrides, run_check_command, run_frameworks_command, run_metadata_command,
    run_verify_command,
};
use crate::cli::commands::check::CheckArgs;
use crate::cli::commands::verify::VerifyArgs;
use crate::config::PluginConfig;

pub struct RootCommand;

impl RootCommand {
    pub async fn execute() -> Result<()> {
        let args = Args::parse();

        if args.generate_config {
            println!("{}", PluginConfig::generate_default_config());
            return Ok(());
        }

        let overrides = ScannerOverrides {
            config: args.config.clone(),
            prowler_path: args.prowler_path.clone(),
            credentials_file: args.credentials_file.clone(),
        };

        match args.command {
            Some(Commands::Verify {
                options,
                secret,
                schema,
            }) => {
                run_verify_command(VerifyArgs {
                    options,
                    secret,
                    schema,
                    overrides,
                })
                .await
            }
            Some(Commands::Check {
                options,
                secret,
                schema,
                output,
            }) => {
                run_check_command(CheckArgs {
                    options,
                    secret,
                    schema,
                    output,
                    overrides,
                })
                .await
            }
            Some(Commands::Frameworks) => run_frameworks_command(),
            Some(Commands::Metadata) => run_metadata_command(),
            None => {
                Args::command().print_help()?;
                Ok(())
            }
        }
    }
}

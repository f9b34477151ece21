use anyhow::Result;
use clap::Parser;
use docguard::cli::{Cli, Commands};
use docguard::commands::{handle_check, init_config, CheckConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check {
            path,
            format,
            output,
            config,
            no_check_type_hint,
            no_check_arg_order,
            check_short_docstrings,
            skip_raises,
            quiet,
        } => {
            let total = handle_check(CheckConfig {
                path,
                format,
                output,
                config,
                no_check_type_hint,
                no_check_arg_order,
                check_short_docstrings,
                skip_raises,
                quiet,
            })?;
            if total > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Init { force } => init_config(force),
    }
}

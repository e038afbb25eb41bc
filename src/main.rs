//! Main entry point for the permsnap CLI app

use permsnap::cli::{self, Mode};
use permsnap::{backup, restore};
use tracing_subscriber::EnvFilter;

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let invocation = cli::run()?;

    match invocation.mode {
        Mode::Backup => {
            backup::backup_permissions(&invocation.target, &invocation.backup_file)?;
            println!("Permissions backup successful");
        }
        Mode::Restore => {
            restore::restore_permissions(&invocation.target, &invocation.backup_file)?;
            println!("Permissions restored successfully");
        }
    }

    Ok(())
}

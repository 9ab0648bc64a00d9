mod cli;
mod init;
mod notify;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let cwd = match std::env::current_dir() {
                Ok(dir) => dir,
                Err(e) => {
                    eprintln!("Failed to get current directory: {e}");
                    return ExitCode::from(1);
                }
            };
            match init::init_at_root(&cwd) {
                Ok(report) => {
                    println!("Initialized Airut at {}", report.root.display());
                    let dir = report.root.join(".airut");
                    if report.created_dir {
                        println!("  created: {}", dir.display());
                    }
                    if report.created_readme {
                        println!("  created: {}", dir.join("README.md").display());
                    }
                    if report.created_config {
                        println!("  created: {}", dir.join("config.toml").display());
                    }
                }
                Err(e) => {
                    eprintln!("init error: {e}");
                    return ExitCode::from(1);
                }
            }
        }
        Commands::Notify(args) => {
            if let Err(e) = notify::run(&args) {
                eprintln!("Failed to send release notification: {e}");
                return ExitCode::from(1);
            }
        }
    }
    ExitCode::SUCCESS
}

use anyhow::Context;
use clap::Parser as ClapParser;

mod cli;
mod config;
mod error;
mod import;
mod parser;
mod rule;
mod targets;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = cli::Cli::parse();
    match args.command {
        cli::Commands::Import(a) => import::run(a).context("import failed")?,
        cli::Commands::ListTargets => {
            for target in targets::TargetDictionary::all() {
                println!("{:<15} {}", target.name(), target.description());
            }
        }
    }
    Ok(())
}

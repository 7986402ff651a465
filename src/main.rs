use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("vcf_header_tags=debug,info")
    } else {
        EnvFilter::new("vcf_header_tags=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Parse(args) => {
            cli::parse::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Check(args) => {
            cli::check::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}

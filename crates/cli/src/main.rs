use clap::Parser;
use tracing_subscriber::EnvFilter;

use paritex::cli::{Cli, Command};
use paritex::error::ExitCode;
use paritex::{cmd_report, cmd_scan};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Scan(args) => cmd_scan::run(args, cli.config.as_deref()),
        Command::Report(args) => cmd_report::run(args),
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::Failure.into()
        }
    }
}

/// Initialize tracing to stderr. `RUST_LOG` overrides; `--verbose`
/// raises the default level from warn to debug.
fn init_tracing(verbose: bool) {
    let default = if verbose { "paritex=debug" } else { "paritex=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! Initiative calculator binary

use std::process::ExitCode;

use clap::Parser;
use mysteria_cli::{load_schedule, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "initiative=info,mysteria_cli=info,mysteria_initiative=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = load_schedule(cli.schedule.as_deref())
        .and_then(|schedule| run(&cli.command, &schedule, cli.json));

    match output {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use clap::Parser;

mod cli;
mod commands;
mod context;
mod notify;
mod output;
mod progress;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        if !error.is::<notify::Reported>() {
            eprintln!("ava error: {error:#}");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    // An explicit role needs neither configuration nor a session store.
    if let cli::Commands::Route(args) = &cli.command
        && args.role.is_some()
    {
        let flags = cli.global_flags(None);
        return commands::route::handle_offline(args, &flags);
    }

    let config = ava_config::AvaConfig::load_with_dotenv()?;
    let flags = cli.global_flags(Some(&config.general));
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config, &flags)?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags)
        .await
        .map_err(|error| ctx.notifier.absorb(error))
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AVA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

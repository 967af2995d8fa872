mod args;
mod client;
mod error;
mod prelude;

use clap::Parser;
use termfocus_core::{constants::EMPTY_PLACEHOLDER, menu::Menu};

use crate::{
    args::{Args, Commands},
    client::DaemonClient,
    prelude::*,
};

#[tokio::main]
async fn main() {
    let cli = Args::parse();

    if let Err(e) = setup_logging() {
        eprintln!("{e}");
        std::process::exit(1);
    }
    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn setup_logging() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

#[instrument]
async fn run(args: Args) -> Result<()> {
    let client = DaemonClient::new(args.port);
    match args.command {
        Commands::List => {
            let res = client.list_sessions().await?;
            let menu = Menu::build(&res.sessions, res.has_unseen);
            println!("{}", menu.title);
            if menu.is_empty() {
                println!("  {EMPTY_PLACEHOLDER}");
            }
            for item in &menu.items {
                println!("  {:>8}  {}", item.window_id.as_str(), item.label);
            }
        }
        command => {
            if let Some(request) = command.into_request() {
                let res = client.send_event(&request).await?;
                println!("{} {}", res.status, res.window_id);
            }
        }
    }
    Ok(())
}
